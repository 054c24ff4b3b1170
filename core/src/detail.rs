//! Nested view-model for the campaign detail page.

use serde::{Deserialize, Serialize};

use crate::status::CampaignStatus;
use crate::types::{PolicyCompliance, ValidatorReportPayload};

/// Summary shown when the backend has no report for a draft.
pub const NO_REPORT_SUMMARY: &str = "No report available";
/// Recommended action shown when the backend has no report for a draft.
pub const NO_REPORT_ACTION: &str = "None";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorReport {
    pub spam_risk_score: f64,
    pub policy_compliance: PolicyCompliance,
    pub review_summary: String,
    pub recommended_action: String,
}

impl Default for ValidatorReport {
    fn default() -> Self {
        Self {
            spam_risk_score: 0.0,
            policy_compliance: PolicyCompliance::Pass,
            review_summary: NO_REPORT_SUMMARY.to_string(),
            recommended_action: NO_REPORT_ACTION.to_string(),
        }
    }
}

impl From<ValidatorReportPayload> for ValidatorReport {
    fn from(p: ValidatorReportPayload) -> Self {
        Self {
            spam_risk_score: p.spam_risk_score,
            policy_compliance: p.policy_compliance,
            review_summary: p.review_summary,
            recommended_action: p.recommended_action,
        }
    }
}

impl ValidatorReport {
    pub fn passes_policy(&self) -> bool {
        self.policy_compliance == PolicyCompliance::Pass
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResult {
    pub result_id: String,
    pub draft_index: u8,
    pub message_text: String,
    pub validator_report: ValidatorReport,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetGroup {
    pub index: u32,
    pub name: String,
    pub features: String,
    pub message_results: Vec<MessageResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignDetail {
    pub campaign_id: String,
    pub purpose: String,
    pub core_benefit_text: Option<String>,
    pub source_url: Option<String>,
    pub actual_ctr: Option<f64>,
    pub conversion_rate: Option<f64>,
    pub status: CampaignStatus,
    pub target_groups: Vec<TargetGroup>,
}

impl CampaignDetail {
    /// All drafts across groups, in display order.
    pub fn results(&self) -> impl Iterator<Item = &MessageResult> {
        self.target_groups.iter().flat_map(|g| g.message_results.iter())
    }

    pub fn find_result(&self, result_id: &str) -> Option<&MessageResult> {
        self.results().find(|r| r.result_id == result_id)
    }

    /// `"15.5%"` or `"N/A"`.
    pub fn ctr_display(&self) -> String {
        percent_or_na(self.actual_ctr)
    }

    pub fn conversion_display(&self) -> String {
        percent_or_na(self.conversion_rate)
    }
}

fn percent_or_na(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}%", v),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report_values() {
        let report = ValidatorReport::default();
        assert_eq!(report.spam_risk_score, 0.0);
        assert_eq!(report.policy_compliance, PolicyCompliance::Pass);
        assert_eq!(report.review_summary, "No report available");
        assert_eq!(report.recommended_action, "None");
        assert!(report.passes_policy());
    }

    #[test]
    fn test_percent_display() {
        assert_eq!(percent_or_na(Some(15.5)), "15.5%");
        assert_eq!(percent_or_na(Some(3.0)), "3%");
        assert_eq!(percent_or_na(None), "N/A");
    }
}
