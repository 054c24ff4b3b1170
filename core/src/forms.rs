//! Input validation for the console forms.
//!
//! Each form holds the raw text the user typed and turns it into a request
//! body, or a [`ConsoleError::Validation`] naming the first problem.

use crate::detail::CampaignDetail;
use crate::error::ConsoleError;
use crate::status::CampaignStatus;
use crate::types::{
    CreateCampaignRequest, KnowledgeEntry, KnowledgeInput, KnowledgeInputMetadata,
    PerformanceRequest, RefineRequest, SourceType,
};

fn required(value: &str, field: &str) -> Result<String, ConsoleError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConsoleError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignForm {
    pub purpose: String,
    pub core_benefit: String,
    pub source_url: String,
    pub custom_columns: String,
}

impl CampaignForm {
    pub fn into_request(&self, marketer_id: &str) -> Result<CreateCampaignRequest, ConsoleError> {
        Ok(CreateCampaignRequest {
            marketer_id: marketer_id.to_string(),
            purpose: required(&self.purpose, "Purpose")?,
            core_benefit_text: required(&self.core_benefit, "Core benefit")?,
            source_url: self.source_url.trim().to_string(),
            custom_columns: self.custom_columns.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceForm {
    pub actual_ctr: String,
    pub conversion_rate: String,
    /// `None` until the user picks success or failure.
    pub is_success_case: Option<bool>,
}

impl PerformanceForm {
    /// Prefill from the campaign: existing rates, and the success flag once
    /// performance has been registered.
    pub fn from_detail(detail: &CampaignDetail) -> Self {
        Self {
            actual_ctr: detail.actual_ctr.map(|v| v.to_string()).unwrap_or_default(),
            conversion_rate: detail.conversion_rate.map(|v| v.to_string()).unwrap_or_default(),
            is_success_case: detail
                .status
                .has_performance()
                .then_some(detail.status == CampaignStatus::SuccessCase),
        }
    }

    pub fn into_request(&self) -> Result<PerformanceRequest, ConsoleError> {
        let actual_ctr = parse_rate(&self.actual_ctr, "CTR")?;
        let conversion_rate = parse_rate(&self.conversion_rate, "Conversion rate")?;
        let is_success_case = self.is_success_case.ok_or_else(|| {
            ConsoleError::Validation("Choose whether the promotion succeeded".to_string())
        })?;
        Ok(PerformanceRequest {
            actual_ctr,
            conversion_rate,
            is_success_case,
        })
    }
}

/// A percentage between 0 and 100.
fn parse_rate(raw: &str, field: &str) -> Result<f64, ConsoleError> {
    let text = required(raw, field)?;
    let value: f64 = text
        .parse()
        .map_err(|_| ConsoleError::Validation(format!("{} must be a number", field)))?;
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(ConsoleError::Validation(format!(
            "{} must be between 0 and 100",
            field
        )));
    }
    Ok(value)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefineForm {
    pub feedback_text: String,
}

impl RefineForm {
    pub fn into_request(&self) -> Result<RefineRequest, ConsoleError> {
        Ok(RefineRequest {
            feedback_text: required(&self.feedback_text, "Feedback")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KnowledgeForm {
    pub title: String,
    pub document: String,
    pub source_type: Option<SourceType>,
    pub campaign_id: String,
}

impl KnowledgeForm {
    pub fn from_entry(entry: &KnowledgeEntry) -> Self {
        Self {
            title: entry.metadata.title.clone(),
            document: entry.document.clone().unwrap_or_default(),
            source_type: Some(entry.metadata.source_type),
            campaign_id: entry.metadata.campaign_id.clone().unwrap_or_default(),
        }
    }

    pub fn into_input(&self) -> Result<KnowledgeInput, ConsoleError> {
        let title = required(&self.title, "Title")?;
        let document = required(&self.document, "Content")?;
        let source_type = self
            .source_type
            .ok_or_else(|| ConsoleError::Validation("Source type is required".to_string()))?;
        let campaign_id = Some(self.campaign_id.trim().to_string()).filter(|s| !s.is_empty());
        Ok(KnowledgeInput {
            document,
            metadata: KnowledgeInputMetadata {
                title,
                source_type,
                campaign_id,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KnowledgeMetadata;

    fn detail(status: CampaignStatus, ctr: Option<f64>, cvr: Option<f64>) -> CampaignDetail {
        CampaignDetail {
            campaign_id: "c-1".into(),
            purpose: "p".into(),
            core_benefit_text: None,
            source_url: None,
            actual_ctr: ctr,
            conversion_rate: cvr,
            status,
            target_groups: vec![],
        }
    }

    #[test]
    fn test_campaign_form_requires_purpose_and_benefit() {
        let form = CampaignForm {
            purpose: "  ".into(),
            core_benefit: "50% off".into(),
            ..Default::default()
        };
        let err = form.into_request("tester").unwrap_err();
        assert_eq!(err.to_string(), "Purpose is required");

        let form = CampaignForm {
            purpose: "New customers".into(),
            ..Default::default()
        };
        assert_eq!(
            form.into_request("tester").unwrap_err().to_string(),
            "Core benefit is required"
        );
    }

    #[test]
    fn test_campaign_form_trims_and_keeps_optional_fields() {
        let form = CampaignForm {
            purpose: " New customers ".into(),
            core_benefit: "50% off".into(),
            source_url: " https://example.com/promo.jpg ".into(),
            custom_columns: String::new(),
        };
        let req = form.into_request("tester").unwrap();
        assert_eq!(req.purpose, "New customers");
        assert_eq!(req.source_url, "https://example.com/promo.jpg");
        assert_eq!(req.custom_columns, "");
        assert_eq!(req.marketer_id, "tester");
    }

    #[test]
    fn test_performance_requires_success_flag() {
        let form = PerformanceForm {
            actual_ctr: "15.5".into(),
            conversion_rate: "7.8".into(),
            is_success_case: None,
        };
        let err = form.into_request().unwrap_err();
        assert!(matches!(err, ConsoleError::Validation(_)));
    }

    #[test]
    fn test_performance_parses_rates() {
        let form = PerformanceForm {
            actual_ctr: "15.5".into(),
            conversion_rate: " 7.8 ".into(),
            is_success_case: Some(false),
        };
        let req = form.into_request().unwrap();
        assert_eq!(req.actual_ctr, 15.5);
        assert_eq!(req.conversion_rate, 7.8);
        assert!(!req.is_success_case);
    }

    #[test]
    fn test_performance_rejects_bad_numbers() {
        let mut form = PerformanceForm {
            actual_ctr: "abc".into(),
            conversion_rate: "1".into(),
            is_success_case: Some(true),
        };
        assert_eq!(form.into_request().unwrap_err().to_string(), "CTR must be a number");
        form.actual_ctr = "120".into();
        assert_eq!(
            form.into_request().unwrap_err().to_string(),
            "CTR must be between 0 and 100"
        );
        form.actual_ctr = String::new();
        assert_eq!(form.into_request().unwrap_err().to_string(), "CTR is required");
    }

    #[test]
    fn test_performance_prefill() {
        let fresh = PerformanceForm::from_detail(&detail(CampaignStatus::MessageSelected, None, None));
        assert_eq!(fresh, PerformanceForm::default());

        let success = PerformanceForm::from_detail(&detail(
            CampaignStatus::SuccessCase,
            Some(12.5),
            Some(3.0),
        ));
        assert_eq!(success.actual_ctr, "12.5");
        assert_eq!(success.conversion_rate, "3");
        assert_eq!(success.is_success_case, Some(true));

        let failure = PerformanceForm::from_detail(&detail(
            CampaignStatus::PerformanceRegistered,
            Some(1.0),
            Some(0.5),
        ));
        assert_eq!(failure.is_success_case, Some(false));
    }

    #[test]
    fn test_refine_requires_feedback() {
        assert!(RefineForm::default().into_request().is_err());
        let req = RefineForm {
            feedback_text: "Warmer tone, mention family".into(),
        }
        .into_request()
        .unwrap();
        assert_eq!(req.feedback_text, "Warmer tone, mention family");
    }

    #[test]
    fn test_knowledge_form_round_trip_from_entry() {
        let entry = KnowledgeEntry {
            id: "k-1".into(),
            document: Some("Winter sale drove 12% CTR.".into()),
            metadata: KnowledgeMetadata {
                title: "Winter sale".into(),
                registration_date: Some("2025-01-01".into()),
                source_type: SourceType::SuccessCase,
                campaign_id: Some("c-9".into()),
            },
        };
        let input = KnowledgeForm::from_entry(&entry).into_input().unwrap();
        assert_eq!(input.document, "Winter sale drove 12% CTR.");
        assert_eq!(input.metadata.title, "Winter sale");
        assert_eq!(input.metadata.source_type, SourceType::SuccessCase);
        assert_eq!(input.metadata.campaign_id.as_deref(), Some("c-9"));
    }

    #[test]
    fn test_knowledge_form_requires_source_type() {
        let form = KnowledgeForm {
            title: "Terms".into(),
            document: "...".into(),
            source_type: None,
            campaign_id: "  ".into(),
        };
        assert_eq!(
            form.into_input().unwrap_err().to_string(),
            "Source type is required"
        );
    }
}
