//! Flat backend payload -> nested target-group view-model.

use std::collections::HashMap;

use tracing::warn;

use crate::detail::{CampaignDetail, MessageResult, TargetGroup, ValidatorReport};
use crate::error::ConsoleError;
use crate::types::CampaignDetailResponse;

/// Group `messageResults` by target group.
///
/// Groups appear in the order their index is first seen and keep the
/// name/features of that first occurrence. Drafts keep input order within a
/// group. Missing validator reports become [`ValidatorReport::default`].
/// Repeated `(group, draft)` pairs are all kept and logged.
pub fn transform_detail(response: CampaignDetailResponse) -> CampaignDetail {
    let mut groups: Vec<TargetGroup> = Vec::new();
    let mut positions: HashMap<u32, usize> = HashMap::new();

    for item in response.message_results {
        let pos = *positions.entry(item.target_group_index).or_insert_with(|| {
            groups.push(TargetGroup {
                index: item.target_group_index,
                name: item.target_name.clone(),
                features: item.target_features.clone().unwrap_or_default(),
                message_results: Vec::new(),
            });
            groups.len() - 1
        });

        groups[pos].message_results.push(MessageResult {
            result_id: item.result_id,
            draft_index: item.message_draft_index,
            message_text: item.message_text,
            validator_report: item.validator_report.map(Into::into).unwrap_or_default(),
            is_selected: item.selected,
        });
    }

    let detail = CampaignDetail {
        campaign_id: response.campaign_id,
        purpose: response.purpose,
        core_benefit_text: response.core_benefit_text,
        source_url: response.source_url,
        actual_ctr: response.actual_ctr,
        conversion_rate: response.conversion_rate,
        status: response.status,
        target_groups: groups,
    };

    for (group, draft) in duplicate_drafts(&detail) {
        warn!(
            "Campaign {} has more than one result for target group {} draft {}",
            detail.campaign_id, group, draft
        );
    }

    detail
}

/// Parse a raw `GET /campaigns/{id}` body and transform it.
///
/// Missing required fields, wrong types and unknown status codes all fail
/// with [`ConsoleError::MalformedResponse`].
pub fn parse_detail(body: &str) -> Result<CampaignDetail, ConsoleError> {
    let response: CampaignDetailResponse = serde_json::from_str(body)?;
    Ok(transform_detail(response))
}

/// `(group index, draft index)` pairs that occur more than once, in first-seen
/// order.
pub fn duplicate_drafts(detail: &CampaignDetail) -> Vec<(u32, u8)> {
    let mut dupes = Vec::new();
    for group in &detail.target_groups {
        let mut seen: Vec<u8> = Vec::new();
        for result in &group.message_results {
            if seen.contains(&result.draft_index) {
                if !dupes.contains(&(group.index, result.draft_index)) {
                    dupes.push((group.index, result.draft_index));
                }
            } else {
                seen.push(result.draft_index);
            }
        }
    }
    dupes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::CampaignStatus;
    use crate::types::{MessageResultPayload, PolicyCompliance, ValidatorReportPayload};

    fn payload(id: &str, group: u32, draft: u8) -> MessageResultPayload {
        MessageResultPayload {
            result_id: id.to_string(),
            target_group_index: group,
            target_name: format!("Group {}", group),
            target_features: Some(format!("Features of {}", group)),
            message_draft_index: draft,
            message_text: format!("Message {}", id),
            validator_report: None,
            selected: false,
        }
    }

    fn response(results: Vec<MessageResultPayload>) -> CampaignDetailResponse {
        CampaignDetailResponse {
            campaign_id: "c-1".to_string(),
            request_date: None,
            marketer_id: None,
            purpose: "Spring promotion".to_string(),
            core_benefit_text: None,
            source_url: None,
            custom_columns: None,
            status: CampaignStatus::Completed,
            actual_ctr: None,
            conversion_rate: None,
            updated_at: None,
            message_results: results,
        }
    }

    #[test]
    fn test_groups_follow_first_seen_order() {
        let detail = transform_detail(response(vec![
            payload("r3", 3, 1),
            payload("r1", 1, 1),
            payload("r4", 3, 2),
            payload("r2", 1, 2),
        ]));

        let indices: Vec<u32> = detail.target_groups.iter().map(|g| g.index).collect();
        assert_eq!(indices, vec![3, 1]);

        let first: Vec<&str> = detail.target_groups[0]
            .message_results
            .iter()
            .map(|r| r.result_id.as_str())
            .collect();
        assert_eq!(first, vec!["r3", "r4"]);
    }

    #[test]
    fn test_group_uses_first_occurrence_name() {
        let mut second = payload("r2", 1, 2);
        second.target_name = "Renamed".to_string();
        second.target_features = None;
        let detail = transform_detail(response(vec![payload("r1", 1, 1), second]));

        assert_eq!(detail.target_groups.len(), 1);
        assert_eq!(detail.target_groups[0].name, "Group 1");
        assert_eq!(detail.target_groups[0].features, "Features of 1");
    }

    #[test]
    fn test_missing_features_become_empty() {
        let mut item = payload("r1", 1, 1);
        item.target_features = None;
        let detail = transform_detail(response(vec![item]));
        assert_eq!(detail.target_groups[0].features, "");
    }

    #[test]
    fn test_absent_report_gets_default() {
        let detail = transform_detail(response(vec![payload("r1", 1, 1)]));
        assert_eq!(
            detail.target_groups[0].message_results[0].validator_report,
            ValidatorReport::default()
        );
    }

    #[test]
    fn test_present_report_is_kept() {
        let mut item = payload("r1", 1, 1);
        item.validator_report = Some(ValidatorReportPayload {
            spam_risk_score: 42.5,
            policy_compliance: PolicyCompliance::Fail,
            review_summary: "Overstated discount".to_string(),
            recommended_action: "Remove 'free'".to_string(),
        });
        let detail = transform_detail(response(vec![item]));
        let report = &detail.target_groups[0].message_results[0].validator_report;
        assert_eq!(report.spam_risk_score, 42.5);
        assert_eq!(report.policy_compliance, PolicyCompliance::Fail);
        assert_eq!(report.review_summary, "Overstated discount");
    }

    #[test]
    fn test_duplicate_drafts_are_kept_and_reported() {
        let detail = transform_detail(response(vec![
            payload("r1", 1, 1),
            payload("r2", 1, 1),
            payload("r3", 1, 2),
        ]));
        assert_eq!(detail.target_groups[0].message_results.len(), 3);
        assert_eq!(duplicate_drafts(&detail), vec![(1, 1)]);
    }

    #[test]
    fn test_empty_results_give_no_groups() {
        let detail = transform_detail(response(vec![]));
        assert!(detail.target_groups.is_empty());
        assert!(duplicate_drafts(&detail).is_empty());
    }

    #[test]
    fn test_parse_detail_rejects_missing_required_field() {
        let body = r#"{"campaignId": "c-1", "status": "COMPLETED", "messageResults": []}"#;
        let err = parse_detail(body).unwrap_err();
        assert!(matches!(err, ConsoleError::MalformedResponse(_)));
        assert!(err.to_string().contains("purpose"));
    }

    #[test]
    fn test_parse_detail_rejects_unknown_status() {
        let body = r#"{"campaignId": "c-1", "purpose": "p", "status": "ARCHIVED", "messageResults": []}"#;
        assert!(matches!(
            parse_detail(body),
            Err(ConsoleError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_detail_accepts_nulls_for_optional_fields() {
        let body = r#"{
            "campaignId": "c-1",
            "purpose": "p",
            "status": "PROCESSING",
            "actualCtr": null,
            "conversionRate": null,
            "sourceUrl": null,
            "messageResults": []
        }"#;
        let detail = parse_detail(body).unwrap();
        assert_eq!(detail.status, CampaignStatus::Processing);
        assert_eq!(detail.actual_ctr, None);
    }
}
