//! Wire types for the campaign backend.
//!
//! Field names follow the backend exactly: campaign payloads are camelCase,
//! validator reports and knowledge entries are snake_case.

use serde::{Deserialize, Serialize};

use crate::status::CampaignStatus;

// -- Campaigns --

/// Spring `Page<T>` envelope returned by list endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub number: u32,
}

/// One row of `GET /campaigns`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSummary {
    pub campaign_id: String,
    #[serde(default)]
    pub request_date: Option<String>,
    #[serde(default, alias = "marketer_id")]
    pub marketer_id: Option<String>,
    pub purpose: String,
    #[serde(default, alias = "core_benefit_text")]
    pub core_benefit_text: Option<String>,
    #[serde(default, alias = "source_url")]
    pub source_url: Option<String>,
    #[serde(default)]
    pub custom_columns: Option<String>,
    pub status: CampaignStatus,
    #[serde(default, alias = "updated_at")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignRequest {
    pub marketer_id: String,
    pub purpose: String,
    pub core_benefit_text: String,
    pub source_url: String,
    pub custom_columns: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignResponse {
    pub campaign_id: String,
}

/// Validator report exactly as the backend sends it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ValidatorReportPayload {
    pub spam_risk_score: f64,
    pub policy_compliance: PolicyCompliance,
    pub review_summary: String,
    pub recommended_action: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolicyCompliance {
    Pass,
    Fail,
}

impl PolicyCompliance {
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyCompliance::Pass => "PASS",
            PolicyCompliance::Fail => "FAIL",
        }
    }
}

/// One flat `(target group, draft)` entry of `messageResults`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResultPayload {
    pub result_id: String,
    pub target_group_index: u32,
    pub target_name: String,
    #[serde(default)]
    pub target_features: Option<String>,
    pub message_draft_index: u8,
    pub message_text: String,
    #[serde(default)]
    pub validator_report: Option<ValidatorReportPayload>,
    pub selected: bool,
}

/// `GET /campaigns/{id}` body.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDetailResponse {
    pub campaign_id: String,
    #[serde(default)]
    pub request_date: Option<String>,
    #[serde(default)]
    pub marketer_id: Option<String>,
    pub purpose: String,
    #[serde(default)]
    pub core_benefit_text: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub custom_columns: Option<String>,
    pub status: CampaignStatus,
    #[serde(default)]
    pub actual_ctr: Option<f64>,
    #[serde(default)]
    pub conversion_rate: Option<f64>,
    #[serde(default)]
    pub updated_at: Option<String>,
    pub message_results: Vec<MessageResultPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRequest {
    pub result_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRequest {
    pub actual_ctr: f64,
    pub conversion_rate: f64,
    pub is_success_case: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineRequest {
    pub feedback_text: String,
}

// -- Dashboard --

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSummary {
    pub total_campaigns: u32,
    pub active_campaigns: u32,
    pub success_cases: u32,
    pub rag_registered: u32,
}

impl DashboardSummary {
    /// Share of campaigns currently active, rounded to a whole percent.
    pub fn active_percent(&self) -> u32 {
        if self.total_campaigns == 0 {
            return 0;
        }
        ((self.active_campaigns as f64 / self.total_campaigns as f64) * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub campaign_id: String,
    pub purpose: String,
    pub status: CampaignStatus,
    #[serde(default)]
    pub updated_at: Option<String>,
}

// -- Knowledge base --

/// Origin of a knowledge entry. The wire values are fixed Korean strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum SourceType {
    #[serde(rename = "정책")]
    Policy,
    #[serde(rename = "약관")]
    Terms,
    #[serde(rename = "성공_사례")]
    SuccessCase,
    #[serde(rename = "실패_사례")]
    FailureCase,
}

impl SourceType {
    pub const ALL: [SourceType; 4] = [
        SourceType::Policy,
        SourceType::Terms,
        SourceType::SuccessCase,
        SourceType::FailureCase,
    ];

    /// Value used on the wire and in the `source_type` query parameter.
    pub fn code(self) -> &'static str {
        match self {
            SourceType::Policy => "정책",
            SourceType::Terms => "약관",
            SourceType::SuccessCase => "성공_사례",
            SourceType::FailureCase => "실패_사례",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            SourceType::Policy => "Policy",
            SourceType::Terms => "Terms",
            SourceType::SuccessCase => "Success case",
            SourceType::FailureCase => "Failure case",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct KnowledgeMetadata {
    pub title: String,
    #[serde(default)]
    pub registration_date: Option<String>,
    pub source_type: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct KnowledgeEntry {
    pub id: String,
    #[serde(default)]
    pub document: Option<String>,
    pub metadata: KnowledgeMetadata,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeListResponse {
    #[serde(default)]
    pub knowledge_base: Vec<KnowledgeEntry>,
}

/// Body of `POST /knowledge` and `PUT /knowledge/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnowledgeInput {
    pub document: String,
    pub metadata: KnowledgeInputMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnowledgeInputMetadata {
    pub title: String,
    pub source_type: SourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
}
