use std::fmt;

use serde::{Deserialize, Serialize};

/// Campaign workflow status as reported by the backend.
///
/// The wire values are the SCREAMING_SNAKE_CASE variant names. The backend owns
/// every transition; the console only reads the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    Processing,
    Refining,
    Completed,
    Failed,
    MessageSelected,
    PerformanceRegistered,
    SuccessCase,
    RagRegistered,
}

/// Success/failure badge derived from the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
    Undecided,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
            Outcome::Undecided => "Undecided",
        }
    }

    /// CSS class reusing the status badge palette.
    pub fn css_class(self) -> &'static str {
        match self {
            Outcome::Success => "status-SUCCESS_CASE",
            Outcome::Failure => "status-FAILED",
            Outcome::Undecided => "status-PROCESSING",
        }
    }
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 8] = [
        CampaignStatus::Processing,
        CampaignStatus::Refining,
        CampaignStatus::Completed,
        CampaignStatus::Failed,
        CampaignStatus::MessageSelected,
        CampaignStatus::PerformanceRegistered,
        CampaignStatus::SuccessCase,
        CampaignStatus::RagRegistered,
    ];

    /// Wire code, e.g. `"PERFORMANCE_REGISTERED"`.
    pub fn code(self) -> &'static str {
        match self {
            CampaignStatus::Processing => "PROCESSING",
            CampaignStatus::Refining => "REFINING",
            CampaignStatus::Completed => "COMPLETED",
            CampaignStatus::Failed => "FAILED",
            CampaignStatus::MessageSelected => "MESSAGE_SELECTED",
            CampaignStatus::PerformanceRegistered => "PERFORMANCE_REGISTERED",
            CampaignStatus::SuccessCase => "SUCCESS_CASE",
            CampaignStatus::RagRegistered => "RAG_REGISTERED",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    /// Display label shown in badges and the status filter.
    pub fn label(self) -> &'static str {
        match self {
            CampaignStatus::Processing => "Processing",
            CampaignStatus::Refining => "Refining",
            CampaignStatus::Completed => "Drafts ready",
            CampaignStatus::Failed => "Failed",
            CampaignStatus::MessageSelected => "Message selected",
            CampaignStatus::PerformanceRegistered => "Performance registered",
            CampaignStatus::SuccessCase => "Success case",
            CampaignStatus::RagRegistered => "Registered in RAG DB",
        }
    }

    /// Badge class, e.g. `status-badge status-COMPLETED`.
    pub fn badge_class(self) -> String {
        format!("status-badge status-{}", self.code())
    }

    /// The AI agent is still producing drafts.
    pub fn is_generating(self) -> bool {
        matches!(self, CampaignStatus::Processing | CampaignStatus::Refining)
    }

    /// Draft selection can be changed.
    pub fn allows_selection(self) -> bool {
        matches!(self, CampaignStatus::Completed | CampaignStatus::MessageSelected)
    }

    /// Performance has been recorded at least once.
    pub fn has_performance(self) -> bool {
        matches!(
            self,
            CampaignStatus::PerformanceRegistered
                | CampaignStatus::SuccessCase
                | CampaignStatus::RagRegistered
        )
    }

    /// A campaign already pushed to the RAG DB is shown as a failure because the
    /// status no longer carries the success flag.
    pub fn outcome(self) -> Outcome {
        match self {
            CampaignStatus::SuccessCase => Outcome::Success,
            CampaignStatus::Failed
            | CampaignStatus::PerformanceRegistered
            | CampaignStatus::RagRegistered => Outcome::Failure,
            CampaignStatus::Processing
            | CampaignStatus::Refining
            | CampaignStatus::Completed
            | CampaignStatus::MessageSelected => Outcome::Undecided,
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
