//! Status-driven enablement and tooltips for the detail page actions.

use crate::status::CampaignStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Refine,
    Performance,
    Rag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionState {
    pub enabled: bool,
    pub tooltip: &'static str,
}

pub const REFINE_WAIT_GENERATION: &str =
    "Refinement requests are available once message generation completes.";
pub const REFINE_ALREADY_REGISTERED: &str =
    "This campaign is already registered in the RAG DB. Refinement requests are no longer possible.";
pub const REFINE_DEFAULT: &str = "Request changes to the message content, targets or purpose.";

pub const PERFORMANCE_WAIT_GENERATION: &str =
    "Performance can be registered once message generation completes.";
pub const PERFORMANCE_ALREADY_REGISTERED: &str =
    "This campaign is already registered in the RAG DB. Performance can still be edited.";
pub const PERFORMANCE_SELECT_FIRST: &str = "Select a message first to register performance.";
pub const PERFORMANCE_DEFAULT: &str = "Register or edit campaign performance (CTR, conversion rate).";

pub const RAG_ALREADY_REGISTERED: &str = "This campaign is already registered in the RAG DB.";
pub const RAG_AS_SUCCESS: &str = "Save this campaign to the RAG DB as a success case.";
pub const RAG_AS_FAILURE: &str = "Save this campaign to the RAG DB as a failure case.";
pub const RAG_NEEDS_PERFORMANCE: &str = "Register performance before saving to the RAG DB.";

/// Enablement and tooltip for one action under the given status.
pub fn gate(status: CampaignStatus, action: Action) -> ActionState {
    use CampaignStatus::*;

    let (enabled, tooltip) = match action {
        Action::Refine => match status {
            Processing | Refining | Failed => (false, REFINE_WAIT_GENERATION),
            RagRegistered => (false, REFINE_ALREADY_REGISTERED),
            Completed | MessageSelected | PerformanceRegistered | SuccessCase => {
                (true, REFINE_DEFAULT)
            }
        },
        Action::Performance => match status {
            Processing | Refining | Failed => (false, PERFORMANCE_WAIT_GENERATION),
            RagRegistered => (false, PERFORMANCE_ALREADY_REGISTERED),
            Completed => (false, PERFORMANCE_SELECT_FIRST),
            MessageSelected | PerformanceRegistered | SuccessCase => (true, PERFORMANCE_DEFAULT),
        },
        Action::Rag => match status {
            RagRegistered => (false, RAG_ALREADY_REGISTERED),
            SuccessCase => (true, RAG_AS_SUCCESS),
            PerformanceRegistered => (true, RAG_AS_FAILURE),
            Processing | Refining | Completed | Failed | MessageSelected => {
                (false, RAG_NEEDS_PERFORMANCE)
            }
        },
    };

    ActionState { enabled, tooltip }
}

/// Text of the performance button.
pub fn performance_label(status: CampaignStatus) -> &'static str {
    if status.has_performance() {
        "Edit performance"
    } else {
        "Register performance"
    }
}

/// Confirmation asked before pushing a campaign to the RAG DB.
pub fn rag_confirm_message(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::SuccessCase => "Save this campaign to the RAG DB as a success case?",
        _ => "This campaign is not marked as a success. Save it to the RAG DB as a failure case?",
    }
}

/// Confirmation asked before deleting a campaign.
pub fn delete_confirm_message(purpose: &str) -> String {
    format!(
        "Really delete the campaign '{}'? This cannot be undone.",
        purpose
    )
}
