use leptos::prelude::*;
use maix_core::{CampaignStatus, Outcome};

#[component]
pub fn StatusBadge(status: CampaignStatus) -> impl IntoView {
    view! {
        <span class=status.badge_class() title=status.code()>{status.label()}</span>
    }
}

/// Success / failure / undecided pill shown next to the status.
#[component]
pub fn OutcomeBadge(outcome: Outcome) -> impl IntoView {
    view! {
        <span class=format!("outcome-badge {}", outcome.css_class())>{outcome.label()}</span>
    }
}
