use leptos::prelude::*;
use maix_core::MessageResult;

/// One AI-generated draft with its validator report.
#[component]
pub fn MessageDraftCard(
    result: MessageResult,
    /// Whether the select button is usable under the current status.
    selectable: bool,
    #[prop(into)] on_toggle: Callback<String>,
) -> impl IntoView {
    let report = result.validator_report.clone();
    let result_id = result.result_id.clone();
    let selected = result.is_selected;

    let card_class = if selected {
        "draft-card draft-selected"
    } else {
        "draft-card"
    };
    let (button_class, button_label) = if selected {
        ("btn btn-primary btn-sm", "Selected")
    } else {
        ("btn btn-secondary btn-sm", "Select")
    };
    let compliance_class = if report.passes_policy() {
        "compliance compliance-pass"
    } else {
        "compliance compliance-fail"
    };

    view! {
        <div class=card_class>
            <div class="draft-header">
                <span class="draft-index">{format!("Draft {}", result.draft_index)}</span>
                <button
                    class=button_class
                    disabled=!selectable
                    on:click=move |_| on_toggle.run(result_id.clone())
                >
                    {button_label}
                </button>
            </div>
            <p class="draft-text">{result.message_text.clone()}</p>
            <div class="validator-report">
                <div class="preview-row">
                    <span class="preview-label">"Spam risk"</span>
                    <span class="preview-value">{format!("{:.1}", report.spam_risk_score)}</span>
                </div>
                <div class="preview-row">
                    <span class="preview-label">"Policy"</span>
                    <span class=compliance_class>{report.policy_compliance.as_str()}</span>
                </div>
                <div class="preview-row">
                    <span class="preview-label">"Review"</span>
                    <span class="preview-value">{report.review_summary.clone()}</span>
                </div>
                <div class="preview-row">
                    <span class="preview-label">"Recommended action"</span>
                    <span class="preview-value">{report.recommended_action.clone()}</span>
                </div>
            </div>
        </div>
    }
}
