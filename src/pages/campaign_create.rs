use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use maix_core::forms::CampaignForm;
use tracing::info;
use wasm_bindgen_futures::spawn_local;

use crate::api;

#[component]
pub fn CampaignCreatePage() -> impl IntoView {
    let (purpose, set_purpose) = signal(String::new());
    let (core_benefit, set_core_benefit) = signal(String::new());
    let (source_url, set_source_url) = signal(String::new());
    let (custom_columns, set_custom_columns) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let navigate = use_navigate();

    let submit = move |_| {
        let form = CampaignForm {
            purpose: purpose.get(),
            core_benefit: core_benefit.get(),
            source_url: source_url.get(),
            custom_columns: custom_columns.get(),
        };
        let navigate = navigate.clone();
        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::create_campaign(form).await {
                Ok(id) => {
                    info!("Campaign {} created, opening detail", id);
                    navigate(&format!("/campaign/{}", id), Default::default());
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page campaign-create-page">
            <h2>"New Promotion"</h2>
            <p class="page-description">
                "Describe the promotion. The AI agent splits customers into target groups and drafts two messages per group."
            </p>

            <div class="form-card">
                <label class="form-label">"Purpose *"</label>
                <input
                    type="text"
                    class="input"
                    placeholder="e.g. Win back customers who left in the last 6 months"
                    prop:value=move || purpose.get()
                    on:input=move |ev| set_purpose.set(event_target_value(&ev))
                />

                <label class="form-label">"Core benefit *"</label>
                <textarea
                    class="input textarea"
                    rows="4"
                    placeholder="e.g. 50% off the first three months"
                    prop:value=move || core_benefit.get()
                    on:input=move |ev| set_core_benefit.set(event_target_value(&ev))
                ></textarea>

                <label class="form-label">"Reference URL"</label>
                <input
                    type="url"
                    class="input"
                    placeholder="https://"
                    prop:value=move || source_url.get()
                    on:input=move |ev| set_source_url.set(event_target_value(&ev))
                />

                <label class="form-label">"Usable customer data columns"</label>
                <input
                    type="text"
                    class="input"
                    placeholder="e.g. [name], [plan], [last_login]"
                    prop:value=move || custom_columns.get()
                    on:input=move |ev| set_custom_columns.set(event_target_value(&ev))
                />

                {move || error.get().map(|e| view! {
                    <p class="status-text status-error">{e}</p>
                })}

                <Show when=move || submitting.get()>
                    <p class="status-text">"Submitting the campaign to the AI agent..."</p>
                </Show>

                <div class="form-actions">
                    <a href="/promotion" class="btn btn-secondary">"Cancel"</a>
                    <button
                        class="btn btn-primary"
                        disabled=move || submitting.get()
                        on:click=submit
                    >
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
