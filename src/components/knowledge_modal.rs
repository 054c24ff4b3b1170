use leptos::prelude::*;
use maix_core::forms::KnowledgeForm;
use maix_core::types::SourceType;

/// Create or edit form for one knowledge base entry.
#[component]
pub fn KnowledgeModal(
    initial: KnowledgeForm,
    #[prop(into)] title: String,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] on_submit: Callback<KnowledgeForm>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (doc_title, set_doc_title) = signal(initial.title);
    let (document, set_document) = signal(initial.document);
    let (source, set_source) = signal(
        initial
            .source_type
            .map(|s| s.code().to_string())
            .unwrap_or_default(),
    );
    let (campaign_id, set_campaign_id) = signal(initial.campaign_id);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |_| {
        let form = KnowledgeForm {
            title: doc_title.get(),
            document: document.get(),
            source_type: SourceType::from_code(&source.get()),
            campaign_id: campaign_id.get(),
        };
        match form.into_input() {
            Ok(_) => {
                set_error.set(None);
                on_submit.run(form);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal modal-wide">
                <h3 class="modal-title">{title}</h3>

                <label class="form-label">"Title"</label>
                <input
                    type="text"
                    class="input"
                    prop:value=move || doc_title.get()
                    on:input=move |ev| set_doc_title.set(event_target_value(&ev))
                />

                <label class="form-label">"Source type"</label>
                <select
                    class="input"
                    on:change=move |ev| set_source.set(event_target_value(&ev))
                >
                    <option value="">"Choose a source type"</option>
                    {SourceType::ALL.into_iter().map(|s| view! {
                        <option value=s.code() selected=move || source.get() == s.code()>
                            {s.label()}
                        </option>
                    }).collect::<Vec<_>>()}
                </select>

                <label class="form-label">"Related campaign (optional)"</label>
                <input
                    type="text"
                    class="input"
                    placeholder="Campaign id"
                    prop:value=move || campaign_id.get()
                    on:input=move |ev| set_campaign_id.set(event_target_value(&ev))
                />

                <label class="form-label">"Content"</label>
                <textarea
                    class="input textarea"
                    rows="10"
                    prop:value=move || document.get()
                    on:input=move |ev| set_document.set(event_target_value(&ev))
                ></textarea>

                {move || error.get().map(|e| view! {
                    <p class="status-text status-error">{e}</p>
                })}

                <div class="modal-actions">
                    <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn-primary"
                        disabled=move || submitting.get()
                        on:click=submit
                    >
                        {move || if submitting.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
