use leptos::prelude::*;
use maix_core::forms::RefineForm;

#[component]
pub fn RefineModal(
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] on_submit: Callback<RefineForm>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (feedback, set_feedback) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |_| {
        let form = RefineForm {
            feedback_text: feedback.get(),
        };
        match form.into_request() {
            Ok(_) => {
                set_error.set(None);
                on_submit.run(form);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h3 class="modal-title">"Request refinement"</h3>
                <p class="page-description">
                    "Describe what should change: tone, targets, benefit wording or purpose."
                </p>
                <textarea
                    class="input textarea"
                    rows="6"
                    placeholder="e.g. Use a warmer tone and mention the family plan"
                    prop:value=move || feedback.get()
                    on:input=move |ev| set_feedback.set(event_target_value(&ev))
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
                        {move || if submitting.get() { "Sending..." } else { "Send" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
