use leptos::prelude::*;
use maix_core::forms::PerformanceForm;

#[component]
pub fn PerformanceModal(
    initial: PerformanceForm,
    #[prop(into)] title: String,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] on_submit: Callback<PerformanceForm>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (ctr, set_ctr) = signal(initial.actual_ctr);
    let (cvr, set_cvr) = signal(initial.conversion_rate);
    let (success, set_success) = signal(initial.is_success_case);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |_| {
        let form = PerformanceForm {
            actual_ctr: ctr.get(),
            conversion_rate: cvr.get(),
            is_success_case: success.get(),
        };
        // Reject locally before the request goes out.
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
                <h3 class="modal-title">{title}</h3>

                <label class="form-label">"CTR (%)"</label>
                <input
                    type="number"
                    class="input"
                    step="0.01"
                    min="0"
                    max="100"
                    prop:value=move || ctr.get()
                    on:input=move |ev| set_ctr.set(event_target_value(&ev))
                />

                <label class="form-label">"Conversion rate (%)"</label>
                <input
                    type="number"
                    class="input"
                    step="0.01"
                    min="0"
                    max="100"
                    prop:value=move || cvr.get()
                    on:input=move |ev| set_cvr.set(event_target_value(&ev))
                />

                <div class="radio-group">
                    <label class="checkbox-label">
                        <input
                            type="radio"
                            name="success-case"
                            prop:checked=move || success.get() == Some(true)
                            on:change=move |_| set_success.set(Some(true))
                        />
                        "Success"
                    </label>
                    <label class="checkbox-label">
                        <input
                            type="radio"
                            name="success-case"
                            prop:checked=move || success.get() == Some(false)
                            on:change=move |_| set_success.set(Some(false))
                        />
                        "Failure"
                    </label>
                </div>

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
