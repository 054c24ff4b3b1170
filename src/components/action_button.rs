use leptos::prelude::*;
use maix_core::ActionState;

/// Button whose enablement and hover text come from the action gate.
#[component]
pub fn GatedButton(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] state: Signal<ActionState>,
    #[prop(into)] on_click: Callback<()>,
    #[prop(default = "btn btn-secondary")] variant: &'static str,
) -> impl IntoView {
    view! {
        <span class="gated-action" title=move || state.get().tooltip>
            <button
                class=variant
                disabled=move || !state.get().enabled
                on:click=move |_| {
                    if state.get_untracked().enabled {
                        on_click.run(());
                    }
                }
            >
                {move || label.get()}
            </button>
        </span>
    }
}
