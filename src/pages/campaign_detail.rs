use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use maix_core::forms::{PerformanceForm, RefineForm};
use maix_core::gate::{delete_confirm_message, rag_confirm_message};
use maix_core::{gate, performance_label, Action, ActionState, CampaignStatus, DetailState};
use tracing::{info, warn};
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::browser;
use crate::components::action_button::GatedButton;
use crate::components::message_draft::MessageDraftCard;
use crate::components::performance_modal::PerformanceModal;
use crate::components::refine_modal::RefineModal;
use crate::components::status_badge::{OutcomeBadge, StatusBadge};

const NOT_LOADED: ActionState = ActionState {
    enabled: false,
    tooltip: "",
};

#[component]
pub fn CampaignDetailPage() -> impl IntoView {
    let params = use_params_map();
    let campaign_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let (state, set_state) = signal::<Option<DetailState>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);
    let (reload, set_reload) = signal(0u32);
    let (show_performance, set_show_performance) = signal(false);
    let (show_refine, set_show_refine) = signal(false);
    let poll_timer = StoredValue::new_local(None::<browser::Timeout>);

    let poll_millis =
        i32::try_from(api::config().poll_interval_secs.saturating_mul(1000)).unwrap_or(i32::MAX);

    let refetch = move || set_reload.update(|n| *n += 1);

    // Fetch on mount, on every refetch, and on each poll tick while the agent
    // is still generating.
    Effect::new(move |_| {
        reload.track();
        let id = campaign_id.get();
        spawn_local(async move {
            match api::get_campaign(&id).await {
                Ok(detail) => {
                    let generating = detail.status.is_generating();
                    set_state.update(|s| match s {
                        Some(existing) => existing.replace(detail),
                        None => *s = Some(DetailState::from_fetch(detail)),
                    });
                    set_error.set(None);

                    if generating {
                        // Replacing the previous timer drops its callback.
                        match browser::set_timeout(refetch, poll_millis) {
                            Ok(timer) => {
                                poll_timer.try_update_value(|slot| *slot = Some(timer));
                            }
                            Err(e) => warn!("Could not schedule refresh: {}", e),
                        }
                    }
                }
                Err(e) => {
                    warn!("Failed to load campaign {}: {}", id, e);
                    set_error.set(Some(e));
                }
            }
        });
    });

    on_cleanup(move || {
        poll_timer.try_update_value(|slot| slot.take());
    });

    let detail = Memo::new(move |_| state.with(|s| s.as_ref().map(|s| s.current.clone())));
    let status = Memo::new(move |_| detail.with(|d| d.as_ref().map(|d| d.status)));

    let gate_for = move |action: Action| {
        Signal::derive(move || status.get().map(|s| gate(s, action)).unwrap_or(NOT_LOADED))
    };

    let toggle = Callback::new(move |result_id: String| {
        set_state.update(|s| {
            if let Some(s) = s {
                if !s.toggle(&result_id) {
                    warn!("Toggled unknown result {}", result_id);
                }
            }
        });
    });

    let save_selection = move |_| {
        let Some(ids) = state.with(|s| s.as_ref().map(DetailState::selection_payload)) else {
            return;
        };
        let id = campaign_id.get();
        set_busy.set(true);
        spawn_local(async move {
            match api::save_selection(&id, ids).await {
                Ok(()) => refetch(),
                Err(e) => browser::alert(&format!("Could not save the selection: {}", e)),
            }
            set_busy.set(false);
        });
    };

    let submit_performance = Callback::new(move |form: PerformanceForm| {
        let id = campaign_id.get();
        set_busy.set(true);
        spawn_local(async move {
            match api::submit_performance(&id, form).await {
                Ok(()) => {
                    set_show_performance.set(false);
                    refetch();
                }
                Err(e) => browser::alert(&format!("Could not save performance: {}", e)),
            }
            set_busy.set(false);
        });
    });

    let submit_refine = Callback::new(move |form: RefineForm| {
        let id = campaign_id.get();
        set_busy.set(true);
        spawn_local(async move {
            match api::request_refine(&id, form).await {
                Ok(()) => {
                    info!("Refinement requested for {}", id);
                    set_show_refine.set(false);
                    refetch();
                }
                Err(e) => browser::alert(&format!("Could not request refinement: {}", e)),
            }
            set_busy.set(false);
        });
    });

    let register_rag = Callback::new(move |_: ()| {
        let Some(current) = status.get_untracked() else {
            return;
        };
        if !browser::confirm(rag_confirm_message(current)) {
            return;
        }
        let id = campaign_id.get_untracked();
        set_busy.set(true);
        spawn_local(async move {
            match api::trigger_rag(&id).await {
                Ok(()) => {
                    browser::alert("Saved to the RAG DB.");
                    refetch();
                }
                Err(e) => browser::alert(&format!("Could not save to the RAG DB: {}", e)),
            }
            set_busy.set(false);
        });
    });

    let navigate = use_navigate();
    let delete_campaign = move |_| {
        let purpose = detail.with_untracked(|d| d.as_ref().map(|d| d.purpose.clone()));
        let Some(purpose) = purpose else {
            return;
        };
        if !browser::confirm(&delete_confirm_message(&purpose)) {
            return;
        }
        let id = campaign_id.get_untracked();
        let navigate = navigate.clone();
        set_busy.set(true);
        spawn_local(async move {
            match api::delete_campaign(&id).await {
                Ok(()) => {
                    info!("Campaign {} deleted", id);
                    navigate("/promotion", Default::default());
                }
                Err(e) => {
                    browser::alert(&format!("Could not delete the campaign: {}", e));
                    set_busy.set(false);
                }
            }
        });
    };

    let performance_button_label = Signal::derive(move || {
        performance_label(status.get().unwrap_or(CampaignStatus::Processing)).to_string()
    });

    view! {
        <div class="page campaign-detail-page">
            <a href="/promotion" class="back-link">"Back to promotions"</a>

            {move || error.get().map(|e| view! {
                <p class="status-text status-error">{e}</p>
            })}

            {move || match detail.get() {
                None => view! {
                    <p class="page-description">"Loading campaign..."</p>
                }.into_any(),
                Some(d) => view! {
                    <div class="page-header">
                        <h2>{d.purpose.clone()}</h2>
                        <StatusBadge status=d.status />
                        <OutcomeBadge outcome=d.status.outcome() />
                    </div>
                    <div class="card campaign-info">
                        <div class="preview-row">
                            <span class="preview-label">"Campaign ID"</span>
                            <span class="preview-value">{d.campaign_id.clone()}</span>
                        </div>
                        <div class="preview-row">
                            <span class="preview-label">"Core benefit"</span>
                            <span class="preview-value">{d.core_benefit_text.clone().unwrap_or_default()}</span>
                        </div>
                        {d.source_url.clone().filter(|u| !u.is_empty()).map(|url| view! {
                            <div class="preview-row">
                                <span class="preview-label">"Reference URL"</span>
                                <a class="preview-value" href=url.clone() target="_blank">{url.clone()}</a>
                            </div>
                        })}
                        <div class="preview-row">
                            <span class="preview-label">"CTR"</span>
                            <span class="preview-value">{d.ctr_display()}</span>
                        </div>
                        <div class="preview-row">
                            <span class="preview-label">"Conversion rate"</span>
                            <span class="preview-value">{d.conversion_display()}</span>
                        </div>
                    </div>
                }.into_any(),
            }}

            <div class="detail-actions">
                <GatedButton
                    label=String::from("Request refinement")
                    state=gate_for(Action::Refine)
                    on_click=move |_| set_show_refine.set(true)
                />
                <GatedButton
                    label=performance_button_label
                    state=gate_for(Action::Performance)
                    on_click=move |_| set_show_performance.set(true)
                />
                <GatedButton
                    label=String::from("Save to RAG DB")
                    state=gate_for(Action::Rag)
                    on_click=register_rag
                    variant="btn btn-primary"
                />
                <Show when=move || state.with(|s| s.as_ref().is_some_and(DetailState::has_unsaved_selection))>
                    <button
                        class="btn btn-primary"
                        disabled=move || busy.get()
                        on:click=save_selection
                    >
                        "Save selection"
                    </button>
                </Show>
                <button
                    class="btn btn-danger"
                    disabled=move || busy.get() || detail.with(Option::is_none)
                    on:click=delete_campaign
                >
                    "Delete"
                </button>
            </div>

            {move || detail.get().map(|d| {
                if d.status.is_generating() {
                    view! {
                        <div class="generation-notice">
                            <div class="spinner"></div>
                            <p>"The AI agent is generating message drafts. This page refreshes automatically."</p>
                        </div>
                    }.into_any()
                } else if d.status == CampaignStatus::Failed {
                    view! {
                        <p class="status-text status-error">
                            "Draft generation failed. Create the campaign again or contact an administrator."
                        </p>
                    }.into_any()
                } else if d.target_groups.is_empty() {
                    view! {
                        <p class="page-description">"No message drafts were generated for this campaign."</p>
                    }.into_any()
                } else {
                    let selectable = d.status.allows_selection();
                    d.target_groups.into_iter().map(|group| view! {
                        <section class="target-group">
                            <h3>{format!("Target {}: {}", group.index, group.name)}</h3>
                            <p class="target-features">{group.features.clone()}</p>
                            <div class="draft-grid">
                                {group.message_results.into_iter().map(|result| view! {
                                    <MessageDraftCard result=result selectable=selectable on_toggle=toggle />
                                }).collect::<Vec<_>>()}
                            </div>
                        </section>
                    }).collect::<Vec<_>>().into_any()
                }
            })}

            {move || show_performance.get().then(|| {
                let initial = detail
                    .with_untracked(|d| d.as_ref().map(PerformanceForm::from_detail))
                    .unwrap_or_default();
                view! {
                    <PerformanceModal
                        initial=initial
                        title=performance_button_label.get_untracked()
                        submitting=busy
                        on_submit=submit_performance
                        on_cancel=move |_| set_show_performance.set(false)
                    />
                }
            })}

            {move || show_refine.get().then(|| view! {
                <RefineModal
                    submitting=busy
                    on_submit=submit_refine
                    on_cancel=move |_| set_show_refine.set(false)
                />
            })}
        </div>
    }
}
