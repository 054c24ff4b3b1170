use leptos::prelude::*;
use maix_core::listing::{filter_campaigns, format_date};
use maix_core::types::CampaignSummary;
use maix_core::CampaignStatus;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::status_badge::{OutcomeBadge, StatusBadge};
use crate::preferences;

#[component]
pub fn CampaignListPage() -> impl IntoView {
    let (campaigns, set_campaigns) = signal::<Vec<CampaignSummary>>(vec![]);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (status_filter, set_status_filter) = signal(preferences::load_filters().campaign_status);
    let (query, set_query) = signal(String::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_campaigns().await {
                Ok(list) => set_campaigns.set(list),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let visible = move || {
        let status = CampaignStatus::from_code(&status_filter.get());
        campaigns.with(|list| filter_campaigns(list, status, &query.get()))
    };

    let on_status_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        preferences::update_filters(|f| f.campaign_status = value.clone());
        set_status_filter.set(value);
    };

    view! {
        <div class="page campaign-list-page">
            <div class="page-header">
                <h2>"Promotions"</h2>
                <a href="/promotion/create" class="btn btn-primary">"New Promotion"</a>
            </div>

            <div class="filter-bar">
                <select class="input" on:change=on_status_change>
                    <option value="all" selected=move || status_filter.get() == "all">
                        "All statuses"
                    </option>
                    {CampaignStatus::ALL.into_iter().map(|s| view! {
                        <option value=s.code() selected=move || status_filter.get() == s.code()>
                            {s.label()}
                        </option>
                    }).collect::<Vec<_>>()}
                </select>
                <input
                    type="text"
                    class="input"
                    placeholder="Search by purpose"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
            </div>

            {move || error.get().map(|e| view! {
                <p class="status-text status-error">{e}</p>
            })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page-description">"Loading campaigns..."</p> }
            >
                <Show
                    when=move || !visible().is_empty()
                    fallback=|| view! { <p class="page-description">"No campaigns match the filter"</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Purpose"</th>
                                <th>"Status"</th>
                                <th>"Outcome"</th>
                                <th>"Requested"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=visible
                                key=|c| (c.campaign_id.clone(), c.status)
                                children=move |c| {
                                    view! {
                                        <tr>
                                            <td>
                                                <a href=format!("/campaign/{}", c.campaign_id)>
                                                    {c.purpose.clone()}
                                                </a>
                                            </td>
                                            <td><StatusBadge status=c.status /></td>
                                            <td><OutcomeBadge outcome=c.status.outcome() /></td>
                                            <td>{format_date(c.request_date.as_deref())}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}
