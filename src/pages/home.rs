use leptos::prelude::*;
use maix_core::listing::format_date;
use maix_core::types::{ActivityItem, DashboardSummary};
use tracing::warn;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::status_badge::StatusBadge;

/// Pair each activity item with its position. The same campaign can appear
/// more than once, so the position is part of the row key.
fn activity_rows(items: Vec<ActivityItem>) -> Vec<(usize, ActivityItem)> {
    items.into_iter().enumerate().collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (summary, set_summary) = signal(DashboardSummary::default());
    let (activity, set_activity) = signal::<Vec<ActivityItem>>(vec![]);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::dashboard_summary().await {
                Ok(s) => set_summary.set(s),
                Err(e) => {
                    warn!("Dashboard summary failed: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
        spawn_local(async move {
            match api::recent_activity().await {
                Ok(items) => set_activity.set(items),
                Err(e) => {
                    warn!("Recent activity failed: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    });

    let percent = move || summary.get().active_percent();

    view! {
        <div class="page home-page">
            <div class="page-header">
                <h2>"Dashboard"</h2>
                <a href="/promotion/create" class="btn btn-primary">"New Promotion"</a>
            </div>

            {move || error.get().map(|e| view! {
                <p class="status-text status-error">{e}</p>
            })}

            <div class="card-grid">
                <div class="card stat-card">
                    <h3>"Total campaigns"</h3>
                    <p class="stat-value">{move || summary.get().total_campaigns}</p>
                </div>
                <div class="card stat-card">
                    <h3>"Active campaigns"</h3>
                    <p class="stat-value">{move || summary.get().active_campaigns}</p>
                </div>
                <div class="card stat-card">
                    <h3>"Success cases"</h3>
                    <p class="stat-value">{move || summary.get().success_cases}</p>
                </div>
                <div class="card stat-card">
                    <h3>"RAG registered"</h3>
                    <p class="stat-value">{move || summary.get().rag_registered}</p>
                </div>
            </div>

            <div class="card progress-card">
                <h3>"Active share"</h3>
                <div
                    class="progress-ring"
                    style=move || format!("--progress: {}%", percent())
                >
                    <span class="progress-value">{move || format!("{}%", percent())}</span>
                </div>
            </div>

            <div class="card recent-activity">
                <h3>"Recent activity"</h3>
                <Show
                    when=move || !activity.get().is_empty()
                    fallback=|| view! { <p class="page-description">"No recent activity"</p> }
                >
                    <ul class="activity-list">
                        <For
                            each=move || activity_rows(activity.get())
                            key=|(position, item)| (*position, item.campaign_id.clone())
                            children=move |(_, item)| {
                                view! {
                                    <li class="activity-item">
                                        <a href=format!("/campaign/{}", item.campaign_id) class="activity-link">
                                            {item.purpose.clone()}
                                        </a>
                                        <StatusBadge status=item.status />
                                        <span class="activity-date">
                                            {format_date(item.updated_at.as_deref())}
                                        </span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maix_core::CampaignStatus;

    fn item(id: &str, updated_at: Option<&str>) -> ActivityItem {
        ActivityItem {
            campaign_id: id.to_string(),
            purpose: "Winter season discount".to_string(),
            status: CampaignStatus::Processing,
            updated_at: updated_at.map(String::from),
        }
    }

    #[test]
    fn test_repeated_campaign_rows_get_distinct_keys() {
        let rows = activity_rows(vec![item("c-1", None), item("c-1", None), item("c-2", Some("2025-01-10"))]);
        let keys: Vec<(usize, String)> = rows
            .iter()
            .map(|(position, item)| (*position, item.campaign_id.clone()))
            .collect();
        assert_eq!(
            keys,
            vec![(0, "c-1".to_string()), (1, "c-1".to_string()), (2, "c-2".to_string())]
        );
    }
}
