//! Typed helpers the pages call. Each builds a client for the page origin and
//! flattens errors into display strings.

use std::sync::OnceLock;

use maix_core::forms::{CampaignForm, KnowledgeForm, PerformanceForm, RefineForm};
use maix_core::listing::sort_campaigns_newest_first;
use maix_core::types::{ActivityItem, CampaignSummary, DashboardSummary, KnowledgeEntry, SourceType};
use maix_core::{default_config, ApiClient, CampaignDetail, ConsoleConfig};

use crate::browser;

pub fn config() -> &'static ConsoleConfig {
    static CONFIG: OnceLock<ConsoleConfig> = OnceLock::new();
    CONFIG.get_or_init(default_config)
}

fn client() -> Result<ApiClient, String> {
    let origin = browser::origin()?;
    Ok(ApiClient::from_origin(&origin, config())?)
}

// -- Dashboard --

pub async fn dashboard_summary() -> Result<DashboardSummary, String> {
    Ok(client()?.dashboard_summary().await?)
}

pub async fn recent_activity() -> Result<Vec<ActivityItem>, String> {
    let mut items = client()?.recent_activity().await?;
    items.truncate(config().recent_activity_limit);
    Ok(items)
}

// -- Campaigns --

/// Every campaign on the first page, newest request first.
pub async fn list_campaigns() -> Result<Vec<CampaignSummary>, String> {
    let mut campaigns = client()?.list_campaigns().await?.content;
    sort_campaigns_newest_first(&mut campaigns);
    Ok(campaigns)
}

/// Validates the form and returns the new campaign id.
pub async fn create_campaign(form: CampaignForm) -> Result<String, String> {
    let request = form.into_request(&config().marketer_id)?;
    Ok(client()?.create_campaign(&request).await?)
}

pub async fn get_campaign(id: &str) -> Result<CampaignDetail, String> {
    Ok(client()?.get_campaign(id).await?)
}

pub async fn save_selection(id: &str, result_ids: Vec<String>) -> Result<(), String> {
    Ok(client()?.save_selection(id, result_ids).await?)
}

pub async fn submit_performance(id: &str, form: PerformanceForm) -> Result<(), String> {
    let request = form.into_request()?;
    Ok(client()?.submit_performance(id, &request).await?)
}

pub async fn request_refine(id: &str, form: RefineForm) -> Result<(), String> {
    let request = form.into_request()?;
    Ok(client()?.request_refine(id, &request).await?)
}

pub async fn trigger_rag(id: &str) -> Result<(), String> {
    Ok(client()?.trigger_rag(id).await?)
}

pub async fn delete_campaign(id: &str) -> Result<(), String> {
    Ok(client()?.delete_campaign(id).await?)
}

// -- Knowledge base --

pub async fn list_knowledge(source_type: Option<SourceType>) -> Result<Vec<KnowledgeEntry>, String> {
    Ok(client()?.list_knowledge(source_type).await?)
}

pub async fn get_knowledge(id: &str) -> Result<KnowledgeEntry, String> {
    Ok(client()?.get_knowledge(id).await?)
}

pub async fn create_knowledge(form: KnowledgeForm) -> Result<(), String> {
    let input = form.into_input()?;
    Ok(client()?.create_knowledge(&input).await?)
}

pub async fn update_knowledge(id: &str, form: KnowledgeForm) -> Result<(), String> {
    let input = form.into_input()?;
    Ok(client()?.update_knowledge(id, &input).await?)
}

pub async fn delete_knowledge(id: &str) -> Result<(), String> {
    Ok(client()?.delete_knowledge(id).await?)
}
