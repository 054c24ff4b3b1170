//! Typed client for the campaign backend.
//!
//! Works natively and in the browser (reqwest uses `fetch` on wasm). Every call
//! is a single request; nothing is retried.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};
use url::Url;

use crate::config::ConsoleConfig;
use crate::detail::CampaignDetail;
use crate::error::ConsoleError;
use crate::transform::parse_detail;
use crate::types::{
    ActivityItem, CampaignSummary, CreateCampaignRequest, CreateCampaignResponse,
    DashboardSummary, KnowledgeEntry, KnowledgeInput, KnowledgeListResponse, Page,
    PerformanceRequest, RefineRequest, SelectionRequest, SourceType,
};

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    client: reqwest::Client,
}

fn build_http_client() -> reqwest::Client {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new())
    }
    #[cfg(target_arch = "wasm32")]
    {
        reqwest::Client::new()
    }
}

impl ApiClient {
    /// `base_url` must end with a slash, e.g. `http://localhost:8080/api/`.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            client: build_http_client(),
        }
    }

    /// Client for the backend served under the page origin.
    pub fn from_origin(origin: &str, config: &ConsoleConfig) -> Result<Self, ConsoleError> {
        Ok(Self::new(config.api_base_url(origin)?))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, ConsoleError> {
        self.base_url
            .join(path)
            .map_err(|e| ConsoleError::Config(format!("Invalid request path '{}': {}", path, e)))
    }

    fn campaign_path(id: &str, suffix: &str) -> String {
        format!("campaigns/{}{}", urlencoding::encode(id), suffix)
    }

    fn knowledge_path(id: &str) -> String {
        format!("knowledge/{}", urlencoding::encode(id))
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ConsoleError> {
        let resp = request.send().await?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            warn!("Backend returned {}: {}", status, body);
            return Err(ConsoleError::Api { status, body });
        }
        Ok(resp)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ConsoleError> {
        let resp = self.send(self.client.get(self.url(path)?)).await?;
        Ok(resp.json().await?)
    }

    async fn put_ack<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ConsoleError> {
        self.send(self.client.put(self.url(path)?).json(body)).await?;
        Ok(())
    }

    async fn post_ack<B: Serialize>(&self, path: &str, body: Option<&B>) -> Result<(), ConsoleError> {
        let mut request = self.client.post(self.url(path)?);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send(request).await?;
        Ok(())
    }

    async fn delete_ack(&self, path: &str) -> Result<(), ConsoleError> {
        self.send(self.client.delete(self.url(path)?)).await?;
        Ok(())
    }

    // -- Campaigns --

    pub async fn list_campaigns(&self) -> Result<Page<CampaignSummary>, ConsoleError> {
        info!("Listing campaigns");
        let page: Page<CampaignSummary> = self.get_json("campaigns").await?;
        info!("Fetched {} campaigns", page.content.len());
        Ok(page)
    }

    /// Returns the new campaign id.
    pub async fn create_campaign(&self, request: &CreateCampaignRequest) -> Result<String, ConsoleError> {
        info!("Creating campaign: {}", request.purpose);
        let resp = self
            .send(self.client.post(self.url("campaigns")?).json(request))
            .await?;
        let created: CreateCampaignResponse = resp.json().await?;
        info!("Created campaign {}", created.campaign_id);
        Ok(created.campaign_id)
    }

    /// Fetch and transform a campaign into the nested view-model.
    pub async fn get_campaign(&self, id: &str) -> Result<CampaignDetail, ConsoleError> {
        info!("Fetching campaign {}", id);
        let resp = self
            .send(self.client.get(self.url(&Self::campaign_path(id, ""))?))
            .await?;
        let body = resp.text().await?;
        parse_detail(&body)
    }

    /// Replace the selection with the full list of selected result ids.
    pub async fn save_selection(&self, id: &str, result_ids: Vec<String>) -> Result<(), ConsoleError> {
        info!("Saving {} selected results for campaign {}", result_ids.len(), id);
        self.put_ack(
            &Self::campaign_path(id, "/selection"),
            &SelectionRequest { result_ids },
        )
        .await
    }

    pub async fn submit_performance(&self, id: &str, request: &PerformanceRequest) -> Result<(), ConsoleError> {
        info!(
            "Submitting performance for campaign {} (ctr={}, cvr={}, success={})",
            id, request.actual_ctr, request.conversion_rate, request.is_success_case
        );
        self.put_ack(&Self::campaign_path(id, "/performance"), request).await
    }

    pub async fn request_refine(&self, id: &str, request: &RefineRequest) -> Result<(), ConsoleError> {
        info!("Requesting refinement for campaign {}", id);
        self.post_ack(&Self::campaign_path(id, "/refine"), Some(request)).await
    }

    pub async fn trigger_rag(&self, id: &str) -> Result<(), ConsoleError> {
        info!("Triggering RAG registration for campaign {}", id);
        self.post_ack::<()>(&Self::campaign_path(id, "/rag-trigger"), None).await
    }

    pub async fn delete_campaign(&self, id: &str) -> Result<(), ConsoleError> {
        info!("Deleting campaign {}", id);
        self.delete_ack(&Self::campaign_path(id, "")).await
    }

    // -- Dashboard --

    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ConsoleError> {
        self.get_json("dashboard/summary").await
    }

    pub async fn recent_activity(&self) -> Result<Vec<ActivityItem>, ConsoleError> {
        self.get_json("dashboard/recent-activity").await
    }

    // -- Knowledge base --

    /// `source_type: None` lists every entry.
    pub async fn list_knowledge(&self, source_type: Option<SourceType>) -> Result<Vec<KnowledgeEntry>, ConsoleError> {
        info!("Listing knowledge (filter: {:?})", source_type);
        let mut request = self.client.get(self.url("knowledge")?);
        if let Some(source_type) = source_type {
            request = request.query(&[("source_type", source_type.code())]);
        }
        let resp = self.send(request).await?;
        let list: KnowledgeListResponse = resp.json().await?;
        Ok(list.knowledge_base)
    }

    pub async fn get_knowledge(&self, id: &str) -> Result<KnowledgeEntry, ConsoleError> {
        self.get_json(&Self::knowledge_path(id)).await
    }

    pub async fn create_knowledge(&self, input: &KnowledgeInput) -> Result<(), ConsoleError> {
        info!("Creating knowledge entry: {}", input.metadata.title);
        self.post_ack("knowledge", Some(input)).await
    }

    pub async fn update_knowledge(&self, id: &str, input: &KnowledgeInput) -> Result<(), ConsoleError> {
        info!("Updating knowledge entry {}", id);
        self.put_ack(&Self::knowledge_path(id), input).await
    }

    pub async fn delete_knowledge(&self, id: &str) -> Result<(), ConsoleError> {
        info!("Deleting knowledge entry {}", id);
        self.delete_ack(&Self::knowledge_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(Url::parse("http://localhost:8080/api/").unwrap())
    }

    #[test]
    fn test_paths_stay_under_base() {
        let c = client();
        let url = c.url(&ApiClient::campaign_path("c-1", "/selection")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/campaigns/c-1/selection");
    }

    #[test]
    fn test_ids_are_percent_encoded() {
        let c = client();
        let url = c.url(&ApiClient::campaign_path("a/b c", "")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/campaigns/a%2Fb%20c");
        let url = c.url(&ApiClient::knowledge_path("doc#1")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/knowledge/doc%231");
    }

    #[test]
    fn test_from_origin_uses_config_base_path() {
        let c = ApiClient::from_origin("https://console.example.com", &ConsoleConfig::default()).unwrap();
        assert_eq!(c.base_url().as_str(), "https://console.example.com/api/");
    }
}
