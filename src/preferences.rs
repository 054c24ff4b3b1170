use maix_core::types::SourceType;
use maix_core::CampaignStatus;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::browser;

const STORAGE_KEY: &str = "maix.list-filters";

/// List filters remembered across visits. Values are the `<select>` values:
/// "all" or a status / source type code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListFilters {
    pub campaign_status: String,
    pub knowledge_source: String,
}

impl Default for ListFilters {
    fn default() -> Self {
        Self {
            campaign_status: "all".to_string(),
            knowledge_source: "all".to_string(),
        }
    }
}

impl ListFilters {
    /// Reset any value that is neither "all" nor a known code.
    fn sanitized(mut self) -> Self {
        if self.campaign_status != "all" && CampaignStatus::from_code(&self.campaign_status).is_none() {
            warn!("Ignoring stored campaign status filter '{}'", self.campaign_status);
            self.campaign_status = "all".to_string();
        }
        if self.knowledge_source != "all" && SourceType::from_code(&self.knowledge_source).is_none() {
            warn!("Ignoring stored knowledge source filter '{}'", self.knowledge_source);
            self.knowledge_source = "all".to_string();
        }
        self
    }
}

fn parse_filters(raw: &str) -> ListFilters {
    match serde_json::from_str::<ListFilters>(raw) {
        Ok(filters) => filters.sanitized(),
        Err(e) => {
            warn!("Ignoring stored list filters: {}", e);
            ListFilters::default()
        }
    }
}

pub fn load_filters() -> ListFilters {
    let Some(storage) = browser::local_storage() else {
        return ListFilters::default();
    };
    match storage.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => parse_filters(&raw),
        _ => ListFilters::default(),
    }
}

pub fn update_filters(f: impl FnOnce(&mut ListFilters)) {
    let mut filters = load_filters();
    f(&mut filters);
    let Some(storage) = browser::local_storage() else {
        return;
    };
    match serde_json::to_string(&filters) {
        Ok(raw) => {
            if storage.set_item(STORAGE_KEY, &raw).is_err() {
                warn!("Could not persist list filters");
            }
        }
        Err(e) => warn!("Could not serialize list filters: {}", e),
    }
}
