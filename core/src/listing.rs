//! Client-side filtering and ordering of the campaign and knowledge lists.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::status::CampaignStatus;
use crate::types::{CampaignSummary, KnowledgeEntry, SourceType};

/// Parse the timestamp formats the backend emits: RFC 3339, ISO without
/// offset, `YYYY-MM-DD HH:MM:SS[.fff]` and bare dates.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    let iso = raw.replacen(' ', "T", 1);
    if let Ok(dt) = NaiveDateTime::parse_from_str(&iso, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `YYYY-MM-DD` for list columns, the raw text when it cannot be parsed, or
/// "No date" when missing.
pub fn format_date(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => "No date".to_string(),
        Some(s) => parse_timestamp(s)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| s.to_string()),
    }
}

/// Newest first; entries without a parseable date go last, keeping their
/// relative order.
fn newest_first(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn sort_campaigns_newest_first(campaigns: &mut [CampaignSummary]) {
    campaigns.sort_by(|a, b| {
        newest_first(
            a.request_date.as_deref().and_then(parse_timestamp),
            b.request_date.as_deref().and_then(parse_timestamp),
        )
    });
}

/// Status filter (`None` = all) plus case-insensitive purpose search.
pub fn filter_campaigns(
    campaigns: &[CampaignSummary],
    status: Option<CampaignStatus>,
    query: &str,
) -> Vec<CampaignSummary> {
    let q = query.trim().to_lowercase();
    campaigns
        .iter()
        .filter(|c| status.map_or(true, |s| c.status == s))
        .filter(|c| q.is_empty() || c.purpose.to_lowercase().contains(&q))
        .cloned()
        .collect()
}

/// Case-insensitive title search, newest registration first.
pub fn filter_knowledge(entries: &[KnowledgeEntry], query: &str) -> Vec<KnowledgeEntry> {
    let q = query.trim().to_lowercase();
    let mut filtered: Vec<KnowledgeEntry> = entries
        .iter()
        .filter(|e| q.is_empty() || e.metadata.title.to_lowercase().contains(&q))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| {
        newest_first(
            a.metadata.registration_date.as_deref().and_then(parse_timestamp),
            b.metadata.registration_date.as_deref().and_then(parse_timestamp),
        )
    });
    filtered
}

/// Parse the knowledge filter dropdown value (`"all"` or a source type code).
pub fn parse_source_filter(value: &str) -> Option<SourceType> {
    if value == "all" {
        None
    } else {
        SourceType::from_code(value)
    }
}

/// Shorten long text by cutting out its middle: `abcdefghij` -> `abc...hij`.
pub fn truncate_middle(text: &str, max_len: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_len {
        return text.to_string();
    }
    let half = max_len.saturating_sub(3) / 2;
    let start: String = chars[..half].iter().collect();
    let end: String = chars[chars.len() - half..].iter().collect();
    format!("{}...{}", start, end)
}
