//! Local draft selection and change detection.
//!
//! The page keeps the live, user-edited detail next to the snapshot taken at
//! the last fetch. Only the live copy is ever toggled; saving always sends the
//! full selected-id set.

use crate::detail::CampaignDetail;

/// Ids of selected drafts, in display order.
pub fn selected_ids(detail: &CampaignDetail) -> Vec<String> {
    detail
        .results()
        .filter(|r| r.is_selected)
        .map(|r| r.result_id.clone())
        .collect()
}

/// Whether the selected-id sets of two snapshots differ, ignoring order.
pub fn selection_changed(current: &CampaignDetail, initial: &CampaignDetail) -> bool {
    let mut a = selected_ids(current);
    let mut b = selected_ids(initial);
    a.sort();
    b.sort();
    a != b
}

/// `{current, snapshot}` pair owned by the detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    pub current: CampaignDetail,
    pub snapshot: CampaignDetail,
}

impl DetailState {
    pub fn from_fetch(detail: CampaignDetail) -> Self {
        Self {
            snapshot: detail.clone(),
            current: detail,
        }
    }

    /// Resynchronize both copies with a freshly fetched detail, dropping any
    /// unsaved toggles.
    pub fn replace(&mut self, detail: CampaignDetail) {
        *self = Self::from_fetch(detail);
    }

    /// Flip one draft's flag in the live copy. Returns false when no draft has
    /// that id.
    pub fn toggle(&mut self, result_id: &str) -> bool {
        for group in &mut self.current.target_groups {
            for result in &mut group.message_results {
                if result.result_id == result_id {
                    result.is_selected = !result.is_selected;
                    return true;
                }
            }
        }
        false
    }

    pub fn has_unsaved_selection(&self) -> bool {
        selection_changed(&self.current, &self.snapshot)
    }

    /// Full selected-id list to send on save.
    pub fn selection_payload(&self) -> Vec<String> {
        selected_ids(&self.current)
    }
}
