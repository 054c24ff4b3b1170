pub mod action_button;
pub mod knowledge_modal;
pub mod message_draft;
pub mod performance_modal;
pub mod refine_modal;
pub mod sidebar;
pub mod status_badge;
