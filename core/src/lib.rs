//! Core of the MAIX campaign console.
//!
//! Everything here is independent of the browser: the backend wire types, the
//! nested detail view-model, the pure logic the pages are built on, and the
//! REST client.
//!
//! # Example
//!
//! ```ignore
//! use maix_core::{gate, Action, ApiClient, ConsoleConfig, DetailState};
//!
//! let client = ApiClient::from_origin("http://localhost:8080", &ConsoleConfig::default())?;
//! let mut state = DetailState::from_fetch(client.get_campaign("c-1").await?);
//!
//! if gate(state.current.status, Action::Rag).enabled {
//!     client.trigger_rag("c-1").await?;
//! }
//!
//! state.toggle("result-7");
//! if state.has_unsaved_selection() {
//!     client.save_selection("c-1", state.selection_payload()).await?;
//! }
//! ```

pub mod client;
pub mod config;
pub mod detail;
pub mod error;
pub mod forms;
pub mod gate;
pub mod listing;
pub mod selection;
pub mod status;
pub mod transform;
pub mod types;

pub use client::ApiClient;
pub use config::{default_config, load_config, ConsoleConfig};
pub use detail::{CampaignDetail, MessageResult, TargetGroup, ValidatorReport};
pub use error::ConsoleError;
pub use gate::{gate, performance_label, Action, ActionState};
pub use selection::{selected_ids, selection_changed, DetailState};
pub use status::{CampaignStatus, Outcome};
pub use transform::{duplicate_drafts, parse_detail, transform_detail};
