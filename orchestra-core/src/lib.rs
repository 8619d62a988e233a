//! Board state for agent-orchestra: the project list, its durable mirror and
//! the rules the dashboard applies to it.

pub mod actions;
pub mod config;
pub mod draft;
pub mod error;
pub mod focus;
pub mod model;
pub mod stats;
pub mod storage;
pub mod store;

pub use actions::CardAction;
pub use config::DashboardConfig;
pub use draft::ProjectDraft;
pub use error::{ConfigError, DraftError, StoreError};
pub use focus::{FocusMarker, FocusTicket};
pub use model::{seed_projects, NewProject, Project, ProjectStatus};
pub use stats::Stats;
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;
pub use storage::{KeyValueStore, MemoryStore};
pub use store::{Confirm, ProjectStore};
