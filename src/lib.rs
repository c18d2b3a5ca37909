//! PebbleBike settings
//!
//! Settings screen logic for the PebbleBike companion app: formats raw
//! preference values into screen summaries, keeps them current while the
//! screen is active, installs the companion watchface, and relays detected
//! activity to a cloud fitness API.

pub mod integrations;
pub mod settings;
pub mod storage;

// Re-export commonly used types
pub use integrations::fit::{FitSessionManager, SessionRecorder};
pub use settings::coordinator::SettingsCoordinator;
pub use settings::store::{MemoryPreferenceStore, PreferenceStore};
pub use storage::config::AppConfig;
