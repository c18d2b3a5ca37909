//! Settings screen logic.
//!
//! Maps raw preference strings to display summaries and keeps them current
//! while the settings screen is active.

pub mod coordinator;
pub mod display;
pub mod keys;
pub mod store;
pub mod values;
pub mod watchface;

pub use coordinator::SettingsCoordinator;
pub use display::{
    DisplayTarget, ListDisplayTarget, ListPreference, Preference, PreferenceScreen, SettingsView,
};
pub use keys::{Binding, PreferenceKey, TargetKind, BINDINGS};
pub use store::{MemoryPreferenceStore, PreferenceStore, Subscription};
pub use values::{CanvasMode, OruxMapsMode, RefreshInterval, Units, UNSET_LABEL};
pub use watchface::{
    InstallContext, InstallError, InstallWatchFace, MessageDispatcher, PbwInstaller, WatchMessage,
};
