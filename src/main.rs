//! PebbleBike settings
//!
//! Loads the configuration, seeds the preference store and prints the
//! settings screen summaries.

use anyhow::Context;
use pebblebike::settings::{
    InstallError, MemoryPreferenceStore, MessageDispatcher, PbwInstaller, PreferenceKey,
    PreferenceScreen, SettingsCoordinator, WatchMessage,
};
use pebblebike::storage::config::{load_config, LoggingSettings};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter};

/// Dispatcher that only logs messages.
struct LogDispatcher;

impl MessageDispatcher for LogDispatcher {
    fn dispatch(&self, message: WatchMessage) -> Result<(), InstallError> {
        match message {
            WatchMessage::OpenUri(uri) => tracing::info!("Open {}", uri),
            WatchMessage::Notice(text) => tracing::warn!("{}", text),
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let env_filter = std::env::var("RUST_LOG").ok();

    // Start with the default level; the configured one is applied once loaded
    let (filter, filter_handle) = reload::Layer::new(EnvFilter::new(
        LoggingSettings::default().directive(env_filter.as_deref()),
    ));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config().context("failed to load configuration")?;
    let directive = config.logging.directive(env_filter.as_deref());
    if let Err(e) = filter_handle.reload(EnvFilter::new(&directive)) {
        tracing::warn!("Failed to apply log level {}: {}", directive, e);
    }

    tracing::info!("Starting PebbleBike settings v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(MemoryPreferenceStore::from_map(config.preferences.clone()));
    let mut coordinator = SettingsCoordinator::new(
        store,
        PreferenceScreen::new(),
        Arc::new(PbwInstaller),
        Arc::new(LogDispatcher),
        config.watchface.clone(),
    );

    coordinator.on_resume();
    for key in PreferenceKey::all() {
        if let Some(summary) = coordinator.view().summary(*key) {
            println!("{:<24} {}", key.as_str(), summary);
        }
    }

    if std::env::args().any(|arg| arg == "--install-watchface") {
        coordinator.on_install_click();
    }

    coordinator.on_pause();
    Ok(())
}
