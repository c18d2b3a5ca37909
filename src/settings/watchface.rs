//! Watchface installation.
//!
//! Installing the companion watchface hands the PBW bundle to the Pebble app.
//! The installer never touches preferences; it only dispatches messages.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default location of the companion watchface bundle.
pub const DEFAULT_PBW_URL: &str = "https://pebblebike.com/static/pebblebike.pbw";

/// Watchface installation errors.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Dispatch failed: {0}")]
    DispatchFailed(String),

    #[error("Invalid watchface location: {0}")]
    InvalidLocation(String),
}

/// Where the installer runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallContext {
    /// URL of the PBW bundle
    pub pbw_url: String,
    /// Whether the Pebble companion app is present on the phone
    pub pebble_app_installed: bool,
}

impl Default for InstallContext {
    fn default() -> Self {
        Self {
            pbw_url: DEFAULT_PBW_URL.to_string(),
            pebble_app_installed: true,
        }
    }
}

/// Messages sent on behalf of the installer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchMessage {
    /// Open a URI with the Pebble app
    OpenUri(String),
    /// Show a short notice to the user
    Notice(String),
}

/// Sends messages to the phone UI or the Pebble app.
pub trait MessageDispatcher: Send + Sync {
    fn dispatch(&self, message: WatchMessage) -> Result<(), InstallError>;
}

/// Installs the companion watchface.
pub trait InstallWatchFace: Send + Sync {
    fn execute(
        &self,
        context: &InstallContext,
        dispatcher: &dyn MessageDispatcher,
    ) -> Result<(), InstallError>;
}

/// Installer that opens the PBW bundle in the Pebble app.
#[derive(Debug, Default, Clone, Copy)]
pub struct PbwInstaller;

impl InstallWatchFace for PbwInstaller {
    fn execute(
        &self,
        context: &InstallContext,
        dispatcher: &dyn MessageDispatcher,
    ) -> Result<(), InstallError> {
        if !context.pebble_app_installed {
            tracing::warn!("Pebble app not installed, cannot install watchface");
            return dispatcher.dispatch(WatchMessage::Notice(
                "Pebble app is not installed".to_string(),
            ));
        }

        if !context.pbw_url.ends_with(".pbw") {
            return Err(InstallError::InvalidLocation(context.pbw_url.clone()));
        }

        tracing::info!("Installing watchface from {}", context.pbw_url);
        dispatcher.dispatch(WatchMessage::OpenUri(context.pbw_url.clone()))
    }
}
