//! Well-known preference keys and the table binding each key to its formatter.

use super::values::{
    format_canvas_mode, format_login, format_oruxmaps_mode, format_refresh_interval, format_units,
};

/// A preference the settings screen knows how to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    /// Imperial or metric units
    UnitsOfMeasure,
    /// Watch refresh interval in milliseconds
    RefreshInterval,
    /// JayPS live tracking login
    LiveTrackingLogin,
    /// MapMyTracks live tracking login
    LiveTrackingMmtLogin,
    /// OruxMaps auto-record mode
    OruxMapsAuto,
    /// Pebble canvas mode
    CanvasMode,
    /// Paired heart rate monitor name
    HrmName,
    /// Install watchface action (no stored value)
    InstallWatchface,
}

/// How a key is rendered on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Plain preference with a summary line
    Summary,
    /// Selectable list whose selected value tracks the stored value
    List,
}

/// Formats a raw stored value into a summary line.
pub type Formatter = fn(&str) -> String;

/// Binds a key to its target kind and formatter.
#[derive(Clone, Copy)]
pub struct Binding {
    pub key: PreferenceKey,
    pub kind: TargetKind,
    pub format: Formatter,
}

/// Every key whose summary is derived from the store.
pub const BINDINGS: &[Binding] = &[
    Binding {
        key: PreferenceKey::UnitsOfMeasure,
        kind: TargetKind::Summary,
        format: format_units,
    },
    Binding {
        key: PreferenceKey::RefreshInterval,
        kind: TargetKind::Summary,
        format: format_refresh_interval,
    },
    Binding {
        key: PreferenceKey::LiveTrackingLogin,
        kind: TargetKind::Summary,
        format: format_login,
    },
    Binding {
        key: PreferenceKey::LiveTrackingMmtLogin,
        kind: TargetKind::Summary,
        format: format_login,
    },
    Binding {
        key: PreferenceKey::OruxMapsAuto,
        kind: TargetKind::List,
        format: format_oruxmaps_mode,
    },
    Binding {
        key: PreferenceKey::CanvasMode,
        kind: TargetKind::List,
        format: format_canvas_mode,
    },
    Binding {
        key: PreferenceKey::HrmName,
        kind: TargetKind::Summary,
        format: format_login,
    },
];

impl PreferenceKey {
    /// Raw key string used by the preference store.
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceKey::UnitsOfMeasure => "UNITS_OF_MEASURE",
            PreferenceKey::RefreshInterval => "REFRESH_INTERVAL",
            PreferenceKey::LiveTrackingLogin => "LIVE_TRACKING_LOGIN",
            PreferenceKey::LiveTrackingMmtLogin => "LIVE_TRACKING_MMT_LOGIN",
            PreferenceKey::OruxMapsAuto => "ORUXMAPS_AUTO",
            PreferenceKey::CanvasMode => "CANVAS_MODE",
            PreferenceKey::HrmName => "hrm_name",
            PreferenceKey::InstallWatchface => "INSTALL_WATCHFACE",
        }
    }

    /// Parse a raw key string. Returns `None` for keys this screen ignores.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.as_str() == key)
    }

    /// Value used when the store has nothing for this key.
    pub fn default_value(&self) -> &'static str {
        match self {
            PreferenceKey::UnitsOfMeasure => "0",
            PreferenceKey::RefreshInterval => "500",
            _ => "",
        }
    }

    /// The formatter binding for this key, if its summary comes from the store.
    pub fn binding(&self) -> Option<&'static Binding> {
        BINDINGS.iter().find(|b| b.key == *self)
    }

    /// Get all known keys.
    pub fn all() -> &'static [PreferenceKey] {
        &[
            PreferenceKey::UnitsOfMeasure,
            PreferenceKey::RefreshInterval,
            PreferenceKey::LiveTrackingLogin,
            PreferenceKey::LiveTrackingMmtLogin,
            PreferenceKey::OruxMapsAuto,
            PreferenceKey::CanvasMode,
            PreferenceKey::HrmName,
            PreferenceKey::InstallWatchface,
        ]
    }
}

impl std::fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
