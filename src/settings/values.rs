//! Typed setting values parsed from raw preference strings.
//!
//! Every value here is derived fresh from the stored string; nothing is
//! persisted back.

/// Label shown for list values that have no mapping.
pub const UNSET_LABEL: &str = "Not set";

/// Refresh interval used when the stored value is not a number.
pub const DEFAULT_REFRESH_INTERVAL_MS: i32 = 500;

/// Unit system preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    /// Imperial units (mph, miles, feet)
    #[default]
    Imperial,
    /// Metric units (km/h, km, m)
    Metric,
}

impl Units {
    /// Parse the stored value. "0" is imperial, anything else metric.
    pub fn from_raw(raw: &str) -> Self {
        if raw == "0" {
            Units::Imperial
        } else {
            Units::Metric
        }
    }

    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            Units::Imperial => "Imperial",
            Units::Metric => "Metric",
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How often the watch display is refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshInterval {
    millis: i32,
}

impl RefreshInterval {
    /// Parse the stored value, falling back to 500 ms when it is not an integer.
    pub fn from_raw(raw: &str) -> Self {
        let millis = raw.parse::<i32>().unwrap_or_else(|_| {
            tracing::debug!("Invalid refresh interval {:?}, using default", raw);
            DEFAULT_REFRESH_INTERVAL_MS
        });
        Self { millis }
    }

    pub fn millis(&self) -> i32 {
        self.millis
    }
}

impl std::fmt::Display for RefreshInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.millis < 1000 {
            write!(f, "{} ms", self.millis)
        } else {
            write!(f, "{} s", self.millis / 1000)
        }
    }
}

/// OruxMaps auto-record behaviour when a ride starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OruxMapsMode {
    Disabled,
    ContinueRecord,
    NewSegment,
    NewTrack,
    Auto,
}

impl OruxMapsMode {
    /// All modes with their stored tokens.
    pub const ENTRIES: &'static [(&'static str, OruxMapsMode)] = &[
        ("disable", OruxMapsMode::Disabled),
        ("continue", OruxMapsMode::ContinueRecord),
        ("new_segment", OruxMapsMode::NewSegment),
        ("new_track", OruxMapsMode::NewTrack),
        ("auto", OruxMapsMode::Auto),
    ];

    /// Parse a stored token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ENTRIES
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, mode)| *mode)
    }

    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            OruxMapsMode::Disabled => "Disabled",
            OruxMapsMode::ContinueRecord => "Continue record",
            OruxMapsMode::NewSegment => "New segment",
            OruxMapsMode::NewTrack => "New track",
            OruxMapsMode::Auto => "Auto",
        }
    }
}

/// Pebble canvas integration mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasMode {
    Disabled,
    CanvasOnly,
    CanvasAndWatchface,
}

impl CanvasMode {
    /// All modes with their stored tokens.
    pub const ENTRIES: &'static [(&'static str, CanvasMode)] = &[
        ("disable", CanvasMode::Disabled),
        ("canvas_only", CanvasMode::CanvasOnly),
        ("canvas_and_pbw", CanvasMode::CanvasAndWatchface),
    ];

    /// Parse a stored token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ENTRIES
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, mode)| *mode)
    }

    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            CanvasMode::Disabled => "Disabled",
            CanvasMode::CanvasOnly => "Canvas only",
            CanvasMode::CanvasAndWatchface => "Canvas and watchface",
        }
    }
}

pub fn format_units(raw: &str) -> String {
    Units::from_raw(raw).label().to_string()
}

pub fn format_refresh_interval(raw: &str) -> String {
    RefreshInterval::from_raw(raw).to_string()
}

pub fn format_login(raw: &str) -> String {
    raw.to_string()
}

pub fn format_oruxmaps_mode(raw: &str) -> String {
    match OruxMapsMode::from_token(raw) {
        Some(mode) => mode.label().to_string(),
        None => {
            tracing::debug!("Unmapped OruxMaps mode {:?}", raw);
            UNSET_LABEL.to_string()
        }
    }
}

pub fn format_canvas_mode(raw: &str) -> String {
    match CanvasMode::from_token(raw) {
        Some(mode) => mode.label().to_string(),
        None => {
            tracing::debug!("Unmapped canvas mode {:?}", raw);
            UNSET_LABEL.to_string()
        }
    }
}
