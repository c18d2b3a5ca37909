//! Display targets the coordinator writes summaries into.

use super::keys::PreferenceKey;
use super::values::{CanvasMode, OruxMapsMode};

/// A UI element showing a one-line summary of a setting.
pub trait DisplayTarget {
    fn set_summary(&mut self, summary: &str);

    fn summary(&self) -> Option<&str>;
}

/// A selectable list whose selected entry must match the stored value.
pub trait ListDisplayTarget: DisplayTarget {
    fn set_selected_value(&mut self, value: &str);

    fn selected_value(&self) -> Option<&str>;
}

/// Lookup of display targets by key.
pub trait SettingsView {
    /// Plain summary target for a key.
    fn summary_target(&mut self, key: PreferenceKey) -> Option<&mut dyn DisplayTarget>;

    /// List target for a key.
    fn list_target(&mut self, key: PreferenceKey) -> Option<&mut dyn ListDisplayTarget>;
}

/// Plain preference row.
#[derive(Debug, Clone, PartialEq)]
pub struct Preference {
    pub key: PreferenceKey,
    pub title: String,
    summary: Option<String>,
}

impl Preference {
    pub fn new(key: PreferenceKey, title: impl Into<String>) -> Self {
        Self {
            key,
            title: title.into(),
            summary: None,
        }
    }
}

impl DisplayTarget for Preference {
    fn set_summary(&mut self, summary: &str) {
        self.summary = Some(summary.to_string());
    }

    fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }
}

/// List preference row with (value, label) entries.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPreference {
    pub key: PreferenceKey,
    pub title: String,
    pub entries: Vec<(String, String)>,
    value: Option<String>,
    summary: Option<String>,
}

impl ListPreference {
    pub fn new(key: PreferenceKey, title: impl Into<String>, entries: Vec<(String, String)>) -> Self {
        Self {
            key,
            title: title.into(),
            entries,
            value: None,
            summary: None,
        }
    }

    /// Label of the selected entry, if the selected value is one of the entries.
    pub fn selected_label(&self) -> Option<&str> {
        let value = self.value.as_deref()?;
        self.entries
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, label)| label.as_str())
    }
}

impl DisplayTarget for ListPreference {
    fn set_summary(&mut self, summary: &str) {
        self.summary = Some(summary.to_string());
    }

    fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }
}

impl ListDisplayTarget for ListPreference {
    fn set_selected_value(&mut self, value: &str) {
        self.value = Some(value.to_string());
    }

    fn selected_value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// The settings screen: every preference row keyed by its preference key.
#[derive(Debug, Clone)]
pub struct PreferenceScreen {
    preferences: Vec<Preference>,
    lists: Vec<ListPreference>,
}

impl Default for PreferenceScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceScreen {
    /// Build the standard settings screen.
    pub fn new() -> Self {
        let preferences = vec![
            Preference::new(PreferenceKey::InstallWatchface, "Install watchface"),
            Preference::new(PreferenceKey::UnitsOfMeasure, "Units"),
            Preference::new(PreferenceKey::RefreshInterval, "Refresh interval"),
            Preference::new(PreferenceKey::LiveTrackingLogin, "JayPS login"),
            Preference::new(PreferenceKey::LiveTrackingMmtLogin, "MapMyTracks login"),
            Preference::new(PreferenceKey::HrmName, "Heart rate monitor"),
        ];

        let lists = vec![
            ListPreference::new(
                PreferenceKey::OruxMapsAuto,
                "OruxMaps",
                OruxMapsMode::ENTRIES
                    .iter()
                    .map(|(token, mode)| (token.to_string(), mode.label().to_string()))
                    .collect(),
            ),
            ListPreference::new(
                PreferenceKey::CanvasMode,
                "Canvas",
                CanvasMode::ENTRIES
                    .iter()
                    .map(|(token, mode)| (token.to_string(), mode.label().to_string()))
                    .collect(),
            ),
        ];

        Self { preferences, lists }
    }

    /// Find a plain preference row.
    pub fn find_preference(&self, key: PreferenceKey) -> Option<&Preference> {
        self.preferences.iter().find(|p| p.key == key)
    }

    /// Find a list preference row.
    pub fn find_list(&self, key: PreferenceKey) -> Option<&ListPreference> {
        self.lists.iter().find(|p| p.key == key)
    }

    /// Mutable access to a list row, for hosts that let the user pick an entry.
    pub fn find_list_mut(&mut self, key: PreferenceKey) -> Option<&mut ListPreference> {
        self.lists.iter_mut().find(|p| p.key == key)
    }

    /// Summary of any row.
    pub fn summary(&self, key: PreferenceKey) -> Option<&str> {
        if let Some(list) = self.find_list(key) {
            return list.summary();
        }
        self.find_preference(key).and_then(|p| p.summary())
    }
}

impl SettingsView for PreferenceScreen {
    fn summary_target(&mut self, key: PreferenceKey) -> Option<&mut dyn DisplayTarget> {
        self.preferences
            .iter_mut()
            .find(|p| p.key == key)
            .map(|p| p as &mut dyn DisplayTarget)
    }

    fn list_target(&mut self, key: PreferenceKey) -> Option<&mut dyn ListDisplayTarget> {
        self.lists
            .iter_mut()
            .find(|p| p.key == key)
            .map(|p| p as &mut dyn ListDisplayTarget)
    }
}
