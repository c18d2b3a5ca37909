//! Unit tests for preference keys and value labels.

use pebblebike::settings::values::{format_canvas_mode, format_oruxmaps_mode, format_units};
use pebblebike::settings::{CanvasMode, OruxMapsMode, PreferenceKey, TargetKind, Units, BINDINGS};

#[test]
fn test_units_labels() {
    assert_eq!(format_units("0"), "Imperial");
    assert_eq!(format_units("1"), "Metric");
    assert_eq!(format_units("imperial"), "Metric");
    assert_eq!(Units::from_raw("0"), Units::Imperial);
}

#[test]
fn test_oruxmaps_labels() {
    assert_eq!(format_oruxmaps_mode("continue"), "Continue record");
    assert_eq!(format_oruxmaps_mode("disable"), "Disabled");
    assert_eq!(format_oruxmaps_mode("new_segment"), "New segment");
    assert_eq!(format_oruxmaps_mode("new_track"), "New track");
    assert_eq!(format_oruxmaps_mode("auto"), "Auto");
    assert_eq!(OruxMapsMode::from_token("Continue"), None);
}

#[test]
fn test_canvas_labels() {
    assert_eq!(format_canvas_mode("canvas_only"), "Canvas only");
    assert_eq!(format_canvas_mode("canvas_and_pbw"), "Canvas and watchface");
    assert_eq!(format_canvas_mode("disable"), "Disabled");
    assert_eq!(CanvasMode::from_token(""), None);
}

#[test]
fn test_bindings_cover_stored_keys() {
    for key in PreferenceKey::all() {
        let bound = BINDINGS.iter().any(|b| b.key == *key);
        assert_eq!(bound, *key != PreferenceKey::InstallWatchface, "key {}", key);
    }

    let lists: Vec<PreferenceKey> = BINDINGS
        .iter()
        .filter(|b| b.kind == TargetKind::List)
        .map(|b| b.key)
        .collect();
    assert_eq!(lists, vec![PreferenceKey::OruxMapsAuto, PreferenceKey::CanvasMode]);
}

#[test]
fn test_key_strings() {
    assert_eq!(PreferenceKey::UnitsOfMeasure.as_str(), "UNITS_OF_MEASURE");
    assert_eq!(PreferenceKey::LiveTrackingMmtLogin.as_str(), "LIVE_TRACKING_MMT_LOGIN");
    assert_eq!(PreferenceKey::from_key("ORUXMAPS_AUTO"), Some(PreferenceKey::OruxMapsAuto));
    assert_eq!(PreferenceKey::from_key("oruxmaps_auto"), None);
}
