//! Unit tests for refresh interval formatting.

use pebblebike::settings::values::{format_refresh_interval, RefreshInterval};

#[test]
fn test_non_numeric_falls_back_to_default() {
    for raw in ["abcdse", "", " 20", "20ms", "1.5", "0x10"] {
        assert_eq!(format_refresh_interval(raw), "500 ms", "input {:?}", raw);
    }
}

#[test]
fn test_milliseconds_below_one_second() {
    assert_eq!(format_refresh_interval("20"), "20 ms");
    assert_eq!(format_refresh_interval("0"), "0 ms");
    assert_eq!(format_refresh_interval("999"), "999 ms");
    assert_eq!(format_refresh_interval("-250"), "-250 ms");
}

#[test]
fn test_whole_seconds_from_one_second() {
    assert_eq!(format_refresh_interval("1000"), "1 s");
    assert_eq!(format_refresh_interval("2000"), "2 s");
    assert_eq!(format_refresh_interval("2999"), "2 s");
    assert_eq!(format_refresh_interval("60000"), "60 s");
}

#[test]
fn test_parsed_value() {
    assert_eq!(RefreshInterval::from_raw("1500").millis(), 1500);
    assert_eq!(RefreshInterval::from_raw("nope").millis(), 500);
}
