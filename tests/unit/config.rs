use super::*;
use crate::ui::core::color::Rgb;

#[test]
fn missing_file_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = load_settings(&dir.path().join("nope.json")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r##"{ "caret_blink_delay": 0.25, "colors": { "fore": "yellow" }, "slider": { "format": "%d" } }"##,
    )
    .unwrap();

    let settings = load_settings(&path).unwrap().unwrap();
    assert_eq!(settings.caret_blink_delay, 0.25);
    assert_eq!(settings.colors.fore, Rgb::new(255, 255, 0));
    assert_eq!(settings.colors.back, Rgb::new(40, 40, 120));
    assert_eq!(settings.slider.format, "%d");
    assert_eq!(settings.slider.max_text_len, 10);
    assert_eq!(settings.cell_pixels, 8);
}

#[test]
fn malformed_json_is_invalid_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = load_settings(&path).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn bad_color_is_invalid_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "colors": { "back": "mauve-ish" } }"#).unwrap();
    let err = load_settings(&path).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn save_then_load_round_trips_and_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    let mut settings = GuiSettings::default();
    settings.layout.default_padding = 2;
    settings.default_radio_group = 7;
    settings.colors.back_focus = Rgb::new(1, 2, 3);

    save_settings(&path, &settings).unwrap();
    let loaded = load_settings(&path).unwrap().unwrap();
    assert_eq!(loaded, settings);

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"#010203\""));
}
