//! Settings loading and saving.

use cheatsheet::settings::ZoomSettings;
use cheatsheet::{PaperSize, Settings};

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("settings.json"));
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_invalid_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert_eq!(Settings::load_from(&path), Settings::default());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let settings = Settings {
        zoom: ZoomSettings {
            default: 1.0,
            min: 0.5,
            step: 1.25,
        },
        handle_tolerance: 6.0,
        paper: PaperSize::Letter,
        export_dpi: 150,
    };
    settings.save_to(&path).unwrap();

    assert_eq!(Settings::load_from(&path), settings);
}

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.zoom.default, 1.25);
    assert_eq!(settings.zoom.min, 0.2);
    assert_eq!(settings.zoom.step, 1.1);
    assert_eq!(settings.handle_tolerance, 10.0);
    assert_eq!(settings.paper, PaperSize::A4);
    assert_eq!(settings.export_dpi, 300);
}
