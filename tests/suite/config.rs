//! Config loading as the binary does it at startup.

use std::fs;

use sevenfold_engine::ui::UiOptions;
use sevenfold_engine::{App, ConfigError, SevenfoldConfig, ui_options};
use tempfile::tempdir;

#[test]
fn missing_file_means_defaults() {
    let dir = tempdir().expect("tempdir");
    let loaded = SevenfoldConfig::load_from(&dir.path().join("config.toml")).expect("load");
    assert!(loaded.is_none());
}

#[test]
fn config_enables_display_options() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[app]\nascii_only = true\nhigh_contrast = true\n").expect("write");

    let config = SevenfoldConfig::load_from(&path)
        .expect("load")
        .expect("config present");
    let options = ui_options(Some(&config));
    assert!(options.ascii_only);
    assert!(options.high_contrast);
}

#[test]
fn parse_error_becomes_a_one_line_notice() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[app\nascii_only = yes\n").expect("write");

    let err = SevenfoldConfig::load_from(&path).expect_err("invalid toml");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), &path);

    let mut app = App::new(UiOptions::default());
    app.report_config_error(&err);
    let notice = app.notice().expect("notice");
    assert!(notice.starts_with("Couldn't parse"));
    assert!(!notice.contains('\n'));
}
