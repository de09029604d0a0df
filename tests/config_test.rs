//! Integration tests for Settings layered loading.
//!
//! These tests use temp files only and never touch the real XDG config.

use std::fs;

use tempfile::TempDir;

use func_ux_demo::config::{ColorMode, PaletteSettings, RawPaletteSettings, Settings};

#[test]
fn given_no_config_file_when_load_then_defaults() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("func-ux-demo.toml");

    let settings = Settings::load_from(Some(&missing)).expect("load settings");

    assert_eq!(settings.palette, PaletteSettings::default());
}

#[test]
fn given_partial_palette_when_load_then_only_given_roles_replaced() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("func-ux-demo.toml");
    fs::write(
        &path,
        r#"
color = "never"

[palette]
error = "bright_red bold"
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load_from(Some(&path)).expect("load settings");

    // Assert
    assert_eq!(settings.color, ColorMode::Never);
    assert_eq!(settings.palette.error, "bright_red bold");
    assert_eq!(settings.palette.warning, "yellow bold", "unspecified role keeps default");
    assert_eq!(settings.palette.header, "yellow bold underline");
}

#[test]
fn given_malformed_toml_when_load_then_config_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("func-ux-demo.toml");
    fs::write(&path, "color = [not toml").unwrap();

    let err = Settings::load_from(Some(&path)).unwrap_err();

    assert!(err.to_string().starts_with("config error: parse"));
}

#[test]
fn given_unknown_color_mode_when_load_then_config_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("func-ux-demo.toml");
    fs::write(&path, "color = \"sometimes\"\n").unwrap();

    assert!(Settings::load_from(Some(&path)).is_err());
}

#[test]
fn given_overlay_when_merge_then_overlay_wins_per_field() {
    let base = PaletteSettings::default();
    let overlay = RawPaletteSettings {
        flag: Some("cyan".into()),
        example: Some("green italic".into()),
        ..RawPaletteSettings::default()
    };

    let merged = base.merge(&overlay);

    assert_eq!(merged.flag, "cyan");
    assert_eq!(merged.example, "green italic");
    assert_eq!(merged.error, base.error);
}
