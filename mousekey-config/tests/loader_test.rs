use std::path::PathBuf;

use embassy_time::Duration;
use mousekey::config::{MouseKeyConfig, MouseKeyMode, ThreeSpeedConfig};
use mousekey_config::{ConfigError, ConfigLoader, MouseKeyModeKind};

/// Write `content` to a file which is removed on drop
struct TempToml(PathBuf);

impl TempToml {
    fn new(name: &str, content: &str) -> Self {
        let path = std::env::temp_dir().join(format!("mousekey-config-{}-{}.toml", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        Self(path)
    }
}

impl Drop for TempToml {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

const KEYBOARD_TOML: &str = r#"
[keyboard]
name = "Mouse keys test"
product_id = 0x4643

[matrix]
rows = 4
cols = 3

[mouse_key]
mode = "three_speed"
debug = true

[mouse_key.three_speed.cursor]
offsets = [8, 1, 4, 32]
"#;

#[test]
fn test_load_keyboard_toml() {
    let file = TempToml::new("keyboard", KEYBOARD_TOML);
    let toml_config = ConfigLoader::load(&file.0).unwrap();
    assert_eq!(toml_config.mode, MouseKeyModeKind::ThreeSpeed);

    let config = toml_config.to_config().unwrap();
    assert!(config.debug);
    let MouseKeyMode::ThreeSpeed(three_speed) = config.mode else {
        panic!("Expected three-speed mode");
    };
    assert_eq!(three_speed.cursor.offsets, [8, 1, 4, 32]);
    assert_eq!(three_speed.wheel, ThreeSpeedConfig::default().wheel);
}

#[test]
fn test_user_file_overrides_profile() {
    let profile = r#"
    [mouse_key]
    task_interval = "5ms"
    [mouse_key.accelerated.cursor]
    delta = 8
    max_speed = 6
    "#;
    let file = TempToml::new("profile", "[mouse_key.accelerated.cursor]\nmax_speed = 12\n");

    let config = ConfigLoader::load_with_profile(profile, &file.0)
        .unwrap()
        .to_config()
        .unwrap();
    assert_eq!(config.task_interval, Duration::from_millis(5));
    let MouseKeyMode::Accelerated(accelerated) = config.mode else {
        panic!("Expected accelerated mode");
    };
    assert_eq!(accelerated.cursor.delta, 8);
    assert_eq!(accelerated.cursor.max_speed, 12);
}

#[test]
fn test_load_config_without_mouse_key_table() {
    let file = TempToml::new("empty", "[keyboard]\nname = \"No mouse keys\"\n");
    assert_eq!(ConfigLoader::load_config(&file.0).unwrap(), MouseKeyConfig::default());
}

#[test]
fn test_missing_file() {
    let path = std::env::temp_dir().join("mousekey-config-does-not-exist.toml");
    let error = ConfigLoader::load(&path).unwrap_err();
    assert!(matches!(error, ConfigError::FileRead { .. }));
}

#[test]
fn test_invalid_toml() {
    let file = TempToml::new("invalid", "[mouse_key\nmode = ");
    let error = ConfigLoader::load(&file.0).unwrap_err();
    assert!(matches!(error, ConfigError::TomlParse { .. }));
    assert!(error.to_string().starts_with("Failed to parse"));
}

#[test]
fn test_from_toml_str() {
    let config = ConfigLoader::from_toml_str("[mouse_key.accelerated.wheel]\ninterval = \"80ms\"\n")
        .unwrap()
        .to_config()
        .unwrap();
    let MouseKeyMode::Accelerated(accelerated) = config.mode else {
        panic!("Expected accelerated mode");
    };
    assert_eq!(accelerated.wheel.interval, Duration::from_millis(80));

    let error = ConfigLoader::from_toml_str("[mouse_key]\ndebug = 1\n").unwrap_err();
    assert!(matches!(error, ConfigError::TomlParse { path, .. } if path == "<string>"));
}
