//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use spin2d::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("SPIN2D_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("SPIN2D_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_animation() {
    std::env::set_var("SPIN2D_ANIMATION__SPIN_RATE", "4.5");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.animation.spin_rate, 4.5);
    std::env::remove_var("SPIN2D_ANIMATION__SPIN_RATE");
}

#[test]
#[serial]
fn test_default_file_loading() {
    // Remove env var to test file-based config
    std::env::remove_var("SPIN2D_WINDOW__TITLE");

    let config = AppConfig::load().unwrap();

    // config/default.toml pins the stock window
    assert_eq!(config.window.title, "spinning-square");
    assert_eq!(config.window.width, 200);
    assert_eq!(config.window.height, 200);
}
