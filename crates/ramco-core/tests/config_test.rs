//! Tests for the layered configuration system.

use std::sync::Mutex;

use ramco_core::config::defaults;
use ramco_core::config::{ConfigOverrides, RamcoConfig};
use ramco_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all RAMCO_ env vars and point HOME at an empty directory so the
/// developer's own user config cannot leak in.
fn isolate_env(home: &std::path::Path) {
    for key in [
        "RAMCO_API_URL",
        "RAMCO_API_KEY",
        "RAMCO_TIMEOUT_SECS",
        "RAMCO_MAX_PAGES",
    ] {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
    std::env::remove_var("USERPROFILE");
}

#[test]
fn test_defaults_when_nothing_configured() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());
    let project = tempdir();

    let config = RamcoConfig::load(project.path(), None).unwrap();
    assert_eq!(config.api.effective_url(), defaults::DEFAULT_API_URL);
    assert_eq!(config.api.effective_timeout().as_secs(), 30);
    assert!(config.api.effective_gzip());
    assert_eq!(config.paging.effective_max_pages(), 1_000);
    assert!(config.require_key().is_err());
}

#[test]
fn test_layer_resolution_order() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::fs::create_dir_all(home.path().join(".ramco")).unwrap();
    std::fs::write(
        home.path().join(".ramco").join("config.toml"),
        r#"
[api]
key = "user-key"
timeout_secs = 5

[paging]
max_pages = 7
"#,
    )
    .unwrap();

    let project = tempdir();
    std::fs::write(
        project.path().join("ramco.toml"),
        r#"
[api]
key = "project-key"
"#,
    )
    .unwrap();

    std::env::set_var("RAMCO_TIMEOUT_SECS", "12");

    let overrides = ConfigOverrides {
        max_pages: Some(3),
        ..Default::default()
    };
    let config = RamcoConfig::load(project.path(), Some(&overrides)).unwrap();
    std::env::remove_var("RAMCO_TIMEOUT_SECS");

    // project beats user
    assert_eq!(config.require_key().unwrap(), "project-key");
    // env beats both files
    assert_eq!(config.api.timeout_secs, Some(12));
    // overrides beat everything
    assert_eq!(config.paging.max_pages, Some(3));
}

#[test]
fn test_env_key_and_url() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());
    let project = tempdir();

    std::env::set_var("RAMCO_API_KEY", "env-key");
    std::env::set_var("RAMCO_API_URL", "http://localhost:9000/api/v2/");
    let config = RamcoConfig::load(project.path(), None).unwrap();
    std::env::remove_var("RAMCO_API_KEY");
    std::env::remove_var("RAMCO_API_URL");

    assert_eq!(config.require_key().unwrap(), "env-key");
    assert_eq!(config.api.effective_url(), "http://localhost:9000/api/v2/");
}

#[test]
fn test_unparseable_env_value_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());
    let project = tempdir();

    std::env::set_var("RAMCO_MAX_PAGES", "lots");
    let result = RamcoConfig::load(project.path(), None);
    std::env::remove_var("RAMCO_MAX_PAGES");

    match result {
        Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "RAMCO_MAX_PAGES"),
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn test_invalid_project_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());
    let project = tempdir();
    std::fs::write(project.path().join("ramco.toml"), "[api\nkey = ").unwrap();

    let err = RamcoConfig::load(project.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("ramco.toml"));
}

#[test]
fn test_validation_rejects_zero_and_bad_scheme() {
    let err = RamcoConfig::from_toml("[paging]\nmax_pages = 0\n").unwrap_err();
    assert!(err.to_string().contains("paging.max_pages"));

    let err = RamcoConfig::from_toml("[api]\ntimeout_secs = 0\n").unwrap_err();
    assert!(err.to_string().contains("api.timeout_secs"));

    let err = RamcoConfig::from_toml("[api]\nurl = \"ftp://example.com\"\n").unwrap_err();
    assert!(err.to_string().contains("api.url"));
}

#[test]
fn test_blank_key_is_missing() {
    let config = RamcoConfig::with_key("   ");
    let err = config.require_key().unwrap_err();
    assert!(err.to_string().contains("api.key"));
}

#[test]
fn test_toml_round_trip() {
    let config = RamcoConfig::from_toml(
        r#"
[api]
url = "https://staging.example.com/api/v2/"
key = "k"
gzip = false

[paging]
max_pages = 50
"#,
    )
    .unwrap();
    let rendered = config.to_toml().unwrap();
    assert_eq!(RamcoConfig::from_toml(&rendered).unwrap(), config);
}

#[test]
fn test_debug_redacts_key() {
    let config = RamcoConfig::with_key("super-secret");
    let rendered = format!("{config:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("<redacted>"));
}
