//! Configuration loading from files and the process environment.

mod support;

use std::io::Write;
use std::path::PathBuf;

use hotel_insights::config::AppConfig;
use hotel_insights::error::InsightsError;
use hotel_insights::store::LoadOptions;
use tempfile::NamedTempFile;

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[dataset]\npath = \"bookings.csv\"\n\n[views]\nmax_preview_rows = 50"
    )
    .unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(config.dataset.path, PathBuf::from("bookings.csv"));
    assert_eq!(config.views.max_preview_rows, 50);
    assert_eq!(config.views.default_preview_rows, 10);
}

#[test]
fn test_missing_file_is_config_error() {
    let err = AppConfig::from_file("/nonexistent/hotel-insights.toml").unwrap_err();
    assert!(matches!(err, InsightsError::Config { .. }));
}

#[test]
fn test_process_env_overrides() {
    let config = support::with_scoped_env(
        &[
            ("HOST", Some("127.0.0.1")),
            ("PORT", Some("9090")),
            ("HOTEL_INSIGHTS_STRICT_MONTHS", Some("true")),
            ("HOTEL_INSIGHTS_DATA", None),
            ("HOTEL_INSIGHTS_PREVIEW_ROWS", None),
        ],
        || {
            let mut config = AppConfig::default();
            config.apply_env_overrides().map(|_| config)
        },
    )
    .unwrap();

    assert_eq!(config.bind_address(), "127.0.0.1:9090");
    assert_eq!(config.load_options(), LoadOptions::strict());
    assert_eq!(config.dataset.path, AppConfig::default().dataset.path);
}

#[test]
fn test_invalid_env_value() {
    let result = support::with_scoped_env(&[("HOTEL_INSIGHTS_PREVIEW_ROWS", Some("many"))], || {
        AppConfig::default().apply_env_overrides()
    });
    assert!(matches!(result, Err(InsightsError::Config { .. })));
}
