use std::time::Duration;
use vista_config::{ConfigError, NavConfig, load_from_str, parse_interval};

#[test]
fn full_document_round_trips_through_loader() -> Result<(), ConfigError> {
    let document = r#"{
        "api_base_url": "https://dash.example.com",
        "refresh_intervals": ["10s", "1m", "5m", "1h"],
        "min_refresh_interval": "1m",
        "settings_view": "settings",
        "log_level": "warn"
    }"#;
    let config = load_from_str(document)?;
    assert_eq!(config.api_base_url, "https://dash.example.com");
    assert_eq!(config.effective_intervals(None), vec!["1m", "5m", "1h"]);

    let reencoded = serde_json::to_string(&config).map_err(|source| ConfigError::Parse { source })?;
    assert_eq!(load_from_str(&reencoded)?, config);
    Ok(())
}

#[test]
fn dashboard_overrides_respect_configured_minimum() {
    let config = NavConfig {
        min_refresh_interval: "30s".into(),
        ..NavConfig::default()
    };
    let overrides = vec!["5s".to_string(), "30s".to_string(), "2m".to_string()];
    let intervals = config.effective_intervals(Some(&overrides));
    assert_eq!(intervals, vec!["30s", "2m"]);
    for label in &intervals {
        assert!(parse_interval(label).is_ok_and(|period| period >= Duration::from_secs(30)));
    }
}

#[test]
fn invalid_minimum_is_reported() {
    let err = load_from_str(r#"{ "min_refresh_interval": "0s" }"#).expect_err("zero minimum");
    assert!(matches!(
        err,
        ConfigError::InvalidField {
            field: "min_refresh_interval",
            ..
        }
    ));
}
