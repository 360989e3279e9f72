// Config loading and validation tests

use fijnstof::config::AppConfig;
use fijnstof::models::Period;
use fijnstof::report::ThresholdTable;

const VALID_CONFIG: &str = r#"
[server]
port = 5000
host = "0.0.0.0"

[database]
path = "data/measurements.db"
max_pool_size = 4

[weather]
enabled = true
api_key = "secret"
latitude = 52.03
longitude = 4.65
cache_ttl_secs = 600

[publishing]
webhook_url = "http://127.0.0.1:9000/hook"

[report]
measurement_interval_secs = 150
stale_factor = 1.15
hour_window = 24
day_window = 576
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.database.path, "data/measurements.db");
    assert!(config.weather.enabled);
    assert_eq!(config.weather.cache_ttl_secs, 600);
    assert_eq!(config.weather.base_url, "https://api.openweathermap.org");
    assert_eq!(
        config.publishing.webhook_url.as_deref(),
        Some("http://127.0.0.1:9000/hook")
    );
    assert_eq!(config.report.window_size(Period::Hour), 24);
    assert_eq!(config.report.window_size(Period::Day), 576);
}

#[test]
fn test_config_defaults_when_sections_omitted() {
    let minimal = r#"
[server]
port = 5000
host = "127.0.0.1"

[database]
path = "measurements.db"
"#;
    let config = AppConfig::load_from_str(minimal).expect("minimal config");
    assert_eq!(config.database.max_pool_size, 4);
    assert!(!config.weather.enabled);
    assert!(config.publishing.webhook_url.is_none());
    assert_eq!(config.report.measurement_interval_secs, 150);
    assert_eq!(config.report.stale_factor, 1.15);
    assert_eq!(config.report.location, "Waddinxveen Zuid");
    assert_eq!(config.thresholds.hour, ThresholdTable::RIVM_HOUR);
    assert_eq!(config.thresholds.day, ThresholdTable::RIVM_DAY);
}

#[test]
fn test_config_threshold_override() {
    let with_override = format!(
        "{VALID_CONFIG}\n[thresholds.day]\npm10 = [10.0, 20.0, 30.0, 40.0]\npm25 = [5.0, 10.0, 15.0, 20.0]\n"
    );
    let config = AppConfig::load_from_str(&with_override).expect("override");
    assert_eq!(config.thresholds.day.pm10.0, [10.0, 20.0, 30.0, 40.0]);
    assert_eq!(config.thresholds.hour, ThresholdTable::RIVM_HOUR);
}

#[test]
fn test_config_validation_rejects_descending_thresholds() {
    let bad = format!(
        "{VALID_CONFIG}\n[thresholds.hour]\npm10 = [30.0, 75.0, 70.0, 200.0]\npm25 = [20.0, 50.0, 90.0, 140.0]\n"
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("thresholds.hour.pm10"));
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 5000", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_db_path() {
    let bad = VALID_CONFIG.replace("path = \"data/measurements.db\"", "path = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("database.path"));
}

#[test]
fn test_config_validation_rejects_max_pool_size_zero() {
    let bad = VALID_CONFIG.replace("max_pool_size = 4", "max_pool_size = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("max_pool_size"));
}

#[test]
fn test_config_validation_requires_api_key_when_weather_enabled() {
    let bad = VALID_CONFIG.replace("api_key = \"secret\"", "api_key = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("weather.api_key"));
}

#[test]
fn test_config_validation_ignores_weather_fields_when_disabled() {
    let ok = VALID_CONFIG
        .replace("enabled = true", "enabled = false")
        .replace("api_key = \"secret\"", "api_key = \"\"");
    assert!(AppConfig::load_from_str(&ok).is_ok());
}

#[test]
fn test_config_validation_rejects_latitude_out_of_range() {
    let bad = VALID_CONFIG.replace("latitude = 52.03", "latitude = 123.0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("weather.latitude"));
}

#[test]
fn test_config_validation_rejects_non_http_webhook() {
    let bad = VALID_CONFIG.replace("http://127.0.0.1:9000/hook", "ftp://example.org");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("publishing.webhook_url"));
}

#[test]
fn test_config_validation_rejects_stale_factor_below_one() {
    let bad = VALID_CONFIG.replace("stale_factor = 1.15", "stale_factor = 0.5");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("stale_factor"));
}

#[test]
fn test_config_validation_rejects_window_zero() {
    let bad = VALID_CONFIG.replace("hour_window = 24", "hour_window = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("report.hour_window"));
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };
    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.database.path, "data/measurements.db");
}
