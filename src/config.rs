use serde::Deserialize;

use crate::models::Period;
use crate::report::thresholds::Thresholds;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub publishing: PublishingConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub thresholds: Thresholds,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub path: String,
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: u32,
}

fn default_max_pool_size() -> u32 {
    4
}

/// Wind-direction enrichment. Disabled unless `enabled = true` and an API key is set.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// How long a fetched wind direction is reused (seconds).
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org".into()
}

fn default_cache_ttl_secs() -> u64 {
    600
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            base_url: default_weather_base_url(),
            cache_ttl_secs: default_cache_ttl_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Where reporter messages go. Without a webhook URL messages are only logged.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishingConfig {
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for PublishingConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Nominal sensor sampling interval (seconds).
    #[serde(default = "default_measurement_interval_secs")]
    pub measurement_interval_secs: u64,
    /// Window is stale when its oldest row is older than size * interval * stale_factor.
    #[serde(default = "default_stale_factor")]
    pub stale_factor: f64,
    #[serde(default = "default_hour_window")]
    pub hour_window: u32,
    #[serde(default = "default_day_window")]
    pub day_window: u32,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_hashtags")]
    pub hashtags: String,
    /// Appended to day reports that are not "goed".
    #[serde(default = "default_mentions")]
    pub mentions: String,
}

fn default_measurement_interval_secs() -> u64 {
    150
}

fn default_stale_factor() -> f64 {
    1.15
}

fn default_hour_window() -> u32 {
    24
}

fn default_day_window() -> u32 {
    576
}

fn default_location() -> String {
    "Waddinxveen Zuid".into()
}

fn default_hashtags() -> String {
    "#waddinxveen #fijnstof".into()
}

fn default_mentions() -> String {
    "@rivm @gemeenteWveen @zuid_holland!".into()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            measurement_interval_secs: default_measurement_interval_secs(),
            stale_factor: default_stale_factor(),
            hour_window: default_hour_window(),
            day_window: default_day_window(),
            location: default_location(),
            hashtags: default_hashtags(),
            mentions: default_mentions(),
        }
    }
}

impl ReportConfig {
    /// Number of most recent rows that make up one report window.
    pub fn window_size(&self, period: Period) -> u32 {
        match period {
            Period::Hour => self.hour_window,
            Period::Day => self.day_window,
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("reading config {}: {}", path, e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.database.path.is_empty(),
            "database.path must be non-empty"
        );
        anyhow::ensure!(
            self.database.max_pool_size > 0,
            "database.max_pool_size must be > 0, got {}",
            self.database.max_pool_size
        );
        if self.weather.enabled {
            anyhow::ensure!(
                !self.weather.api_key.is_empty(),
                "weather.api_key must be set when weather.enabled = true"
            );
            anyhow::ensure!(
                (-90.0..=90.0).contains(&self.weather.latitude),
                "weather.latitude must be within [-90, 90], got {}",
                self.weather.latitude
            );
            anyhow::ensure!(
                (-180.0..=180.0).contains(&self.weather.longitude),
                "weather.longitude must be within [-180, 180], got {}",
                self.weather.longitude
            );
            anyhow::ensure!(
                self.weather.cache_ttl_secs > 0,
                "weather.cache_ttl_secs must be > 0, got {}",
                self.weather.cache_ttl_secs
            );
            anyhow::ensure!(
                self.weather.timeout_secs > 0,
                "weather.timeout_secs must be > 0, got {}",
                self.weather.timeout_secs
            );
        }
        if let Some(url) = &self.publishing.webhook_url {
            anyhow::ensure!(
                url.starts_with("http://") || url.starts_with("https://"),
                "publishing.webhook_url must be an http(s) URL, got {:?}",
                url
            );
        }
        anyhow::ensure!(
            self.publishing.timeout_secs > 0,
            "publishing.timeout_secs must be > 0, got {}",
            self.publishing.timeout_secs
        );
        anyhow::ensure!(
            self.report.measurement_interval_secs > 0,
            "report.measurement_interval_secs must be > 0, got {}",
            self.report.measurement_interval_secs
        );
        anyhow::ensure!(
            self.report.stale_factor.is_finite() && self.report.stale_factor >= 1.0,
            "report.stale_factor must be >= 1.0, got {}",
            self.report.stale_factor
        );
        anyhow::ensure!(
            self.report.hour_window > 0,
            "report.hour_window must be > 0, got {}",
            self.report.hour_window
        );
        anyhow::ensure!(
            self.report.day_window > 0,
            "report.day_window must be > 0, got {}",
            self.report.day_window
        );
        self.thresholds.validate()?;
        Ok(())
    }
}
