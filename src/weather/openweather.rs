// OpenWeatherMap current-weather lookup (GET /data/2.5/weather).

use super::WindSource;
use crate::config::WeatherConfig;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Dutch 16-point compass, clockwise from north.
const COMPASS_POINTS: [&str; 16] = [
    "N", "NNO", "NO", "ONO", "O", "OZO", "ZO", "ZZO", "Z", "ZZW", "ZW", "WZW", "W", "WNW", "NW",
    "NNW",
];

/// Maps a meteorological bearing (degrees, wind coming *from*) to a compass point.
pub fn compass_point(degrees: f64) -> &'static str {
    let normalized = degrees.rem_euclid(360.0);
    let index = ((normalized / 22.5) + 0.5).floor() as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    wind: Wind,
}

#[derive(Debug, Deserialize)]
struct Wind {
    deg: f64,
}

pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    latitude: f64,
    longitude: f64,
}

impl OpenWeatherClient {
    pub fn new(config: &WeatherConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(crate::version::user_agent())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            latitude: config.latitude,
            longitude: config.longitude,
        })
    }
}

#[async_trait]
impl WindSource for OpenWeatherClient {
    async fn wind_direction(&self) -> anyhow::Result<String> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        let weather: CurrentWeather = self
            .http
            .get(&url)
            .query(&[
                ("lat", self.latitude.to_string()),
                ("lon", self.longitude.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(compass_point(weather.wind.deg).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::compass_point;

    #[test]
    fn compass_point_cardinals() {
        assert_eq!(compass_point(0.0), "N");
        assert_eq!(compass_point(90.0), "O");
        assert_eq!(compass_point(180.0), "Z");
        assert_eq!(compass_point(270.0), "W");
    }

    #[test]
    fn compass_point_wraps_and_rounds() {
        assert_eq!(compass_point(360.0), "N");
        assert_eq!(compass_point(-45.0), "NW");
        assert_eq!(compass_point(350.0), "N");
        assert_eq!(compass_point(225.0), "ZW");
        assert_eq!(compass_point(11.0), "N");
        assert_eq!(compass_point(12.0), "NNO");
    }
}
