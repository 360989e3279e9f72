// Shared test helpers
#![allow(dead_code)]

use async_trait::async_trait;
use fijnstof::measurement_repo::MeasurementRepo;
use fijnstof::models::Measurement;
use fijnstof::publisher::Publisher;
use fijnstof::weather::WindSource;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

pub const TEST_CONFIG: &str = r#"
[server]
port = 5000
host = "0.0.0.0"

[database]
path = "data/measurements.db"
max_pool_size = 2
"#;

/// Fresh initialized repo in a temp dir. Keep the TempDir alive for the test's duration.
pub async fn temp_repo() -> (TempDir, MeasurementRepo) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("measurements.db");
    let repo = MeasurementRepo::connect(path.to_str().unwrap(), 2)
        .await
        .unwrap();
    repo.init().await.unwrap();
    (dir, repo)
}

pub fn measurement(timestamp: i64, pm10: f64, pm25: f64, humidity: f64) -> Measurement {
    Measurement {
        timestamp,
        pm10,
        pm25,
        temperature: 20.0,
        humidity,
        wind: None,
    }
}

/// The payload the station firmware sends (NRZ-2018-107).
pub fn example_payload() -> serde_json::Value {
    serde_json::json!({
        "esp8266id": "102026",
        "software_version": "NRZ-2018-107",
        "sensordatavalues": [
            {"value_type": "SDS_P1", "value": "4.40"},
            {"value_type": "SDS_P2", "value": "0.80"},
            {"value_type": "temperature", "value": "23.30"},
            {"value_type": "humidity", "value": "50.20"},
            {"value_type": "samples", "value": "582024"},
            {"value_type": "min_micro", "value": "243"},
            {"value_type": "max_micro", "value": "24684"},
            {"value_type": "signal", "value": "-68"}
        ]
    })
}

/// Collects published messages instead of sending them.
#[derive(Default)]
pub struct RecordingPublisher {
    pub messages: Mutex<Vec<String>>,
}

impl RecordingPublisher {
    pub fn sent(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Publisher for RecordingPublisher {
    async fn publish(&self, message: &str) -> anyhow::Result<()> {
        self.messages.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

/// Wind source returning a fixed direction (or failing), counting calls.
pub struct StaticWind {
    pub direction: Option<String>,
    pub calls: AtomicUsize,
}

impl StaticWind {
    pub fn new(direction: &str) -> Self {
        Self {
            direction: Some(direction.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            direction: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WindSource for StaticWind {
    async fn wind_direction(&self) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.direction
            .clone()
            .ok_or_else(|| anyhow::anyhow!("weather service unreachable"))
    }
}
