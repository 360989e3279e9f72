// Ingestion pipeline: extract readings, enrich with wind direction, append one row.

mod access;
mod payload;

pub use access::is_private_source;
pub use payload::{PayloadError, SensorReadings, extract_readings};

use crate::measurement_repo::MeasurementRepo;
use crate::models::{Measurement, SensorPayload};
use crate::weather::WindCache;
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error(transparent)]
    Payload(#[from] PayloadError),
    #[error("wind lookup failed: {0:#}")]
    Weather(anyhow::Error),
    #[error("store write failed: {0:#}")]
    Store(anyhow::Error),
}

pub struct Ingestor {
    repo: Arc<MeasurementRepo>,
    wind: Option<Arc<WindCache>>,
}

impl Ingestor {
    /// `wind = None` stores rows without a wind direction.
    pub fn new(repo: Arc<MeasurementRepo>, wind: Option<Arc<WindCache>>) -> Self {
        Self { repo, wind }
    }

    /// Validates `payload` and appends exactly one row stamped `received_at`.
    /// Nothing is written when any step fails.
    #[instrument(
        skip(self, payload),
        fields(
            device = payload.esp8266id.as_deref().unwrap_or("unknown"),
            firmware = payload.software_version.as_deref().unwrap_or("unknown")
        )
    )]
    pub async fn ingest(
        &self,
        payload: &SensorPayload,
        received_at: i64,
    ) -> Result<Measurement, IngestError> {
        let readings = extract_readings(payload)?;

        let wind = match &self.wind {
            Some(cache) => Some(cache.current().await.map_err(IngestError::Weather)?),
            None => None,
        };

        let measurement = readings.into_measurement(received_at, wind);
        self.repo
            .insert(&measurement)
            .await
            .map_err(IngestError::Store)?;

        info!(
            pm10 = measurement.pm10,
            pm25 = measurement.pm25,
            temperature = measurement.temperature,
            humidity = measurement.humidity,
            wind = measurement.wind.as_deref().unwrap_or("-"),
            "measurement stored"
        );
        Ok(measurement)
    }
}
