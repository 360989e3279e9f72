// Sensor value extraction: match `value_type` by name and parse each value as a finite number.

use crate::models::{Measurement, SensorDataValue, SensorPayload};

/// One expected reading and the `value_type` names firmware builds use for it.
struct Field {
    name: &'static str,
    aliases: &'static [&'static str],
}

const PM10: Field = Field {
    name: "PM10",
    aliases: &["SDS_P1", "PMS_P1", "HPM_P1"],
};
const PM25: Field = Field {
    name: "PM25",
    aliases: &["SDS_P2", "PMS_P2", "HPM_P2"],
};
const TEMPERATURE: Field = Field {
    name: "temperature",
    aliases: &[
        "temperature",
        "BME280_temperature",
        "BMP280_temperature",
        "SHT3X_temperature",
    ],
};
const HUMIDITY: Field = Field {
    name: "humidity",
    aliases: &["humidity", "BME280_humidity", "SHT3X_humidity"],
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PayloadError {
    #[error("missing sensor value {0} in sensordatavalues")]
    Missing(&'static str),
    #[error("sensor value {field} is not a finite number: {raw}")]
    InvalidNumber { field: &'static str, raw: String },
}

/// The four readings a measurement row needs, already validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReadings {
    pub pm10: f64,
    pub pm25: f64,
    pub temperature: f64,
    pub humidity: f64,
}

impl SensorReadings {
    pub fn into_measurement(self, timestamp: i64, wind: Option<String>) -> Measurement {
        Measurement {
            timestamp,
            pm10: self.pm10,
            pm25: self.pm25,
            temperature: self.temperature,
            humidity: self.humidity,
            wind,
        }
    }
}

/// Extracts PM10, PM2.5, temperature and humidity in that order; the first
/// missing or non-numeric field aborts extraction.
pub fn extract_readings(payload: &SensorPayload) -> Result<SensorReadings, PayloadError> {
    let values = &payload.sensordatavalues;
    Ok(SensorReadings {
        pm10: read_field(values, &PM10)?,
        pm25: read_field(values, &PM25)?,
        temperature: read_field(values, &TEMPERATURE)?,
        humidity: read_field(values, &HUMIDITY)?,
    })
}

fn read_field(values: &[SensorDataValue], field: &Field) -> Result<f64, PayloadError> {
    let entry = values
        .iter()
        .find(|v| field.aliases.contains(&v.value_type.as_str()))
        .ok_or(PayloadError::Missing(field.name))?;
    parse_value(&entry.value).ok_or_else(|| PayloadError::InvalidNumber {
        field: field.name,
        raw: entry.value.to_string(),
    })
}

fn parse_value(value: &serde_json::Value) -> Option<f64> {
    let parsed = match value {
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
        serde_json::Value::Number(n) => n.as_f64()?,
        _ => return None,
    };
    parsed.is_finite().then_some(parsed)
}
