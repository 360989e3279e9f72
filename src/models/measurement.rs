// Stored measurement rows and the inbound sensor payload

use serde::{Deserialize, Serialize};

/// One stored observation. `timestamp` is assigned by the service at receipt
/// (seconds since epoch); the device clock is never trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub timestamp: i64,
    pub pm10: f64,
    pub pm25: f64,
    pub temperature: f64,
    pub humidity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind: Option<String>,
}

/// Body posted by the sensor firmware. Device identity is logged, not stored.
#[derive(Debug, Clone, Deserialize)]
pub struct SensorPayload {
    #[serde(default)]
    pub esp8266id: Option<String>,
    #[serde(default)]
    pub software_version: Option<String>,
    pub sensordatavalues: Vec<SensorDataValue>,
}

/// Firmware sends values as strings ("4.40"); some builds send bare numbers.
#[derive(Debug, Clone, Deserialize)]
pub struct SensorDataValue {
    pub value_type: String,
    pub value: serde_json::Value,
}
