// Row decoding. Column names are the table's uppercase ones.

use crate::models::Measurement;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

pub(super) fn parse_measurement(row: &SqliteRow) -> anyhow::Result<Measurement> {
    Ok(Measurement {
        timestamp: row.try_get("datetime")?,
        pm10: row.try_get("PM10")?,
        pm25: row.try_get("PM25")?,
        temperature: row.try_get("TEMP")?,
        humidity: row.try_get("RH")?,
        wind: row.try_get("WIND")?,
    })
}
