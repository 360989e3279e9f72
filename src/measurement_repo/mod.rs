// SQLite measurement store. Append-only: rows are inserted and read, never updated or deleted.
// Table layout matches the sensor station's historical `measurements.db`:
//   measurements(datetime, PM10, PM25, TEMP, RH, WIND)
// with `datetime` in seconds since epoch. Older stores hold fractional (REAL) datetimes;
// reads truncate them to whole seconds.

mod row;

use crate::models::Measurement;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tracing::instrument;

pub struct MeasurementRepo {
    pool: SqlitePool,
}

impl MeasurementRepo {
    /// Connect to SQLite at `path`, create parent dir and DB file if missing, enable WAL + pragmas.
    pub async fn connect(path: &str, max_pool_size: u32) -> anyhow::Result<Self> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5))
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_pool_size)
            .connect_with(opts)
            .await?;
        Ok(Self { pool })
    }

    /// Create the measurements table and its index if they don't exist. No migrations.
    pub async fn init(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS measurements (
                datetime INTEGER NOT NULL,
                PM10 REAL NOT NULL,
                PM25 REAL NOT NULL,
                TEMP REAL NOT NULL,
                RH REAL NOT NULL,
                WIND TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_measurements_datetime ON measurements(datetime)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[instrument(skip(self, m), fields(repo = "measurements", operation = "insert", timestamp = m.timestamp))]
    pub async fn insert(&self, m: &Measurement) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO measurements (datetime, PM10, PM25, TEMP, RH, WIND) VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(m.timestamp)
        .bind(m.pm10)
        .bind(m.pm25)
        .bind(m.temperature)
        .bind(m.humidity)
        .bind(m.wind.as_deref())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// The `limit` most recent rows, newest first.
    #[instrument(skip(self), fields(repo = "measurements", operation = "latest"))]
    pub async fn latest(&self, limit: u32) -> anyhow::Result<Vec<Measurement>> {
        let rows = sqlx::query(
            "SELECT CAST(datetime AS INTEGER) AS datetime, PM10, PM25, TEMP, RH, WIND
             FROM measurements ORDER BY measurements.datetime DESC LIMIT $1",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(rows.len());
        for r in &rows {
            out.push(row::parse_measurement(r)?);
        }
        Ok(out)
    }

    #[instrument(skip(self), fields(repo = "measurements", operation = "count"))]
    pub async fn count(&self) -> anyhow::Result<i64> {
        let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM measurements")
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }
}
