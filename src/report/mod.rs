// Aggregation reporter: read the latest window, guard against stale data,
// compute compensated means and verdicts, then publish a message.

pub mod compensation;
pub mod message;
pub mod thresholds;
pub mod window;

pub use compensation::compensate_for_rh;
pub use message::{MessageStyle, compose};
pub use thresholds::{PollutantThresholds, ThresholdTable, Thresholds};
pub use window::{WindowSpec, build_report};

use crate::config::AppConfig;
use crate::measurement_repo::MeasurementRepo;
use crate::models::{AggregateReport, Period};
use crate::publisher::Publisher;
use rand::Rng;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReportError {
    #[error("no measurements in window")]
    EmptyWindow,
    #[error("stale measurements: oldest row is {age_secs}s old, limit is {limit_secs}s")]
    Stale { age_secs: i64, limit_secs: i64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    Published {
        report: AggregateReport,
        message: String,
    },
    /// Hourly "goed": nothing sent.
    Suppressed { report: AggregateReport },
}

/// Everything a run needs from config, resolved for one period.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub period: Period,
    pub window: WindowSpec,
    pub table: ThresholdTable,
    pub style: MessageStyle,
}

impl ReportSettings {
    pub fn from_config(config: &AppConfig, period: Period) -> Self {
        Self {
            period,
            window: WindowSpec {
                size: config.report.window_size(period),
                interval_secs: config.report.measurement_interval_secs,
                stale_factor: config.report.stale_factor,
            },
            table: *config.thresholds.for_period(period),
            style: MessageStyle::from(&config.report),
        }
    }
}

/// One reporter run. `now` is seconds since epoch.
#[instrument(skip_all, fields(period = %settings.period, window = settings.window.size))]
pub async fn run<R: Rng + ?Sized>(
    repo: &MeasurementRepo,
    publisher: &dyn Publisher,
    settings: &ReportSettings,
    now: i64,
    rng: &mut R,
) -> anyhow::Result<ReportOutcome> {
    let rows = repo.latest(settings.window.size).await?;
    let report = build_report(
        &rows,
        now,
        settings.period,
        &settings.window,
        &settings.table,
    )?;
    info!(
        rows = report.rows,
        oldest_age_secs = report.oldest_age_secs,
        pm10 = report.pm10.mean,
        pm25 = report.pm25.mean,
        verdict = %report.verdict,
        "report computed"
    );

    let Some(message) = compose(&report, &settings.style, rng) else {
        info!("hourly result is good, not publishing");
        return Ok(ReportOutcome::Suppressed { report });
    };

    publisher.publish(&message).await?;
    info!(chars = message.chars().count(), "report published");
    Ok(ReportOutcome::Published { report, message })
}
