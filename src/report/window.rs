// Window checks and means: staleness guard, compensated means, classification.

use super::ReportError;
use super::compensation::compensate_for_rh;
use super::thresholds::ThresholdTable;
use crate::models::{AggregateReport, Measurement, Period, PollutantSummary};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSpec {
    /// Number of most recent rows in the window.
    pub size: u32,
    pub interval_secs: u64,
    pub stale_factor: f64,
}

impl WindowSpec {
    /// `round(size * interval * stale_factor)`, in seconds.
    pub fn stale_limit_secs(&self) -> i64 {
        (self.size as f64 * self.interval_secs as f64 * self.stale_factor).round() as i64
    }
}

/// Age of the oldest row relative to `now`; errors when it exceeds the stale limit.
pub fn check_staleness(
    rows: &[Measurement],
    now: i64,
    spec: &WindowSpec,
) -> Result<i64, ReportError> {
    let oldest = rows
        .iter()
        .map(|m| m.timestamp)
        .min()
        .ok_or(ReportError::EmptyWindow)?;
    let age_secs = now - oldest;
    let limit_secs = spec.stale_limit_secs();
    if age_secs > limit_secs {
        return Err(ReportError::Stale {
            age_secs,
            limit_secs,
        });
    }
    Ok(age_secs)
}

pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Humidity-compensated (PM10, PM2.5) means, each rounded to one decimal.
pub fn compensated_means(rows: &[Measurement]) -> Result<(f64, f64), ReportError> {
    if rows.is_empty() {
        return Err(ReportError::EmptyWindow);
    }
    let (pm10_sum, pm25_sum) = rows.iter().fold((0.0, 0.0), |(pm10, pm25), m| {
        (
            pm10 + compensate_for_rh(m.pm10, m.humidity),
            pm25 + compensate_for_rh(m.pm25, m.humidity),
        )
    });
    let n = rows.len() as f64;
    Ok((round1(pm10_sum / n), round1(pm25_sum / n)))
}

/// Staleness guard, means and verdicts for one window of rows.
pub fn build_report(
    rows: &[Measurement],
    now: i64,
    period: Period,
    spec: &WindowSpec,
    table: &ThresholdTable,
) -> Result<AggregateReport, ReportError> {
    let oldest_age_secs = check_staleness(rows, now, spec)?;
    let (pm10_mean, pm25_mean) = compensated_means(rows)?;

    let pm10 = PollutantSummary {
        mean: pm10_mean,
        verdict: table.pm10.classify(pm10_mean),
    };
    let pm25 = PollutantSummary {
        mean: pm25_mean,
        verdict: table.pm25.classify(pm25_mean),
    };

    Ok(AggregateReport {
        period,
        rows: rows.len(),
        oldest_age_secs,
        pm10,
        pm25,
        verdict: pm10.verdict.max(pm25.verdict),
    })
}
