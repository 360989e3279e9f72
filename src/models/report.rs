// Report period, verdict scale and the derived aggregate report

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reporting period; selects the window size, threshold table and template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Hour,
    Day,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Hour => "hour",
            Period::Day => "day",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown period {0:?}, expected \"hour\" or \"day\"")]
pub struct ParsePeriodError(pub String);

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hour" => Ok(Period::Hour),
            "day" => Ok(Period::Day),
            _ => Err(ParsePeriodError(s.to_string())),
        }
    }
}

/// Ordinal air-quality verdict, best first. Ordering follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Good,
    Moderate,
    Insufficient,
    Poor,
    VeryPoor,
}

impl Verdict {
    pub const ALL: [Verdict; 5] = [
        Verdict::Good,
        Verdict::Moderate,
        Verdict::Insufficient,
        Verdict::Poor,
        Verdict::VeryPoor,
    ];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    /// Dutch label used in published messages (RIVM terminology).
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Good => "goed",
            Verdict::Moderate => "matig",
            Verdict::Insufficient => "onvoldoende",
            Verdict::Poor => "slecht",
            Verdict::VeryPoor => "zeer slecht",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PollutantSummary {
    /// Humidity-compensated mean, rounded to one decimal.
    pub mean: f64,
    pub verdict: Verdict,
}

/// Ephemeral result of one reporter run; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateReport {
    pub period: Period,
    pub rows: usize,
    pub oldest_age_secs: i64,
    pub pm10: PollutantSummary,
    pub pm25: PollutantSummary,
    /// Worse of the two pollutant verdicts.
    pub verdict: Verdict,
}
