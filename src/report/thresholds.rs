// Threshold tables and verdict classification.
// Defaults: RIVM hourly/daily boundaries (rivm.nl, smog warning limits and air quality index).

use serde::Deserialize;

use crate::models::{Period, Verdict};

/// Four strictly ascending boundaries separating the five verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PollutantThresholds(pub [f64; 4]);

impl PollutantThresholds {
    pub fn validate(&self, name: &str) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.0.iter().all(|t| t.is_finite()),
            "{name} thresholds must be finite, got {:?}",
            self.0
        );
        anyhow::ensure!(
            self.0.windows(2).all(|w| w[0] < w[1]),
            "{name} thresholds must be strictly ascending, got {:?}",
            self.0
        );
        Ok(())
    }

    /// Inclusive lower bound: `t[i-1] <= mean < t[i]` maps to verdict `i`.
    /// Anything at or above the last boundary is the worst verdict.
    pub fn classify(&self, mean: f64) -> Verdict {
        let ordinal = self.0.iter().take_while(|&&t| mean >= t).count();
        Verdict::from_ordinal(ordinal).unwrap_or(Verdict::VeryPoor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ThresholdTable {
    pub pm10: PollutantThresholds,
    pub pm25: PollutantThresholds,
}

impl ThresholdTable {
    pub const RIVM_HOUR: ThresholdTable = ThresholdTable {
        pm10: PollutantThresholds([30.0, 75.0, 125.0, 200.0]),
        pm25: PollutantThresholds([20.0, 50.0, 90.0, 140.0]),
    };

    pub const RIVM_DAY: ThresholdTable = ThresholdTable {
        pm10: PollutantThresholds([15.0, 38.0, 70.0, 100.0]),
        pm25: PollutantThresholds([20.0, 50.0, 90.0, 150.0]),
    };
}

/// Per-period tables; `[thresholds.hour]` / `[thresholds.day]` in config override the RIVM defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_hour_table")]
    pub hour: ThresholdTable,
    #[serde(default = "default_day_table")]
    pub day: ThresholdTable,
}

fn default_hour_table() -> ThresholdTable {
    ThresholdTable::RIVM_HOUR
}

fn default_day_table() -> ThresholdTable {
    ThresholdTable::RIVM_DAY
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            hour: ThresholdTable::RIVM_HOUR,
            day: ThresholdTable::RIVM_DAY,
        }
    }
}

impl Thresholds {
    pub fn for_period(&self, period: Period) -> &ThresholdTable {
        match period {
            Period::Hour => &self.hour,
            Period::Day => &self.day,
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.hour.pm10.validate("thresholds.hour.pm10")?;
        self.hour.pm25.validate("thresholds.hour.pm25")?;
        self.day.pm10.validate("thresholds.day.pm10")?;
        self.day.pm25.validate("thresholds.day.pm25")?;
        Ok(())
    }
}
