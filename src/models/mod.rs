// Domain models

mod measurement;
mod report;

pub use measurement::{Measurement, SensorDataValue, SensorPayload};
pub use report::{AggregateReport, ParsePeriodError, Period, PollutantSummary, Verdict};
