// Message text for a report. Dutch, since the audience is local.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::ReportConfig;
use crate::models::{AggregateReport, Period, Verdict};

const EXCLAMATIONS: &[&str] = &[
    "Oei!",
    "Slecht nieuws!",
    "Helaas!",
    "Jammer!",
    "O wee!",
    "Hé bah!",
    "Uche uche!",
    "Oh nee!",
    "Verdorie!",
    "Gatsie!",
    "Jakkes!",
];

const CALLS_TO_ACTION: &[&str] = &[
    "Dit kan beter!",
    "Laten we er iets aan doen!",
    "Kies voor gezonde lucht!",
    "Dit maakt ons ziek!",
    "Hier moet iets aan gebeuren!",
    "Dit is te hoog!",
    "Hier zijn we niet blij mee!",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageStyle {
    pub location: String,
    pub hashtags: String,
    pub mentions: String,
}

impl From<&ReportConfig> for MessageStyle {
    fn from(config: &ReportConfig) -> Self {
        Self {
            location: config.location.clone(),
            hashtags: config.hashtags.clone(),
            mentions: config.mentions.clone(),
        }
    }
}

/// True when a report is routine hourly good news, which is not published.
pub fn is_suppressed(report: &AggregateReport) -> bool {
    report.period == Period::Hour && report.verdict == Verdict::Good
}

/// Builds the message, or `None` when the report is suppressed.
pub fn compose<R: Rng + ?Sized>(
    report: &AggregateReport,
    style: &MessageStyle,
    rng: &mut R,
) -> Option<String> {
    if is_suppressed(report) {
        return None;
    }
    let too_high = report.verdict != Verdict::Good;

    let (span, averages) = match report.period {
        Period::Hour => ("Het afgelopen uur", "uurgemiddelden"),
        Period::Day => ("De afgelopen dag", "daggemiddelden"),
    };

    let mut text = String::new();
    if too_high && let Some(exclamation) = EXCLAMATIONS.choose(rng) {
        text.push_str(exclamation);
        text.push(' ');
    }
    text.push_str(&format!(
        "{span} was de luchtkwaliteit mbt fijnstof in {location} '{verdict}'. \
         De {averages} luiden: PM2,5 {pm25:.1} µg/m³, PM10 {pm10:.1} µg/m³.",
        location = style.location,
        verdict = report.verdict.label(),
        pm25 = report.pm25.mean,
        pm10 = report.pm10.mean,
    ));
    if too_high {
        if let Some(call) = CALLS_TO_ACTION.choose(rng) {
            text.push(' ');
            text.push_str(call);
        }
        if report.period == Period::Day && !style.mentions.is_empty() {
            text.push(' ');
            text.push_str(&style.mentions);
        }
    }
    if !style.hashtags.is_empty() {
        text.push(' ');
        text.push_str(&style.hashtags);
    }
    Some(text)
}
