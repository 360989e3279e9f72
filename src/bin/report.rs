// Batch reporter: one run per invocation (schedule with cron or a systemd timer).
// Exit status is non-zero when the window is stale or empty, or on config/publish errors.

use anyhow::Result;
use clap::Parser;
use fijnstof::models::Period;
use fijnstof::report::{ReportOutcome, ReportSettings};
use fijnstof::{config, logging, measurement_repo, publisher, report};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Parser)]
#[command(name = "fijnstof-report", version, about = "Publish an air-quality verdict for the last hour or day")]
struct Cli {
    /// Reporting period: `hour` or `day`.
    #[arg(default_value = "hour")]
    period: Period,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let app_config = config::AppConfig::load()?;
    let settings = ReportSettings::from_config(&app_config, cli.period);

    let repo = measurement_repo::MeasurementRepo::connect(
        &app_config.database.path,
        app_config.database.max_pool_size,
    )
    .await?;
    let publisher = publisher::from_config(&app_config.publishing)?;
    let mut rng = StdRng::from_entropy();
    let now = chrono::Utc::now().timestamp();

    match report::run(&repo, publisher.as_ref(), &settings, now, &mut rng).await? {
        ReportOutcome::Published { report, .. } => {
            tracing::info!(period = %report.period, verdict = %report.verdict, "done");
        }
        ReportOutcome::Suppressed { report } => {
            tracing::info!(period = %report.period, verdict = %report.verdict, "done, nothing published");
        }
    }
    Ok(())
}
