// Dump the most recent measurement rows as JSON.
//
// Usage: cargo run --example dump_measurements -- [DB_PATH] [LIMIT]
//   DB_PATH  default: ./measurements.db
//   LIMIT    default: 24

use fijnstof::measurement_repo::MeasurementRepo;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let path = args.get(1).map(String::as_str).unwrap_or("./measurements.db");
    let limit: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(24);

    let repo = MeasurementRepo::connect(path, 1).await?;
    let rows = repo.latest(limit).await?;

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
