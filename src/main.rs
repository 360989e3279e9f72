use anyhow::Result;
use fijnstof::*;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let app_config = config::AppConfig::load()?;

    let repo = Arc::new(
        measurement_repo::MeasurementRepo::connect(
            &app_config.database.path,
            app_config.database.max_pool_size,
        )
        .await?,
    );
    repo.init().await?;

    let wind_cache = if app_config.weather.enabled {
        let source = Arc::new(weather::OpenWeatherClient::new(&app_config.weather)?);
        tracing::info!(
            ttl_secs = app_config.weather.cache_ttl_secs,
            "wind direction enrichment enabled"
        );
        Some(Arc::new(weather::WindCache::new(
            source,
            Arc::new(clock::SystemClock),
            Duration::from_secs(app_config.weather.cache_ttl_secs),
        )))
    } else {
        None
    };

    let ingestor = Arc::new(ingest::Ingestor::new(repo, wind_cache));
    let app = routes::app(ingestor);

    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(s) => s,
                Err(_) => {
                    let _ = tokio::signal::ctrl_c().await;
                    tracing::info!("Received shutdown signal");
                    return;
                }
            };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    tracing::info!("Received shutdown signal");
}
