// Wind-direction enrichment: a lookup source behind a TTL cache owned by the router state.

mod openweather;

pub use openweather::{OpenWeatherClient, compass_point};

use crate::clock::Clock;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;

/// Returns the current wind direction as a compass point (e.g. "ZW").
#[async_trait]
pub trait WindSource: Send + Sync {
    async fn wind_direction(&self) -> anyhow::Result<String>;
}

struct CachedWind {
    direction: String,
    fetched_at: Instant,
}

/// Reuses the last wind direction for `ttl`. The lock is held across a refresh,
/// so concurrent requests wait for one lookup instead of each issuing their own.
pub struct WindCache {
    source: Arc<dyn WindSource>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    entry: Mutex<Option<CachedWind>>,
}

impl WindCache {
    pub fn new(source: Arc<dyn WindSource>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            source,
            clock,
            ttl,
            entry: Mutex::new(None),
        }
    }

    /// Cached direction while fresh; otherwise one lookup. Lookup errors are
    /// returned as-is and leave the previous entry untouched.
    pub async fn current(&self) -> anyhow::Result<String> {
        let mut entry = self.entry.lock().await;
        let now = self.clock.now();
        if let Some(cached) = entry.as_ref()
            && now.duration_since(cached.fetched_at) < self.ttl
        {
            return Ok(cached.direction.clone());
        }

        let direction = self.source.wind_direction().await?;
        debug!(direction = %direction, "wind direction refreshed");
        *entry = Some(CachedWind {
            direction: direction.clone(),
            fetched_at: now,
        });
        Ok(direction)
    }
}
