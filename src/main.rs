// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Citizen path monitor
//!
//! Periodically refreshes the activity path cache and logs the interpolated
//! position of each ongoing activity. Useful for watching citizen movement
//! without a rendering front-end attached.

use citizen_paths::{
    colors::activity_path_color,
    config::Config,
    geo_utils::position_along_path,
    services::{ActivityApiClient, ActivityPathCache, CacheConfig},
    time_utils::traversal_progress,
};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(api = %config.api_base_url, "Starting citizen path monitor");

    let client = ActivityApiClient::new(
        config.api_base_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?;

    let cache = Arc::new(ActivityPathCache::new(
        Arc::new(client),
        CacheConfig {
            freshness_window: chrono::Duration::seconds(config.cache_ttl_secs),
            fetch_limit: config.fetch_limit,
        },
    ));

    let mut ticker = tokio::time::interval(Duration::from_secs(config.poll_interval_secs));
    loop {
        ticker.tick().await;
        report_ongoing(&cache).await;
    }
}

/// Refresh the cache and log where each ongoing activity currently is.
async fn report_ongoing(cache: &ActivityPathCache) {
    let paths = cache.fetch_activity_paths(false, true).await;
    let now = chrono::Utc::now();

    for (citizen_id, activities) in paths.iter() {
        for activity in activities {
            // Progress is derived from the activity's own timestamps; paths
            // without an end time have no defined traversal position.
            let Some(end_time) = activity.end_time.as_deref() else {
                continue;
            };
            let Some(progress) = traversal_progress(&activity.start_time, end_time, now) else {
                continue;
            };
            let Some(position) = position_along_path(&activity.path, progress) else {
                continue;
            };

            tracing::info!(
                citizen = %citizen_id,
                activity = %activity.id,
                activity_type = %activity.activity_type,
                color = activity_path_color(activity, None),
                progress,
                lat = position.lat,
                lng = position.lng,
                "Ongoing activity position"
            );
        }
    }
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("citizen_paths=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
