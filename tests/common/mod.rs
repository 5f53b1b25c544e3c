// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test helpers: a scripted activity fetcher and record builders.

use citizen_paths::error::ApiError;
use citizen_paths::models::ActivitiesEnvelope;
use citizen_paths::services::{ActivityFetcher, ActivityQuery};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Scripted fetcher: pops one response per call, counts calls, and can
/// simulate request latency. Once the script is exhausted, further calls
/// fail with a transport error.
pub struct MockFetcher {
    responses: Mutex<VecDeque<Result<ActivitiesEnvelope, ApiError>>>,
    calls: AtomicUsize,
    latency: Duration,
}

impl MockFetcher {
    pub fn new(responses: Vec<Result<ActivitiesEnvelope, ApiError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
            latency: Duration::ZERO,
        }
    }

    #[allow(dead_code)]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ActivityFetcher for MockFetcher {
    fn fetch_activities<'a>(
        &'a self,
        _query: ActivityQuery,
    ) -> BoxFuture<'a, Result<ActivitiesEnvelope, ApiError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let response = self
            .responses
            .lock()
            .expect("mock response lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("mock script exhausted".to_string())));
        let latency = self.latency;

        async move {
            if latency > Duration::ZERO {
                tokio::time::sleep(latency).await;
            }
            response
        }
        .boxed()
    }
}

/// Build a response envelope from a JSON array of activity records.
#[allow(dead_code)]
pub fn envelope(activities: serde_json::Value) -> ActivitiesEnvelope {
    serde_json::from_value(serde_json::json!({ "activities": activities }))
        .expect("test envelope should deserialize")
}

/// A well-formed activity record for `citizen` with a 2-point path.
#[allow(dead_code)]
pub fn valid_activity(citizen: &str) -> serde_json::Value {
    serde_json::json!({
        "ActivityId": format!("act-{citizen}"),
        "Citizen": citizen,
        "Path": [{"lat": 45.43, "lng": 12.33}, {"lat": 45.44, "lng": 12.34}],
        "Type": "goto_work",
        "StartDate": "2025-06-01T08:00:00Z",
        "EndDate": "2025-06-01T08:30:00Z",
    })
}
