// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity path cache with freshness-bounded fetching.
//!
//! Keeps an in-memory index of citizens' movement activities, sourced from
//! the activity API. Handles:
//! - Freshness-window throttling (serve cached paths without a network call)
//! - Request coalescing (at most one fetch in flight)
//! - Per-record validation with individual skip-and-log on malformed data
//! - Fail-soft fetches (stale cache returned on transport/parse errors)

use crate::models::{ActivityPath, RawActivity, Waypoint};
use crate::services::api::{ActivityFetcher, ActivityQuery};
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::Mutex;

/// Freshness window before cached paths are considered stale (5 minutes).
const DEFAULT_FRESHNESS_WINDOW_SECS: i64 = 5 * 60;

/// Default record limit per fetch.
const DEFAULT_FETCH_LIMIT: u32 = 100;

/// Cached activity paths indexed by citizen ID.
pub type PathMap = HashMap<String, Vec<ActivityPath>>;

/// Cache tuning knobs.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum age of cached paths before a new fetch is triggered.
    pub freshness_window: Duration,
    /// Record limit passed to the activity API.
    pub fetch_limit: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            freshness_window: Duration::seconds(DEFAULT_FRESHNESS_WINDOW_SECS),
            fetch_limit: DEFAULT_FETCH_LIMIT,
        }
    }
}

/// Current cache contents plus the time they were fetched.
struct CacheState {
    paths: Arc<PathMap>,
    fetched_at: Option<DateTime<Utc>>,
}

/// In-memory index of citizens' activity paths.
///
/// Shared across tasks via `Arc`. The state lock is never held across an
/// await point; the fetch lock serializes network refreshes.
pub struct ActivityPathCache {
    fetcher: Arc<dyn ActivityFetcher>,
    config: CacheConfig,
    state: RwLock<CacheState>,
    /// Serializes fetches so concurrent callers coalesce onto one request.
    fetch_lock: Mutex<()>,
}

impl ActivityPathCache {
    pub fn new(fetcher: Arc<dyn ActivityFetcher>, config: CacheConfig) -> Self {
        Self {
            fetcher,
            config,
            state: RwLock::new(CacheState {
                paths: Arc::new(PathMap::new()),
                fetched_at: None,
            }),
            fetch_lock: Mutex::new(()),
        }
    }

    // ─── Fetching ────────────────────────────────────────────────────────────

    /// Fetch activity paths, serving the cache when it is fresh.
    ///
    /// - Without `force_refresh`, a populated cache younger than the
    ///   freshness window is returned immediately, with no network call.
    /// - Concurrent callers coalesce: whoever holds the fetch lock issues
    ///   the request, and callers that blocked behind it observe its result.
    ///   This includes forced callers that arrive while a fetch is in
    ///   flight; they accept that fetch's result instead of issuing another.
    /// - On fetch failure the previous contents are returned unchanged and
    ///   the freshness clock does not advance, so the next caller retries.
    ///
    /// Never fails: the result is always the best-available map.
    pub async fn fetch_activity_paths(&self, force_refresh: bool, ongoing: bool) -> Arc<PathMap> {
        // Fast path: serve a fresh, populated cache without touching the lock.
        if !force_refresh {
            if let Some(paths) = self.fresh_snapshot() {
                return paths;
            }
        }

        let entered_at = Utc::now();
        let _guard = self.fetch_lock.lock().await;

        // Re-check after acquiring the lock: a fetch that completed while we
        // were waiting satisfies this call.
        {
            let state = self.state.read().expect("cache state lock poisoned");
            if let Some(fetched_at) = state.fetched_at {
                if fetched_at >= entered_at {
                    return Arc::clone(&state.paths);
                }
            }
        }
        if !force_refresh {
            if let Some(paths) = self.fresh_snapshot() {
                return paths;
            }
        }

        let query = ActivityQuery {
            limit: self.config.fetch_limit,
            ongoing,
        };

        match self.fetcher.fetch_activities(query).await {
            Ok(envelope) => {
                let paths = Arc::new(build_path_map(envelope.activities));
                let citizens = paths.len();

                {
                    let mut state = self.state.write().expect("cache state lock poisoned");
                    state.paths = Arc::clone(&paths);
                    state.fetched_at = Some(Utc::now());
                }

                tracing::info!(citizens, "Activity paths refreshed");
                paths
            }
            Err(e) => {
                tracing::warn!(error = %e, "Activity fetch failed, serving cached paths");
                self.snapshot()
            }
        }
    }

    // ─── Read accessors ──────────────────────────────────────────────────────

    /// Cached paths for one citizen, empty if unknown. Pure read, no fetch.
    pub fn paths_for_citizen(&self, citizen_id: &str) -> Vec<ActivityPath> {
        self.snapshot().get(citizen_id).cloned().unwrap_or_default()
    }

    /// All cached paths flattened into one list. Iteration order across
    /// citizens is unspecified. Pure read, no fetch.
    pub fn all_paths(&self) -> Vec<ActivityPath> {
        self.snapshot().values().flatten().cloned().collect()
    }

    /// Read-only snapshot of the citizen → paths map.
    ///
    /// The snapshot is immutable; a later refresh replaces the map rather
    /// than mutating it, so holders see a consistent view.
    pub fn paths_map(&self) -> Arc<PathMap> {
        self.snapshot()
    }

    /// When the cache last completed a successful fetch.
    pub fn last_fetched_at(&self) -> Option<DateTime<Utc>> {
        self.state
            .read()
            .expect("cache state lock poisoned")
            .fetched_at
    }

    /// Whether the cache is populated and inside the freshness window.
    pub fn is_fresh(&self) -> bool {
        self.fresh_snapshot().is_some()
    }

    /// Current map if it is populated and inside the freshness window.
    fn fresh_snapshot(&self) -> Option<Arc<PathMap>> {
        let state = self.state.read().expect("cache state lock poisoned");
        let fetched_at = state.fetched_at?;

        if !state.paths.is_empty() && Utc::now() - fetched_at < self.config.freshness_window {
            Some(Arc::clone(&state.paths))
        } else {
            None
        }
    }

    /// Current map regardless of freshness.
    fn snapshot(&self) -> Arc<PathMap> {
        Arc::clone(&self.state.read().expect("cache state lock poisoned").paths)
    }
}

// ─── Record validation ───────────────────────────────────────────────────────

/// Build the citizen-indexed path map from a batch of raw records.
///
/// Malformed records are skipped individually; they never abort the batch.
fn build_path_map(activities: Vec<RawActivity>) -> PathMap {
    let total = activities.len();
    let mut map = PathMap::new();
    let mut kept = 0usize;

    for (index, record) in activities.into_iter().enumerate() {
        let id = record
            .activity_id
            .unwrap_or_else(|| format!("activity-{index}"));

        // Records without a path are not movement activities
        let Some(raw_path) = record.path else {
            tracing::debug!(activity_id = %id, "Skipping activity without a path");
            continue;
        };

        let path = match parse_waypoints(&raw_path) {
            Ok(p) => p,
            Err(reason) => {
                tracing::warn!(activity_id = %id, reason, "Skipping activity with malformed path");
                continue;
            }
        };

        // Prefer `Citizen`, fall back to `CitizenId`
        let citizen_id = match non_empty(record.citizen).or_else(|| non_empty(record.citizen_id)) {
            Some(c) => c,
            None => {
                tracing::warn!(activity_id = %id, "Skipping activity without a citizen id");
                continue;
            }
        };

        let Some(start_time) = record.start_date.or(record.created_at) else {
            tracing::warn!(activity_id = %id, "Skipping activity without a start timestamp");
            continue;
        };

        let activity = ActivityPath {
            id,
            citizen_id: citizen_id.clone(),
            path,
            activity_type: record
                .activity_type
                .unwrap_or_else(|| "unknown".to_string()),
            start_time,
            end_time: record.end_date,
            notes: normalize_notes(record.notes),
            transport_mode: record.transport_mode,
        };

        map.entry(citizen_id).or_default().push(activity);
        kept += 1;
    }

    tracing::debug!(total, kept, citizens = map.len(), "Built activity path map");
    map
}

/// Parse a raw `Path` value into validated waypoints.
///
/// The field arrives either as a JSON-encoded string or as an already-parsed
/// array. Elements that are not objects with numeric `lat` and `lng` are
/// filtered out; fewer than two surviving waypoints is a rejection.
fn parse_waypoints(raw: &Value) -> std::result::Result<Vec<Waypoint>, &'static str> {
    let parsed;
    let value = match raw {
        Value::String(s) => {
            parsed = serde_json::from_str::<Value>(s).map_err(|_| "path is not valid JSON")?;
            &parsed
        }
        other => other,
    };

    let elements = value.as_array().ok_or("path is not an array")?;
    if elements.len() < 2 {
        return Err("path has fewer than 2 points");
    }

    let waypoints: Vec<Waypoint> = elements.iter().filter_map(waypoint_from_value).collect();
    if waypoints.len() < 2 {
        return Err("path has fewer than 2 valid waypoints");
    }

    Ok(waypoints)
}

/// A valid waypoint is an object with numeric `lat` and `lng`.
fn waypoint_from_value(value: &Value) -> Option<Waypoint> {
    let lat = value.get("lat")?.as_f64()?;
    let lng = value.get("lng")?.as_f64()?;
    Some(Waypoint { lat, lng })
}

/// Trim notes; empty or whitespace-only becomes `None`.
fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes.and_then(|n| {
        let trimmed = n.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
