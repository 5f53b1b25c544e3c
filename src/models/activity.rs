// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity path models: validated cache entries and wire-format records.

use serde::{Deserialize, Serialize};

/// A single geographic waypoint on an activity path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lng: f64,
}

impl Waypoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A validated movement activity held in the path cache.
///
/// Constructed only by the cache's fetch pipeline. Every stored instance has
/// at least two valid waypoints and a non-empty `citizen_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityPath {
    /// Activity ID (generated placeholder when absent from the source)
    pub id: String,
    /// Owning citizen's stable identifier
    pub citizen_id: String,
    /// Ordered waypoints, length >= 2
    pub path: Vec<Waypoint>,
    /// Activity category ("work", "goto_home", ...); "unknown" when absent
    pub activity_type: String,
    /// Start date/time (ISO 8601)
    pub start_time: String,
    /// End date/time (ISO 8601)
    pub end_time: Option<String>,
    /// Free-text notes, trimmed; never empty
    pub notes: Option<String>,
    /// Transport descriptor ("gondola", "foot", ...)
    pub transport_mode: Option<String>,
}

/// Raw activity record as returned by `GET /api/activities`.
///
/// `Path` arrives either as a JSON-encoded string or as an already-parsed
/// waypoint array, so it is carried as a raw value until validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawActivity {
    pub activity_id: Option<String>,
    /// Preferred citizen identifier
    pub citizen: Option<String>,
    /// Fallback identifier when `Citizen` is absent
    pub citizen_id: Option<String>,
    pub path: Option<serde_json::Value>,
    #[serde(rename = "Type")]
    pub activity_type: Option<String>,
    pub start_date: Option<String>,
    /// Fallback when `StartDate` is absent
    pub created_at: Option<String>,
    pub end_date: Option<String>,
    pub notes: Option<String>,
    pub transport_mode: Option<String>,
}

/// Response envelope from the activity API.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivitiesEnvelope {
    pub activities: Vec<RawActivity>,
}
