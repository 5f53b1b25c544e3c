// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Geodesic helpers for activity paths.
//!
//! All distances use the haversine great-circle formula so segment lengths
//! and total path length stay additive; interpolation depends on that.

use crate::models::Waypoint;
use geo::{Distance, Haversine, Point};

/// Great-circle distance between two waypoints in meters.
pub fn haversine_distance(a: Waypoint, b: Waypoint) -> f64 {
    let p1 = Point::new(a.lng, a.lat);
    let p2 = Point::new(b.lng, b.lat);
    Haversine::distance(p1, p2)
}

/// Total path length in meters. Paths with fewer than 2 points have length 0.
pub fn total_distance(path: &[Waypoint]) -> f64 {
    path.windows(2)
        .map(|pair| haversine_distance(pair[0], pair[1]))
        .sum()
}

/// Interpolated position at `progress` along `path`.
///
/// `progress` is clamped to `[0, 1]`: 0 is the first waypoint, 1 the last.
/// Zero-length segments (duplicate consecutive points) are skipped, so a
/// path whose points all coincide resolves to its first waypoint. Returns
/// `None` for paths with fewer than 2 points.
pub fn position_along_path(path: &[Waypoint], progress: f64) -> Option<Waypoint> {
    if path.len() < 2 {
        return None;
    }

    let progress = progress.clamp(0.0, 1.0);
    let total = total_distance(path);
    if total <= 0.0 {
        return Some(path[0]);
    }

    let target = progress * total;
    let mut traveled = 0.0;

    for pair in path.windows(2) {
        let segment = haversine_distance(pair[0], pair[1]);
        if segment <= 0.0 {
            continue;
        }

        if traveled + segment >= target {
            let t = (target - traveled) / segment;
            return Some(Waypoint {
                lat: pair[0].lat + (pair[1].lat - pair[0].lat) * t,
                lng: pair[0].lng + (pair[1].lng - pair[0].lng) * t,
            });
        }

        traveled += segment;
    }

    // Floating-point shortfall at progress == 1.0 lands here
    path.last().copied()
}
