// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time handling.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse an RFC3339 timestamp into UTC. `None` when malformed.
pub fn parse_utc_rfc3339(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Fraction of an activity's traversal completed at `now`, clamped to [0, 1].
///
/// Returns `None` when either timestamp is malformed or the interval is not
/// positive.
pub fn traversal_progress(start: &str, end: &str, now: DateTime<Utc>) -> Option<f64> {
    let start = parse_utc_rfc3339(start)?;
    let end = parse_utc_rfc3339(end)?;

    let total = (end - start).num_milliseconds();
    if total <= 0 {
        return None;
    }

    let elapsed = (now - start).num_milliseconds();
    Some((elapsed as f64 / total as f64).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uses_z_suffix() {
        let date = parse_utc_rfc3339("2025-06-01T08:00:00+00:00").unwrap();
        assert_eq!(format_utc_rfc3339(date), "2025-06-01T08:00:00Z");
    }

    #[test]
    fn test_traversal_progress_midway() {
        let now = parse_utc_rfc3339("2025-06-01T08:15:00Z").unwrap();
        let progress =
            traversal_progress("2025-06-01T08:00:00Z", "2025-06-01T08:30:00Z", now).unwrap();
        assert!((progress - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_traversal_progress_clamps_outside_interval() {
        let before = parse_utc_rfc3339("2025-06-01T07:00:00Z").unwrap();
        let after = parse_utc_rfc3339("2025-06-01T09:00:00Z").unwrap();

        let p0 = traversal_progress("2025-06-01T08:00:00Z", "2025-06-01T08:30:00Z", before);
        let p1 = traversal_progress("2025-06-01T08:00:00Z", "2025-06-01T08:30:00Z", after);
        assert_eq!(p0, Some(0.0));
        assert_eq!(p1, Some(1.0));
    }

    #[test]
    fn test_traversal_progress_rejects_bad_input() {
        let now = parse_utc_rfc3339("2025-06-01T08:15:00Z").unwrap();

        // Malformed timestamp
        assert!(traversal_progress("yesterday", "2025-06-01T08:30:00Z", now).is_none());
        // End before start
        assert!(traversal_progress("2025-06-01T08:30:00Z", "2025-06-01T08:00:00Z", now).is_none());
        // Zero-length interval
        assert!(traversal_progress("2025-06-01T08:00:00Z", "2025-06-01T08:00:00Z", now).is_none());
    }
}
