// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for the activity API client.

/// Errors from activity API calls.
///
/// These never escape the path cache: `ActivityPathCache` catches them, logs,
/// and serves the previous contents. They surface only to callers that use
/// `ActivityApiClient` directly.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Activity API request failed: {0}")]
    Transport(String),

    #[error("Activity API returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Failed to parse activity API response: {0}")]
    Parse(String),
}

/// Result type alias for API calls
pub type Result<T> = std::result::Result<T, ApiError>;
