// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity API client for fetching citizen movement activities.
//!
//! Handles:
//! - Activity fetching with embedded waypoint paths
//! - Query-parameter shaping (`limit`, `hasPath`, `ongoing`)
//! - HTTP status and JSON-parse error classification

use crate::error::{ApiError, Result};
use crate::models::ActivitiesEnvelope;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::Deserialize;
use std::time::Duration;

/// Query parameters for an activity fetch.
#[derive(Debug, Clone, Copy)]
pub struct ActivityQuery {
    /// Maximum number of records to request.
    pub limit: u32,
    /// Restrict the query to currently-active activities.
    pub ongoing: bool,
}

/// Source of activity record batches for the path cache.
///
/// The cache depends only on this trait, so tests can inject scripted
/// fetchers instead of a live HTTP endpoint.
pub trait ActivityFetcher: Send + Sync {
    /// Fetch one batch of activity records.
    fn fetch_activities<'a>(
        &'a self,
        query: ActivityQuery,
    ) -> BoxFuture<'a, Result<ActivitiesEnvelope>>;
}

/// HTTP client for the activity API.
#[derive(Clone)]
pub struct ActivityApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ActivityApiClient {
    /// Create a new client with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch activities that carry a movement path.
    pub async fn get_activities(&self, query: ActivityQuery) -> Result<ActivitiesEnvelope> {
        let url = format!("{}/api/activities", self.base_url);

        let mut request = self
            .http
            .get(&url)
            .query(&[("limit", query.limit.to_string()), ("hasPath", "true".to_string())]);
        if query.ongoing {
            request = request.query(&[("ongoing", "true")]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http { status, body });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl ActivityFetcher for ActivityApiClient {
    fn fetch_activities<'a>(
        &'a self,
        query: ActivityQuery,
    ) -> BoxFuture<'a, Result<ActivitiesEnvelope>> {
        self.get_activities(query).boxed()
    }
}
