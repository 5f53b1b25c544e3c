// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod api;
pub mod path_cache;

pub use api::{ActivityApiClient, ActivityFetcher, ActivityQuery};
pub use path_cache::{ActivityPathCache, CacheConfig, PathMap};
