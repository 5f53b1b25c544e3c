// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Citizen-Paths: activity path cache and interpolation for citizen movement
//!
//! This crate fetches citizens' movement activities (with embedded waypoint
//! paths) from the activity API, keeps a freshness-bounded in-memory index,
//! and exposes position-at-progress and color-classification helpers for
//! animation consumers.

pub mod colors;
pub mod config;
pub mod error;
pub mod geo_utils;
pub mod models;
pub mod services;
pub mod time_utils;
