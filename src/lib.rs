// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Wellness-Hub: favorites backend for the wellness content aggregator
//!
//! This crate provides the API for storing per-user favorite workouts,
//! recipes, vegan recipes, and gyms, plus the identity-provider webhook
//! that mirrors users locally.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
}
