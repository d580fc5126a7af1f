//! `GET /health` endpoint handler.
//!
//! Returns a [`HealthResponse`] JSON payload containing the server
//! version, uptime, the configured upstream, and cumulative request
//! statistics.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::server::AppState;

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub upstream: UpstreamHealth,
    pub stats: StatsResponse,
}

#[derive(Serialize, Deserialize)]
pub struct UpstreamHealth {
    pub base: String,
    pub prefix: String,
    pub timeout_ms: u64,
}

#[derive(Serialize, Deserialize)]
pub struct StatsResponse {
    pub requests_relayed: u64,
    pub requests_failed: u64,
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        upstream: UpstreamHealth {
            base: state.config.upstream_base.clone(),
            prefix: state.config.prefix.clone(),
            timeout_ms: state.config.timeout_ms,
        },
        stats: StatsResponse {
            requests_relayed: state.stats.relayed.load(Ordering::Relaxed),
            requests_failed: state.stats.failed.load(Ordering::Relaxed),
        },
    })
}
