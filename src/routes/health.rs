//! Health report endpoint.
//!
//! Assembles a fresh report per request: status tag, wall-clock timestamp,
//! uptime, and instance metadata. The cluster block is a placeholder for an
//! external orchestration control plane; its counts are always null until
//! that integration exists.

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::instrument;

use crate::instance::InstanceInfo;
use crate::state::AppState;

/// Health report returned by `GET /api/v1/health`. Serializes with camelCase
/// keys; always succeeds.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: &'static str,
    pub timestamp: String,
    pub uptime_seconds: u64,
    pub instance: InstanceInfo,
    pub cluster: ClusterInfo,
}

/// Placeholder counts for cluster-wide instance state. All fields are
/// serialized as explicit nulls.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterInfo {
    pub total_instances: Option<u64>,
    pub running_instances: Option<u64>,
    pub stopped_instances: Option<u64>,
    pub starting_instances: Option<u64>,
}

impl HealthReport {
    /// Build a report for the current instant.
    pub fn assemble(uptime_seconds: u64) -> Self {
        Self {
            status: "ok",
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            uptime_seconds,
            instance: InstanceInfo::collect(),
            cluster: ClusterInfo::default(),
        }
    }
}

/// Health report handler.
#[instrument(name = "health::report", skip(state))]
pub async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport::assemble(state.started_at.elapsed().as_secs()))
}
