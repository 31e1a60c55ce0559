//! Liveness and readiness probes

use std::time::Instant;

use axum::{extract::State, http::StatusCode};
use serde::Serialize;

use crate::api::types::Json;

use super::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Up,
    Down,
}

impl ProbeStatus {
    fn status_code(self) -> StatusCode {
        match self {
            Self::Up => StatusCode::OK,
            Self::Down => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

#[derive(Serialize)]
pub struct HealthBody {
    pub status: ProbeStatus,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ReadinessBody {
    pub status: ProbeStatus,
    pub version: &'static str,
    pub storage: StorageProbe,
}

/// Outcome of a round trip to the team store
#[derive(Serialize)]
pub struct StorageProbe {
    pub status: ProbeStatus,
    pub teams: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub elapsed_ms: u64,
}

/// GET /health
pub async fn health_check() -> Json<HealthBody> {
    Json(HealthBody {
        status: ProbeStatus::Up,
        version: VERSION,
    })
}

/// GET /live
pub async fn live_check() -> StatusCode {
    StatusCode::OK
}

/// GET /ready, 503 while the store cannot list teams
pub async fn ready_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessBody>) {
    let storage = probe_storage(&state).await;
    let status = storage.status;

    (
        status.status_code(),
        Json(ReadinessBody {
            status,
            version: VERSION,
            storage,
        }),
    )
}

async fn probe_storage(state: &AppState) -> StorageProbe {
    let started = Instant::now();
    let listed = state.team_service.list_teams().await;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match listed {
        Ok(teams) => StorageProbe {
            status: ProbeStatus::Up,
            teams: Some(teams.len()),
            error: None,
            elapsed_ms,
        },
        Err(e) => StorageProbe {
            status: ProbeStatus::Down,
            teams: None,
            error: Some(e.to_string()),
            elapsed_ms,
        },
    }
}
