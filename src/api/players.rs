//! Player endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, MessageResponse, ValidatedJson};
use crate::domain::PlayerDto;

/// POST /players
pub async fn add_player(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<PlayerDto>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    debug!(name = %request.name, team_id = ?request.team_id, "Adding player");

    let message = state.player_service.add_player(request).await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new(message))))
}

/// GET /players/{name}
pub async fn get_player(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PlayerDto>, ApiError> {
    debug!(name = %name, "Getting player");

    let player = state.player_service.get_player(&name).await?;
    Ok(Json(player))
}
