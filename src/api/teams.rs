//! Team endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, MessageResponse, UpdateResponse, ValidatedJson};
use crate::domain::{DomainError, TeamDto, TeamId, TeamSummaryDto, TeamUpdateDto};

/// POST /teams
pub async fn add_team(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TeamDto>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    debug!(team_name = %request.team_name, "Adding team");

    let message = state.team_service.add_team(request).await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new(message))))
}

/// GET /teams
pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamSummaryDto>>, ApiError> {
    debug!("Listing teams");

    let teams = state.team_service.list_teams().await?;
    Ok(Json(teams))
}

/// GET /teams/{team}, where `team` is the team name
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_name): Path<String>,
) -> Result<Json<TeamDto>, ApiError> {
    debug!(team_name = %team_name, "Getting team");

    let team = state.team_service.get_team(&team_name).await?;
    Ok(Json(team))
}

/// PUT /teams/{team}, where `team` is the team ID
pub async fn update_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    ValidatedJson(request): ValidatedJson<TeamUpdateDto>,
) -> Result<Json<UpdateResponse>, ApiError> {
    debug!(team_id = %team_id, "Updating team");

    let id = parse_team_id(&team_id)?;
    let outcome = state.team_service.update_team(id, request).await?;

    Ok(Json(UpdateResponse {
        message: outcome.message(),
        updated: outcome.is_updated(),
    }))
}

/// DELETE /teams/{team}, where `team` is the team ID
pub async fn delete_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    debug!(team_id = %team_id, "Deleting team");

    let id = parse_team_id(&team_id)?;
    let message = state.team_service.delete_team(id).await?;

    Ok(Json(MessageResponse::new(message)))
}

fn parse_team_id(raw: &str) -> Result<TeamId, ApiError> {
    TeamId::parse(raw).map_err(|e| DomainError::invalid_id(e.to_string()).into())
}
