//! Team Handlers
//!
//! HTTP handlers for team CRUD operations.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::team::TeamId;
use crate::infrastructure::driving_adapters::api_rest::dto::team::{
    CreateTeamDto, TeamRelationsQuery, TeamResponseDto, UpdateTeamDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for team endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_team))
        .route("/", get(list_teams))
        .route("/{id}", get(get_team_by_id))
        .route("/{id}", put(update_team).patch(update_team))
        .route("/{id}", delete(delete_team))
}

/// GET /teams - List all teams
///
/// # Query parameters
///
/// * `withDrivers` - eager-load each team's drivers
///
/// # Responses
///
/// * 200 OK - List of teams (sorted by name)
#[axum::debug_handler]
async fn list_teams(
    State(state): State<AppState>,
    Query(query): Query<TeamRelationsQuery>,
) -> Result<Json<Vec<TeamResponseDto>>, ApiError> {
    let teams = state.list_teams_use_case.execute(query.into()).await?;

    let response: Vec<TeamResponseDto> = teams.into_iter().map(TeamResponseDto::from).collect();
    Ok(Json(response))
}

/// POST /teams - Create a new team
///
/// # Responses
///
/// * 201 Created - Team created successfully
/// * 422 Unprocessable Entity - Validation error
#[axum::debug_handler]
async fn create_team(
    State(state): State<AppState>,
    Json(dto): Json<CreateTeamDto>,
) -> Result<(StatusCode, Json<TeamResponseDto>), ApiError> {
    dto.validate()?;

    let team = state.create_team_use_case.execute(dto.into()).await?;

    Ok((StatusCode::CREATED, Json(TeamResponseDto::from(team))))
}

/// GET /teams/:id - Get a team by ID
///
/// # Query parameters
///
/// * `withDrivers` - eager-load the team's drivers
///
/// # Responses
///
/// * 200 OK - Team found
/// * 400 Bad Request - Malformed UUID
/// * 404 Not Found - Team does not exist
#[axum::debug_handler]
async fn get_team_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<TeamRelationsQuery>,
) -> Result<Json<TeamResponseDto>, ApiError> {
    let uuid = Uuid::parse_str(&id)?;
    let team_id = TeamId::from_uuid(uuid);

    let team = state
        .get_team_by_id_use_case
        .execute(&team_id, query.into())
        .await?;

    Ok(Json(TeamResponseDto::from(team)))
}

/// PUT/PATCH /teams/:id - Update a team
///
/// Accepts a partial body; only `name` and `website` are writable.
///
/// # Responses
///
/// * 200 OK - Team updated successfully
/// * 400 Bad Request - Malformed UUID
/// * 404 Not Found - Team does not exist
/// * 422 Unprocessable Entity - Validation error
#[axum::debug_handler]
async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<UpdateTeamDto>,
) -> Result<Json<TeamResponseDto>, ApiError> {
    dto.validate()?;

    let uuid = Uuid::parse_str(&id)?;
    let team_id = TeamId::from_uuid(uuid);

    let team = state
        .update_team_use_case
        .execute(&team_id, dto.into())
        .await?;

    Ok(Json(TeamResponseDto::from(team)))
}

/// DELETE /teams/:id - Delete a team
///
/// # Responses
///
/// * 204 No Content - Team deleted successfully
/// * 400 Bad Request - Malformed UUID
/// * 404 Not Found - Team does not exist
#[axum::debug_handler]
async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let uuid = Uuid::parse_str(&id)?;
    let team_id = TeamId::from_uuid(uuid);

    state.delete_team_use_case.execute(&team_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
