//! Driver Handlers
//!
//! HTTP handlers for driver CRUD operations. Emails arrive and leave as
//! plaintext; at-rest encryption is a persistence concern.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::driver::DriverId;
use crate::infrastructure::driving_adapters::api_rest::dto::driver::{
    CreateDriverDto, DriverRelationsQuery, DriverResponseDto, UpdateDriverDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for driver endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_driver))
        .route("/", get(list_drivers))
        .route("/{id}", get(get_driver_by_id))
        .route("/{id}", put(update_driver).patch(update_driver))
        .route("/{id}", delete(delete_driver))
}

/// GET /drivers - List all drivers
///
/// # Query parameters
///
/// * `withTeam` - eager-load each driver's team
///
/// # Responses
///
/// * 200 OK - List of drivers (sorted by last name)
#[axum::debug_handler]
async fn list_drivers(
    State(state): State<AppState>,
    Query(query): Query<DriverRelationsQuery>,
) -> Result<Json<Vec<DriverResponseDto>>, ApiError> {
    let drivers = state.list_drivers_use_case.execute(query.into()).await?;

    let response: Vec<DriverResponseDto> =
        drivers.into_iter().map(DriverResponseDto::from).collect();
    Ok(Json(response))
}

/// POST /drivers - Create a new driver
///
/// # Responses
///
/// * 201 Created - Driver created successfully
/// * 422 Unprocessable Entity - Validation error
/// * 500 Internal Server Error - teamId does not reference an existing team
#[axum::debug_handler]
async fn create_driver(
    State(state): State<AppState>,
    Json(dto): Json<CreateDriverDto>,
) -> Result<(StatusCode, Json<DriverResponseDto>), ApiError> {
    dto.validate()?;

    let driver = state.create_driver_use_case.execute(dto.into()).await?;

    Ok((StatusCode::CREATED, Json(DriverResponseDto::from(driver))))
}

/// GET /drivers/:id - Get a driver by ID
///
/// # Query parameters
///
/// * `withTeam` - eager-load the driver's team
///
/// # Responses
///
/// * 200 OK - Driver found
/// * 400 Bad Request - Malformed UUID
/// * 404 Not Found - Driver does not exist
#[axum::debug_handler]
async fn get_driver_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DriverRelationsQuery>,
) -> Result<Json<DriverResponseDto>, ApiError> {
    let uuid = Uuid::parse_str(&id)?;
    let driver_id = DriverId::from_uuid(uuid);

    let driver = state
        .get_driver_by_id_use_case
        .execute(&driver_id, query.into())
        .await?;

    Ok(Json(DriverResponseDto::from(driver)))
}

/// PUT/PATCH /drivers/:id - Update a driver
///
/// Accepts a partial body; `firstName`, `lastName`, `email`, and `teamId`
/// are writable.
///
/// # Responses
///
/// * 200 OK - Driver updated successfully
/// * 400 Bad Request - Malformed UUID
/// * 404 Not Found - Driver does not exist
/// * 422 Unprocessable Entity - Validation error
#[axum::debug_handler]
async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<UpdateDriverDto>,
) -> Result<Json<DriverResponseDto>, ApiError> {
    dto.validate()?;

    let uuid = Uuid::parse_str(&id)?;
    let driver_id = DriverId::from_uuid(uuid);

    let driver = state
        .update_driver_use_case
        .execute(&driver_id, dto.into())
        .await?;

    Ok(Json(DriverResponseDto::from(driver)))
}

/// DELETE /drivers/:id - Delete a driver
///
/// # Responses
///
/// * 204 No Content - Driver deleted successfully
/// * 400 Bad Request - Malformed UUID
/// * 404 Not Found - Driver does not exist
#[axum::debug_handler]
async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let uuid = Uuid::parse_str(&id)?;
    let driver_id = DriverId::from_uuid(uuid);

    state.delete_driver_use_case.execute(&driver_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
