//! Car Handlers
//!
//! HTTP handlers for car CRUD operations.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::car::CarId;
use crate::infrastructure::driving_adapters::api_rest::dto::car::{
    CarRelationsQuery, CarResponseDto, CreateCarDto, UpdateCarDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for car endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_car))
        .route("/", get(list_cars))
        .route("/{id}", get(get_car_by_id))
        .route("/{id}", put(update_car).patch(update_car))
        .route("/{id}", delete(delete_car))
}

/// GET /cars - List all cars
///
/// # Query parameters
///
/// * `withTeam` - eager-load each car's team
/// * `withDriver` - eager-load each car's driver
///
/// # Responses
///
/// * 200 OK - List of cars (sorted by number)
#[axum::debug_handler]
async fn list_cars(
    State(state): State<AppState>,
    Query(query): Query<CarRelationsQuery>,
) -> Result<Json<Vec<CarResponseDto>>, ApiError> {
    let cars = state.list_cars_use_case.execute(query.into()).await?;

    let response: Vec<CarResponseDto> = cars.into_iter().map(CarResponseDto::from).collect();
    Ok(Json(response))
}

/// POST /cars - Create a new car
///
/// # Responses
///
/// * 201 Created - Car created successfully
/// * 422 Unprocessable Entity - Validation error
/// * 500 Internal Server Error - teamId/driverId does not reference an existing row
#[axum::debug_handler]
async fn create_car(
    State(state): State<AppState>,
    Json(dto): Json<CreateCarDto>,
) -> Result<(StatusCode, Json<CarResponseDto>), ApiError> {
    dto.validate()?;

    let car = state.create_car_use_case.execute(dto.into()).await?;

    Ok((StatusCode::CREATED, Json(CarResponseDto::from(car))))
}

/// GET /cars/:id - Get a car by ID
///
/// # Query parameters
///
/// * `withTeam` - eager-load the car's team
/// * `withDriver` - eager-load the car's driver
///
/// # Responses
///
/// * 200 OK - Car found
/// * 400 Bad Request - Malformed UUID
/// * 404 Not Found - Car does not exist
#[axum::debug_handler]
async fn get_car_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<CarRelationsQuery>,
) -> Result<Json<CarResponseDto>, ApiError> {
    let uuid = Uuid::parse_str(&id)?;
    let car_id = CarId::from_uuid(uuid);

    let car = state
        .get_car_by_id_use_case
        .execute(&car_id, query.into())
        .await?;

    Ok(Json(CarResponseDto::from(car)))
}

/// PUT/PATCH /cars/:id - Update a car
///
/// Accepts a partial body; only `number` and `driverId` are writable.
/// `teamId` is immutable after creation.
///
/// # Responses
///
/// * 200 OK - Car updated successfully
/// * 400 Bad Request - Malformed UUID
/// * 404 Not Found - Car does not exist
/// * 422 Unprocessable Entity - Validation error
#[axum::debug_handler]
async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<UpdateCarDto>,
) -> Result<Json<CarResponseDto>, ApiError> {
    dto.validate()?;

    let uuid = Uuid::parse_str(&id)?;
    let car_id = CarId::from_uuid(uuid);

    let car = state.update_car_use_case.execute(&car_id, dto.into()).await?;

    Ok(Json(CarResponseDto::from(car)))
}

/// DELETE /cars/:id - Delete a car
///
/// # Responses
///
/// * 204 No Content - Car deleted successfully
/// * 400 Bad Request - Malformed UUID
/// * 404 Not Found - Car does not exist
#[axum::debug_handler]
async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let uuid = Uuid::parse_str(&id)?;
    let car_id = CarId::from_uuid(uuid);

    state.delete_car_use_case.execute(&car_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
