//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::application::use_cases::cars::{
    CreateCarUseCase, DeleteCarUseCase, GetCarByIdUseCase, ListCarsUseCase, UpdateCarUseCase,
};
use crate::application::use_cases::drivers::{
    CreateDriverUseCase, DeleteDriverUseCase, GetDriverByIdUseCase, ListDriversUseCase,
    UpdateDriverUseCase,
};
use crate::application::use_cases::teams::{
    CreateTeamUseCase, DeleteTeamUseCase, GetTeamByIdUseCase, ListTeamsUseCase, UpdateTeamUseCase,
};
use crate::domain::gateways::{CarRepository, DriverRepository, TeamRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub list_teams_use_case: Arc<ListTeamsUseCase>,
    pub create_team_use_case: Arc<CreateTeamUseCase>,
    pub get_team_by_id_use_case: Arc<GetTeamByIdUseCase>,
    pub update_team_use_case: Arc<UpdateTeamUseCase>,
    pub delete_team_use_case: Arc<DeleteTeamUseCase>,

    pub list_drivers_use_case: Arc<ListDriversUseCase>,
    pub create_driver_use_case: Arc<CreateDriverUseCase>,
    pub get_driver_by_id_use_case: Arc<GetDriverByIdUseCase>,
    pub update_driver_use_case: Arc<UpdateDriverUseCase>,
    pub delete_driver_use_case: Arc<DeleteDriverUseCase>,

    pub list_cars_use_case: Arc<ListCarsUseCase>,
    pub create_car_use_case: Arc<CreateCarUseCase>,
    pub get_car_by_id_use_case: Arc<GetCarByIdUseCase>,
    pub update_car_use_case: Arc<UpdateCarUseCase>,
    pub delete_car_use_case: Arc<DeleteCarUseCase>,
}

impl AppState {
    /// Wire up all use cases from the three repositories
    #[must_use]
    pub fn new(
        team_repository: Arc<dyn TeamRepository>,
        driver_repository: Arc<dyn DriverRepository>,
        car_repository: Arc<dyn CarRepository>,
    ) -> Self {
        Self {
            list_teams_use_case: Arc::new(ListTeamsUseCase::new(
                team_repository.clone(),
                driver_repository.clone(),
            )),
            create_team_use_case: Arc::new(CreateTeamUseCase::new(team_repository.clone())),
            get_team_by_id_use_case: Arc::new(GetTeamByIdUseCase::new(
                team_repository.clone(),
                driver_repository.clone(),
            )),
            update_team_use_case: Arc::new(UpdateTeamUseCase::new(team_repository.clone())),
            delete_team_use_case: Arc::new(DeleteTeamUseCase::new(team_repository.clone())),

            list_drivers_use_case: Arc::new(ListDriversUseCase::new(
                driver_repository.clone(),
                team_repository.clone(),
            )),
            create_driver_use_case: Arc::new(CreateDriverUseCase::new(driver_repository.clone())),
            get_driver_by_id_use_case: Arc::new(GetDriverByIdUseCase::new(
                driver_repository.clone(),
                team_repository.clone(),
            )),
            update_driver_use_case: Arc::new(UpdateDriverUseCase::new(driver_repository.clone())),
            delete_driver_use_case: Arc::new(DeleteDriverUseCase::new(driver_repository.clone())),

            list_cars_use_case: Arc::new(ListCarsUseCase::new(
                car_repository.clone(),
                team_repository.clone(),
                driver_repository.clone(),
            )),
            create_car_use_case: Arc::new(CreateCarUseCase::new(car_repository.clone())),
            get_car_by_id_use_case: Arc::new(GetCarByIdUseCase::new(
                car_repository.clone(),
                team_repository,
                driver_repository,
            )),
            update_car_use_case: Arc::new(UpdateCarUseCase::new(car_repository.clone())),
            delete_car_use_case: Arc::new(DeleteCarUseCase::new(car_repository)),
        }
    }
}

/// Build the application router with tracing and request-id correlation
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/teams", handlers::teams::router())
        .nest("/drivers", handlers::drivers::router())
        .nest("/cars", handlers::cars::router())
        .layer(axum::middleware::from_fn(
            middleware::request_id::request_id_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
