//! Create Car Use Case
//!
//! Neither referenced entity is pre-checked; dangling teamId/driverId
//! values are rejected by the database's foreign keys and surface as
//! repository errors.

use std::sync::Arc;

use crate::domain::gateways::CarRepository;
use crate::domain::models::car::{Car, CreateCarData};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new car
pub struct CreateCarUseCase {
    car_repository: Arc<dyn CarRepository>,
}

impl CreateCarUseCase {
    /// Create a new CreateCarUseCase
    #[must_use]
    pub fn new(car_repository: Arc<dyn CarRepository>) -> Self {
        Self { car_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error,
    /// including foreign-key violations.
    pub async fn execute(&self, data: CreateCarData) -> Result<Car, UseCaseError> {
        tracing::info!(number = data.number, team_id = %data.team_id, "Creating new car");

        let car = Car::new(data);
        let created = self.car_repository.create(&car).await?;

        tracing::info!(car_id = %created.id(), "Car created successfully");
        Ok(created)
    }
}
