//! Get Car By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::{CarRepository, DriverRepository, TeamRepository};
use crate::domain::models::car::{CarId, CarInclude, CarWithRelations};
use crate::shared::errors::UseCaseError;

/// Use case for getting a car by ID, with optional eager-loaded relations
pub struct GetCarByIdUseCase {
    car_repository: Arc<dyn CarRepository>,
    team_repository: Arc<dyn TeamRepository>,
    driver_repository: Arc<dyn DriverRepository>,
}

impl GetCarByIdUseCase {
    /// Create a new GetCarByIdUseCase
    #[must_use]
    pub fn new(
        car_repository: Arc<dyn CarRepository>,
        team_repository: Arc<dyn TeamRepository>,
        driver_repository: Arc<dyn DriverRepository>,
    ) -> Self {
        Self {
            car_repository,
            team_repository,
            driver_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the car doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        id: &CarId,
        include: CarInclude,
    ) -> Result<CarWithRelations, UseCaseError> {
        tracing::debug!(car_id = %id, "Getting car by ID");

        let car = self.car_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(car_id = %id, "Car not found");
            UseCaseError::NotFound {
                resource: "Car".to_string(),
                id: id.to_string(),
            }
        })?;

        let team = if include.team {
            self.team_repository.find_by_id(car.team_id()).await?
        } else {
            None
        };

        let driver = if include.driver {
            self.driver_repository.find_by_id(car.driver_id()).await?
        } else {
            None
        };

        Ok(CarWithRelations { car, team, driver })
    }
}
