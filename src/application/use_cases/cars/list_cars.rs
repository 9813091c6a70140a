//! List Cars Use Case
//!
//! Returns all cars, optionally eager-loading each car's team and/or
//! driver. Each requested relation costs one batched query.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::gateways::{CarRepository, DriverRepository, TeamRepository};
use crate::domain::models::car::{CarInclude, CarWithRelations};
use crate::domain::models::driver::{Driver, DriverId};
use crate::domain::models::team::{Team, TeamId};
use crate::shared::errors::UseCaseError;

/// Use case for listing all cars
pub struct ListCarsUseCase {
    car_repository: Arc<dyn CarRepository>,
    team_repository: Arc<dyn TeamRepository>,
    driver_repository: Arc<dyn DriverRepository>,
}

impl ListCarsUseCase {
    /// Create a new ListCarsUseCase
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
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, include: CarInclude) -> Result<Vec<CarWithRelations>, UseCaseError> {
        tracing::debug!(
            with_team = include.team,
            with_driver = include.driver,
            "Listing cars"
        );

        let cars = self.car_repository.find_all().await?;

        let teams_by_id: Option<HashMap<TeamId, Team>> = if include.team {
            let mut team_ids: Vec<TeamId> = cars.iter().map(|c| *c.team_id()).collect();
            team_ids.sort_unstable_by_key(|id| *id.as_uuid());
            team_ids.dedup();

            let teams = self.team_repository.find_by_ids(&team_ids).await?;
            Some(teams.into_iter().map(|t| (*t.id(), t)).collect())
        } else {
            None
        };

        let drivers_by_id: Option<HashMap<DriverId, Driver>> = if include.driver {
            let mut driver_ids: Vec<DriverId> = cars.iter().map(|c| *c.driver_id()).collect();
            driver_ids.sort_unstable_by_key(|id| *id.as_uuid());
            driver_ids.dedup();

            let drivers = self.driver_repository.find_by_ids(&driver_ids).await?;
            Some(drivers.into_iter().map(|d| (*d.id(), d)).collect())
        } else {
            None
        };

        Ok(cars
            .into_iter()
            .map(|car| {
                let team = teams_by_id
                    .as_ref()
                    .and_then(|teams| teams.get(car.team_id()).cloned());
                let driver = drivers_by_id
                    .as_ref()
                    .and_then(|drivers| drivers.get(car.driver_id()).cloned());
                CarWithRelations { car, team, driver }
            })
            .collect())
    }
}
