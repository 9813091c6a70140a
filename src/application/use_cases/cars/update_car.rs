//! Update Car Use Case
//!
//! Applies a partial, allow-listed field set (number, driverId) to an
//! existing car. The owning team is update-immutable. Serves both PUT and
//! PATCH.

use std::sync::Arc;

use crate::domain::gateways::CarRepository;
use crate::domain::models::car::{Car, CarId, UpdateCarData};
use crate::shared::errors::UseCaseError;

/// Use case for updating a car
pub struct UpdateCarUseCase {
    car_repository: Arc<dyn CarRepository>,
}

impl UpdateCarUseCase {
    /// Create a new UpdateCarUseCase
    #[must_use]
    pub fn new(car_repository: Arc<dyn CarRepository>) -> Self {
        Self { car_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the car doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error,
    /// including a foreign-key violation for a nonexistent new driver.
    pub async fn execute(&self, id: &CarId, data: UpdateCarData) -> Result<Car, UseCaseError> {
        tracing::info!(car_id = %id, "Updating car");

        let existing = self.car_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(car_id = %id, "Car not found for update");
            UseCaseError::NotFound {
                resource: "Car".to_string(),
                id: id.to_string(),
            }
        })?;

        let updated = existing.with_updates(data);

        let result = self
            .car_repository
            .update(&updated)
            .await?
            .ok_or_else(|| UseCaseError::NotFound {
                resource: "Car".to_string(),
                id: id.to_string(),
            })?;

        tracing::info!(car_id = %id, "Car updated successfully");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{test_car, MockCarRepository};
    use crate::domain::models::driver::DriverId;
    use crate::domain::models::team::TeamId;

    #[tokio::test]
    async fn should_update_number_and_keep_team() {
        let team_id = TeamId::new();
        let car = test_car(team_id, DriverId::new());
        let updated = car.clone().with_updates(UpdateCarData {
            number: Some(44),
            driver_id: None,
        });
        let repo = Arc::new(
            MockCarRepository::new()
                .with_find_by_id(Ok(Some(car.clone())))
                .with_update(Ok(Some(updated))),
        );

        let use_case = UpdateCarUseCase::new(repo);
        let result = use_case
            .execute(
                car.id(),
                UpdateCarData {
                    number: Some(44),
                    driver_id: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(result.number(), 44);
        assert_eq!(result.team_id(), &team_id);
        assert_eq!(result.driver_id(), car.driver_id());
    }

    #[tokio::test]
    async fn should_return_not_found_when_car_does_not_exist() {
        let repo = Arc::new(MockCarRepository::new().with_find_by_id(Ok(None)));

        let use_case = UpdateCarUseCase::new(repo);
        let result = use_case.execute(&CarId::new(), UpdateCarData::default()).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }
}
