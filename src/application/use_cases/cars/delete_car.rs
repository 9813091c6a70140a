//! Delete Car Use Case

use std::sync::Arc;

use crate::domain::gateways::CarRepository;
use crate::domain::models::car::CarId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a car
pub struct DeleteCarUseCase {
    car_repository: Arc<dyn CarRepository>,
}

impl DeleteCarUseCase {
    /// Create a new DeleteCarUseCase
    #[must_use]
    pub fn new(car_repository: Arc<dyn CarRepository>) -> Self {
        Self { car_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the car doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &CarId) -> Result<(), UseCaseError> {
        tracing::info!(car_id = %id, "Deleting car");

        let deleted = self.car_repository.delete(id).await?;

        if !deleted {
            tracing::warn!(car_id = %id, "Car not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "Car".to_string(),
                id: id.to_string(),
            });
        }

        tracing::info!(car_id = %id, "Car deleted successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::MockCarRepository;

    #[tokio::test]
    async fn should_delete_car_when_found() {
        let repo = Arc::new(MockCarRepository::new().with_delete(Ok(true)));

        let use_case = DeleteCarUseCase::new(repo);
        assert!(use_case.execute(&CarId::new()).await.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_car_does_not_exist() {
        let repo = Arc::new(MockCarRepository::new().with_delete(Ok(false)));

        let use_case = DeleteCarUseCase::new(repo);
        let result = use_case.execute(&CarId::new()).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }
}
