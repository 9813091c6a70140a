//! Delete Driver Use Case
//!
//! Hard-deletes a driver row. Drivers still referenced by cars are
//! protected by the database's foreign key.

use std::sync::Arc;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::DriverId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a driver
pub struct DeleteDriverUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl DeleteDriverUseCase {
    /// Create a new DeleteDriverUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the driver doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &DriverId) -> Result<(), UseCaseError> {
        tracing::info!(driver_id = %id, "Deleting driver");

        let deleted = self.driver_repository.delete(id).await?;

        if !deleted {
            tracing::warn!(driver_id = %id, "Driver not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "Driver".to_string(),
                id: id.to_string(),
            });
        }

        tracing::info!(driver_id = %id, "Driver deleted successfully");
        Ok(())
    }
}
