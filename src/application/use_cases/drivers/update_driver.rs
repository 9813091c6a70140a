//! Update Driver Use Case
//!
//! Applies a partial, allow-listed field set (firstName, lastName, email,
//! teamId) to an existing driver. Serves both PUT and PATCH.

use std::sync::Arc;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{Driver, DriverId, UpdateDriverData};
use crate::shared::errors::UseCaseError;

/// Use case for updating a driver
pub struct UpdateDriverUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl UpdateDriverUseCase {
    /// Create a new UpdateDriverUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the driver doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error,
    /// including a foreign-key violation for a nonexistent new team.
    pub async fn execute(
        &self,
        id: &DriverId,
        data: UpdateDriverData,
    ) -> Result<Driver, UseCaseError> {
        tracing::info!(driver_id = %id, "Updating driver");

        let existing = self.driver_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(driver_id = %id, "Driver not found for update");
            UseCaseError::NotFound {
                resource: "Driver".to_string(),
                id: id.to_string(),
            }
        })?;

        let updated = existing.with_updates(data);

        let result = self
            .driver_repository
            .update(&updated)
            .await?
            .ok_or_else(|| UseCaseError::NotFound {
                resource: "Driver".to_string(),
                id: id.to_string(),
            })?;

        tracing::info!(driver_id = %id, "Driver updated successfully");
        Ok(result)
    }
}
