//! Create Driver Use Case
//!
//! The referenced team is not pre-checked here; a dangling teamId is
//! rejected by the database's foreign key and surfaces as a repository
//! error.

use std::sync::Arc;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{CreateDriverData, Driver};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new driver
pub struct CreateDriverUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl CreateDriverUseCase {
    /// Create a new CreateDriverUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error,
    /// including foreign-key violations for a nonexistent team.
    pub async fn execute(&self, data: CreateDriverData) -> Result<Driver, UseCaseError> {
        tracing::info!(team_id = %data.team_id, "Creating new driver");

        let driver = Driver::new(data);
        let created = self.driver_repository.create(&driver).await?;

        tracing::info!(driver_id = %created.id(), "Driver created successfully");
        Ok(created)
    }
}
