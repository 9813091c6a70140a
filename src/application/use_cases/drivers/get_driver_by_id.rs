//! Get Driver By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::{DriverRepository, TeamRepository};
use crate::domain::models::driver::{DriverId, DriverInclude, DriverWithRelations};
use crate::shared::errors::UseCaseError;

/// Use case for getting a driver by ID, with optional eager-loaded team
pub struct GetDriverByIdUseCase {
    driver_repository: Arc<dyn DriverRepository>,
    team_repository: Arc<dyn TeamRepository>,
}

impl GetDriverByIdUseCase {
    /// Create a new GetDriverByIdUseCase
    #[must_use]
    pub fn new(
        driver_repository: Arc<dyn DriverRepository>,
        team_repository: Arc<dyn TeamRepository>,
    ) -> Self {
        Self {
            driver_repository,
            team_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the driver doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        id: &DriverId,
        include: DriverInclude,
    ) -> Result<DriverWithRelations, UseCaseError> {
        tracing::debug!(driver_id = %id, "Getting driver by ID");

        let driver = self.driver_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(driver_id = %id, "Driver not found");
            UseCaseError::NotFound {
                resource: "Driver".to_string(),
                id: id.to_string(),
            }
        })?;

        let team = if include.team {
            self.team_repository.find_by_id(driver.team_id()).await?
        } else {
            None
        };

        Ok(DriverWithRelations { driver, team })
    }
}
