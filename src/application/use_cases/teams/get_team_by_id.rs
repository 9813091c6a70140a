//! Get Team By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::{DriverRepository, TeamRepository};
use crate::domain::models::team::{TeamId, TeamInclude, TeamWithRelations};
use crate::shared::errors::UseCaseError;

/// Use case for getting a team by ID, with optional eager-loaded drivers
pub struct GetTeamByIdUseCase {
    team_repository: Arc<dyn TeamRepository>,
    driver_repository: Arc<dyn DriverRepository>,
}

impl GetTeamByIdUseCase {
    /// Create a new GetTeamByIdUseCase
    #[must_use]
    pub fn new(
        team_repository: Arc<dyn TeamRepository>,
        driver_repository: Arc<dyn DriverRepository>,
    ) -> Self {
        Self {
            team_repository,
            driver_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the team doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        id: &TeamId,
        include: TeamInclude,
    ) -> Result<TeamWithRelations, UseCaseError> {
        tracing::debug!(team_id = %id, "Getting team by ID");

        let team = self.team_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(team_id = %id, "Team not found");
            UseCaseError::NotFound {
                resource: "Team".to_string(),
                id: id.to_string(),
            }
        })?;

        let drivers = if include.drivers {
            Some(self.driver_repository.find_by_team_ids(&[*id]).await?)
        } else {
            None
        };

        Ok(TeamWithRelations { team, drivers })
    }
}
