//! Update Team Use Case
//!
//! Applies a partial, allow-listed field set to an existing team. Serves
//! both PUT and PATCH.

use std::sync::Arc;

use crate::domain::gateways::TeamRepository;
use crate::domain::models::team::{Team, TeamId, UpdateTeamData};
use crate::shared::errors::UseCaseError;

/// Use case for updating a team
pub struct UpdateTeamUseCase {
    team_repository: Arc<dyn TeamRepository>,
}

impl UpdateTeamUseCase {
    /// Create a new UpdateTeamUseCase
    #[must_use]
    pub fn new(team_repository: Arc<dyn TeamRepository>) -> Self {
        Self { team_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the team doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &TeamId, data: UpdateTeamData) -> Result<Team, UseCaseError> {
        tracing::info!(team_id = %id, "Updating team");

        let existing = self.team_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(team_id = %id, "Team not found for update");
            UseCaseError::NotFound {
                resource: "Team".to_string(),
                id: id.to_string(),
            }
        })?;

        let updated = existing.with_updates(data);

        let result = self
            .team_repository
            .update(&updated)
            .await?
            .ok_or_else(|| UseCaseError::NotFound {
                resource: "Team".to_string(),
                id: id.to_string(),
            })?;

        tracing::info!(team_id = %id, "Team updated successfully");
        Ok(result)
    }
}
