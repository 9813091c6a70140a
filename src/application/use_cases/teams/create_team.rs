//! Create Team Use Case

use std::sync::Arc;

use crate::domain::gateways::TeamRepository;
use crate::domain::models::team::{CreateTeamData, Team};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new team
pub struct CreateTeamUseCase {
    team_repository: Arc<dyn TeamRepository>,
}

impl CreateTeamUseCase {
    /// Create a new CreateTeamUseCase
    #[must_use]
    pub fn new(team_repository: Arc<dyn TeamRepository>) -> Self {
        Self { team_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateTeamData) -> Result<Team, UseCaseError> {
        tracing::info!(name = %data.name, "Creating new team");

        let team = Team::new(data);
        let created = self.team_repository.create(&team).await?;

        tracing::info!(team_id = %created.id(), "Team created successfully");
        Ok(created)
    }
}
