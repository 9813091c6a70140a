//! Delete Team Use Case
//!
//! Hard-deletes a team row. Teams still referenced by drivers or cars are
//! protected by the database's foreign keys.

use std::sync::Arc;

use crate::domain::gateways::TeamRepository;
use crate::domain::models::team::TeamId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a team
pub struct DeleteTeamUseCase {
    team_repository: Arc<dyn TeamRepository>,
}

impl DeleteTeamUseCase {
    /// Create a new DeleteTeamUseCase
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
    pub async fn execute(&self, id: &TeamId) -> Result<(), UseCaseError> {
        tracing::info!(team_id = %id, "Deleting team");

        let deleted = self.team_repository.delete(id).await?;

        if !deleted {
            tracing::warn!(team_id = %id, "Team not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "Team".to_string(),
                id: id.to_string(),
            });
        }

        tracing::info!(team_id = %id, "Team deleted successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::MockTeamRepository;

    #[tokio::test]
    async fn should_delete_team_when_found() {
        let repo = Arc::new(MockTeamRepository::new().with_delete(Ok(true)));

        let use_case = DeleteTeamUseCase::new(repo);
        assert!(use_case.execute(&TeamId::new()).await.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_team_does_not_exist() {
        let repo = Arc::new(MockTeamRepository::new().with_delete(Ok(false)));

        let use_case = DeleteTeamUseCase::new(repo);
        let result = use_case.execute(&TeamId::new()).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }
}
