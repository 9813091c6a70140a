//! Team Repository Gateway

use async_trait::async_trait;

use crate::domain::models::team::{Team, TeamId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Team persistence operations
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Find a team by its ID
    async fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, RepositoryError>;

    /// Find teams by a set of IDs (used for eager-loading belongs-to
    /// relations of other entities)
    async fn find_by_ids(&self, ids: &[TeamId]) -> Result<Vec<Team>, RepositoryError>;

    /// Find all teams, sorted by name ascending
    async fn find_all(&self) -> Result<Vec<Team>, RepositoryError>;

    /// Create a new team
    async fn create(&self, team: &Team) -> Result<Team, RepositoryError>;

    /// Update an existing team; returns `None` if the id does not exist
    async fn update(&self, team: &Team) -> Result<Option<Team>, RepositoryError>;

    /// Hard delete a team; returns `false` if the id did not exist
    async fn delete(&self, id: &TeamId) -> Result<bool, RepositoryError>;
}
