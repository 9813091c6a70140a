//! Driver Repository Gateway

use async_trait::async_trait;

use crate::domain::models::driver::{Driver, DriverId};
use crate::domain::models::team::TeamId;
use crate::shared::errors::RepositoryError;

/// Repository trait for Driver persistence operations
#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// Find a driver by its ID
    async fn find_by_id(&self, id: &DriverId) -> Result<Option<Driver>, RepositoryError>;

    /// Find drivers by a set of IDs (used for eager-loading the car's
    /// driver relation)
    async fn find_by_ids(&self, ids: &[DriverId]) -> Result<Vec<Driver>, RepositoryError>;

    /// Find all drivers, sorted by last name ascending
    async fn find_all(&self) -> Result<Vec<Driver>, RepositoryError>;

    /// Find all drivers belonging to any of the given teams (used for
    /// eager-loading the team's has-many relation)
    async fn find_by_team_ids(&self, team_ids: &[TeamId]) -> Result<Vec<Driver>, RepositoryError>;

    /// Create a new driver
    async fn create(&self, driver: &Driver) -> Result<Driver, RepositoryError>;

    /// Update an existing driver; returns `None` if the id does not exist
    async fn update(&self, driver: &Driver) -> Result<Option<Driver>, RepositoryError>;

    /// Hard delete a driver; returns `false` if the id did not exist
    async fn delete(&self, id: &DriverId) -> Result<bool, RepositoryError>;
}
