//! List Drivers Use Case
//!
//! Returns all drivers, optionally eager-loading each driver's team with a
//! single batched lookup.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::gateways::{DriverRepository, TeamRepository};
use crate::domain::models::driver::{DriverInclude, DriverWithRelations};
use crate::domain::models::team::{Team, TeamId};
use crate::shared::errors::UseCaseError;

/// Use case for listing all drivers
pub struct ListDriversUseCase {
    driver_repository: Arc<dyn DriverRepository>,
    team_repository: Arc<dyn TeamRepository>,
}

impl ListDriversUseCase {
    /// Create a new ListDriversUseCase
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
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(
        &self,
        include: DriverInclude,
    ) -> Result<Vec<DriverWithRelations>, UseCaseError> {
        tracing::debug!(with_team = include.team, "Listing drivers");

        let drivers = self.driver_repository.find_all().await?;

        let teams_by_id: Option<HashMap<TeamId, Team>> = if include.team {
            let mut team_ids: Vec<TeamId> = drivers.iter().map(|d| *d.team_id()).collect();
            team_ids.sort_unstable_by_key(|id| *id.as_uuid());
            team_ids.dedup();

            let teams = self.team_repository.find_by_ids(&team_ids).await?;
            Some(teams.into_iter().map(|t| (*t.id(), t)).collect())
        } else {
            None
        };

        Ok(drivers
            .into_iter()
            .map(|driver| {
                let team = teams_by_id
                    .as_ref()
                    .and_then(|teams| teams.get(driver.team_id()).cloned());
                DriverWithRelations { driver, team }
            })
            .collect())
    }
}
