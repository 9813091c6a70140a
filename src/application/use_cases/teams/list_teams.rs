//! List Teams Use Case
//!
//! Returns all teams, optionally eager-loading each team's drivers. The
//! has-many relation is resolved with a single batched query, never one
//! query per team.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::gateways::{DriverRepository, TeamRepository};
use crate::domain::models::driver::Driver;
use crate::domain::models::team::{TeamId, TeamInclude, TeamWithRelations};
use crate::shared::errors::UseCaseError;

/// Use case for listing all teams
pub struct ListTeamsUseCase {
    team_repository: Arc<dyn TeamRepository>,
    driver_repository: Arc<dyn DriverRepository>,
}

impl ListTeamsUseCase {
    /// Create a new ListTeamsUseCase
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
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, include: TeamInclude) -> Result<Vec<TeamWithRelations>, UseCaseError> {
        tracing::debug!(with_drivers = include.drivers, "Listing teams");

        let teams = self.team_repository.find_all().await?;

        let mut drivers_by_team: Option<HashMap<TeamId, Vec<Driver>>> = if include.drivers {
            let team_ids: Vec<TeamId> = teams.iter().map(|t| *t.id()).collect();
            let drivers = self.driver_repository.find_by_team_ids(&team_ids).await?;

            let mut grouped: HashMap<TeamId, Vec<Driver>> = HashMap::new();
            for driver in drivers {
                grouped.entry(*driver.team_id()).or_default().push(driver);
            }
            Some(grouped)
        } else {
            None
        };

        Ok(teams
            .into_iter()
            .map(|team| {
                let drivers = drivers_by_team
                    .as_mut()
                    .map(|grouped| grouped.remove(team.id()).unwrap_or_default());
                TeamWithRelations { team, drivers }
            })
            .collect())
    }
}
