//! Team Domain Model
//!
//! A racing team owning drivers and cars.

use chrono::{DateTime, Utc};

use super::driver::Driver;
use super::entity_id;

entity_id!(
    /// Newtype wrapper for Team ID providing type safety
    TeamId
);

/// Data required to create a new Team
#[derive(Debug, Clone)]
pub struct CreateTeamData {
    pub name: String,
    pub website: String,
}

/// Data for updating an existing Team (all fields optional)
///
/// The update allow-list for teams is `name` and `website`.
#[derive(Debug, Clone, Default)]
pub struct UpdateTeamData {
    pub name: Option<String>,
    pub website: Option<String>,
}

/// Relations that may be eager-loaded alongside a Team
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamInclude {
    pub drivers: bool,
}

/// A Team together with its eager-loaded relations
///
/// `drivers` is `None` when the relation was not requested, as opposed to
/// `Some(vec![])` for a team that has no drivers.
#[derive(Debug, Clone)]
pub struct TeamWithRelations {
    pub team: Team,
    pub drivers: Option<Vec<Driver>>,
}

/// Team domain entity
#[derive(Debug, Clone)]
pub struct Team {
    id: TeamId,
    name: String,
    website: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Team {
    /// Create a new Team from creation data
    #[must_use]
    pub fn new(data: CreateTeamData) -> Self {
        let now = Utc::now();
        Self {
            id: TeamId::new(),
            name: data.name,
            website: data.website,
            created_at: now,
            updated_at: now,
        }
    }

    /// Restore a Team from persisted data
    #[must_use]
    pub fn restore(
        id: TeamId,
        name: String,
        website: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            website,
            created_at,
            updated_at,
        }
    }

    /// Apply allow-listed updates, returning a new instance
    #[must_use]
    pub fn with_updates(self, data: UpdateTeamData) -> Self {
        Self {
            id: self.id,
            name: data.name.unwrap_or(self.name),
            website: data.website.unwrap_or(self.website),
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &TeamId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn website(&self) -> &str {
        &self.website
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
