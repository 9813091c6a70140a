//! Driver Domain Model
//!
//! A driver belonging to a team. The email address is plaintext inside the
//! domain; the persistence adapter encrypts it before it reaches storage.

use chrono::{DateTime, Utc};

use super::entity_id;
use super::team::{Team, TeamId};

entity_id!(
    /// Newtype wrapper for Driver ID providing type safety
    DriverId
);

/// Data required to create a new Driver
#[derive(Debug, Clone)]
pub struct CreateDriverData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub team_id: TeamId,
}

/// Data for updating an existing Driver (all fields optional)
///
/// The update allow-list for drivers is `firstName`, `lastName`, `email`,
/// and `teamId`.
#[derive(Debug, Clone, Default)]
pub struct UpdateDriverData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub team_id: Option<TeamId>,
}

/// Relations that may be eager-loaded alongside a Driver
#[derive(Debug, Clone, Copy, Default)]
pub struct DriverInclude {
    pub team: bool,
}

/// A Driver together with its eager-loaded relations
#[derive(Debug, Clone)]
pub struct DriverWithRelations {
    pub driver: Driver,
    pub team: Option<Team>,
}

/// Driver domain entity
#[derive(Debug, Clone)]
pub struct Driver {
    id: DriverId,
    first_name: String,
    last_name: String,
    email: String,
    team_id: TeamId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Driver {
    /// Create a new Driver from creation data
    #[must_use]
    pub fn new(data: CreateDriverData) -> Self {
        let now = Utc::now();
        Self {
            id: DriverId::new(),
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            team_id: data.team_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Restore a Driver from persisted data
    #[must_use]
    pub fn restore(
        id: DriverId,
        first_name: String,
        last_name: String,
        email: String,
        team_id: TeamId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            team_id,
            created_at,
            updated_at,
        }
    }

    /// Apply allow-listed updates, returning a new instance
    #[must_use]
    pub fn with_updates(self, data: UpdateDriverData) -> Self {
        Self {
            id: self.id,
            first_name: data.first_name.unwrap_or(self.first_name),
            last_name: data.last_name.unwrap_or(self.last_name),
            email: data.email.unwrap_or(self.email),
            team_id: data.team_id.unwrap_or(self.team_id),
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &DriverId {
        &self.id
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn team_id(&self) -> &TeamId {
        &self.team_id
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

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_driver_data() -> CreateDriverData {
        CreateDriverData {
            first_name: "Ayrton".to_string(),
            last_name: "Ferrari".to_string(),
            email: "ayrton@rosso.example.com".to_string(),
            team_id: TeamId::new(),
        }
    }

    #[test]
    fn test_driver_new() {
        let data = create_test_driver_data();
        let driver = Driver::new(data.clone());

        assert_eq!(driver.first_name(), data.first_name);
        assert_eq!(driver.last_name(), data.last_name);
        assert_eq!(driver.email(), data.email);
        assert_eq!(driver.team_id(), &data.team_id);
    }

    #[test]
    fn test_driver_with_updates_can_move_team() {
        let driver = Driver::new(create_test_driver_data());
        let new_team = TeamId::new();

        let updated = driver.with_updates(UpdateDriverData {
            team_id: Some(new_team),
            ..Default::default()
        });

        assert_eq!(updated.team_id(), &new_team);
        assert_eq!(updated.first_name(), "Ayrton");
    }
}
