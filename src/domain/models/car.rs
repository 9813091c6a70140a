//! Car Domain Model
//!
//! A car belonging to a team and assigned to a driver. The owning team is
//! fixed at creation; only the race number and the assigned driver can
//! change afterwards.

use chrono::{DateTime, Utc};

use super::driver::{Driver, DriverId};
use super::entity_id;
use super::team::{Team, TeamId};

entity_id!(
    /// Newtype wrapper for Car ID providing type safety
    CarId
);

/// Data required to create a new Car
#[derive(Debug, Clone)]
pub struct CreateCarData {
    pub number: i32,
    pub team_id: TeamId,
    pub driver_id: DriverId,
}

/// Data for updating an existing Car (all fields optional)
///
/// The update allow-list for cars is `number` and `driverId`; `teamId` is
/// update-immutable and deliberately absent here.
#[derive(Debug, Clone, Default)]
pub struct UpdateCarData {
    pub number: Option<i32>,
    pub driver_id: Option<DriverId>,
}

/// Relations that may be eager-loaded alongside a Car
#[derive(Debug, Clone, Copy, Default)]
pub struct CarInclude {
    pub team: bool,
    pub driver: bool,
}

/// A Car together with its eager-loaded relations
#[derive(Debug, Clone)]
pub struct CarWithRelations {
    pub car: Car,
    pub team: Option<Team>,
    pub driver: Option<Driver>,
}

/// Car domain entity
#[derive(Debug, Clone)]
pub struct Car {
    id: CarId,
    number: i32,
    team_id: TeamId,
    driver_id: DriverId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Car {
    /// Create a new Car from creation data
    #[must_use]
    pub fn new(data: CreateCarData) -> Self {
        let now = Utc::now();
        Self {
            id: CarId::new(),
            number: data.number,
            team_id: data.team_id,
            driver_id: data.driver_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Restore a Car from persisted data
    #[must_use]
    pub fn restore(
        id: CarId,
        number: i32,
        team_id: TeamId,
        driver_id: DriverId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            number,
            team_id,
            driver_id,
            created_at,
            updated_at,
        }
    }

    /// Apply allow-listed updates, returning a new instance
    #[must_use]
    pub fn with_updates(self, data: UpdateCarData) -> Self {
        Self {
            id: self.id,
            number: data.number.unwrap_or(self.number),
            team_id: self.team_id,
            driver_id: data.driver_id.unwrap_or(self.driver_id),
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &CarId {
        &self.id
    }

    #[must_use]
    pub fn number(&self) -> i32 {
        self.number
    }

    #[must_use]
    pub fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    #[must_use]
    pub fn driver_id(&self) -> &DriverId {
        &self.driver_id
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

    fn create_test_car_data() -> CreateCarData {
        CreateCarData {
            number: 27,
            team_id: TeamId::new(),
            driver_id: DriverId::new(),
        }
    }

    #[test]
    fn test_car_new() {
        let data = create_test_car_data();
        let car = Car::new(data.clone());

        assert_eq!(car.number(), 27);
        assert_eq!(car.team_id(), &data.team_id);
        assert_eq!(car.driver_id(), &data.driver_id);
    }

    #[test]
    fn test_car_with_updates_keeps_team() {
        let data = create_test_car_data();
        let car = Car::new(data.clone());

        let updated = car.with_updates(UpdateCarData {
            number: Some(44),
            driver_id: None,
        });

        assert_eq!(updated.number(), 44);
        assert_eq!(updated.team_id(), &data.team_id);
        assert_eq!(updated.driver_id(), &data.driver_id);
    }
}
