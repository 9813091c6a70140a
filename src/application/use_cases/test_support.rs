//! Shared mock repositories and entity factories for use case tests.
//!
//! Each mock stores one pre-programmed result per trait method; `take()`
//! consumes it, and absent results fall back to an empty-store default.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::gateways::{CarRepository, DriverRepository, TeamRepository};
use crate::domain::models::car::{Car, CarId, CreateCarData};
use crate::domain::models::driver::{CreateDriverData, Driver, DriverId};
use crate::domain::models::team::{CreateTeamData, Team, TeamId};
use crate::shared::errors::RepositoryError;

pub fn test_team() -> Team {
    Team::new(CreateTeamData {
        name: "Scuderia Rosso".to_string(),
        website: "https://rosso.example.com".to_string(),
    })
}

pub fn test_driver(team_id: TeamId) -> Driver {
    Driver::new(CreateDriverData {
        first_name: "Ayrton".to_string(),
        last_name: "Ferrari".to_string(),
        email: "ayrton@rosso.example.com".to_string(),
        team_id,
    })
}

pub fn test_car(team_id: TeamId, driver_id: DriverId) -> Car {
    Car::new(CreateCarData {
        number: 27,
        team_id,
        driver_id,
    })
}

type Slot<T> = Mutex<Option<Result<T, RepositoryError>>>;

#[derive(Default)]
pub struct MockTeamRepository {
    pub find_by_id_result: Slot<Option<Team>>,
    pub find_by_ids_result: Slot<Vec<Team>>,
    pub find_all_result: Slot<Vec<Team>>,
    pub create_result: Slot<Team>,
    pub update_result: Slot<Option<Team>>,
    pub delete_result: Slot<bool>,
}

impl MockTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_find_by_id(self, result: Result<Option<Team>, RepositoryError>) -> Self {
        *self.find_by_id_result.lock().unwrap() = Some(result);
        self
    }

    pub fn with_find_by_ids(self, result: Result<Vec<Team>, RepositoryError>) -> Self {
        *self.find_by_ids_result.lock().unwrap() = Some(result);
        self
    }

    pub fn with_find_all(self, result: Result<Vec<Team>, RepositoryError>) -> Self {
        *self.find_all_result.lock().unwrap() = Some(result);
        self
    }

    pub fn with_update(self, result: Result<Option<Team>, RepositoryError>) -> Self {
        *self.update_result.lock().unwrap() = Some(result);
        self
    }

    pub fn with_delete(self, result: Result<bool, RepositoryError>) -> Self {
        *self.delete_result.lock().unwrap() = Some(result);
        self
    }
}

#[async_trait]
impl TeamRepository for MockTeamRepository {
    async fn find_by_id(&self, _id: &TeamId) -> Result<Option<Team>, RepositoryError> {
        self.find_by_id_result.lock().unwrap().take().unwrap_or(Ok(None))
    }

    async fn find_by_ids(&self, _ids: &[TeamId]) -> Result<Vec<Team>, RepositoryError> {
        self.find_by_ids_result.lock().unwrap().take().unwrap_or(Ok(vec![]))
    }

    async fn find_all(&self) -> Result<Vec<Team>, RepositoryError> {
        self.find_all_result.lock().unwrap().take().unwrap_or(Ok(vec![]))
    }

    async fn create(&self, team: &Team) -> Result<Team, RepositoryError> {
        self.create_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(team.clone()))
    }

    async fn update(&self, _team: &Team) -> Result<Option<Team>, RepositoryError> {
        self.update_result.lock().unwrap().take().unwrap_or(Ok(None))
    }

    async fn delete(&self, _id: &TeamId) -> Result<bool, RepositoryError> {
        self.delete_result.lock().unwrap().take().unwrap_or(Ok(false))
    }
}

#[derive(Default)]
pub struct MockDriverRepository {
    pub find_by_id_result: Slot<Option<Driver>>,
    pub find_by_ids_result: Slot<Vec<Driver>>,
    pub find_all_result: Slot<Vec<Driver>>,
    pub find_by_team_ids_result: Slot<Vec<Driver>>,
    pub create_result: Slot<Driver>,
    pub update_result: Slot<Option<Driver>>,
    pub delete_result: Slot<bool>,
}

impl MockDriverRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_find_by_id(self, result: Result<Option<Driver>, RepositoryError>) -> Self {
        *self.find_by_id_result.lock().unwrap() = Some(result);
        self
    }

    pub fn with_find_by_ids(self, result: Result<Vec<Driver>, RepositoryError>) -> Self {
        *self.find_by_ids_result.lock().unwrap() = Some(result);
        self
    }

    pub fn with_find_all(self, result: Result<Vec<Driver>, RepositoryError>) -> Self {
        *self.find_all_result.lock().unwrap() = Some(result);
        self
    }

    pub fn with_find_by_team_ids(self, result: Result<Vec<Driver>, RepositoryError>) -> Self {
        *self.find_by_team_ids_result.lock().unwrap() = Some(result);
        self
    }

    pub fn with_create(self, result: Result<Driver, RepositoryError>) -> Self {
        *self.create_result.lock().unwrap() = Some(result);
        self
    }

    pub fn with_update(self, result: Result<Option<Driver>, RepositoryError>) -> Self {
        *self.update_result.lock().unwrap() = Some(result);
        self
    }

    pub fn with_delete(self, result: Result<bool, RepositoryError>) -> Self {
        *self.delete_result.lock().unwrap() = Some(result);
        self
    }
}

#[async_trait]
impl DriverRepository for MockDriverRepository {
    async fn find_by_id(&self, _id: &DriverId) -> Result<Option<Driver>, RepositoryError> {
        self.find_by_id_result.lock().unwrap().take().unwrap_or(Ok(None))
    }

    async fn find_by_ids(&self, _ids: &[DriverId]) -> Result<Vec<Driver>, RepositoryError> {
        self.find_by_ids_result.lock().unwrap().take().unwrap_or(Ok(vec![]))
    }

    async fn find_all(&self) -> Result<Vec<Driver>, RepositoryError> {
        self.find_all_result.lock().unwrap().take().unwrap_or(Ok(vec![]))
    }

    async fn find_by_team_ids(&self, _team_ids: &[TeamId]) -> Result<Vec<Driver>, RepositoryError> {
        self.find_by_team_ids_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Ok(vec![]))
    }

    async fn create(&self, driver: &Driver) -> Result<Driver, RepositoryError> {
        self.create_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(driver.clone()))
    }

    async fn update(&self, _driver: &Driver) -> Result<Option<Driver>, RepositoryError> {
        self.update_result.lock().unwrap().take().unwrap_or(Ok(None))
    }

    async fn delete(&self, _id: &DriverId) -> Result<bool, RepositoryError> {
        self.delete_result.lock().unwrap().take().unwrap_or(Ok(false))
    }
}

#[derive(Default)]
pub struct MockCarRepository {
    pub find_by_id_result: Slot<Option<Car>>,
    pub find_all_result: Slot<Vec<Car>>,
    pub create_result: Slot<Car>,
    pub update_result: Slot<Option<Car>>,
    pub delete_result: Slot<bool>,
}

impl MockCarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_find_by_id(self, result: Result<Option<Car>, RepositoryError>) -> Self {
        *self.find_by_id_result.lock().unwrap() = Some(result);
        self
    }

    pub fn with_find_all(self, result: Result<Vec<Car>, RepositoryError>) -> Self {
        *self.find_all_result.lock().unwrap() = Some(result);
        self
    }

    pub fn with_create(self, result: Result<Car, RepositoryError>) -> Self {
        *self.create_result.lock().unwrap() = Some(result);
        self
    }

    pub fn with_update(self, result: Result<Option<Car>, RepositoryError>) -> Self {
        *self.update_result.lock().unwrap() = Some(result);
        self
    }

    pub fn with_delete(self, result: Result<bool, RepositoryError>) -> Self {
        *self.delete_result.lock().unwrap() = Some(result);
        self
    }
}

#[async_trait]
impl CarRepository for MockCarRepository {
    async fn find_by_id(&self, _id: &CarId) -> Result<Option<Car>, RepositoryError> {
        self.find_by_id_result.lock().unwrap().take().unwrap_or(Ok(None))
    }

    async fn find_all(&self) -> Result<Vec<Car>, RepositoryError> {
        self.find_all_result.lock().unwrap().take().unwrap_or(Ok(vec![]))
    }

    async fn create(&self, car: &Car) -> Result<Car, RepositoryError> {
        self.create_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(car.clone()))
    }

    async fn update(&self, _car: &Car) -> Result<Option<Car>, RepositoryError> {
        self.update_result.lock().unwrap().take().unwrap_or(Ok(None))
    }

    async fn delete(&self, _id: &CarId) -> Result<bool, RepositoryError> {
        self.delete_result.lock().unwrap().take().unwrap_or(Ok(false))
    }
}
