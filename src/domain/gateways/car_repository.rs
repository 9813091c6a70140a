//! Car Repository Gateway

use async_trait::async_trait;

use crate::domain::models::car::{Car, CarId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Car persistence operations
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Find a car by its ID
    async fn find_by_id(&self, id: &CarId) -> Result<Option<Car>, RepositoryError>;

    /// Find all cars, sorted by number ascending
    async fn find_all(&self) -> Result<Vec<Car>, RepositoryError>;

    /// Create a new car
    async fn create(&self, car: &Car) -> Result<Car, RepositoryError>;

    /// Update an existing car; returns `None` if the id does not exist
    async fn update(&self, car: &Car) -> Result<Option<Car>, RepositoryError>;

    /// Hard delete a car; returns `false` if the id did not exist
    async fn delete(&self, id: &CarId) -> Result<bool, RepositoryError>;
}
