//! PostgreSQL Car Repository Implementation
//!
//! Note the update statement: `team_id` is never in the SET list, keeping
//! the owning team immutable at the storage layer as well.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::CarRepository;
use crate::domain::models::car::{Car, CarId};
use crate::domain::models::driver::DriverId;
use crate::domain::models::team::TeamId;
use crate::shared::errors::RepositoryError;

/// Database row representation for the cars table
#[derive(Debug, sqlx::FromRow)]
struct CarRow {
    id: Uuid,
    number: i32,
    team_id: Uuid,
    driver_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CarRow> for Car {
    fn from(row: CarRow) -> Self {
        Car::restore(
            CarId::from_uuid(row.id),
            row.number,
            TeamId::from_uuid(row.team_id),
            DriverId::from_uuid(row.driver_id),
            row.created_at,
            row.updated_at,
        )
    }
}

/// PostgreSQL implementation of CarRepository
pub struct PostgresCarRepository {
    pool: PgPool,
}

impl PostgresCarRepository {
    /// Create a new PostgresCarRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarRepository for PostgresCarRepository {
    async fn find_by_id(&self, id: &CarId) -> Result<Option<Car>, RepositoryError> {
        let row = sqlx::query_as::<_, CarRow>(
            r#"
            SELECT id, number, team_id, driver_id, created_at, updated_at
            FROM cars
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Car::from))
    }

    async fn find_all(&self) -> Result<Vec<Car>, RepositoryError> {
        let rows = sqlx::query_as::<_, CarRow>(
            r#"
            SELECT id, number, team_id, driver_id, created_at, updated_at
            FROM cars
            ORDER BY number ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Car::from).collect())
    }

    async fn create(&self, car: &Car) -> Result<Car, RepositoryError> {
        let row = sqlx::query_as::<_, CarRow>(
            r#"
            INSERT INTO cars (id, number, team_id, driver_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, number, team_id, driver_id, created_at, updated_at
            "#,
        )
        .bind(car.id().as_uuid())
        .bind(car.number())
        .bind(car.team_id().as_uuid())
        .bind(car.driver_id().as_uuid())
        .bind(car.created_at())
        .bind(car.updated_at())
        .fetch_one(&self.pool)
        .await?;

        Ok(Car::from(row))
    }

    async fn update(&self, car: &Car) -> Result<Option<Car>, RepositoryError> {
        let row = sqlx::query_as::<_, CarRow>(
            r#"
            UPDATE cars
            SET number = $2,
                driver_id = $3,
                updated_at = $4
            WHERE id = $1
            RETURNING id, number, team_id, driver_id, created_at, updated_at
            "#,
        )
        .bind(car.id().as_uuid())
        .bind(car.number())
        .bind(car.driver_id().as_uuid())
        .bind(car.updated_at())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Car::from))
    }

    async fn delete(&self, id: &CarId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM cars
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
