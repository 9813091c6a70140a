//! PostgreSQL Driver Repository Implementation
//!
//! Email addresses cross this boundary encrypted: every write seals the
//! plaintext through the `EmailCipher`, every read opens it. The `email`
//! column never holds a plaintext address.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{Driver, DriverId};
use crate::domain::models::team::TeamId;
use crate::infrastructure::driven_adapters::crypto::EmailCipher;
use crate::shared::errors::RepositoryError;

/// Database row representation for the drivers table
#[derive(Debug, sqlx::FromRow)]
struct DriverRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    team_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// PostgreSQL implementation of DriverRepository
pub struct PostgresDriverRepository {
    pool: PgPool,
    cipher: Arc<EmailCipher>,
}

impl PostgresDriverRepository {
    /// Create a new PostgresDriverRepository
    #[must_use]
    pub fn new(pool: PgPool, cipher: Arc<EmailCipher>) -> Self {
        Self { pool, cipher }
    }

    fn row_to_driver(&self, row: DriverRow) -> Result<Driver, RepositoryError> {
        let email = self.cipher.decrypt(&row.email)?;

        Ok(Driver::restore(
            DriverId::from_uuid(row.id),
            row.first_name,
            row.last_name,
            email,
            TeamId::from_uuid(row.team_id),
            row.created_at,
            row.updated_at,
        ))
    }

    fn rows_to_drivers(&self, rows: Vec<DriverRow>) -> Result<Vec<Driver>, RepositoryError> {
        rows.into_iter().map(|row| self.row_to_driver(row)).collect()
    }
}

#[async_trait]
impl DriverRepository for PostgresDriverRepository {
    async fn find_by_id(&self, id: &DriverId) -> Result<Option<Driver>, RepositoryError> {
        let row = sqlx::query_as::<_, DriverRow>(
            r#"
            SELECT id, first_name, last_name, email, team_id, created_at, updated_at
            FROM drivers
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| self.row_to_driver(r)).transpose()
    }

    async fn find_by_ids(&self, ids: &[DriverId]) -> Result<Vec<Driver>, RepositoryError> {
        let uuids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();

        let rows = sqlx::query_as::<_, DriverRow>(
            r#"
            SELECT id, first_name, last_name, email, team_id, created_at, updated_at
            FROM drivers
            WHERE id = ANY($1)
            "#,
        )
        .bind(&uuids)
        .fetch_all(&self.pool)
        .await?;

        self.rows_to_drivers(rows)
    }

    async fn find_all(&self) -> Result<Vec<Driver>, RepositoryError> {
        let rows = sqlx::query_as::<_, DriverRow>(
            r#"
            SELECT id, first_name, last_name, email, team_id, created_at, updated_at
            FROM drivers
            ORDER BY last_name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        self.rows_to_drivers(rows)
    }

    async fn find_by_team_ids(&self, team_ids: &[TeamId]) -> Result<Vec<Driver>, RepositoryError> {
        let uuids: Vec<Uuid> = team_ids.iter().map(|id| *id.as_uuid()).collect();

        let rows = sqlx::query_as::<_, DriverRow>(
            r#"
            SELECT id, first_name, last_name, email, team_id, created_at, updated_at
            FROM drivers
            WHERE team_id = ANY($1)
            ORDER BY last_name ASC
            "#,
        )
        .bind(&uuids)
        .fetch_all(&self.pool)
        .await?;

        self.rows_to_drivers(rows)
    }

    async fn create(&self, driver: &Driver) -> Result<Driver, RepositoryError> {
        let sealed_email = self.cipher.encrypt(driver.email())?;

        let row = sqlx::query_as::<_, DriverRow>(
            r#"
            INSERT INTO drivers (id, first_name, last_name, email, team_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, first_name, last_name, email, team_id, created_at, updated_at
            "#,
        )
        .bind(driver.id().as_uuid())
        .bind(driver.first_name())
        .bind(driver.last_name())
        .bind(&sealed_email)
        .bind(driver.team_id().as_uuid())
        .bind(driver.created_at())
        .bind(driver.updated_at())
        .fetch_one(&self.pool)
        .await?;

        self.row_to_driver(row)
    }

    async fn update(&self, driver: &Driver) -> Result<Option<Driver>, RepositoryError> {
        let sealed_email = self.cipher.encrypt(driver.email())?;

        let row = sqlx::query_as::<_, DriverRow>(
            r#"
            UPDATE drivers
            SET first_name = $2,
                last_name = $3,
                email = $4,
                team_id = $5,
                updated_at = $6
            WHERE id = $1
            RETURNING id, first_name, last_name, email, team_id, created_at, updated_at
            "#,
        )
        .bind(driver.id().as_uuid())
        .bind(driver.first_name())
        .bind(driver.last_name())
        .bind(&sealed_email)
        .bind(driver.team_id().as_uuid())
        .bind(driver.updated_at())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| self.row_to_driver(r)).transpose()
    }

    async fn delete(&self, id: &DriverId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM drivers
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
