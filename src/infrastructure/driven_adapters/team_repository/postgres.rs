//! PostgreSQL Team Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::TeamRepository;
use crate::domain::models::team::{Team, TeamId};
use crate::shared::errors::RepositoryError;

/// Database row representation for the teams table
#[derive(Debug, sqlx::FromRow)]
struct TeamRow {
    id: Uuid,
    name: String,
    website: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Team::restore(
            TeamId::from_uuid(row.id),
            row.name,
            row.website,
            row.created_at,
            row.updated_at,
        )
    }
}

/// PostgreSQL implementation of TeamRepository
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Create a new PostgresTeamRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn find_by_id(&self, id: &TeamId) -> Result<Option<Team>, RepositoryError> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, website, created_at, updated_at
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Team::from))
    }

    async fn find_by_ids(&self, ids: &[TeamId]) -> Result<Vec<Team>, RepositoryError> {
        let uuids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();

        let rows = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, website, created_at, updated_at
            FROM teams
            WHERE id = ANY($1)
            "#,
        )
        .bind(&uuids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Team::from).collect())
    }

    async fn find_all(&self) -> Result<Vec<Team>, RepositoryError> {
        let rows = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, website, created_at, updated_at
            FROM teams
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Team::from).collect())
    }

    async fn create(&self, team: &Team) -> Result<Team, RepositoryError> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            INSERT INTO teams (id, name, website, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, website, created_at, updated_at
            "#,
        )
        .bind(team.id().as_uuid())
        .bind(team.name())
        .bind(team.website())
        .bind(team.created_at())
        .bind(team.updated_at())
        .fetch_one(&self.pool)
        .await?;

        Ok(Team::from(row))
    }

    async fn update(&self, team: &Team) -> Result<Option<Team>, RepositoryError> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            UPDATE teams
            SET name = $2,
                website = $3,
                updated_at = $4
            WHERE id = $1
            RETURNING id, name, website, created_at, updated_at
            "#,
        )
        .bind(team.id().as_uuid())
        .bind(team.name())
        .bind(team.website())
        .bind(team.updated_at())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Team::from))
    }

    async fn delete(&self, id: &TeamId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
