//! Driver DTOs
//!
//! The email field is plaintext on the wire; encryption happens in the
//! persistence adapter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::flag;
use crate::domain::models::driver::{
    CreateDriverData, Driver, DriverInclude, DriverWithRelations, UpdateDriverData,
};
use crate::domain::models::team::TeamId;

/// DTO for creating a new driver
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriverDto {
    #[validate(length(min = 1, max = 100, message = "firstName must be between 1 and 100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "lastName must be between 1 and 100 characters"))]
    pub last_name: String,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,

    pub team_id: Uuid,
}

impl From<CreateDriverDto> for CreateDriverData {
    fn from(dto: CreateDriverDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            team_id: TeamId::from_uuid(dto.team_id),
        }
    }
}

/// DTO for updating a driver (PUT/PATCH)
///
/// All fields are optional; only provided fields are written. Fields
/// outside the allow-list are ignored by serde.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverDto {
    #[validate(length(min = 1, max = 100, message = "firstName must be between 1 and 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "lastName must be between 1 and 100 characters"))]
    pub last_name: Option<String>,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,

    pub team_id: Option<Uuid>,
}

impl From<UpdateDriverDto> for UpdateDriverData {
    fn from(dto: UpdateDriverDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            team_id: dto.team_id.map(TeamId::from_uuid),
        }
    }
}

/// Query flags for driver relation loading
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverRelationsQuery {
    #[serde(default, deserialize_with = "flag")]
    pub with_team: bool,
}

impl From<DriverRelationsQuery> for DriverInclude {
    fn from(query: DriverRelationsQuery) -> Self {
        Self {
            team: query.with_team,
        }
    }
}

/// Driver response DTO
///
/// `team` is serialized only when the relation was eager-loaded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverResponseDto {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub team_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<super::team::TeamResponseDto>,
}

impl From<Driver> for DriverResponseDto {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id().to_string(),
            first_name: driver.first_name().to_string(),
            last_name: driver.last_name().to_string(),
            email: driver.email().to_string(),
            team_id: driver.team_id().to_string(),
            created_at: driver.created_at(),
            updated_at: driver.updated_at(),
            team: None,
        }
    }
}

impl From<DriverWithRelations> for DriverResponseDto {
    fn from(relations: DriverWithRelations) -> Self {
        let team = relations.team.map(super::team::TeamResponseDto::from);

        Self {
            team,
            ..Self::from(relations.driver)
        }
    }
}
