//! Car DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::driver::DriverResponseDto;
use super::flag;
use super::team::TeamResponseDto;
use crate::domain::models::car::{Car, CarInclude, CarWithRelations, CreateCarData, UpdateCarData};
use crate::domain::models::driver::DriverId;
use crate::domain::models::team::TeamId;

/// DTO for creating a new car
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarDto {
    #[validate(range(min = 0, message = "number must be at least 0"))]
    pub number: i32,

    pub team_id: Uuid,

    pub driver_id: Uuid,
}

impl From<CreateCarDto> for CreateCarData {
    fn from(dto: CreateCarDto) -> Self {
        Self {
            number: dto.number,
            team_id: TeamId::from_uuid(dto.team_id),
            driver_id: DriverId::from_uuid(dto.driver_id),
        }
    }
}

/// DTO for updating a car (PUT/PATCH)
///
/// The allow-list is `number` and `driverId`; a `teamId` field in the
/// body is ignored by serde, keeping the owning team immutable.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarDto {
    #[validate(range(min = 0, message = "number must be at least 0"))]
    pub number: Option<i32>,

    pub driver_id: Option<Uuid>,
}

impl From<UpdateCarDto> for UpdateCarData {
    fn from(dto: UpdateCarDto) -> Self {
        Self {
            number: dto.number,
            driver_id: dto.driver_id.map(DriverId::from_uuid),
        }
    }
}

/// Query flags for car relation loading
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarRelationsQuery {
    #[serde(default, deserialize_with = "flag")]
    pub with_team: bool,

    #[serde(default, deserialize_with = "flag")]
    pub with_driver: bool,
}

impl From<CarRelationsQuery> for CarInclude {
    fn from(query: CarRelationsQuery) -> Self {
        Self {
            team: query.with_team,
            driver: query.with_driver,
        }
    }
}

/// Car response DTO
///
/// `team` and `driver` are serialized only when eager-loaded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarResponseDto {
    pub id: String,
    pub number: i32,
    pub team_id: String,
    pub driver_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamResponseDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<DriverResponseDto>,
}

impl From<Car> for CarResponseDto {
    fn from(car: Car) -> Self {
        Self {
            id: car.id().to_string(),
            number: car.number(),
            team_id: car.team_id().to_string(),
            driver_id: car.driver_id().to_string(),
            created_at: car.created_at(),
            updated_at: car.updated_at(),
            team: None,
            driver: None,
        }
    }
}

impl From<CarWithRelations> for CarResponseDto {
    fn from(relations: CarWithRelations) -> Self {
        Self {
            team: relations.team.map(TeamResponseDto::from),
            driver: relations.driver.map(DriverResponseDto::from),
            ..Self::from(relations.car)
        }
    }
}
