//! Team DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::driver::DriverResponseDto;
use super::{flag, validate_url};
use crate::domain::models::team::{CreateTeamData, Team, TeamInclude, TeamWithRelations, UpdateTeamData};

/// DTO for creating a new team
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamDto {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(max = 500, message = "website must be at most 500 characters"))]
    #[validate(custom(function = "validate_url"))]
    pub website: String,
}

impl From<CreateTeamDto> for CreateTeamData {
    fn from(dto: CreateTeamDto) -> Self {
        Self {
            name: dto.name,
            website: dto.website,
        }
    }
}

/// DTO for updating a team (PUT/PATCH)
///
/// All fields are optional; only provided fields are written. Fields
/// outside the allow-list are ignored by serde.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamDto {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 500, message = "website must be at most 500 characters"))]
    #[validate(custom(function = "validate_url"))]
    pub website: Option<String>,
}

impl From<UpdateTeamDto> for UpdateTeamData {
    fn from(dto: UpdateTeamDto) -> Self {
        Self {
            name: dto.name,
            website: dto.website,
        }
    }
}

/// Query flags for team relation loading
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRelationsQuery {
    #[serde(default, deserialize_with = "flag")]
    pub with_drivers: bool,
}

impl From<TeamRelationsQuery> for TeamInclude {
    fn from(query: TeamRelationsQuery) -> Self {
        Self {
            drivers: query.with_drivers,
        }
    }
}

/// Team response DTO
///
/// `drivers` is serialized only when the relation was eager-loaded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponseDto {
    pub id: String,
    pub name: String,
    pub website: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drivers: Option<Vec<DriverResponseDto>>,
}

impl From<Team> for TeamResponseDto {
    fn from(team: Team) -> Self {
        Self {
            id: team.id().to_string(),
            name: team.name().to_string(),
            website: team.website().to_string(),
            created_at: team.created_at(),
            updated_at: team.updated_at(),
            drivers: None,
        }
    }
}

impl From<TeamWithRelations> for TeamResponseDto {
    fn from(relations: TeamWithRelations) -> Self {
        let drivers = relations
            .drivers
            .map(|drivers| drivers.into_iter().map(DriverResponseDto::from).collect());

        Self {
            drivers,
            ..Self::from(relations.team)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::driver::{CreateDriverData, Driver};
    use crate::domain::models::team::TeamId;

    fn test_team() -> Team {
        Team::new(CreateTeamData {
            name: "Scuderia Rosso".to_string(),
            website: "https://rosso.example.com".to_string(),
        })
    }

    #[test]
    fn test_create_dto_validation() {
        let valid = CreateTeamDto {
            name: "Scuderia Rosso".to_string(),
            website: "https://rosso.example.com".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_name = CreateTeamDto {
            name: String::new(),
            website: "https://rosso.example.com".to_string(),
        };
        assert!(empty_name.validate().is_err());

        let bad_website = CreateTeamDto {
            name: "Scuderia Rosso".to_string(),
            website: "rosso.example.com".to_string(),
        };
        assert!(bad_website.validate().is_err());
    }

    #[test]
    fn test_update_dto_validation_skips_absent_fields() {
        assert!(UpdateTeamDto::default().validate().is_ok());

        let bad_website = UpdateTeamDto {
            website: Some("not-a-url".to_string()),
            ..Default::default()
        };
        assert!(bad_website.validate().is_err());
    }

    #[test]
    fn test_drivers_key_absent_without_relation() {
        let dto = TeamResponseDto::from(test_team());
        let json = serde_json::to_value(&dto).unwrap();

        assert!(json.get("drivers").is_none());
        assert!(json.get("name").is_some());
    }

    #[test]
    fn test_drivers_key_present_with_relation() {
        let team = test_team();
        let driver = Driver::new(CreateDriverData {
            first_name: "Ayrton".to_string(),
            last_name: "Ferrari".to_string(),
            email: "ayrton@rosso.example.com".to_string(),
            team_id: *team.id(),
        });

        let dto = TeamResponseDto::from(TeamWithRelations {
            team,
            drivers: Some(vec![driver]),
        });
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["drivers"].as_array().unwrap().len(), 1);
        assert_eq!(json["drivers"][0]["firstName"], "Ayrton");
    }

    #[test]
    fn test_unknown_team_include_defaults_off() {
        let include = TeamInclude::from(TeamRelationsQuery::default());
        assert!(!include.drivers);
    }
}
