//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API. Wire casing is camelCase,
//! matching the query-string flag names (`withTeam`, `withDrivers`, ...).

pub mod car;
pub mod driver;
pub mod team;

pub use car::{CarRelationsQuery, CarResponseDto, CreateCarDto, UpdateCarDto};
pub use driver::{CreateDriverDto, DriverRelationsQuery, DriverResponseDto, UpdateDriverDto};
pub use team::{CreateTeamDto, TeamRelationsQuery, TeamResponseDto, UpdateTeamDto};

/// Deserializes a boolean-like query flag.
///
/// `1`, `true`, `yes`, and `on` (case-insensitive) switch the flag on;
/// any other value, or absence, leaves it off.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.is_some_and(|v| {
        matches!(
            v.to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    }))
}

/// Validates a URL format (must start with http:// or https:// and have a
/// host)
pub(crate) fn validate_url(url: &str) -> Result<(), validator::ValidationError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        let mut error = validator::ValidationError::new("url");
        error.message = Some("URL must start with http:// or https://".into());
        return Err(error);
    }

    let without_protocol = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or("");
    if without_protocol.is_empty() || without_protocol.starts_with('/') {
        let mut error = validator::ValidationError::new("url");
        error.message = Some("URL must include a valid host".into());
        return Err(error);
    }

    Ok(())
}
