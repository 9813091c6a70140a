//! Domain Layer
//!
//! Entities, value objects, and gateway contracts. This layer has no
//! dependency on the web framework or the database driver.

pub mod gateways;
pub mod models;
