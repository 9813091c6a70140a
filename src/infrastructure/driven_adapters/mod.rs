//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Configuration
//! - Email-at-rest encryption

pub mod car_repository;
pub mod config;
pub mod crypto;
pub mod database;
pub mod driver_repository;
pub mod team_repository;

pub use car_repository::PostgresCarRepository;
pub use config::AppConfig;
pub use crypto::EmailCipher;
pub use driver_repository::PostgresDriverRepository;
pub use team_repository::PostgresTeamRepository;
