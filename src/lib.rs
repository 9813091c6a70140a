//! Racing Team Registry API
//!
//! A Rust-based microservice for managing racing teams, drivers, and cars
//! following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
