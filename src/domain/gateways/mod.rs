//! Domain Gateways
//!
//! Abstract contracts for persistence, implemented by driven adapters.

mod car_repository;
mod driver_repository;
mod team_repository;

pub use car_repository::CarRepository;
pub use driver_repository::DriverRepository;
pub use team_repository::TeamRepository;
