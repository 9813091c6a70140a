//! Infrastructure Layer
//!
//! Driving adapters (REST API) and driven adapters (database, config,
//! crypto).

pub mod driven_adapters;
pub mod driving_adapters;
