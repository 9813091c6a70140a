//! Application Layer
//!
//! Use cases orchestrating domain entities and repository gateways.

pub mod use_cases;
