//! HTTP Handlers

pub mod cars;
pub mod drivers;
pub mod teams;
