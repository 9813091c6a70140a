//! Driving Adapters
//!
//! Entry points into the application; currently the REST API only.

pub mod api_rest;
