//! Shared Components
//!
//! Cross-cutting concerns used by all layers.

pub mod errors;
