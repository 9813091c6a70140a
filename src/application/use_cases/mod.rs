//! Use Cases
//!
//! One module per resource, one use case per CRUD operation.

pub mod cars;
pub mod drivers;
pub mod teams;

#[cfg(test)]
pub(crate) mod test_support;
