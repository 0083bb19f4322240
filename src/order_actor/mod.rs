//! Order records and the errors surfaced by order placement and loading.

pub mod entity;
pub mod error;

pub use error::*;
