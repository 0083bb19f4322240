//! Product-specific logic: soft deletion and stock management actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
