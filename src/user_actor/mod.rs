//! User records: buyers and sellers.

pub mod entity;
pub mod error;

pub use error::*;
