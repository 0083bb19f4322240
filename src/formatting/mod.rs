//! pt-BR display helpers for prices and timestamps.

mod currency;
mod datetime;

pub use currency::format_price;
pub use datetime::{date, status_sentence};
