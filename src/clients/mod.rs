//! Typed handles over the resource actors.

#[macro_use]
mod macros;

mod user_client;
mod product_client;
mod order_client;

pub use user_client::UserClient;
pub use product_client::{ProductClient, ProductLoad};
pub use order_client::OrderClient;
