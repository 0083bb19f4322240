use std::ops::Deref;

use serde::Serialize;

use crate::domain::{Order, Product, User};

/// An order decorated for display.
///
/// The derived fields are recomputed on every load and never stored.
/// Serializes as the order's own fields followed by the related records
/// and the camelCase display fields (`formattedPrice`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedOrder {
    #[serde(flatten)]
    pub order: Order,
    pub product: Product,
    pub buyer: User,
    pub seller: User,
    pub formatted_price: String,
    pub formatted_total: String,
    pub formatted_status: String,
    pub formatted_updated_at: String,
}

impl Deref for FormattedOrder {
    type Target = Order;

    fn deref(&self) -> &Order {
        &self.order
    }
}
