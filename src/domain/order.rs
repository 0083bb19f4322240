use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// A purchase linking a buyer, a seller and a product.
///
/// `status` holds the value as persisted; it is only interpreted when the
/// order is formatted for display, see [`OrderStatus`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: String,
    pub product_id: String,
    pub buyer_id: String,
    pub seller_id: String,
    pub quantity: u32,
    pub price: i64,
    pub total: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lifecycle of an order. `Sold` and `Canceled` are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Open,
    Sold,
    Canceled,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("unknown order status: {0:?}")]
pub struct UnknownStatus(pub String);

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Open => "open",
            OrderStatus::Sold => "sold",
            OrderStatus::Canceled => "canceled",
        }
    }

    /// Portuguese label shown to buyers and sellers.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Open => "Aberto",
            OrderStatus::Sold => "Vendido",
            OrderStatus::Canceled => "Cancelado",
        }
    }

    pub fn is_final(self) -> bool {
        !matches!(self, OrderStatus::Open)
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(OrderStatus::Open),
            "sold" => Ok(OrderStatus::Sold),
            "canceled" => Ok(OrderStatus::Canceled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload for placing a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub product_id: String,
    pub buyer_id: String,
    pub seller_id: String,
    pub quantity: u32,
    pub price: i64,
    pub placed_at: DateTime<Utc>,
}

/// Status transition, stamped with the time it happened.
#[derive(Debug, Clone)]
pub struct OrderPatch {
    pub status: OrderStatus,
    pub updated_at: DateTime<Utc>,
}

/// Equality predicate over orders. Unset fields match anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub id: Option<String>,
    pub buyer_id: Option<String>,
    pub seller_id: Option<String>,
    pub product_id: Option<String>,
    pub status: Option<OrderStatus>,
}

/// Raw records for tests that answer store requests by hand; orders
/// placed through the system go through [`OrderCreate`].
#[cfg(test)]
impl Order {
    pub fn new(
        id: impl Into<String>,
        product_id: impl Into<String>,
        buyer_id: impl Into<String>,
        seller_id: impl Into<String>,
        price: i64,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            product_id: product_id.into(),
            buyer_id: buyer_id.into(),
            seller_id: seller_id.into(),
            quantity: 1,
            price,
            total: price,
            status: OrderStatus::Open.as_str().to_string(),
            created_at: updated_at,
            updated_at,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

impl OrderFilter {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()), ..Self::default() }
    }

    pub fn by_buyer(buyer_id: impl Into<String>) -> Self {
        Self { buyer_id: Some(buyer_id.into()), ..Self::default() }
    }

    pub fn by_seller(seller_id: impl Into<String>) -> Self {
        Self { seller_id: Some(seller_id.into()), ..Self::default() }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, order: &Order) -> bool {
        fn eq(wanted: &Option<String>, actual: &str) -> bool {
            wanted.as_deref().map_or(true, |w| w == actual)
        }

        eq(&self.id, &order.id)
            && eq(&self.buyer_id, &order.buyer_id)
            && eq(&self.seller_id, &order.seller_id)
            && eq(&self.product_id, &order.product_id)
            && self.status.map_or(true, |s| s.as_str() == order.status)
    }
}

/// Renders as a `where` clause, e.g. `buyer_id = user_2 and status = sold`.
impl fmt::Display for OrderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.status.map(OrderStatus::as_str);
        let clauses: Vec<String> = [
            ("id", self.id.as_deref()),
            ("buyer_id", self.buyer_id.as_deref()),
            ("seller_id", self.seller_id.as_deref()),
            ("product_id", self.product_id.as_deref()),
            ("status", status),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| format!("{field} = {v}")))
        .collect();

        if clauses.is_empty() {
            f.write_str("all orders")
        } else {
            f.write_str(&clauses.join(" and "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Order {
        let at = Utc.with_ymd_and_hms(2023, 5, 10, 14, 30, 0).unwrap();
        Order::new("order_1", "product_1", "user_2", "user_1", 150_000, at)
    }

    #[test]
    fn test_status_round_trips_through_persisted_form() {
        for status in [OrderStatus::Open, OrderStatus::Sold, OrderStatus::Canceled] {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
        assert_eq!(
            "refunded".parse::<OrderStatus>(),
            Err(UnknownStatus("refunded".to_string()))
        );
        assert!("Sold".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(OrderStatus::Open.label(), "Aberto");
        assert_eq!(OrderStatus::Sold.label(), "Vendido");
        assert_eq!(OrderStatus::Canceled.label(), "Cancelado");
    }

    #[test]
    fn test_filter_matches_every_set_field() {
        let order = sample().with_status("sold");

        assert!(OrderFilter::default().matches(&order));
        assert!(OrderFilter::by_buyer("user_2").with_status(OrderStatus::Sold).matches(&order));
        assert!(!OrderFilter::by_buyer("user_2").with_status(OrderStatus::Open).matches(&order));
        assert!(!OrderFilter::by_seller("user_2").matches(&order));
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(OrderFilter::by_id("order_9").to_string(), "id = order_9");
        assert_eq!(
            OrderFilter::by_buyer("user_2").with_status(OrderStatus::Sold).to_string(),
            "buyer_id = user_2 and status = sold"
        );
        assert_eq!(OrderFilter::default().to_string(), "all orders");
    }
}
