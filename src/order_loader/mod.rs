//! Loading orders for display: fetch from the order store, then decorate
//! each one through [`OrderFormatter`].

mod formatter;
mod view;

use std::str::FromStr;

use futures_util::stream::{self, StreamExt, TryStreamExt};
use tracing::{info, instrument, warn};

use crate::clients::OrderClient;
use crate::domain::OrderFilter;
use crate::order_actor::OrderError;

pub use formatter::OrderFormatter;
pub use view::FormattedOrder;

/// Shape of a load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    /// Exactly one order.
    Order,
    /// Every matching order.
    Orders,
}

impl FromStr for LoadKind {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "order" => Ok(LoadKind::Order),
            "orders" => Ok(LoadKind::Orders),
            other => Err(OrderError::ValidationError(format!("unknown load kind: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Loaded {
    Order(FormattedOrder),
    Orders(Vec<FormattedOrder>),
}

impl Loaded {
    pub fn into_orders(self) -> Vec<FormattedOrder> {
        match self {
            Loaded::Order(order) => vec![order],
            Loaded::Orders(orders) => orders,
        }
    }
}

/// Stateless entry point for loading formatted orders. Each call takes its
/// filter as an argument; nothing is retained between calls.
#[derive(Clone)]
pub struct OrderLoader {
    orders: OrderClient,
    formatter: OrderFormatter,
    concurrency: usize,
}

impl OrderLoader {
    /// `concurrency` bounds how many orders of a batch are formatted at once.
    pub fn new(orders: OrderClient, formatter: OrderFormatter, concurrency: usize) -> Self {
        Self {
            orders,
            formatter,
            concurrency: concurrency.max(1),
        }
    }

    #[instrument(skip(self))]
    pub async fn load(&self, kind: LoadKind, filter: OrderFilter) -> Result<Loaded, OrderError> {
        match kind {
            LoadKind::Order => self.order(filter).await.map(Loaded::Order),
            LoadKind::Orders => self.orders(filter).await.map(Loaded::Orders),
        }
    }

    /// The first order matching `filter`.
    ///
    /// # Errors
    /// `NotFound` when nothing matches, plus anything [`OrderFormatter::format`] returns.
    #[instrument(skip(self))]
    pub async fn order(&self, filter: OrderFilter) -> Result<FormattedOrder, OrderError> {
        let Some(order) = self.orders.find_order(filter.clone()).await? else {
            warn!("No order matches");
            return Err(OrderError::NotFound(filter.to_string()));
        };
        self.formatter.format(order).await
    }

    /// Every order matching `filter`, formatted in store order. One failed
    /// order fails the whole batch.
    #[instrument(skip(self))]
    pub async fn orders(&self, filter: OrderFilter) -> Result<Vec<FormattedOrder>, OrderError> {
        let orders = self.orders.find_orders(filter).await?;

        let formatted: Vec<FormattedOrder> = stream::iter(orders)
            .map(|order| self.formatter.format(order))
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        info!(count = formatted.len(), "Orders loaded");
        Ok(formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_kind_names() {
        assert_eq!("order".parse::<LoadKind>(), Ok(LoadKind::Order));
        assert_eq!("orders".parse::<LoadKind>(), Ok(LoadKind::Orders));
        assert!(matches!("sales".parse::<LoadKind>(), Err(OrderError::ValidationError(_))));
    }
}
