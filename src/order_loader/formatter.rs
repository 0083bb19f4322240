use chrono::FixedOffset;
use tracing::{debug, error, instrument};

use crate::clients::{ProductClient, ProductLoad, UserClient};
use crate::domain::{Order, OrderStatus, Product, ProductFilter, User, UserFilter};
use crate::formatting::{date, format_price, status_sentence};
use crate::order_actor::OrderError;
use super::view::FormattedOrder;

/// Resolves an order's product, buyer and seller and attaches the
/// display fields.
#[derive(Clone)]
pub struct OrderFormatter {
    users: UserClient,
    products: ProductClient,
    offset: FixedOffset,
}

impl OrderFormatter {
    pub fn new(users: UserClient, products: ProductClient, offset: FixedOffset) -> Self {
        Self { users, products, offset }
    }

    /// # Errors
    /// - `InvalidStatus` when the stored status is not open, sold or canceled
    /// - `ProductNotFound` / `UserNotFound` when a referenced record is absent
    /// - `StoreUnavailable` when a lookup cannot reach its store
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn format(&self, order: Order) -> Result<FormattedOrder, OrderError> {
        let status: OrderStatus = order.status.parse().map_err(|_| {
            error!(status = %order.status, "Order has an unknown status");
            OrderError::InvalidStatus(order.status.clone())
        })?;

        let (product, buyer, seller) = tokio::try_join!(
            self.product(&order.product_id),
            self.user(&order.buyer_id),
            self.user(&order.seller_id),
        )
        .map_err(|e| {
            error!(error = %e, "Order lookup failed");
            e
        })?;

        let updated_at = date(order.updated_at, self.offset);
        debug!(product_name = %product.name, buyer = %buyer.name, seller = %seller.name, "Order resolved");

        Ok(FormattedOrder {
            formatted_price: format_price(order.price),
            formatted_total: format_price(order.total),
            formatted_status: status.label().to_string(),
            formatted_updated_at: status_sentence(status, &updated_at),
            product,
            buyer,
            seller,
            order,
        })
    }

    /// Past orders may point at products the seller has since deleted.
    async fn product(&self, id: &str) -> Result<Product, OrderError> {
        self.products
            .load(ProductLoad::ProductWithDeleted, ProductFilter::by_id(id))
            .await?
            .ok_or_else(|| OrderError::ProductNotFound(id.to_string()))
    }

    async fn user(&self, id: &str) -> Result<User, OrderError> {
        self.users
            .find_user(UserFilter::by_id(id))
            .await?
            .ok_or_else(|| OrderError::UserNotFound(id.to_string()))
    }
}
