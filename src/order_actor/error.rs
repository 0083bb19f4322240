use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::product_actor::ProductError;
use crate::user_actor::UserError;

/// Errors that can occur while placing, updating or loading orders.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Product not found: {0}")]
    ProductNotFound(String),
    #[error("User not found: {0}")]
    UserNotFound(String),
    #[error("Invalid order status: {0:?}")]
    InvalidStatus(String),
    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),
    #[error("Order validation error: {0}")]
    ValidationError(String),
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::Rejected(reason) => OrderError::ValidationError(reason),
            e @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                OrderError::StoreUnavailable(format!("order store: {e}"))
            }
        }
    }
}

impl From<UserError> for OrderError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(id) => OrderError::UserNotFound(id),
            UserError::ValidationError(reason) => OrderError::ValidationError(reason),
            UserError::StoreUnavailable(reason) => OrderError::StoreUnavailable(format!("user store: {reason}")),
        }
    }
}

impl From<ProductError> for OrderError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(id) => OrderError::ProductNotFound(id),
            e @ ProductError::InsufficientStock { .. } => OrderError::InsufficientStock(e.to_string()),
            ProductError::ValidationError(reason) => OrderError::ValidationError(reason),
            ProductError::StoreUnavailable(reason) => {
                OrderError::StoreUnavailable(format!("product store: {reason}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_failures_become_store_unavailable() {
        let from_user: OrderError = UserError::from(FrameworkError::ActorClosed).into();
        assert_eq!(from_user, OrderError::StoreUnavailable("user store: Actor closed".into()));

        let from_product: OrderError = ProductError::from(FrameworkError::ActorDropped).into();
        assert!(matches!(from_product, OrderError::StoreUnavailable(_)));

        let direct = OrderError::from(FrameworkError::ActorClosed);
        assert_eq!(direct, OrderError::StoreUnavailable("order store: Actor closed".into()));
    }

    #[test]
    fn test_absent_records_keep_their_kind() {
        let user: OrderError = UserError::NotFound("user_9".into()).into();
        let product: OrderError = ProductError::NotFound("product_9".into()).into();
        assert_eq!(user, OrderError::UserNotFound("user_9".into()));
        assert_eq!(product, OrderError::ProductNotFound("product_9".into()));
    }
}
