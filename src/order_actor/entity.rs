use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderFilter, OrderPatch, OrderStatus};

impl Entity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type Patch = OrderPatch;
    type Filter = OrderFilter;
    type Action = ();
    type ActionResult = ();

    const KIND: &'static str = "order";

    fn id(&self) -> &String { &self.id }

    /// Creates a new open Order, computing `total` from price and quantity.
    ///
    /// # Errors
    /// Rejects a zero quantity, a negative price, or a total that overflows.
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, String> {
        if params.quantity == 0 {
            return Err("quantity must be at least 1".to_string());
        }
        if params.price < 0 {
            return Err(format!("negative price: {}", params.price));
        }
        let total = params
            .price
            .checked_mul(i64::from(params.quantity))
            .ok_or_else(|| format!("total overflows: {} x {}", params.price, params.quantity))?;

        Ok(Self {
            id,
            product_id: params.product_id,
            buyer_id: params.buyer_id,
            seller_id: params.seller_id,
            quantity: params.quantity,
            price: params.price,
            total,
            status: OrderStatus::Open.as_str().to_string(),
            created_at: params.placed_at,
            updated_at: params.placed_at,
        })
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        filter.matches(self)
    }

    /// Moves the order to a new status. Only open orders may change, and
    /// only to a final status.
    fn on_update(&mut self, patch: OrderPatch) -> Result<(), String> {
        if !patch.status.is_final() {
            return Err(format!("order {} cannot move back to {}", self.id, patch.status));
        }
        if self.status != OrderStatus::Open.as_str() {
            return Err(format!("order {} is already {}", self.id, self.status));
        }
        self.status = patch.status.as_str().to_string();
        self.updated_at = patch.updated_at;
        Ok(())
    }

    /// Orders have no custom actions.
    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn params(quantity: u32, price: i64) -> OrderCreate {
        OrderCreate {
            product_id: "product_1".into(),
            buyer_id: "user_2".into(),
            seller_id: "user_1".into(),
            quantity,
            price,
            placed_at: Utc.with_ymd_and_hms(2023, 5, 10, 14, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_create_computes_total_and_opens() {
        let order = Order::from_create_params("order_1".into(), params(3, 2_500)).unwrap();
        assert_eq!(order.total, 7_500);
        assert_eq!(order.status, "open");
        assert_eq!(order.created_at, order.updated_at);
    }

    #[test]
    fn test_create_rejects_bad_amounts() {
        assert!(Order::from_create_params("order_1".into(), params(0, 100)).is_err());
        assert!(Order::from_create_params("order_1".into(), params(1, -1)).is_err());
        assert!(Order::from_create_params("order_1".into(), params(2, i64::MAX)).is_err());
    }

    #[test]
    fn test_final_status_cannot_change() {
        let mut order = Order::from_create_params("order_1".into(), params(1, 100)).unwrap();
        let later = Utc.with_ymd_and_hms(2023, 5, 11, 9, 0, 0).unwrap();

        order.on_update(OrderPatch { status: OrderStatus::Sold, updated_at: later }).unwrap();
        assert_eq!(order.status, "sold");
        assert_eq!(order.updated_at, later);

        let again = order.on_update(OrderPatch { status: OrderStatus::Canceled, updated_at: later });
        assert_eq!(again, Err("order order_1 is already sold".to_string()));

        let mut open = Order::from_create_params("order_2".into(), params(1, 100)).unwrap();
        assert!(open.on_update(OrderPatch { status: OrderStatus::Open, updated_at: later }).is_err());
    }
}
