use chrono::{DateTime, Utc};
use tracing::{debug, error, info, instrument, warn};
use crate::domain::{Order, OrderCreate, OrderFilter, OrderPatch, OrderStatus};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::actor_framework::{ResourceClient, Scope};
use crate::clients::{UserClient, ProductClient};

/// Client for interacting with the Order actor.
///
/// Placing an order is orchestrated here: buyer, seller and product are
/// validated and stock is reserved before the order is stored.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    user_client: UserClient,
    product_client: ProductClient,
}

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        user_client: UserClient,
        product_client: ProductClient,
    ) -> Self {
        Self {
            inner,
            user_client,
            product_client,
        }
    }

    /// All orders matching `filter`, in the order the store holds them.
    #[instrument(skip(self))]
    pub async fn find_orders(&self, filter: OrderFilter) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        Ok(self.inner.find_all(filter, Scope::Active).await?)
    }

    #[instrument(skip(self), fields(buyer_id = %params.buyer_id, product_id = %params.product_id))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<String, OrderError> {
        info!("Processing create_order request");

        if params.buyer_id == params.seller_id {
            return Err(OrderError::ValidationError("buyer and seller must differ".to_string()));
        }

        // Step 1: Validate buyer and seller
        for user_id in [&params.buyer_id, &params.seller_id] {
            match self.user_client.get_user(user_id.clone()).await? {
                Some(user) => debug!(user_name = %user.name, "User validation successful"),
                None => {
                    error!(user_id = %user_id, "User not found");
                    return Err(OrderError::UserNotFound(user_id.clone()));
                }
            }
        }

        // Step 2: Validate product, which must still be listed by the seller
        let product = match self.product_client.get_product(params.product_id.clone()).await? {
            Some(product) => product,
            None => {
                error!("Product not found");
                return Err(OrderError::ProductNotFound(params.product_id.clone()));
            }
        };
        if product.seller_id != params.seller_id {
            error!(owner = %product.seller_id, "Product belongs to another seller");
            return Err(OrderError::ValidationError(format!(
                "product {} is not sold by {}",
                product.id, params.seller_id
            )));
        }

        // Step 3: Reserve stock
        if let Err(e) = self.product_client.reserve_stock(params.product_id.clone(), params.quantity).await {
            error!(error = %e, "Stock reservation failed");
            return Err(e.into());
        }
        info!(product_name = %product.name, "Stock reserved successfully");

        // Step 4: Store the order, handing the stock back if that fails
        let (product_id, quantity) = (params.product_id.clone(), params.quantity);
        match self.inner.create(params).await {
            Ok(id) => {
                info!(order_id = %id, "Order created successfully");
                Ok(id)
            }
            Err(e) => {
                error!(error = %e, "Order creation failed");
                if let Err(restore) = self.product_client.restore_stock(product_id, quantity).await {
                    warn!(error = %restore, "Could not restore reserved stock");
                }
                Err(e.into())
            }
        }
    }

    /// Marks an open order sold or canceled. Canceling returns its stock.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: String,
        status: OrderStatus,
        at: DateTime<Utc>,
    ) -> Result<Order, OrderError> {
        info!("Processing update_status request");
        let updated = self
            .inner
            .update(id, OrderPatch { status, updated_at: at })
            .await
            .map_err(|e| {
                error!(error = %e, "Status update rejected");
                OrderError::from(e)
            })?;

        if status == OrderStatus::Canceled {
            match self
                .product_client
                .restore_stock(updated.product_id.clone(), updated.quantity)
                .await
            {
                Ok(()) => info!(product_id = %updated.product_id, quantity = updated.quantity, "Stock restored"),
                // a deleted product has no stock to return to
                Err(ProductError::NotFound(product_id)) => {
                    warn!(product_id = %product_id, "Product no longer listed, stock not restored")
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(updated)
    }
}

impl_client_methods!(OrderClient, Order, OrderError, order);
