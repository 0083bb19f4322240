use tracing::{info, error, instrument};
use crate::clients::{OrderClient, UserClient, ProductClient};
use crate::actor_framework::ResourceActor;
use crate::app_system::SystemConfig;
use crate::domain::{User, Product, Order};
use crate::order_loader::{OrderFormatter, OrderLoader};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Sequential ids with a per-kind prefix: `user_1`, `user_2`, ...
fn id_sequence(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || format!("{}_{}", prefix, counter.fetch_add(1, Ordering::SeqCst))
}

/// The main application system that owns the user, product and order stores.
///
/// Responsible for starting up actors, wiring the clients together, and
/// handling shutdown.
pub struct OrderSystem {
    pub order_client: OrderClient,
    pub user_client: UserClient,
    pub product_client: ProductClient,
    pub order_loader: OrderLoader,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    #[instrument(name = "order_system", skip(config))]
    pub fn new(config: &SystemConfig) -> Self {
        info!("Starting order system");

        // 1. Stores with no dependencies first
        let (user_actor, user_resource_client) =
            ResourceActor::<User>::new(config.channel_buffer, id_sequence("user"));
        let user_client = UserClient::new(user_resource_client);
        let user_handle = tokio::spawn(user_actor.run());

        let (product_actor, product_resource_client) =
            ResourceActor::<Product>::new(config.channel_buffer, id_sequence("product"));
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.run());

        // 2. Orders validate against users and products
        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new(config.channel_buffer, id_sequence("order"));
        let order_client = OrderClient::new(order_resource_client, user_client.clone(), product_client.clone());
        let order_handle = tokio::spawn(order_actor.run());

        let formatter = OrderFormatter::new(user_client.clone(), product_client.clone(), config.display_offset);
        let order_loader = OrderLoader::new(order_client.clone(), formatter, config.load_concurrency);

        info!("Order system started successfully");

        Self {
            order_client,
            user_client,
            product_client,
            order_loader,
            handles: vec![user_handle, product_handle, order_handle],
        }
    }

    /// Drops every client, which closes the actor channels, then waits for
    /// the actors to finish. Clients cloned elsewhere keep their actor alive.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down order system");

        drop(self.order_loader);
        drop(self.order_client);
        drop(self.user_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Order system shutdown complete");
        Ok(())
    }
}
