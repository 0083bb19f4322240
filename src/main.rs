mod domain;
mod clients;
mod formatting;
mod order_loader;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod user_actor;
mod product_actor;
mod order_actor;

use chrono::{Duration, Utc};
use tracing::{info, warn, Instrument};
use crate::app_system::{OrderSystem, SystemConfig, setup_tracing};
use crate::domain::{OrderCreate, OrderFilter, OrderStatus, ProductCreate, UserCreate};
use crate::order_loader::{LoadKind, Loaded};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting marketplace order service");

    let system = OrderSystem::new(&config);

    // Seed a seller, a buyer and two listings
    let span = tracing::info_span!("seeding");
    let (seller, buyer, bike, helmet) = async {
        let users = &system.user_client;
        let seller = users.create_user(UserCreate::new("Alice", "alice@example.com")).await;
        let buyer = users.create_user(UserCreate::new("Bruno", "bruno@example.com")).await;
        let (seller, buyer) = (seller.map_err(|e| e.to_string())?, buyer.map_err(|e| e.to_string())?);

        let products = &system.product_client;
        let bike = products
            .create_product(ProductCreate::new(seller.clone(), "Bicicleta aro 29", 150_000, 3))
            .await
            .map_err(|e| e.to_string())?;
        let helmet = products
            .create_product(ProductCreate::new(seller.clone(), "Capacete", 8_990, 10))
            .await
            .map_err(|e| e.to_string())?;
        info!(%seller, %buyer, "Users and products created");
        Ok::<_, String>((seller, buyer, bike, helmet))
    }
    .instrument(span)
    .await?;

    // Place orders and move them through their lifecycle
    let span = tracing::info_span!("order_processing");
    let first_order = async {
        let orders = &system.order_client;
        let now = Utc::now();
        let place = |product_id: &str, price: i64, quantity: u32, placed_at| OrderCreate {
            product_id: product_id.to_string(),
            buyer_id: buyer.clone(),
            seller_id: seller.clone(),
            quantity,
            price,
            placed_at,
        };

        let sold = orders.create_order(place(&bike, 150_000, 1, now - Duration::days(2))).await.map_err(|e| e.to_string())?;
        let canceled = orders.create_order(place(&helmet, 8_990, 2, now - Duration::days(1))).await.map_err(|e| e.to_string())?;
        orders.create_order(place(&helmet, 8_990, 1, now)).await.map_err(|e| e.to_string())?;

        orders.update_status(sold.clone(), OrderStatus::Sold, now).await.map_err(|e| e.to_string())?;
        orders.update_status(canceled, OrderStatus::Canceled, now).await.map_err(|e| e.to_string())?;

        // the seller unlists the bike; the sold order must still show it
        system.product_client.delete_product(bike.clone()).await.map_err(|e| e.to_string())?;
        Ok::<_, String>(sold)
    }
    .instrument(span)
    .await?;

    // Load what the buyer sees on their orders page
    let span = tracing::info_span!("order_loading");
    async {
        let loaded = system
            .order_loader
            .load(LoadKind::Orders, OrderFilter::by_buyer(buyer.clone()))
            .await
            .map_err(|e| e.to_string())?;
        for order in loaded.into_orders() {
            info!(
                order_id = %order.id,
                product = %order.product.name,
                seller = %order.seller.name,
                total = %order.formatted_total,
                "{}",
                order.formatted_updated_at
            );
        }

        if let Loaded::Order(order) = system
            .order_loader
            .load(LoadKind::Order, OrderFilter::by_id(first_order.clone()))
            .await
            .map_err(|e| e.to_string())?
        {
            info!(
                order_id = %order.id,
                product_deleted = order.product.deleted_at.is_some(),
                price = %order.formatted_price,
                "{}",
                order.formatted_status
            );
        }

        // Seller dashboard: completed sales and what is left to sell
        let sales = system
            .order_loader
            .orders(OrderFilter::by_seller(seller.clone()).with_status(OrderStatus::Sold))
            .await
            .map_err(|e| e.to_string())?;
        let helmets_left = system.product_client.check_stock(helmet.clone()).await.map_err(|e| e.to_string())?;
        info!(%seller, sales = sales.len(), helmets_left, "Seller summary");

        match system.order_loader.order(OrderFilter::by_id("order_404")).await {
            Ok(order) => warn!(order_id = %order.id, "Unexpected order"),
            Err(e) => info!(error = %e, "Missing order reported"),
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
