use std::str::FromStr;

use tracing::{debug, instrument};
use crate::domain::{Product, ProductCreate, ProductFilter};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use crate::actor_framework::{ResourceClient, Scope};

/// Which products a load may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductLoad {
    /// Listed products only.
    Product,
    /// Also products the seller has deleted, for displaying past orders.
    ProductWithDeleted,
}

impl ProductLoad {
    fn scope(self) -> Scope {
        match self {
            ProductLoad::Product => Scope::Active,
            ProductLoad::ProductWithDeleted => Scope::WithDeleted,
        }
    }
}

impl FromStr for ProductLoad {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product" => Ok(ProductLoad::Product),
            "productWithDeleted" => Ok(ProductLoad::ProductWithDeleted),
            other => Err(ProductError::ValidationError(format!("unknown product load: {other}"))),
        }
    }
}

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<String, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(ProductError::from)
    }

    /// Loads one product matching `filter`, honouring the load mode.
    #[instrument(skip(self))]
    pub async fn load(&self, mode: ProductLoad, filter: ProductFilter) -> Result<Option<Product>, ProductError> {
        debug!("Sending request");
        self.inner.find_one(filter, mode.scope()).await.map_err(ProductError::from)
    }

    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: String) -> Result<u32, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::CheckStock).await? {
            ProductActionResult::StockLevel(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, id: String, quantity: u32) -> Result<(), ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::ReserveStock(quantity)).await? {
            ProductActionResult::Reserved => Ok(()),
            ProductActionResult::Insufficient { available } => {
                Err(ProductError::InsufficientStock { requested: quantity, available })
            }
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn restore_stock(&self, id: String, quantity: u32) -> Result<(), ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::RestoreStock(quantity)).await? {
            ProductActionResult::Restored => Ok(()),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ValidationError(format!("unexpected action result: {result:?}"))
}
