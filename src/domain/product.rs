use chrono::{DateTime, Utc};
use serde::Serialize;

/// A product listed by a seller. Prices are in minor units (centavos).
///
/// Products are never purged: deleting one stamps `deleted_at` so that
/// orders placed against it can still be displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: String,
    pub seller_id: String,
    pub name: String,
    pub price: i64,
    pub quantity: u32,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub seller_id: String,
    pub name: String,
    pub price: i64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub id: Option<String>,
    pub seller_id: Option<String>,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        seller_id: impl Into<String>,
        name: impl Into<String>,
        price: i64,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            seller_id: seller_id.into(),
            name: name.into(),
            price,
            quantity,
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl ProductCreate {
    pub fn new(seller_id: impl Into<String>, name: impl Into<String>, price: i64, quantity: u32) -> Self {
        Self {
            seller_id: seller_id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }
}

impl ProductFilter {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()), ..Self::default() }
    }
}
