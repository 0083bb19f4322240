use chrono::Utc;

use crate::actor_framework::{Entity, Removal};
use crate::domain::{Product, ProductCreate, ProductFilter, ProductPatch};
use super::actions::{ProductAction, ProductActionResult};

impl Entity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type Patch = ProductPatch;
    type Filter = ProductFilter;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;

    const KIND: &'static str = "product";

    fn id(&self) -> &String { &self.id }

    /// Creates a new Product from creation parameters.
    ///
    /// # Errors
    /// Rejects a negative price.
    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, String> {
        if params.price < 0 {
            return Err(format!("negative price: {}", params.price));
        }
        Ok(Self::new(id, params.seller_id, params.name, params.price, params.quantity))
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        filter.id.as_ref().map_or(true, |id| &self.id == id)
            && filter.seller_id.as_ref().map_or(true, |seller| &self.seller_id == seller)
    }

    fn is_deleted(&self) -> bool {
        Product::is_deleted(self)
    }

    fn on_update(&mut self, patch: ProductPatch) -> Result<(), String> {
        if let Some(price) = patch.price {
            if price < 0 {
                return Err(format!("negative price: {price}"));
            }
            self.price = price;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        Ok(())
    }

    /// Products are kept after deletion so past orders can still show them.
    fn on_delete(&mut self) -> Result<Removal, String> {
        self.deleted_at = Some(Utc::now());
        Ok(Removal::Retain)
    }

    /// Handles stock actions.
    ///
    /// A reservation larger than the stock is answered with
    /// `Insufficient` and leaves the quantity untouched.
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, String> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::StockLevel(self.quantity)),
            ProductAction::ReserveStock(amount) => {
                if amount == 0 {
                    return Err("cannot reserve zero units".to_string());
                }
                match self.quantity.checked_sub(amount) {
                    Some(left) => {
                        self.quantity = left;
                        Ok(ProductActionResult::Reserved)
                    }
                    None => Ok(ProductActionResult::Insufficient { available: self.quantity }),
                }
            }
            ProductAction::RestoreStock(amount) => {
                self.quantity = self.quantity.saturating_add(amount);
                Ok(ProductActionResult::Restored)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reservation_never_goes_negative() {
        let mut product = Product::new("product_1", "user_1", "Bicicleta", 150_000, 2);

        assert_eq!(product.handle_action(ProductAction::ReserveStock(2)), Ok(ProductActionResult::Reserved));
        assert_eq!(
            product.handle_action(ProductAction::ReserveStock(1)),
            Ok(ProductActionResult::Insufficient { available: 0 })
        );
        assert_eq!(product.quantity, 0);

        product.handle_action(ProductAction::RestoreStock(1)).unwrap();
        assert_eq!(product.handle_action(ProductAction::CheckStock), Ok(ProductActionResult::StockLevel(1)));
    }

    #[test]
    fn test_delete_marks_instead_of_purging() {
        let mut product = Product::new("product_1", "user_1", "Bicicleta", 150_000, 2);
        assert!(!Entity::is_deleted(&product));

        assert_eq!(product.on_delete(), Ok(Removal::Retain));
        assert!(product.deleted_at.is_some());
        assert!(Entity::is_deleted(&product));
    }
}
