/// Custom actions for Product records.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Checks the current stock level without modifying it.
    CheckStock,
    /// Reserves a specified amount of stock for a new order.
    ReserveStock(u32),
    /// Returns stock held by a canceled order.
    RestoreStock(u32),
}

/// Results from ProductActions
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    StockLevel(u32),
    Reserved,
    /// The reservation was refused; nothing changed.
    Insufficient { available: u32 },
    Restored,
}
