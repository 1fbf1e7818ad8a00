// src/domain/sale.rs
//
// Sale line items are derived data: written by external processes,
// read-only from this core's perspective.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One sale line item of a partner, joined with the product catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Product name from the catalog
    pub product_name: String,

    /// Units sold (positive)
    pub quantity: i64,

    /// Date of the sale
    pub sale_date: NaiveDate,

    /// Line amount = quantity x per-partner minimum cost.
    /// Computed in the query, never persisted.
    pub amount: f64,
}
