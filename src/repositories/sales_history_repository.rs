// src/repositories/sales_history_repository.rs
//
// Read-only access to a partner's sale line items. Line amounts are
// computed in the query from the product catalog, never persisted.

use chrono::NaiveDate;
use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::sale::SaleRecord;
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait SalesHistoryRepository: Send + Sync {
    /// Sale line items of a partner, newest first.
    /// A partner with no sales yields an empty vec, not an error.
    fn list_for_partner(&self, partner_id: i64) -> AppResult<Vec<SaleRecord>>;
}

pub struct SqliteSalesHistoryRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteSalesHistoryRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_sale(row: &Row) -> Result<SaleRecord, rusqlite::Error> {
        let date_str: String = row.get("sale_date")?;
        let sale_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        Ok(SaleRecord {
            product_name: row.get("product_name")?,
            quantity: row.get("quantity")?,
            sale_date,
            amount: row.get("amount")?,
        })
    }
}

impl SalesHistoryRepository for SqliteSalesHistoryRepository {
    fn list_for_partner(&self, partner_id: i64) -> AppResult<Vec<SaleRecord>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT pr.product_name, sh.quantity, sh.sale_date,
                    (sh.quantity * pr.min_cost_for_partner) AS amount
             FROM sales_history sh JOIN product pr ON sh.product_id = pr.id_product
             WHERE sh.partner_id = ?1
             ORDER BY sh.sale_date DESC",
        )?;

        let sales: Vec<SaleRecord> = stmt
            .query_map(params![partner_id], Self::row_to_sale)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(sales)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_connection_pool, initialize_database, DatabaseConfig};
    use tempfile::TempDir;

    fn setup() -> (TempDir, SqliteSalesHistoryRepository) {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig::new(dir.path().join("test.db")).with_max_connections(2);
        let pool = Arc::new(create_connection_pool(&config).unwrap());

        let conn = pool.get().unwrap();
        initialize_database(&conn).unwrap();
        conn.execute_batch(
            "INSERT INTO partner_type (id_partner_type, partner_type) VALUES (1, 'OOO');
             INSERT INTO partner (id_partner, partner_name, type_id, director, phone, rating)
                VALUES (1, 'Stroitel', 1, 'Ivanov I. I.', '+7 912 000 00 00', '7');
             INSERT INTO product (id_product, product_name, product_type_id, min_cost_for_partner)
                VALUES (1, 'Parquet board', NULL, 4500.0),
                       (2, 'Laminate', NULL, 1200.0);
             INSERT INTO sales_history (partner_id, product_id, quantity, sale_date) VALUES
                (1, 1, 2, '2024-03-10'),
                (1, 2, 10, '2024-06-01'),
                (1, 1, 1, '2023-12-25');",
        )
        .unwrap();
        drop(conn);

        (dir, SqliteSalesHistoryRepository::new(pool))
    }

    #[test]
    fn test_sales_ordered_by_date_descending() {
        let (_dir, repo) = setup();

        let sales = repo.list_for_partner(1).unwrap();
        assert_eq!(sales.len(), 3);

        let dates: Vec<NaiveDate> = sales.iter().map(|s| s.sale_date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
        assert_eq!(sales[0].product_name, "Laminate");
    }

    #[test]
    fn test_line_amount_is_quantity_times_unit_cost() {
        let (_dir, repo) = setup();

        let sales = repo.list_for_partner(1).unwrap();
        // Newest line: 10 x 1200.0
        assert_eq!(sales[0].quantity, 10);
        assert_eq!(sales[0].amount, 12_000.0);
    }

    #[test]
    fn test_partner_without_sales_yields_empty_vec() {
        let (_dir, repo) = setup();

        let sales = repo.list_for_partner(999).unwrap();
        assert!(sales.is_empty());
    }
}
