// src/repositories/partner_repository.rs
//
// Partner persistence

use rusqlite::{params, Row, TransactionBehavior};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::partner::{Partner, PartnerDraft};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait PartnerRepository: Send + Sync {
    /// All partners ordered by name, with the derived sales aggregate
    fn list_all(&self) -> AppResult<Vec<Partner>>;
    fn get_by_id(&self, id: i64) -> AppResult<Option<Partner>>;
    /// Insert a new partner and return its assigned id
    fn create(&self, draft: &PartnerDraft) -> AppResult<i64>;
    /// Update all mutable columns of an existing partner
    fn update(&self, id: i64, draft: &PartnerDraft) -> AppResult<()>;
}

/// Columns shared by every partner query. `total_sales` is the
/// per-partner warehouse aggregate, zero when no rows exist.
const PARTNER_SELECT: &str = "SELECT p.id_partner, p.type_id, pt.partner_type, p.partner_name,
            p.director, p.phone, p.rating, p.email, p.address, p.inn,
            COALESCE((SELECT SUM(w.quantity * pr.min_cost_for_partner)
                      FROM warehouse w JOIN product pr ON w.product_id = pr.id_product
                      WHERE w.partner_id = p.id_partner), 0) AS total_sales
     FROM partner p JOIN partner_type pt ON p.type_id = pt.id_partner_type";

pub struct SqlitePartnerRepository {
    pool: Arc<ConnectionPool>,
}

impl SqlitePartnerRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Partner - returns rusqlite::Error for query_map compatibility
    fn row_to_partner(row: &Row) -> Result<Partner, rusqlite::Error> {
        Ok(Partner {
            id: row.get("id_partner")?,
            type_id: row.get("type_id")?,
            type_label: row.get("partner_type")?,
            name: row.get("partner_name")?,
            director: row.get("director")?,
            phone: row.get("phone")?,
            rating: row.get("rating")?,
            email: row.get("email")?,
            address: row.get("address")?,
            inn: row.get("inn")?,
            total_sales: row.get("total_sales")?,
        })
    }
}

impl PartnerRepository for SqlitePartnerRepository {
    fn list_all(&self) -> AppResult<Vec<Partner>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!("{} ORDER BY p.partner_name", PARTNER_SELECT))?;

        let partners: Vec<Partner> = stmt
            .query_map([], Self::row_to_partner)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(partners)
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Partner>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!("{} WHERE p.id_partner = ?1", PARTNER_SELECT))?;

        match stmt.query_row(params![id], Self::row_to_partner) {
            Ok(partner) => Ok(Some(partner)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn create(&self, draft: &PartnerDraft) -> AppResult<i64> {
        let mut conn = self.pool.get()?;

        // Immediate transaction takes the write lock before the max-lookup,
        // so concurrent creators serialize and cannot assign the same id.
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let new_id: i64 = tx.query_row(
            "SELECT COALESCE(MAX(id_partner), 0) + 1 FROM partner",
            [],
            |row| row.get(0),
        )?;

        let rows_affected = tx.execute(
            "INSERT INTO partner (
                id_partner, partner_name, type_id, director, phone,
                email, address, inn, rating
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                new_id,
                draft.name,
                draft.type_id,
                draft.director,
                draft.phone,
                draft.email,
                draft.address,
                draft.inn,
                draft.rating,
            ],
        )?;

        if rows_affected == 0 {
            // Transaction rolls back on drop
            return Err(AppError::Other("Failed to insert new partner".to_string()));
        }

        tx.commit()?;
        Ok(new_id)
    }

    fn update(&self, id: i64, draft: &PartnerDraft) -> AppResult<()> {
        let mut conn = self.pool.get()?;

        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let rows_affected = tx.execute(
            "UPDATE partner SET
                partner_name = ?1, type_id = ?2, director = ?3,
                phone = ?4, email = ?5, address = ?6,
                inn = ?7, rating = ?8
             WHERE id_partner = ?9",
            params![
                draft.name,
                draft.type_id,
                draft.director,
                draft.phone,
                draft.email,
                draft.address,
                draft.inn,
                draft.rating,
                id,
            ],
        )?;

        if rows_affected == 0 {
            // Record vanished concurrently; transaction rolls back on drop
            return Err(AppError::NotFound);
        }

        tx.commit()?;
        Ok(())
    }
}
