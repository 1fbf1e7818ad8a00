// src/repositories/reference_repository.rs
//
// Read-only reference data: id <-> label lookup sets and the two
// material-calculation coefficients. Coefficient columns are TEXT in
// the legacy schema; they are returned raw and parsed by the service.

use rusqlite::params;
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::reference::{LookupEntry, LookupTable};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait ReferenceRepository: Send + Sync {
    /// Partner types ordered by label
    fn list_partner_types(&self) -> AppResult<LookupTable>;
    fn list_product_types(&self) -> AppResult<LookupTable>;
    fn list_material_types(&self) -> AppResult<LookupTable>;

    /// Raw coefficient text for a product type, `None` when absent
    fn product_coefficient(&self, product_type_id: i64) -> AppResult<Option<String>>;
    /// Raw defect percentage text for a material type, `None` when absent
    fn defect_percent(&self, material_type_id: i64) -> AppResult<Option<String>>;
}

pub struct SqliteReferenceRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteReferenceRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn load_lookup(&self, query: &str) -> AppResult<LookupTable> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(query)?;
        let entries: Vec<LookupEntry> = stmt
            .query_map([], |row| {
                Ok(LookupEntry {
                    id: row.get(0)?,
                    label: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LookupTable::new(entries))
    }

    fn scalar_text(&self, query: &str, id: i64) -> AppResult<Option<String>> {
        let conn = self.pool.get()?;

        match conn.query_row(query, params![id], |row| row.get::<_, Option<String>>(0)) {
            Ok(value) => Ok(value),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }
}

impl ReferenceRepository for SqliteReferenceRepository {
    fn list_partner_types(&self) -> AppResult<LookupTable> {
        self.load_lookup(
            "SELECT id_partner_type, partner_type FROM partner_type ORDER BY partner_type",
        )
    }

    fn list_product_types(&self) -> AppResult<LookupTable> {
        self.load_lookup("SELECT id_product_type, product_type FROM product_type")
    }

    fn list_material_types(&self) -> AppResult<LookupTable> {
        self.load_lookup("SELECT id_material_type, material_type FROM material_type")
    }

    fn product_coefficient(&self, product_type_id: i64) -> AppResult<Option<String>> {
        self.scalar_text(
            "SELECT product_type_coefficient FROM product_type WHERE id_product_type = ?1",
            product_type_id,
        )
    }

    fn defect_percent(&self, material_type_id: i64) -> AppResult<Option<String>> {
        self.scalar_text(
            "SELECT brak_percent FROM material_type WHERE id_material_type = ?1",
            material_type_id,
        )
    }
}
