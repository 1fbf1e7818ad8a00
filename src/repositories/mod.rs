// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls
// - Explicit SQL only

pub mod partner_repository;
pub mod reference_repository;
pub mod sales_history_repository;

pub use partner_repository::{PartnerRepository, SqlitePartnerRepository};
pub use reference_repository::{ReferenceRepository, SqliteReferenceRepository};
pub use sales_history_repository::{SalesHistoryRepository, SqliteSalesHistoryRepository};

#[cfg(test)]
pub use partner_repository::MockPartnerRepository;
#[cfg(test)]
pub use reference_repository::MockReferenceRepository;
#[cfg(test)]
pub use sales_history_repository::MockSalesHistoryRepository;
