// src/lib.rs
// PartnerHub - partner management core
//
// Architecture:
// - Domain-centric: business rules and calculations live in domains
// - Explicit: hand-written SQL, no implicit behavior, no magic
// - Layered: db -> repositories -> services; a UI sits on top
//
// The presentation layer is out of scope: this crate exposes the
// operations a form application calls (list partners, get/create/update
// partner, sales history, material calculation, reference lookups).

// ============================================================================
// MODULES
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    discount_tier,
    material_required,
    validate_material_input,
    validate_partner_draft,
    CalculationError,
    LookupEntry,
    LookupTable,
    MaterialCoefficients,
    // Material calculation
    MaterialInput,
    // Partner
    Partner,
    PartnerDraft,
    // Sales (derived data)
    SaleRecord,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool, DatabaseConfig};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    PartnerRepository, ReferenceRepository, SalesHistoryRepository, SqlitePartnerRepository,
    SqliteReferenceRepository, SqliteSalesHistoryRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{MaterialService, PartnerService};
