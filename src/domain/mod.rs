// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod material;
pub mod partner;
pub mod reference;
pub mod sale;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Partner Domain
pub use partner::{discount_tier, validate_partner_draft, Partner, PartnerDraft};

// Sales (Derived Data)
pub use sale::SaleRecord;

// Material Calculation
pub use material::{
    material_required, validate_material_input, CalculationError, MaterialCoefficients, MaterialInput,
};

// Reference Data
pub use reference::{LookupEntry, LookupTable};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("Mandatory field `{field}` must not be blank")]
    MissingField { field: &'static str },

    #[error("Invalid value for `{field}`: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
