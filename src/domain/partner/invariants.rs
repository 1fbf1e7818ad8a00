use super::entity::PartnerDraft;
use crate::domain::{DomainError, DomainResult};

/// Validates a partner draft before it may touch storage.
/// Reports the first unmet rule, in form order.
pub fn validate_partner_draft(draft: &PartnerDraft) -> DomainResult<()> {
    validate_mandatory("name", &draft.name)?;
    validate_type_selection(draft.type_id)?;
    validate_mandatory("director", &draft.director)?;
    validate_mandatory("phone", &draft.phone)?;
    validate_mandatory("rating", &draft.rating)?;
    Ok(())
}

fn validate_mandatory(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField { field });
    }
    Ok(())
}

/// A partner type must be selected from the reference set
fn validate_type_selection(type_id: i64) -> DomainResult<()> {
    if type_id <= 0 {
        return Err(DomainError::InvalidField {
            field: "type_id",
            reason: "a partner type must be selected".to_string(),
        });
    }
    Ok(())
}

/// Invariants that must hold true for the Partner domain:
///
/// 1. name, type, director, phone, rating are mandatory on save
/// 2. email, address, inn may be absent (stored as NULL)
/// 3. Identity is immutable once assigned
/// 4. total_sales is derived, never written by this core
/// 5. Partner types are read-only reference data
