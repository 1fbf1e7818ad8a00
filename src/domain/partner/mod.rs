// src/domain/partner/mod.rs

pub mod entity;
pub mod invariants;

pub use entity::{discount_tier, Partner, PartnerDraft};
pub use invariants::validate_partner_draft;
