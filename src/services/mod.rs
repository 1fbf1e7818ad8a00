// src/services/mod.rs
//
// Service layer
//
// Services coordinate domain validation, repositories and logging.
// They are the operations a presentation layer calls.

pub mod material_service;
pub mod partner_service;

pub use material_service::MaterialService;
pub use partner_service::PartnerService;
