// src/services/partner_service.rs
use crate::domain::partner::{validate_partner_draft, Partner, PartnerDraft};
use crate::domain::reference::LookupTable;
use crate::domain::sale::SaleRecord;
use crate::error::{AppError, AppResult};
use crate::repositories::{PartnerRepository, ReferenceRepository, SalesHistoryRepository};
use std::sync::Arc;

/// Coordinates the partner screens: listing with derived discount data,
/// sales history, and validated create/update flows.
pub struct PartnerService {
    partner_repo: Arc<dyn PartnerRepository>,
    sales_repo: Arc<dyn SalesHistoryRepository>,
    reference_repo: Arc<dyn ReferenceRepository>,
}

impl PartnerService {
    pub fn new(
        partner_repo: Arc<dyn PartnerRepository>,
        sales_repo: Arc<dyn SalesHistoryRepository>,
        reference_repo: Arc<dyn ReferenceRepository>,
    ) -> Self {
        Self {
            partner_repo,
            sales_repo,
            reference_repo,
        }
    }

    pub fn list_partners(&self) -> AppResult<Vec<Partner>> {
        self.partner_repo.list_all().inspect_err(|e| {
            log::warn!("Failed to list partners: {}", e);
        })
    }

    pub fn get_partner(&self, partner_id: i64) -> AppResult<Option<Partner>> {
        self.partner_repo.get_by_id(partner_id)
    }

    /// Validates the draft and inserts a new partner.
    /// Storage is never touched when validation fails.
    pub fn create_partner(&self, draft: &PartnerDraft) -> AppResult<i64> {
        let draft = draft.normalized();
        validate_partner_draft(&draft).map_err(AppError::Domain)?;

        let id = self.partner_repo.create(&draft)?;
        log::info!("Created partner {} ({})", id, draft.name);
        Ok(id)
    }

    /// Validates the draft and updates an existing partner.
    /// `NotFound` when the record vanished concurrently.
    pub fn update_partner(&self, partner_id: i64, draft: &PartnerDraft) -> AppResult<()> {
        let draft = draft.normalized();
        validate_partner_draft(&draft).map_err(AppError::Domain)?;

        self.partner_repo.update(partner_id, &draft)?;
        log::info!("Updated partner {}", partner_id);
        Ok(())
    }

    /// Sale line items of a partner, newest first
    pub fn sales_history(&self, partner_id: i64) -> AppResult<Vec<SaleRecord>> {
        self.sales_repo.list_for_partner(partner_id)
    }

    /// Partner type reference set for the edit screen
    pub fn partner_types(&self) -> AppResult<LookupTable> {
        self.reference_repo.list_partner_types()
    }
}
