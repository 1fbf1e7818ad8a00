// src/services/material_service.rs
use crate::domain::material::{
    material_required, validate_material_input, CalculationError, MaterialCoefficients,
    MaterialInput,
};
use crate::domain::reference::LookupTable;
use crate::error::AppResult;
use crate::repositories::ReferenceRepository;
use std::sync::Arc;

/// Resolves the two reference coefficients and runs the pure
/// material-requirement calculation. Calculation failures are values
/// (`AppError::Calculation`), never panics.
pub struct MaterialService {
    reference_repo: Arc<dyn ReferenceRepository>,
}

impl MaterialService {
    pub fn new(reference_repo: Arc<dyn ReferenceRepository>) -> Self {
        Self { reference_repo }
    }

    pub fn calculate(&self, input: &MaterialInput) -> AppResult<u64> {
        // Invalid requests are rejected before any lookup
        validate_material_input(input)?;

        let product_coefficient = self.resolve_product_coefficient(input.product_type_id)?;
        let defect_percent = self.resolve_defect_percent(input.material_type_id)?;

        let result = material_required(
            input,
            MaterialCoefficients {
                product_coefficient,
                defect_percent,
            },
        )?;

        Ok(result)
    }

    /// Product type reference set for the calculation screen
    pub fn product_types(&self) -> AppResult<LookupTable> {
        self.reference_repo.list_product_types()
    }

    /// Material type reference set for the calculation screen
    pub fn material_types(&self) -> AppResult<LookupTable> {
        self.reference_repo.list_material_types()
    }

    /// The legacy schema stores the coefficient as text; unparsable or
    /// missing values are calculation failures, not panics.
    fn resolve_product_coefficient(&self, product_type_id: i64) -> AppResult<f64> {
        let raw = self.reference_repo.product_coefficient(product_type_id)?;

        let parsed = raw.as_deref().and_then(Self::parse_number);
        match parsed {
            Some(value) => Ok(value),
            None => {
                log::warn!(
                    "Unusable coefficient {:?} for product type {}",
                    raw,
                    product_type_id
                );
                Err(CalculationError::MissingProductCoefficient(product_type_id).into())
            }
        }
    }

    fn resolve_defect_percent(&self, material_type_id: i64) -> AppResult<f64> {
        let raw = self.reference_repo.defect_percent(material_type_id)?;

        let parsed = raw.as_deref().and_then(Self::parse_number);
        match parsed {
            Some(value) => Ok(value),
            None => {
                log::warn!(
                    "Unusable defect percentage {:?} for material type {}",
                    raw,
                    material_type_id
                );
                Err(CalculationError::MissingDefectPercent(material_type_id).into())
            }
        }
    }

    fn parse_number(raw: &str) -> Option<f64> {
        // Legacy rows use both '.' and ',' as the decimal separator
        raw.trim().replace(',', ".").parse::<f64>().ok()
    }
}
