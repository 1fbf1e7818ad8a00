// src/domain/material.rs
//
// Material requirement calculation.
//
// Pure arithmetic over caller inputs and two reference coefficients.
// Failures are values, never panics: a caller must treat `Err` as
// "no result", not as zero.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Caller-supplied inputs to a material requirement calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialInput {
    /// Product type reference id (positive)
    pub product_type_id: i64,

    /// Material type reference id (positive)
    pub material_type_id: i64,

    /// Number of product units to manufacture (positive)
    pub unit_count: i64,

    /// First per-unit shape parameter (positive)
    pub param1: f64,

    /// Second per-unit shape parameter (positive)
    pub param2: f64,
}

/// Reference coefficients resolved from the product and material type tables.
#[derive(Debug, Clone, Copy)]
pub struct MaterialCoefficients {
    /// Multiplier for the product type (must be positive)
    pub product_coefficient: f64,

    /// Expected defect rate in percent (must be non-negative)
    pub defect_percent: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum CalculationError {
    #[error("`{0}` must be positive")]
    NonPositiveInput(&'static str),

    #[error("No usable coefficient for product type {0}")]
    MissingProductCoefficient(i64),

    #[error("No usable defect percentage for material type {0}")]
    MissingDefectPercent(i64),

    #[error("Result is not representable as a material quantity")]
    Unrepresentable,
}

/// Rejects any non-positive calculation input. Runs before the
/// coefficient lookups so invalid requests never touch the database.
pub fn validate_material_input(input: &MaterialInput) -> Result<(), CalculationError> {
    if input.product_type_id <= 0 {
        return Err(CalculationError::NonPositiveInput("product_type_id"));
    }
    if input.material_type_id <= 0 {
        return Err(CalculationError::NonPositiveInput("material_type_id"));
    }
    if input.unit_count <= 0 {
        return Err(CalculationError::NonPositiveInput("unit_count"));
    }
    if !(input.param1 > 0.0) {
        return Err(CalculationError::NonPositiveInput("param1"));
    }
    if !(input.param2 > 0.0) {
        return Err(CalculationError::NonPositiveInput("param2"));
    }
    Ok(())
}

/// Computes the integer number of material units required to produce
/// `unit_count` product units, adjusted for the expected defect rate
/// and rounded up.
///
/// per_unit    = param1 * param2 * product_coefficient
/// total       = per_unit * unit_count
/// with_defect = total * (1 + defect_percent / 100)
/// result      = ceil(with_defect)
pub fn material_required(
    input: &MaterialInput,
    coefficients: MaterialCoefficients,
) -> Result<u64, CalculationError> {
    validate_material_input(input)?;

    if !(coefficients.product_coefficient > 0.0) {
        return Err(CalculationError::MissingProductCoefficient(
            input.product_type_id,
        ));
    }
    if !(coefficients.defect_percent >= 0.0) {
        return Err(CalculationError::MissingDefectPercent(
            input.material_type_id,
        ));
    }

    let per_unit = input.param1 * input.param2 * coefficients.product_coefficient;
    let total = per_unit * input.unit_count as f64;
    let with_defect = total * (1.0 + coefficients.defect_percent / 100.0);

    if !with_defect.is_finite() || with_defect <= 0.0 {
        return Err(CalculationError::Unrepresentable);
    }

    let rounded = with_defect.ceil();
    if rounded > u64::MAX as f64 {
        return Err(CalculationError::Unrepresentable);
    }

    Ok(rounded as u64)
}
