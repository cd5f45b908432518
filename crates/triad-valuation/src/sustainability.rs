//! Sustainability index blending harmony, wisdom, and collateral backing.

use triad_core::constants::{
    COLLATERAL_REFERENCE, COLLATERAL_WEIGHT, HARMONY_WEIGHT, WISDOM_WEIGHT,
    ZERO_COLLATERAL_FACTOR,
};
use triad_core::decimal::Decimal;
use triad_core::errors::{DecimalError, ValuationResult};
use triad_core::models::{Harmony, SustainabilityIndex};

/// Collateral backing factor: 0.5 when no collateral is posted, otherwise
/// `min(1, collateral / $10,000)`.
pub fn collateral_factor(collateral: Decimal) -> ValuationResult<f64> {
    if collateral.is_zero() {
        return Ok(ZERO_COLLATERAL_FACTOR);
    }
    let ratio = collateral
        .checked_div(COLLATERAL_REFERENCE)
        .ok_or(DecimalError::Overflow)?;
    Ok(ratio.to_f64().min(1.0))
}

/// Sustainability index:
/// `clamp((harmony × 0.4 + wisdom × 0.3 + collateralFactor × 0.3) × 100, 0, 100)`.
pub fn index(
    harmony: Harmony,
    wisdom_coefficient: f64,
    collateral: Decimal,
) -> ValuationResult<SustainabilityIndex> {
    let collateral_factor = collateral_factor(collateral)?;
    let blended = harmony.value() * HARMONY_WEIGHT
        + wisdom_coefficient * WISDOM_WEIGHT
        + collateral_factor * COLLATERAL_WEIGHT;
    Ok(SustainabilityIndex::new(blended * 100.0))
}
