use triad_core::decimal::Decimal;
use triad_core::errors::{DecimalError, ValuationResult};
use triad_core::models::LandLiquidity;
use triad_core::resources::LandResource;
use triad_core::EconomicConfig;

use super::average;

/// Base land value: `Σ area × fertility × accessibility × landBaseMultiplier`.
/// An empty collection yields exactly zero.
pub fn base_value(
    resources: &[LandResource],
    config: &EconomicConfig,
) -> ValuationResult<Decimal> {
    let mut total = Decimal::ZERO;
    for resource in resources {
        let fertility = Decimal::try_from_f64(resource.fertility)?;
        let accessibility = Decimal::try_from_f64(resource.accessibility)?;
        let value = resource
            .area
            .checked_mul(fertility)
            .and_then(|v| v.checked_mul(accessibility))
            .and_then(|v| v.checked_mul(config.land_base_multiplier))
            .ok_or(DecimalError::Overflow)?;
        total = total.checked_add(value).ok_or(DecimalError::Overflow)?;
    }
    Ok(total)
}

/// Productivity multiplier: `0.5 + 0.3 × avg(fertility) + 0.2 × avg(accessibility)`.
/// Range 0.5 – 1.0 for in-range inputs.
pub fn productivity_multiplier(resources: &[LandResource]) -> f64 {
    let avg_fertility = average(resources, |r| r.fertility);
    let avg_accessibility = average(resources, |r| r.accessibility);
    0.5 + avg_fertility * 0.3 + avg_accessibility * 0.2
}

/// Sovereignty bonus: `(sovereign count / total) × 0.25`. Zero for an
/// empty collection.
pub fn sovereignty_bonus(resources: &[LandResource]) -> f64 {
    if resources.is_empty() {
        return 0.0;
    }
    let sovereign = resources.iter().filter(|r| r.is_sovereign()).count();
    (sovereign as f64 / resources.len() as f64) * 0.25
}

/// Wisdom bonus: `avg(wisdom_value) × 0.15`.
pub fn wisdom_bonus(resources: &[LandResource]) -> f64 {
    average(resources, |r| r.wisdom_value) * 0.15
}

/// Full land valuation:
/// `total = base × productivity × (1 + sovereignty) × (1 + wisdom)`.
pub fn calculate(
    resources: &[LandResource],
    config: &EconomicConfig,
) -> ValuationResult<LandLiquidity> {
    let base_value = base_value(resources, config)?;
    let productivity_multiplier = productivity_multiplier(resources);
    let sovereignty_bonus = sovereignty_bonus(resources);
    let wisdom_bonus = wisdom_bonus(resources);

    let productivity = Decimal::try_from_f64(productivity_multiplier)?;
    let sovereignty = Decimal::try_from_f64(1.0 + sovereignty_bonus)?;
    let wisdom = Decimal::try_from_f64(1.0 + wisdom_bonus)?;
    let total_liquidity = base_value
        .checked_mul(productivity)
        .and_then(|v| v.checked_mul(sovereignty))
        .and_then(|v| v.checked_mul(wisdom))
        .ok_or(DecimalError::Overflow)?;

    Ok(LandLiquidity {
        base_value,
        productivity_multiplier,
        sovereignty_bonus,
        wisdom_bonus,
        total_liquidity,
    })
}
