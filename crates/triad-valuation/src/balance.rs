//! Harmony balance across the three category totals.

use triad_core::config::IdealProportions;
use triad_core::decimal::Decimal;
use triad_core::errors::{DecimalError, ValuationResult};
use triad_core::models::Harmony;
use triad_core::EconomicConfig;

/// Harmony of the land/air/water split against the configured ideal mix.
///
/// ```text
/// harmony = clamp(1 − Σ |proportion − ideal| / 2, 0, 1)
/// ```
///
/// A zero total is a defined result (harmony 0), not a fault.
pub fn harmony(
    land_total: Decimal,
    air_total: Decimal,
    water_total: Decimal,
    config: &EconomicConfig,
) -> ValuationResult<Harmony> {
    let total = land_total
        .checked_add(air_total)
        .and_then(|t| t.checked_add(water_total))
        .ok_or(DecimalError::Overflow)?;
    if total.is_zero() {
        return Ok(Harmony::ZERO);
    }

    let land_proportion = proportion(land_total, total)?;
    let air_proportion = proportion(air_total, total)?;
    let water_proportion = proportion(water_total, total)?;

    let ideal = &config.ideal_proportions;
    let total_deviation = (land_proportion - ideal.land).abs()
        + (air_proportion - ideal.air).abs()
        + (water_proportion - ideal.water).abs();

    Ok(Harmony::new(
        1.0 - total_deviation / IdealProportions::DEVIATION_BUDGET,
    ))
}

fn proportion(part: Decimal, total: Decimal) -> ValuationResult<f64> {
    Ok(part
        .checked_div(total)
        .ok_or(DecimalError::Overflow)?
        .to_f64())
}
