use triad_core::decimal::Decimal;
use triad_core::errors::{DecimalError, ValuationResult};
use triad_core::models::WaterLiquidity;
use triad_core::resources::WaterResource;
use triad_core::EconomicConfig;

use super::average;

/// L/s normalizer inside each resource's contribution.
const FLOW_NORMALIZER: Decimal = Decimal::from_int(100);
/// Cap and divisor for the collection-wide flow bonus.
const FLOW_BONUS_CAP: f64 = 0.5;
const FLOW_BONUS_DIVISOR: f64 = 10_000.0;

/// Base water value:
/// `Σ volume × purity × (1 + flowRate/100) × waterBaseMultiplier`.
pub fn base_value(
    resources: &[WaterResource],
    config: &EconomicConfig,
) -> ValuationResult<Decimal> {
    let mut total = Decimal::ZERO;
    for resource in resources {
        let purity = Decimal::try_from_f64(resource.purity)?;
        let flow_factor = resource
            .flow_rate
            .checked_div(FLOW_NORMALIZER)
            .and_then(|f| Decimal::ONE.checked_add(f))
            .ok_or(DecimalError::Overflow)?;
        let value = resource
            .volume
            .checked_mul(purity)
            .and_then(|v| v.checked_mul(flow_factor))
            .and_then(|v| v.checked_mul(config.water_base_multiplier))
            .ok_or(DecimalError::Overflow)?;
        total = total.checked_add(value).ok_or(DecimalError::Overflow)?;
    }
    Ok(total)
}

/// Purity multiplier: `0.6 + 0.4 × avg(purity)`.
pub fn purity_multiplier(resources: &[WaterResource]) -> f64 {
    0.6 + average(resources, |r| r.purity) * 0.4
}

/// Flow rate bonus: `min(0.5, Σ flowRate / 10000)`.
pub fn flow_rate_bonus(resources: &[WaterResource]) -> ValuationResult<f64> {
    let mut total_flow = Decimal::ZERO;
    for resource in resources {
        total_flow = total_flow
            .checked_add(resource.flow_rate)
            .ok_or(DecimalError::Overflow)?;
    }
    Ok((total_flow.to_f64() / FLOW_BONUS_DIVISOR).min(FLOW_BONUS_CAP))
}

/// Sacred value bonus: `avg(spiritual_significance) × 0.2`.
pub fn sacred_value_bonus(resources: &[WaterResource]) -> f64 {
    average(resources, |r| r.spiritual_significance) * 0.2
}

/// Full water valuation:
/// `total = base × purity × (1 + flowBonus) × (1 + sacredBonus)`.
pub fn calculate(
    resources: &[WaterResource],
    config: &EconomicConfig,
) -> ValuationResult<WaterLiquidity> {
    let base_value = base_value(resources, config)?;
    let purity_multiplier = purity_multiplier(resources);
    let flow_rate_bonus = flow_rate_bonus(resources)?;
    let sacred_value_bonus = sacred_value_bonus(resources);

    let purity = Decimal::try_from_f64(purity_multiplier)?;
    let flow = Decimal::try_from_f64(1.0 + flow_rate_bonus)?;
    let sacred = Decimal::try_from_f64(1.0 + sacred_value_bonus)?;
    let total_liquidity = base_value
        .checked_mul(purity)
        .and_then(|v| v.checked_mul(flow))
        .and_then(|v| v.checked_mul(sacred))
        .ok_or(DecimalError::Overflow)?;

    Ok(WaterLiquidity {
        base_value,
        purity_multiplier,
        flow_rate_bonus,
        sacred_value_bonus,
        total_liquidity,
    })
}
