use triad_core::decimal::Decimal;
use triad_core::errors::{DecimalError, ValuationResult};
use triad_core::models::AirLiquidity;
use triad_core::resources::AirResource;
use triad_core::EconomicConfig;

use super::average;

/// Hz normalizer applied to frequency-bearing resources.
const FREQUENCY_NORMALIZER: f64 = 1000.0;
/// kWh normalizer for the additive wind-energy term.
const WIND_ENERGY_NORMALIZER: f64 = 1000.0;
/// Cap and divisor for the energy potential bonus.
const ENERGY_BONUS_CAP: f64 = 1000.0;
const ENERGY_BONUS_DIVISOR: f64 = 100.0;

/// Base air value. Each resource contributes
/// `volume × purity × airBaseMultiplier`, further multiplied by
/// `frequency / 1000` for communication and spiritual resources, plus an
/// additive `wind_energy_potential / 1000` term.
pub fn base_value(resources: &[AirResource], config: &EconomicConfig) -> ValuationResult<Decimal> {
    let mut total = Decimal::ZERO;
    for resource in resources {
        let purity = Decimal::try_from_f64(resource.purity)?;
        let mut value = resource
            .volume
            .checked_mul(purity)
            .and_then(|v| v.checked_mul(config.air_base_multiplier))
            .ok_or(DecimalError::Overflow)?;

        if resource.is_frequency_bearing() {
            let frequency = Decimal::try_from_f64(resource.frequency / FREQUENCY_NORMALIZER)?;
            value = value.checked_mul(frequency).ok_or(DecimalError::Overflow)?;
        }

        let wind_term =
            Decimal::try_from_f64(resource.wind_energy_potential / WIND_ENERGY_NORMALIZER)?;
        value = value.checked_add(wind_term).ok_or(DecimalError::Overflow)?;

        total = total.checked_add(value).ok_or(DecimalError::Overflow)?;
    }
    Ok(total)
}

/// Purity multiplier: `0.5 + 0.5 × avg(purity)`.
pub fn purity_multiplier(resources: &[AirResource]) -> f64 {
    0.5 + average(resources, |r| r.purity) * 0.5
}

/// Energy potential bonus: `min(1000, Σ wind_energy_potential / 100)`.
pub fn energy_potential_bonus(resources: &[AirResource]) -> f64 {
    let total: f64 = resources.iter().map(|r| r.wind_energy_potential).sum();
    (total / ENERGY_BONUS_DIVISOR).min(ENERGY_BONUS_CAP)
}

/// Communication value: `avg(frequency) / 1000` over communication and
/// spiritual resources only; 0 when there are none.
pub fn communication_value(resources: &[AirResource]) -> f64 {
    let bearing: Vec<&AirResource> = resources
        .iter()
        .filter(|r| r.is_frequency_bearing())
        .collect();
    if bearing.is_empty() {
        return 0.0;
    }
    let avg = bearing.iter().map(|r| r.frequency).sum::<f64>() / bearing.len() as f64;
    avg / FREQUENCY_NORMALIZER
}

/// Full air valuation:
/// `total = base × purityMultiplier + energyBonus + communicationValue`.
///
/// Unlike land and water, the energy and communication terms add to the
/// purity-scaled base rather than scaling it.
pub fn calculate(
    resources: &[AirResource],
    config: &EconomicConfig,
) -> ValuationResult<AirLiquidity> {
    let base_value = base_value(resources, config)?;
    let purity_multiplier = purity_multiplier(resources);
    let energy_potential_bonus = energy_potential_bonus(resources);
    let communication_value = communication_value(resources);

    let purity = Decimal::try_from_f64(purity_multiplier)?;
    let energy = Decimal::try_from_f64(energy_potential_bonus)?;
    let communication = Decimal::try_from_f64(communication_value)?;
    let total_liquidity = base_value
        .checked_mul(purity)
        .and_then(|v| v.checked_add(energy))
        .and_then(|v| v.checked_add(communication))
        .ok_or(DecimalError::Overflow)?;

    Ok(AirLiquidity {
        base_value,
        purity_multiplier,
        energy_potential_bonus,
        communication_value,
        total_liquidity,
    })
}
