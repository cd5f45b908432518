//! Collateral sufficiency against a computed total liquidity.

use triad_core::decimal::Decimal;
use triad_core::errors::{DecimalError, ValuationError, ValuationResult};
use triad_core::models::{CollateralAssessment, CollateralStatus};
use triad_core::EconomicConfig;

/// Required collateral: `total liquidity × collateral percentage`.
pub fn required_collateral(
    total_liquidity: Decimal,
    config: &EconomicConfig,
) -> ValuationResult<Decimal> {
    let percentage = Decimal::try_from_f64(config.collateral_percentage)?;
    total_liquidity
        .checked_mul(percentage)
        .ok_or_else(|| DecimalError::Overflow.into())
}

/// Assess a collateral position. The assessment never fails on a
/// shortfall; it reports `Insufficient` and leaves enforcement to
/// [`enforce`].
pub fn assess(
    total_liquidity: Decimal,
    available: Decimal,
    config: &EconomicConfig,
) -> ValuationResult<CollateralAssessment> {
    let required = required_collateral(total_liquidity, config)?;
    let required_ounces = if config.rhodium_price_per_ounce.is_zero() {
        Decimal::ZERO
    } else {
        required
            .checked_div(config.rhodium_price_per_ounce)
            .ok_or(DecimalError::Overflow)?
    };
    let status = if available < required {
        CollateralStatus::Insufficient
    } else {
        CollateralStatus::Verified
    };
    Ok(CollateralAssessment {
        required,
        available,
        required_ounces,
        status,
    })
}

/// Enforce the collateral floor. Exactly meeting the requirement passes;
/// anything below raises the typed shortfall error with both amounts.
pub fn enforce(
    total_liquidity: Decimal,
    available: Decimal,
    config: &EconomicConfig,
) -> ValuationResult<()> {
    let required = required_collateral(total_liquidity, config)?;
    if available < required {
        return Err(ValuationError::InsufficientCollateral {
            required,
            available,
        });
    }
    Ok(())
}
