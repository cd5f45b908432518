use crate::decimal::Decimal;

/// Triad system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sustainability blend weights. The three weights sum to 1.
pub const HARMONY_WEIGHT: f64 = 0.4;
pub const WISDOM_WEIGHT: f64 = 0.3;
pub const COLLATERAL_WEIGHT: f64 = 0.3;

/// Collateral factor assigned when no collateral is posted at all.
pub const ZERO_COLLATERAL_FACTOR: f64 = 0.5;

/// Reference collateral amount (USD) against which the collateral factor
/// normalizes.
pub const COLLATERAL_REFERENCE: Decimal = Decimal::from_int(10_000);
