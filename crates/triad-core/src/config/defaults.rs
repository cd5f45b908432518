use crate::decimal::Decimal;

/// 1.2 — land appreciation factor.
pub const DEFAULT_LAND_BASE_MULTIPLIER: Decimal = Decimal::from_raw(1_200_000_000);
/// 0.8 — air commodity factor.
pub const DEFAULT_AIR_BASE_MULTIPLIER: Decimal = Decimal::from_raw(800_000_000);
/// 1.5 — water scarcity premium.
pub const DEFAULT_WATER_BASE_MULTIPLIER: Decimal = Decimal::from_raw(1_500_000_000);

/// Collateral floor as a fraction of total liquidity.
pub const DEFAULT_COLLATERAL_PERCENTAGE: f64 = 0.15;

/// Ideal proportional mix across the three categories.
pub const DEFAULT_IDEAL_LAND_PROPORTION: f64 = 0.40;
pub const DEFAULT_IDEAL_AIR_PROPORTION: f64 = 0.20;
pub const DEFAULT_IDEAL_WATER_PROPORTION: f64 = 0.40;

/// Rhodium spot price in USD per ounce used for ounce equivalents.
pub const DEFAULT_RHODIUM_PRICE_PER_OUNCE: Decimal = Decimal::from_int(4850);
