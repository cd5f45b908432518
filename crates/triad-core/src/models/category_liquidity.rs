use serde::{Deserialize, Serialize};

use crate::decimal::Decimal;

/// Land valuation result with the intermediate modifiers that produced it.
///
/// `total_liquidity = base_value × productivity_multiplier
///   × (1 + sovereignty_bonus) × (1 + wisdom_bonus)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandLiquidity {
    pub base_value: Decimal,
    pub productivity_multiplier: f64,
    pub sovereignty_bonus: f64,
    pub wisdom_bonus: f64,
    pub total_liquidity: Decimal,
}

/// Air valuation result.
///
/// Unlike land and water, the air total mixes multiplicative and additive
/// composition:
/// `total_liquidity = base_value × purity_multiplier
///   + energy_potential_bonus + communication_value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirLiquidity {
    pub base_value: Decimal,
    pub purity_multiplier: f64,
    pub energy_potential_bonus: f64,
    pub communication_value: f64,
    pub total_liquidity: Decimal,
}

/// Water valuation result.
///
/// `total_liquidity = base_value × purity_multiplier
///   × (1 + flow_rate_bonus) × (1 + sacred_value_bonus)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterLiquidity {
    pub base_value: Decimal,
    pub purity_multiplier: f64,
    pub flow_rate_bonus: f64,
    pub sacred_value_bonus: f64,
    pub total_liquidity: Decimal,
}
