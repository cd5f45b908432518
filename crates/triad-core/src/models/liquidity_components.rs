use serde::{Deserialize, Serialize};

use crate::decimal::Decimal;
use crate::models::category_liquidity::{AirLiquidity, LandLiquidity, WaterLiquidity};
use crate::models::scores::{Harmony, SustainabilityIndex};

/// Complete output of one valuation pass: the three category results plus
/// the two normalized scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityComponents {
    pub land: LandLiquidity,
    pub air: AirLiquidity,
    pub water: WaterLiquidity,
    pub harmony_balance: Harmony,
    pub sustainability_index: SustainabilityIndex,
}

impl LiquidityComponents {
    /// Sum of the three category totals. Saturates at the mantissa range;
    /// the engine itself computes the sum checked before enforcement.
    pub fn total_liquidity(&self) -> Decimal {
        self.land
            .total_liquidity
            .saturating_add(self.air.total_liquidity)
            .saturating_add(self.water.total_liquidity)
    }
}
