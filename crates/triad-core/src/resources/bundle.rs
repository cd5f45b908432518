use serde::{Deserialize, Serialize};

use crate::decimal::Decimal;
use crate::resources::{AirResource, LandResource, WaterResource};

/// One valuation request: the three resource collections plus collateral
/// and the caller-supplied wisdom coefficient.
///
/// Collection order is irrelevant to the math and any collection may be
/// empty. The bundle is an immutable value constructed per request; the
/// engine holds no state between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ResourceBundle {
    pub land: Vec<LandResource>,
    pub air: Vec<AirResource>,
    pub water: Vec<WaterResource>,
    /// Collateral amount in USD.
    pub collateral: Decimal,
    /// Externally supplied quality coefficient, expected 0–1.
    pub wisdom_coefficient: f64,
}

impl ResourceBundle {
    /// True when all three resource collections are empty.
    pub fn is_empty(&self) -> bool {
        self.land.is_empty() && self.air.is_empty() && self.water.is_empty()
    }
}
