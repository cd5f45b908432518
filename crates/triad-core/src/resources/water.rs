use serde::{Deserialize, Serialize};

use crate::decimal::Decimal;

/// Water resource category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterCategory {
    Drinking,
    Irrigation,
    Industrial,
    Sacred,
    Transportation,
}

/// A single water resource submitted for valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterResource {
    pub category: WaterCategory,
    /// Volume in liters.
    pub volume: Decimal,
    /// Purity on a 0–1 scale.
    pub purity: f64,
    /// Flow rate in liters per second.
    pub flow_rate: Decimal,
    /// Spiritual significance on a 0–1 scale.
    pub spiritual_significance: f64,
}
