use serde::{Deserialize, Serialize};

use crate::decimal::Decimal;

/// Land resource category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandCategory {
    Agricultural,
    Residential,
    Commercial,
    Industrial,
    Sacred,
}

/// Sovereignty standing of a land holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SovereigntyStatus {
    Sovereign,
    Colonized,
    Transitioning,
}

/// A single land holding submitted for valuation.
///
/// Quantities are non-negative by contract; the 0–1 scale fields are the
/// caller's responsibility to clamp or reject at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandResource {
    pub category: LandCategory,
    /// Area in square meters.
    pub area: Decimal,
    /// Fertility on a 0–1 scale.
    pub fertility: f64,
    /// Accessibility on a 0–1 scale.
    pub accessibility: f64,
    pub sovereignty: SovereigntyStatus,
    /// Stewardship wisdom rating, expected 0–1.
    pub wisdom_value: f64,
}

impl LandResource {
    pub fn is_sovereign(&self) -> bool {
        self.sovereignty == SovereigntyStatus::Sovereign
    }
}
