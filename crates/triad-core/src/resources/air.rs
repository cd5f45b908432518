use serde::{Deserialize, Serialize};

use crate::decimal::Decimal;

/// Air resource category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirCategory {
    Breathable,
    Industrial,
    Transportation,
    Communication,
    Spiritual,
}

/// A single air resource submitted for valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirResource {
    pub category: AirCategory,
    /// Volume in cubic meters.
    pub volume: Decimal,
    /// Purity on a 0–1 scale.
    pub purity: f64,
    /// Frequency in Hz. Meaningful only for communication and spiritual
    /// resources; ignored by the base formula otherwise.
    pub frequency: f64,
    /// Wind energy potential in kWh.
    pub wind_energy_potential: f64,
}

impl AirResource {
    /// Whether the frequency field participates in this resource's value.
    pub fn is_frequency_bearing(&self) -> bool {
        matches!(
            self.category,
            AirCategory::Communication | AirCategory::Spiritual
        )
    }
}
