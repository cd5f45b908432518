use std::fmt;

use serde::{Deserialize, Serialize};

/// Harmony balance score clamped to [0.0, 1.0].
/// Measures how closely the land/air/water split matches the ideal mix.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Harmony(f64);

impl Harmony {
    pub const ZERO: Harmony = Harmony(0.0);
    pub const MAX: f64 = 1.0;

    /// Create a new Harmony, clamping to [0.0, 1.0]. Non-finite input
    /// collapses to 0 so intermediate NaN can never escape the score.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, Self::MAX))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Harmony {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// Sustainability index clamped to [0.0, 100.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct SustainabilityIndex(f64);

impl SustainabilityIndex {
    pub const ZERO: SustainabilityIndex = SustainabilityIndex(0.0);
    pub const MAX: f64 = 100.0;

    /// Band boundaries for [`SustainabilityRating`].
    pub const TRANSITIONING: f64 = 25.0;
    pub const SUSTAINABLE: f64 = 50.0;
    pub const REGENERATIVE: f64 = 75.0;

    /// Create a new index, clamping to [0.0, 100.0]. Non-finite input
    /// collapses to 0.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, Self::MAX))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Classify the index into its rating band.
    pub fn rating(self) -> SustainabilityRating {
        if self.0 < Self::TRANSITIONING {
            SustainabilityRating::Unsustainable
        } else if self.0 < Self::SUSTAINABLE {
            SustainabilityRating::Transitioning
        } else if self.0 < Self::REGENERATIVE {
            SustainabilityRating::Sustainable
        } else {
            SustainabilityRating::Regenerative
        }
    }
}

impl Default for SustainabilityIndex {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for SustainabilityIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Qualitative sustainability band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SustainabilityRating {
    Unsustainable,
    Transitioning,
    Sustainable,
    Regenerative,
}
