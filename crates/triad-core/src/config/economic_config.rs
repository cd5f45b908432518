use serde::{Deserialize, Serialize};

use super::defaults;
use crate::decimal::Decimal;
use crate::errors::ConfigError;

/// Ideal proportional mix of the three category totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdealProportions {
    pub land: f64,
    pub air: f64,
    pub water: f64,
}

impl IdealProportions {
    /// Maximum possible summed deviation across three proportions that
    /// each sum to 1; divisor of the harmony formula.
    pub const DEVIATION_BUDGET: f64 = 2.0;
}

impl Default for IdealProportions {
    fn default() -> Self {
        Self {
            land: defaults::DEFAULT_IDEAL_LAND_PROPORTION,
            air: defaults::DEFAULT_IDEAL_AIR_PROPORTION,
            water: defaults::DEFAULT_IDEAL_WATER_PROPORTION,
        }
    }
}

/// Economic parameters consumed by the valuation engine.
///
/// Injectable so tests and deployments can run with alternate economic
/// parameters. Decimal fields are written as decimal strings in TOML and
/// JSON (`land_base_multiplier = "1.2"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomicConfig {
    pub land_base_multiplier: Decimal,
    pub air_base_multiplier: Decimal,
    pub water_base_multiplier: Decimal,
    /// Collateral floor as a fraction of total liquidity.
    pub collateral_percentage: f64,
    pub ideal_proportions: IdealProportions,
    /// USD per ounce, for expressing required collateral in metal.
    pub rhodium_price_per_ounce: Decimal,
}

impl Default for EconomicConfig {
    fn default() -> Self {
        Self {
            land_base_multiplier: defaults::DEFAULT_LAND_BASE_MULTIPLIER,
            air_base_multiplier: defaults::DEFAULT_AIR_BASE_MULTIPLIER,
            water_base_multiplier: defaults::DEFAULT_WATER_BASE_MULTIPLIER,
            collateral_percentage: defaults::DEFAULT_COLLATERAL_PERCENTAGE,
            ideal_proportions: IdealProportions::default(),
            rhodium_price_per_ounce: defaults::DEFAULT_RHODIUM_PRICE_PER_OUNCE,
        }
    }
}

impl EconomicConfig {
    /// Parse a config from a TOML document. Missing fields fall back to
    /// defaults; present fields are validated.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.collateral_percentage.is_finite() && self.collateral_percentage >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "collateral_percentage",
                reason: format!("must be a non-negative number, got {}", self.collateral_percentage),
            });
        }
        let p = &self.ideal_proportions;
        for (field, value) in [
            ("ideal_proportions.land", p.land),
            ("ideal_proportions.air", p.air),
            ("ideal_proportions.water", p.water),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a non-negative number, got {value}"),
                });
            }
        }
        Ok(())
    }
}
