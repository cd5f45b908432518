//! # triad-core
//!
//! Foundation crate for the Triad valuation system.
//! Defines the fixed-point decimal type, resource and liquidity types,
//! errors, config, and constants. The valuation engine crate depends on
//! this; this crate depends on nothing but serde and thiserror.

pub mod config;
pub mod constants;
pub mod decimal;
pub mod errors;
pub mod models;
pub mod resources;

// Re-export the most commonly used types at the crate root.
pub use config::{EconomicConfig, IdealProportions};
pub use decimal::Decimal;
pub use errors::{ValuationError, ValuationResult};
pub use models::{
    AirLiquidity, CollateralAssessment, CollateralStatus, Harmony, LandLiquidity,
    LiquidityComponents, SustainabilityIndex, SustainabilityRating, WaterLiquidity,
};
pub use resources::{AirResource, LandResource, ResourceBundle, WaterResource};
