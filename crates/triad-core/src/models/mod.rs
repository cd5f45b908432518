pub mod category_liquidity;
pub mod collateral;
pub mod liquidity_components;
pub mod scores;

pub use category_liquidity::{AirLiquidity, LandLiquidity, WaterLiquidity};
pub use collateral::{CollateralAssessment, CollateralStatus};
pub use liquidity_components::LiquidityComponents;
pub use scores::{Harmony, SustainabilityIndex, SustainabilityRating};
