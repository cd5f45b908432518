pub mod defaults;
pub mod economic_config;

pub use economic_config::{EconomicConfig, IdealProportions};
