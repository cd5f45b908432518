pub mod config_error;
pub mod decimal_error;
pub mod valuation_error;

pub use config_error::ConfigError;
pub use decimal_error::DecimalError;
pub use valuation_error::{ValuationError, ValuationResult};
