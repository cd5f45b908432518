//! Input validation owned by the aggregator.
//!
//! Only the documented non-negativity preconditions are checked here; the
//! 0–1 scale fields are clamped or rejected at the caller's boundary and
//! the engine does not re-validate them.

use serde_json::{Map, Value};
use triad_core::decimal::Decimal;
use triad_core::errors::{ValuationError, ValuationResult};
use triad_core::resources::ResourceBundle;

/// Check every ≥0 precondition on a bundle. Violations surface as the
/// calculation-failure kind carrying the offending field, value, and
/// resource index.
pub fn bundle(bundle: &ResourceBundle) -> ValuationResult<()> {
    for (index, resource) in bundle.land.iter().enumerate() {
        ensure_decimal("land.area", Some(index), resource.area)?;
    }
    for (index, resource) in bundle.air.iter().enumerate() {
        ensure_decimal("air.volume", Some(index), resource.volume)?;
        ensure_f64("air.frequency", Some(index), resource.frequency)?;
        ensure_f64(
            "air.wind_energy_potential",
            Some(index),
            resource.wind_energy_potential,
        )?;
    }
    for (index, resource) in bundle.water.iter().enumerate() {
        ensure_decimal("water.volume", Some(index), resource.volume)?;
        ensure_decimal("water.flow_rate", Some(index), resource.flow_rate)?;
    }
    ensure_decimal("collateral", None, bundle.collateral)?;
    Ok(())
}

fn ensure_decimal(field: &str, index: Option<usize>, value: Decimal) -> ValuationResult<()> {
    if value.is_negative() {
        return Err(negative_quantity(field, index, value.to_string()));
    }
    Ok(())
}

fn ensure_f64(field: &str, index: Option<usize>, value: f64) -> ValuationResult<()> {
    if value < 0.0 {
        return Err(negative_quantity(field, index, value.to_string()));
    }
    Ok(())
}

fn negative_quantity(field: &str, index: Option<usize>, value: String) -> ValuationError {
    let mut context = Map::new();
    context.insert("field".to_string(), Value::String(field.to_string()));
    context.insert("value".to_string(), Value::String(value));
    if let Some(index) = index {
        context.insert("index".to_string(), Value::from(index));
    }
    ValuationError::calculation_with_context(
        format!("negative quantity for {field}"),
        context,
    )
}
