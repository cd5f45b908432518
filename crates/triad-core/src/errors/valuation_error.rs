use serde_json::{Map, Value};

use crate::decimal::Decimal;
use crate::errors::DecimalError;

/// Result alias used across the valuation engine.
pub type ValuationResult<T> = Result<T, ValuationError>;

/// Stable machine code for calculation failures.
pub const CODE_CALCULATION: &str = "LIQUIDITY_CALCULATION_ERROR";
/// Stable machine code for business-rule violations.
pub const CODE_COMPLIANCE: &str = "IRON_RULE_VIOLATION";
/// Stable machine code for the collateral shortfall variant.
pub const CODE_INSUFFICIENT_COLLATERAL: &str = "INSUFFICIENT_RHODIUM";

/// Valuation failure taxonomy.
///
/// Every variant carries enough context to reconstruct the failure without
/// re-running the calculation. Calculation faults are recoverable by
/// correcting the input; compliance faults require changing the request
/// itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValuationError {
    /// Arithmetic or precondition violation during valuation.
    #[error("liquidity calculation failed: {message}")]
    Calculation {
        message: String,
        context: Map<String, Value>,
    },

    /// Named business-rule breach on input metadata. Raised by the
    /// compliance layer above the engine; part of the boundary contract.
    #[error("iron rule violation: {rule}")]
    ComplianceViolation {
        rule: String,
        context: Map<String, Value>,
    },

    /// Collateral below the required floor, with both amounts attached
    /// for direct display.
    #[error("insufficient rhodium collateral: {available} available, {required} required")]
    InsufficientCollateral {
        required: Decimal,
        available: Decimal,
    },
}

impl ValuationError {
    /// Calculation failure without additional context.
    pub fn calculation(message: impl Into<String>) -> Self {
        Self::Calculation {
            message: message.into(),
            context: Map::new(),
        }
    }

    /// Calculation failure with a context map.
    pub fn calculation_with_context(
        message: impl Into<String>,
        context: Map<String, Value>,
    ) -> Self {
        Self::Calculation {
            message: message.into(),
            context,
        }
    }

    /// Compliance violation for a named rule.
    pub fn compliance(rule: impl Into<String>, context: Map<String, Value>) -> Self {
        Self::ComplianceViolation {
            rule: rule.into(),
            context,
        }
    }

    /// Stable machine-readable code for this failure kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Calculation { .. } => CODE_CALCULATION,
            Self::ComplianceViolation { .. } => CODE_COMPLIANCE,
            Self::InsufficientCollateral { .. } => CODE_INSUFFICIENT_COLLATERAL,
        }
    }

    /// Context map for this failure. For the collateral variant the map is
    /// synthesized from the attached amounts.
    pub fn context(&self) -> Map<String, Value> {
        match self {
            Self::Calculation { context, .. } | Self::ComplianceViolation { context, .. } => {
                context.clone()
            }
            Self::InsufficientCollateral {
                required,
                available,
            } => {
                let mut context = Map::new();
                context.insert("required".to_string(), Value::String(required.to_string()));
                context.insert(
                    "available".to_string(),
                    Value::String(available.to_string()),
                );
                context
            }
        }
    }
}

impl From<DecimalError> for ValuationError {
    fn from(err: DecimalError) -> Self {
        let mut context = Map::new();
        context.insert("kind".to_string(), Value::String("decimal".to_string()));
        Self::Calculation {
            message: err.to_string(),
            context,
        }
    }
}
