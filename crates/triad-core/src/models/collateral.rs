use serde::{Deserialize, Serialize};

use crate::decimal::Decimal;

/// Verification standing of a collateral position.
///
/// `Pending` is reserved for callers awaiting external verification; the
/// engine's own assessment only produces `Verified` or `Insufficient`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollateralStatus {
    Verified,
    Pending,
    Insufficient,
}

/// Collateral sufficiency assessment against a computed total liquidity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollateralAssessment {
    /// Required collateral: total liquidity × collateral percentage.
    pub required: Decimal,
    /// Collateral supplied by the caller.
    pub available: Decimal,
    /// Required amount expressed in rhodium ounces at the configured price.
    pub required_ounces: Decimal,
    pub status: CollateralStatus,
}

impl CollateralAssessment {
    pub fn is_sufficient(&self) -> bool {
        self.status != CollateralStatus::Insufficient
    }
}
