use triad_core::decimal::Decimal;
use triad_core::errors::{DecimalError, ValuationResult};
use triad_core::models::{CollateralAssessment, LiquidityComponents};
use triad_core::resources::ResourceBundle;
use triad_core::EconomicConfig;

use crate::{balance, collateral, factors, sustainability, validate};

/// Per-call options for one valuation pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValuationContext {
    /// When set, the computed total liquidity must be backed by at least
    /// the configured collateral percentage or the call fails with the
    /// typed shortfall error.
    pub require_collateral: bool,
}

/// Valuation engine: a pure function from a [`ResourceBundle`] to
/// [`LiquidityComponents`] under an injected [`EconomicConfig`].
///
/// Stages run in fixed order: category valuation, balance, sustainability,
/// then aggregation with optional collateral enforcement. The engine holds
/// no state between calls and never mutates its input.
pub struct ValuationEngine {
    config: EconomicConfig,
}

impl ValuationEngine {
    /// Create an engine with the default economic parameters.
    pub fn new() -> Self {
        Self {
            config: EconomicConfig::default(),
        }
    }

    /// Create an engine with alternate economic parameters.
    pub fn with_config(config: EconomicConfig) -> Self {
        Self { config }
    }

    /// The economic parameters in effect.
    pub fn config(&self) -> &EconomicConfig {
        &self.config
    }

    /// Value a bundle with default options (no collateral enforcement).
    pub fn calculate(&self, bundle: &ResourceBundle) -> ValuationResult<LiquidityComponents> {
        self.calculate_with_context(bundle, &ValuationContext::default())
    }

    /// Value a bundle under explicit per-call options.
    pub fn calculate_with_context(
        &self,
        bundle: &ResourceBundle,
        ctx: &ValuationContext,
    ) -> ValuationResult<LiquidityComponents> {
        validate::bundle(bundle)?;

        let land = factors::land::calculate(&bundle.land, &self.config)?;
        let air = factors::air::calculate(&bundle.air, &self.config)?;
        let water = factors::water::calculate(&bundle.water, &self.config)?;

        let harmony_balance = balance::harmony(
            land.total_liquidity,
            air.total_liquidity,
            water.total_liquidity,
            &self.config,
        )?;
        let sustainability_index = sustainability::index(
            harmony_balance,
            bundle.wisdom_coefficient,
            bundle.collateral,
        )?;

        if ctx.require_collateral {
            let total = land
                .total_liquidity
                .checked_add(air.total_liquidity)
                .and_then(|t| t.checked_add(water.total_liquidity))
                .ok_or(DecimalError::Overflow)?;
            collateral::enforce(total, bundle.collateral, &self.config)?;
        }

        Ok(LiquidityComponents {
            land,
            air,
            water,
            harmony_balance,
            sustainability_index,
        })
    }

    /// Assess a collateral position against already-computed components.
    pub fn assess_collateral(
        &self,
        components: &LiquidityComponents,
        available: Decimal,
    ) -> ValuationResult<CollateralAssessment> {
        collateral::assess(components.total_liquidity(), available, &self.config)
    }

    /// Value a batch of bundles under one set of options. Each bundle
    /// succeeds or fails independently.
    pub fn process_batch(
        &self,
        bundles: &[ResourceBundle],
        ctx: &ValuationContext,
    ) -> Vec<ValuationResult<LiquidityComponents>> {
        bundles
            .iter()
            .map(|bundle| self.calculate_with_context(bundle, ctx))
            .collect()
    }
}

impl Default for ValuationEngine {
    fn default() -> Self {
        Self::new()
    }
}
