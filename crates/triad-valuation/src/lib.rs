//! # triad-valuation
//!
//! Deterministic valuation engine converting land, air, and water resource
//! collections into per-category liquidity figures, a harmony balance
//! score, and a sustainability index.
//!
//! The engine is a pure function of its input bundle and config: no I/O,
//! no logging, no state between calls. All monetary arithmetic runs on the
//! fixed-point [`triad_core::Decimal`] type; failures surface as
//! [`triad_core::ValuationError`], never as panics.

pub mod balance;
pub mod collateral;
pub mod engine;
pub mod factors;
pub mod sustainability;
pub mod validate;

pub use engine::{ValuationContext, ValuationEngine};
