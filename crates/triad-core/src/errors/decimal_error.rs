/// Faults raised by the fixed-point decimal type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecimalError {
    #[error("empty decimal string")]
    Empty,

    #[error("invalid decimal string: {input:?}")]
    Invalid { input: String },

    #[error("decimal precision exceeded: {digits} fractional digits (max 9)")]
    PrecisionExceeded { digits: usize },

    #[error("decimal mantissa overflow")]
    Overflow,

    #[error("non-finite value cannot be represented as a decimal")]
    NonFinite,
}
