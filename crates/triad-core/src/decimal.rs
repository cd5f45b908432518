//! Fixed-point decimal arithmetic for monetary and physical quantities.
//!
//! All monetary values in the system flow through [`Decimal`] rather than
//! binary floating point, so multiplicative chains stay exact and
//! bit-identical inputs produce bit-identical outputs. The type is an
//! immutable value: every operation returns a new instance.

use std::fmt;
use std::str::FromStr;

use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::DecimalError;

/// Number of fractional decimal digits carried by [`Decimal`].
pub const SCALE: u32 = 9;

/// Raw mantissa units per whole unit (10^SCALE).
const ONE_RAW: i128 = 1_000_000_000;

/// Fixed-point decimal backed by an `i128` mantissa at 9 decimal places.
///
/// Arithmetic is checked: operations that could overflow return `Option`
/// and the caller decides how to surface the fault. Multiplication and
/// division truncate toward zero at the 9th fractional digit.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimal {
    raw: i128,
}

impl Decimal {
    pub const ZERO: Decimal = Decimal { raw: 0 };
    pub const ONE: Decimal = Decimal { raw: ONE_RAW };
    pub const MAX: Decimal = Decimal { raw: i128::MAX };
    pub const MIN: Decimal = Decimal { raw: i128::MIN };

    /// Construct from a raw mantissa (value × 10^9).
    pub const fn from_raw(raw: i128) -> Self {
        Self { raw }
    }

    /// Construct from a whole number of units.
    pub const fn from_int(value: i64) -> Self {
        Self {
            raw: value as i128 * ONE_RAW,
        }
    }

    /// Raw mantissa (value × 10^9).
    pub const fn raw(self) -> i128 {
        self.raw
    }

    /// Convert from `f64`, rounding half-away-from-zero at 9 decimal
    /// places. Rejects non-finite input and values outside the mantissa
    /// range.
    pub fn try_from_f64(value: f64) -> Result<Self, DecimalError> {
        if !value.is_finite() {
            return Err(DecimalError::NonFinite);
        }
        let scaled = (value * ONE_RAW as f64).round();
        if scaled >= i128::MAX as f64 || scaled <= i128::MIN as f64 {
            return Err(DecimalError::Overflow);
        }
        Ok(Self { raw: scaled as i128 })
    }

    /// Lossy conversion to `f64`. Used only for the normalized score
    /// fields, never on the monetary path.
    pub fn to_f64(self) -> f64 {
        self.raw as f64 / ONE_RAW as f64
    }

    pub const fn is_zero(self) -> bool {
        self.raw == 0
    }

    pub const fn is_negative(self) -> bool {
        self.raw < 0
    }

    pub const fn abs(self) -> Self {
        Self {
            raw: self.raw.abs(),
        }
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.raw.checked_add(rhs.raw).map(|raw| Self { raw })
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.raw.checked_sub(rhs.raw).map(|raw| Self { raw })
    }

    /// Checked multiplication. The rescaled product truncates toward zero
    /// at the 9th fractional digit.
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        self.raw
            .checked_mul(rhs.raw)
            .map(|product| Self { raw: product / ONE_RAW })
    }

    /// Checked division, truncating toward zero. `None` on a zero divisor
    /// or when prescaling the dividend overflows the mantissa.
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.raw == 0 {
            return None;
        }
        self.raw
            .checked_mul(ONE_RAW)
            .map(|scaled| Self { raw: scaled / rhs.raw })
    }

    /// Addition clamping to the mantissa range instead of failing.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self {
            raw: self.raw.saturating_add(rhs.raw),
        }
    }

    pub fn min(self, other: Self) -> Self {
        if self.raw <= other.raw {
            self
        } else {
            other
        }
    }

    pub fn max(self, other: Self) -> Self {
        if self.raw >= other.raw {
            self
        } else {
            other
        }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.raw.unsigned_abs();
        let sign = if self.raw < 0 { "-" } else { "" };
        let integral = abs / ONE_RAW as u128;
        let fraction = abs % ONE_RAW as u128;
        if fraction == 0 {
            write!(f, "{sign}{integral}")
        } else {
            let digits = format!("{fraction:09}");
            write!(f, "{sign}{integral}.{}", digits.trim_end_matches('0'))
        }
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({self})")
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    /// Parse an exact decimal string: optional sign, integral digits, and
    /// an optional fractional part of at most 9 digits. Anything else is
    /// rejected rather than rounded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DecimalError::Empty);
        }

        let (negative, body) = match trimmed.as_bytes()[0] {
            b'-' => (true, &trimmed[1..]),
            b'+' => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        if body.is_empty() {
            return Err(DecimalError::Invalid {
                input: s.to_string(),
            });
        }

        let (int_part, frac_part) = match body.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (body, None),
        };

        if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DecimalError::Invalid {
                input: s.to_string(),
            });
        }
        let mut raw: i128 = 0;
        for b in int_part.bytes() {
            raw = raw
                .checked_mul(10)
                .and_then(|r| r.checked_add((b - b'0') as i128))
                .ok_or(DecimalError::Overflow)?;
        }
        raw = raw.checked_mul(ONE_RAW).ok_or(DecimalError::Overflow)?;

        if let Some(frac) = frac_part {
            if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return Err(DecimalError::Invalid {
                    input: s.to_string(),
                });
            }
            if frac.len() > SCALE as usize {
                return Err(DecimalError::PrecisionExceeded { digits: frac.len() });
            }
            let mut frac_raw: i128 = 0;
            for b in frac.bytes() {
                frac_raw = frac_raw * 10 + (b - b'0') as i128;
            }
            frac_raw *= 10_i128.pow(SCALE - frac.len() as u32);
            raw = raw.checked_add(frac_raw).ok_or(DecimalError::Overflow)?;
        }

        if negative {
            raw = -raw;
        }
        Ok(Self { raw })
    }
}

// Decimal crosses the serialization boundary as an exact decimal string,
// never as a binary float.
impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DecimalVisitor;

        impl Visitor<'_> for DecimalVisitor {
            type Value = Decimal;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal string")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Decimal::from_str(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DecimalVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integral_and_fractional_strings() {
        assert_eq!(Decimal::from_str("864").unwrap(), Decimal::from_int(864));
        assert_eq!(
            Decimal::from_str("1068.12").unwrap(),
            Decimal::from_raw(1_068_120_000_000)
        );
        assert_eq!(
            Decimal::from_str("-0.5").unwrap(),
            Decimal::from_raw(-500_000_000)
        );
        assert_eq!(Decimal::from_str("+3.25").unwrap(), Decimal::from_raw(3_250_000_000));
        assert_eq!(Decimal::from_str("0.000000001").unwrap(), Decimal::from_raw(1));
    }

    #[test]
    fn rejects_malformed_strings() {
        assert_eq!(Decimal::from_str(""), Err(DecimalError::Empty));
        assert_eq!(Decimal::from_str("   "), Err(DecimalError::Empty));
        assert!(matches!(
            Decimal::from_str("abc"),
            Err(DecimalError::Invalid { .. })
        ));
        assert!(matches!(
            Decimal::from_str("1."),
            Err(DecimalError::Invalid { .. })
        ));
        assert!(matches!(
            Decimal::from_str(".5"),
            Err(DecimalError::Invalid { .. })
        ));
        assert!(matches!(
            Decimal::from_str("1.2.3"),
            Err(DecimalError::Invalid { .. })
        ));
        assert!(matches!(
            Decimal::from_str("-"),
            Err(DecimalError::Invalid { .. })
        ));
    }

    #[test]
    fn rejects_excess_precision_instead_of_rounding() {
        assert_eq!(
            Decimal::from_str("1.0000000001"),
            Err(DecimalError::PrecisionExceeded { digits: 10 })
        );
    }

    #[test]
    fn rejects_overflowing_strings() {
        let huge = "9".repeat(40);
        assert_eq!(Decimal::from_str(&huge), Err(DecimalError::Overflow));
    }

    #[test]
    fn display_trims_trailing_fraction_zeros() {
        assert_eq!(Decimal::from_str("864.500").unwrap().to_string(), "864.5");
        assert_eq!(Decimal::from_int(864).to_string(), "864");
        assert_eq!(Decimal::from_raw(-500_000_000).to_string(), "-0.5");
        assert_eq!(Decimal::from_raw(1).to_string(), "0.000000001");
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for s in ["0", "1", "-1", "1068.12", "0.000000001", "-42.000000001"] {
            let d = Decimal::from_str(s).unwrap();
            assert_eq!(Decimal::from_str(&d.to_string()).unwrap(), d);
        }
    }

    #[test]
    fn checked_mul_rescales_and_truncates_toward_zero() {
        let a = Decimal::from_str("1000").unwrap();
        let b = Decimal::from_str("0.8").unwrap();
        assert_eq!(a.checked_mul(b).unwrap(), Decimal::from_int(800));

        // 0.000000001 × 0.5 = 0.0000000005, truncated to zero.
        let tiny = Decimal::from_raw(1);
        let half = Decimal::from_str("0.5").unwrap();
        assert_eq!(tiny.checked_mul(half).unwrap(), Decimal::ZERO);

        // Negative truncation also goes toward zero.
        let neg_tiny = Decimal::from_raw(-1);
        assert_eq!(neg_tiny.checked_mul(half).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn checked_mul_overflow_returns_none() {
        assert_eq!(Decimal::MAX.checked_mul(Decimal::from_int(2)), None);
    }

    #[test]
    fn checked_div_guards_zero_divisor() {
        let a = Decimal::from_int(10);
        assert_eq!(a.checked_div(Decimal::ZERO), None);
        assert_eq!(
            a.checked_div(Decimal::from_int(4)).unwrap(),
            Decimal::from_str("2.5").unwrap()
        );
    }

    #[test]
    fn try_from_f64_rounds_at_scale() {
        assert_eq!(
            Decimal::try_from_f64(0.92).unwrap(),
            Decimal::from_raw(920_000_000)
        );
        assert_eq!(
            Decimal::try_from_f64(1.075).unwrap(),
            Decimal::from_raw(1_075_000_000)
        );
        assert_eq!(Decimal::try_from_f64(f64::NAN), Err(DecimalError::NonFinite));
        assert_eq!(
            Decimal::try_from_f64(f64::INFINITY),
            Err(DecimalError::NonFinite)
        );
        assert_eq!(Decimal::try_from_f64(1e30), Err(DecimalError::Overflow));
    }

    #[test]
    fn ordering_follows_numeric_value() {
        let low = Decimal::from_str("160.217999999").unwrap();
        let high = Decimal::from_str("160.218").unwrap();
        assert!(low < high);
        assert!(Decimal::from_int(-1) < Decimal::ZERO);
    }

    #[test]
    fn serde_uses_decimal_strings() {
        let d = Decimal::from_str("1068.12").unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"1068.12\"");
        let back: Decimal = serde_json::from_str("\"1068.12\"").unwrap();
        assert_eq!(back, d);
        assert!(serde_json::from_str::<Decimal>("1068.12").is_err());
    }

    #[test]
    fn saturating_add_clamps_at_mantissa_range() {
        assert_eq!(Decimal::MAX.saturating_add(Decimal::ONE), Decimal::MAX);
        assert_eq!(
            Decimal::from_int(1).saturating_add(Decimal::from_int(2)),
            Decimal::from_int(3)
        );
    }
}
