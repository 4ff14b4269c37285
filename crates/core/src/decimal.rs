//! Named decimal value types for money, quantities and percentages.
//!
//! All three wrap `rust_decimal::Decimal` and keep full precision internally.
//! Rounding (banker's rounding to two fractional digits) is applied only when
//! a value is displayed or explicitly `rounded()`.
//!
//! Arithmetic saturates at the decimal range instead of panicking: the engine
//! must never crash on pathological input. Saturating addition is not
//! associative, so sums are exact and independent of term order only while
//! every partial sum stays within the decimal range; once a partial sum clamps
//! at `Decimal::MAX` (or `MIN`) the result can depend on the order of terms.
//!
//! `deserialize_lenient` is the tolerant counterpart to the strict serde impls
//! for fields fed by external stores: null, non-numeric or non-finite input
//! reads as zero instead of failing the whole document.

use core::iter::Sum;
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Number of fractional digits kept at presentation boundaries.
pub const DISPLAY_SCALE: u32 = 2;

fn round_for_display(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(DISPLAY_SCALE);
    rounded
}

/// Accepts any JSON-like scalar; everything that is not a usable number is zero.
struct LenientDecimalVisitor;

impl<'de> Visitor<'de> for LenientDecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("a number, a numeric string or null")
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Decimal, E> {
        Ok(Decimal::ZERO)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Decimal, E> {
        Ok(Decimal::from_i128(v).unwrap_or(Decimal::ZERO))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Decimal, E> {
        Ok(Decimal::from_u128(v).unwrap_or(Decimal::ZERO))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
        Ok(Decimal::from_f64(v).unwrap_or(Decimal::ZERO))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
        let v = v.trim();
        Ok(Decimal::from_str(v)
            .or_else(|_| Decimal::from_scientific(v))
            .unwrap_or(Decimal::ZERO))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Decimal, E> {
        Ok(Decimal::ZERO)
    }

    fn visit_none<E: de::Error>(self) -> Result<Decimal, E> {
        Ok(Decimal::ZERO)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Decimal, D::Error> {
        deserializer.deserialize_any(self)
    }
}

/// Monetary amount (currency-agnostic).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

/// Stock or consumption quantity, in the item's own unit.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(Decimal);

/// A percentage expressed on a 0..100 scale (`80` means 80%).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(Decimal);

macro_rules! impl_decimal_newtype {
    ($t:ident, $name:literal) => {
        impl $t {
            pub const ZERO: Self = Self(Decimal::ZERO);

            pub const fn new(value: Decimal) -> Self {
                Self(value)
            }

            /// Convert from a binary float; `NaN` and infinities become zero.
            pub fn from_f64(value: f64) -> Self {
                Self(Decimal::from_f64(value).unwrap_or(Decimal::ZERO))
            }

            /// Serde `deserialize_with` helper that never rejects a scalar:
            /// null, unparsable strings and non-finite numbers become zero.
            pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_any(LenientDecimalVisitor).map(Self)
            }

            pub const fn value(&self) -> Decimal {
                self.0
            }

            /// Value rounded (banker's rounding) to the display scale.
            pub fn rounded(&self) -> Decimal {
                round_for_display(self.0)
            }

            pub fn is_zero(&self) -> bool {
                self.0.is_zero()
            }

            pub fn is_negative(&self) -> bool {
                self.0 < Decimal::ZERO
            }

            pub fn is_positive(&self) -> bool {
                self.0 > Decimal::ZERO
            }
        }

        impl From<Decimal> for $t {
            fn from(value: Decimal) -> Self {
                Self(value)
            }
        }

        impl From<$t> for Decimal {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(Decimal::from(value))
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&round_for_display(self.0), f)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> DomainResult<Self> {
                let value = Decimal::from_str(s.trim())
                    .map_err(|e| DomainError::validation(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }

        impl Add for $t {
            type Output = $t;

            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0.saturating_add(rhs.0))
            }
        }

        impl Sub for $t {
            type Output = $t;

            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0.saturating_sub(rhs.0))
            }
        }

        impl Neg for $t {
            type Output = $t;

            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl Mul<Decimal> for $t {
            type Output = $t;

            fn mul(self, rhs: Decimal) -> Self::Output {
                Self(self.0.saturating_mul(rhs))
            }
        }

        impl Sum for $t {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, |acc, x| acc + x)
            }
        }

        impl<'a> Sum<&'a $t> for $t {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, |acc, x| acc + *x)
            }
        }
    };
}

impl_decimal_newtype!(Money, "Money");
impl_decimal_newtype!(Quantity, "Quantity");
impl_decimal_newtype!(Percentage, "Percentage");

/// Quantity priced at a unit cost.
impl Mul<Money> for Quantity {
    type Output = Money;

    fn mul(self, rhs: Money) -> Self::Output {
        Money(self.0.saturating_mul(rhs.0))
    }
}

impl Money {
    /// Average amount per item; zero for an empty set.
    pub fn average_over(self, count: usize) -> Money {
        if count == 0 {
            return Money::ZERO;
        }
        Money(self.0.checked_div(Decimal::from(count)).unwrap_or(Decimal::ZERO))
    }
}

impl Quantity {
    /// `self / other`, or `None` when `other` is zero.
    pub fn ratio_to(self, other: Quantity) -> Option<Decimal> {
        if other.is_zero() {
            return None;
        }
        self.0.checked_div(other.0)
    }
}

impl Percentage {
    /// `part / whole * 100`; zero when `whole` is zero.
    pub fn of(part: Money, whole: Money) -> Percentage {
        if whole.is_zero() {
            return Percentage::ZERO;
        }
        part.0
            .checked_div(whole.0)
            .map(|ratio| Percentage(ratio.saturating_mul(Decimal::ONE_HUNDRED)))
            .unwrap_or(Percentage::ZERO)
    }

    /// `part / whole * 100` for counts; zero when `whole` is zero.
    pub fn of_counts(part: usize, whole: usize) -> Percentage {
        if whole == 0 {
            return Percentage::ZERO;
        }
        Percentage::of(Money(Decimal::from(part)), Money(Decimal::from(whole)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn display_uses_bankers_rounding_to_two_digits() {
        assert_eq!(Money::new(dec!(2.345)).to_string(), "2.34");
        assert_eq!(Money::new(dec!(2.355)).to_string(), "2.36");
        assert_eq!(Money::new(dec!(7500)).to_string(), "7500.00");
        assert_eq!(Percentage::new(dec!(90.5797)).to_string(), "90.58");
    }

    #[test]
    fn internal_arithmetic_keeps_full_precision() {
        let third = Money::new(dec!(1) / dec!(3));
        let total: Money = [third, third, third].iter().sum();
        assert_ne!(total.value(), dec!(1.00));
        assert_eq!(total.rounded(), dec!(1.00));
    }

    #[test]
    fn non_finite_floats_become_zero() {
        assert_eq!(Quantity::from_f64(f64::NAN), Quantity::ZERO);
        assert_eq!(Money::from_f64(f64::INFINITY), Money::ZERO);
        assert_eq!(Money::from_f64(f64::NEG_INFINITY), Money::ZERO);
        assert_eq!(Quantity::from_f64(2.5), Quantity::new(dec!(2.5)));
    }

    #[test]
    fn quantity_times_money_is_money() {
        let value = Quantity::new(dec!(150)) * Money::new(dec!(50));
        assert_eq!(value, Money::new(dec!(7500)));
    }

    #[test]
    fn multiplication_saturates_instead_of_panicking() {
        let huge = Quantity::new(Decimal::MAX) * Money::new(dec!(10));
        assert_eq!(huge.value(), Decimal::MAX);
    }

    #[test]
    fn percentage_of_zero_whole_is_zero() {
        assert_eq!(Percentage::of(Money::from(10), Money::ZERO), Percentage::ZERO);
        assert_eq!(Percentage::of_counts(3, 0), Percentage::ZERO);
        assert_eq!(Percentage::of_counts(1, 4), Percentage::new(dec!(25)));
    }

    #[test]
    fn average_over_empty_set_is_zero() {
        assert_eq!(Money::from(100).average_over(0), Money::ZERO);
        assert_eq!(Money::from(100).average_over(4), Money::from(25));
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "12,5x".parse::<Money>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.starts_with("Money")));
        assert_eq!(" 12.50 ".parse::<Money>().unwrap(), Money::new(dec!(12.50)));
    }

    #[derive(Debug, serde::Deserialize)]
    struct Row {
        #[serde(deserialize_with = "Quantity::deserialize_lenient")]
        stock: Quantity,
    }

    fn stock_of(json: &str) -> Quantity {
        serde_json::from_str::<Row>(json).unwrap().stock
    }

    #[test]
    fn lenient_deserialization_reads_malformed_scalars_as_zero() {
        assert_eq!(stock_of(r#"{ "stock": null }"#), Quantity::ZERO);
        assert_eq!(stock_of(r#"{ "stock": "abc" }"#), Quantity::ZERO);
        assert_eq!(stock_of(r#"{ "stock": "" }"#), Quantity::ZERO);
        assert_eq!(stock_of(r#"{ "stock": "NaN" }"#), Quantity::ZERO);
        assert_eq!(stock_of(r#"{ "stock": true }"#), Quantity::ZERO);
    }

    #[test]
    fn lenient_deserialization_keeps_valid_numbers() {
        assert_eq!(stock_of(r#"{ "stock": 12 }"#), Quantity::from(12));
        assert_eq!(stock_of(r#"{ "stock": -3 }"#), Quantity::from(-3));
        assert_eq!(stock_of(r#"{ "stock": 2.5 }"#), Quantity::new(dec!(2.5)));
        assert_eq!(stock_of(r#"{ "stock": " 7.25 " }"#), Quantity::new(dec!(7.25)));
        assert_eq!(stock_of(r#"{ "stock": "1e2" }"#), Quantity::from(100));
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&Money::new(dec!(12.5))).unwrap();
        assert_eq!(json, "\"12.5\"");
        let back: Money = serde_json::from_str("12.5").unwrap();
        assert_eq!(back, Money::new(dec!(12.5)));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: away from saturation, summation does not depend on the
        /// order of terms.
        #[test]
        fn sum_is_order_independent(cents in prop::collection::vec(-1_000_000i64..1_000_000i64, 0..50)) {
            let forward: Money = cents.iter().map(|c| Money::new(Decimal::new(*c, 2))).sum();
            let backward: Money = cents.iter().rev().map(|c| Money::new(Decimal::new(*c, 2))).sum();
            prop_assert_eq!(forward, backward);
        }
    }
}
