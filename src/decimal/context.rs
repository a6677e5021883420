use std::num::NonZeroU64;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

use crate::{
    decimal::core::{Decimal, ten_pow},
    error::ArithmeticError,
};

/// How a value is rounded when digits are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Toward zero (truncation).
    Down,
    /// Toward positive infinity.
    Ceiling,
    /// Toward negative infinity.
    Floor,
    /// To the nearest neighbour, ties away from zero.
    HalfUp,
    /// To the nearest neighbour, ties toward zero.
    HalfDown,
    /// To the nearest neighbour, ties to the even neighbour.
    #[default]
    HalfEven,
}

/// Number of significant digits plus the rounding mode applied to every
/// arithmetic result.
///
/// A context is chosen once per evaluation or conversion call and used for
/// every sub-operation of that call.
///
/// # Example
/// ```
/// use numtext::decimal::{
///     context::{PrecisionContext, RoundingMode},
///     core::Decimal,
/// };
///
/// let ctx = PrecisionContext::new(10, RoundingMode::HalfEven).unwrap();
/// let third = ctx.div(&Decimal::from(10), &Decimal::from(3)).unwrap();
/// assert_eq!(third.to_string(), "3.333333333");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrecisionContext {
    precision: NonZeroU64,
    rounding:  RoundingMode,
}

const fn non_zero(digits: u64) -> NonZeroU64 {
    match NonZeroU64::new(digits) {
        Some(digits) => digits,
        None => panic!("precision must be positive"),
    }
}

impl PrecisionContext {
    /// 34 digits, ties to even.
    pub const DECIMAL128: Self = Self::from_non_zero(non_zero(34), RoundingMode::HalfEven);
    /// 10 000 digits, ties to even. Used by the numeral converter.
    pub const NUMERAL: Self = Self::from_non_zero(non_zero(10_000), RoundingMode::HalfEven);

    /// Creates a context, or `None` when `precision` is zero.
    #[must_use]
    pub fn new(precision: u64, rounding: RoundingMode) -> Option<Self> {
        NonZeroU64::new(precision).map(|precision| Self { precision, rounding })
    }

    #[must_use]
    pub const fn from_non_zero(precision: NonZeroU64, rounding: RoundingMode) -> Self {
        Self { precision, rounding }
    }

    /// Significant digits kept by every result.
    #[must_use]
    pub const fn precision(&self) -> u64 {
        self.precision.get()
    }

    #[must_use]
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// The same rounding mode with `extra` more digits.
    #[must_use]
    pub const fn widened(&self, extra: u64) -> Self {
        Self { precision: self.precision.saturating_add(extra),
               rounding:  self.rounding, }
    }

    /// Rounds `value` to this context.
    #[must_use]
    pub fn round(&self, value: &Decimal) -> Decimal {
        value.round_to_precision(self.precision(), self.rounding)
    }

    /// `a + b`, rounded.
    ///
    /// When one operand is too small to reach the rounding position it is
    /// folded in as a single nudge digit instead of aligning both scales.
    #[must_use]
    pub fn add(&self, a: &Decimal, b: &Decimal) -> Decimal {
        if a.is_zero() {
            return self.round(b);
        }
        if b.is_zero() {
            return self.round(a);
        }

        let (large, small) = if a.exponent() >= b.exponent() { (a, b) } else { (b, a) };
        let reach = (self.precision() + 2).max(large.digit_count());
        let gap = large.exponent().abs_diff(small.exponent());

        if gap > reach + 1 {
            let pad = reach.saturating_sub(large.digit_count()) + 1;
            let nudged = large.unscaled() * ten_pow(pad) + BigInt::from(small.signum());
            let scale = large.scale().saturating_add_unsigned(pad);
            return self.round(&Decimal::new(nudged, scale));
        }

        self.round(&(a + b))
    }

    /// `a - b`, rounded.
    #[must_use]
    pub fn sub(&self, a: &Decimal, b: &Decimal) -> Decimal {
        self.add(a, &-b)
    }

    /// `a × b`, rounded.
    #[must_use]
    pub fn mul(&self, a: &Decimal, b: &Decimal) -> Decimal {
        self.round(&(a * b))
    }

    /// `a ÷ b`, rounded. Exact quotients keep no more trailing zeros than
    /// `a.scale() - b.scale()` requires.
    ///
    /// # Errors
    /// Returns [`ArithmeticError::DivisionByZero`] when `b` is zero.
    pub fn div(&self, a: &Decimal, b: &Decimal) -> Result<Decimal, ArithmeticError> {
        if b.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        if a.is_zero() {
            return Ok(Decimal::zero());
        }

        let preferred = a.scale().saturating_sub(b.scale());
        let digits = self.precision() + 3;
        let shift = (digits + b.digit_count()).saturating_sub(a.digit_count());

        let numerator = a.unscaled() * ten_pow(shift);
        let (quotient, remainder) = numerator.div_rem(b.unscaled());
        let scale = preferred.saturating_add_unsigned(shift);

        if remainder.is_zero() {
            return Ok(self.round(&Decimal::new(quotient, scale)).stripped_to(preferred));
        }

        // A sticky digit keeps the discarded tail visible to the rounding.
        let sticky = if a.is_negative() == b.is_negative() { 1 } else { -1 };
        let quotient = quotient * BigInt::from(10u8) + BigInt::from(sticky);
        Ok(self.round(&Decimal::new(quotient, scale.saturating_add(1))))
    }
}

impl Default for PrecisionContext {
    fn default() -> Self {
        Self::DECIMAL128
    }
}
