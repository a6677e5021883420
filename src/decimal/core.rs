use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::{
    decimal::context::RoundingMode,
    error::{ArithmeticError, ConversionError},
};

/// Largest power of ten the crate will materialize when aligning scales.
///
/// Operations that would need a bigger shift fail with
/// [`ArithmeticError::ExponentTooLarge`] instead of exhausting memory.
pub const MAX_SHIFT: u64 = 1_000_000;

/// An arbitrary-precision signed decimal number.
///
/// The value is `unscaled × 10^-scale`. Values are immutable: every
/// operation returns a fresh `Decimal`. Equality and ordering compare numeric
/// values, so `2.0 == 2`.
///
/// # Example
/// ```
/// use numtext::decimal::core::Decimal;
///
/// let x: Decimal = "12.50".parse().unwrap();
/// assert_eq!(x.to_string(), "12.50");
/// assert_eq!(x, Decimal::new(125, 1));
/// assert_eq!(x.exponent(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Decimal {
    unscaled: BigInt,
    scale:    i64,
}

/// Returns `10^exponent`.
///
/// Callers are responsible for keeping `exponent` within [`MAX_SHIFT`] or for
/// knowing that the operands already occupy that many digits.
pub(crate) fn ten_pow(exponent: u64) -> BigInt {
    BigInt::from(10u8).pow(u32::try_from(exponent).unwrap_or(u32::MAX))
}

/// Returns `10^exponent`, refusing shifts larger than [`MAX_SHIFT`].
pub(crate) fn checked_ten_pow(exponent: u64) -> Result<BigInt, ArithmeticError> {
    if exponent > MAX_SHIFT {
        return Err(ArithmeticError::ExponentTooLarge);
    }
    Ok(ten_pow(exponent))
}

/// Divides `value` by `divisor`, rounding the quotient with `mode`.
pub(crate) fn divide_rounded(value: &BigInt, divisor: &BigInt, mode: RoundingMode) -> BigInt {
    let (quotient, remainder) = value.div_rem(divisor);
    if remainder.is_zero() {
        return quotient;
    }

    let negative = value.is_negative() != divisor.is_negative();
    let half = (remainder.abs() * BigInt::from(2u8)).cmp(&divisor.abs());

    let away_from_zero = match mode {
        RoundingMode::Up => true,
        RoundingMode::Down => false,
        RoundingMode::Ceiling => !negative,
        RoundingMode::Floor => negative,
        RoundingMode::HalfUp => half != Ordering::Less,
        RoundingMode::HalfDown => half == Ordering::Greater,
        RoundingMode::HalfEven => {
            half == Ordering::Greater || (half == Ordering::Equal && quotient.is_odd())
        },
    };

    if !away_from_zero {
        quotient
    } else if negative {
        quotient - BigInt::one()
    } else {
        quotient + BigInt::one()
    }
}

impl Decimal {
    /// Creates a decimal from an unscaled integer and a scale.
    #[must_use]
    pub fn new(unscaled: impl Into<BigInt>, scale: i64) -> Self {
        Self { unscaled: unscaled.into(),
               scale }
    }

    /// The value `0`.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(0, 0)
    }

    /// The value `1`.
    #[must_use]
    pub fn one() -> Self {
        Self::new(1, 0)
    }

    /// Returns `10^exponent` exactly.
    #[must_use]
    pub fn ten_to(exponent: i64) -> Self {
        Self::new(1, exponent.saturating_neg())
    }

    /// The unscaled integer.
    #[must_use]
    pub const fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// The number of digits to the right of the decimal point (negative for
    /// trailing zeros to the left of it).
    #[must_use]
    pub const fn scale(&self) -> i64 {
        self.scale
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.unscaled.is_positive()
    }

    /// Returns `-1`, `0` or `1`.
    #[must_use]
    pub fn signum(&self) -> i32 {
        if self.is_negative() {
            -1
        } else {
            i32::from(self.is_positive())
        }
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        Self { unscaled: self.unscaled.abs(),
               scale:    self.scale, }
    }

    /// Number of significant digits in the unscaled integer (`1` for zero).
    #[must_use]
    pub fn digit_count(&self) -> u64 {
        if self.unscaled.is_zero() {
            return 1;
        }
        self.unscaled.magnitude().to_str_radix(10).len() as u64
    }

    /// The exponent of the value in scientific notation, so that
    /// `1 <= |x| / 10^exponent < 10`. Zero reports `0`.
    #[must_use]
    pub fn exponent(&self) -> i64 {
        if self.is_zero() {
            return 0;
        }
        i64::try_from(self.digit_count()).unwrap_or(i64::MAX)
                                         .saturating_sub(1)
                                         .saturating_sub(self.scale)
    }

    /// Number of digits before the decimal point, `0` when `|x| < 1`.
    #[must_use]
    pub fn integer_digits(&self) -> u64 {
        if self.is_zero() {
            return 0;
        }
        u64::try_from(self.exponent().saturating_add(1)).unwrap_or(0)
    }

    #[must_use]
    pub fn is_integer(&self) -> bool {
        if self.is_zero() || self.scale <= 0 {
            return true;
        }
        let scale = self.scale.unsigned_abs();
        if scale >= self.digit_count() {
            return false;
        }
        (&self.unscaled % ten_pow(scale)).is_zero()
    }

    /// Multiplies by `10^places` exactly, by adjusting the scale only.
    #[must_use]
    pub fn shifted(&self, places: i64) -> Self {
        Self { unscaled: self.unscaled.clone(),
               scale:    self.scale.saturating_sub(places), }
    }

    /// Removes every trailing zero of the unscaled integer.
    ///
    /// # Example
    /// ```
    /// use numtext::decimal::core::Decimal;
    ///
    /// let x = Decimal::new(12_500, 3).normalized();
    /// assert_eq!((x.unscaled().clone(), x.scale()), (125.into(), 1));
    /// ```
    #[must_use]
    pub fn normalized(&self) -> Self {
        self.stripped_to(i64::MIN)
    }

    /// Removes trailing zeros while the scale stays above `preferred_scale`.
    #[must_use]
    pub fn stripped_to(&self, preferred_scale: i64) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let ten = BigInt::from(10u8);
        let mut unscaled = self.unscaled.clone();
        let mut scale = self.scale;
        while scale > preferred_scale {
            let (quotient, remainder) = unscaled.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            unscaled = quotient;
            scale -= 1;
        }
        Self { unscaled, scale }
    }

    /// Returns the value with exactly `new_scale` fractional digits, rounding
    /// with `mode` when digits are dropped.
    ///
    /// # Errors
    /// Returns [`ArithmeticError::ExponentTooLarge`] when widening the scale
    /// would need more than [`MAX_SHIFT`] extra digits.
    pub fn with_scale(&self, new_scale: i64, mode: RoundingMode) -> Result<Self, ArithmeticError> {
        match new_scale.cmp(&self.scale) {
            Ordering::Equal => Ok(self.clone()),
            Ordering::Greater => {
                let shift = new_scale.abs_diff(self.scale);
                Ok(Self { unscaled: &self.unscaled * checked_ten_pow(shift)?,
                          scale:    new_scale, })
            },
            Ordering::Less => {
                // Dropping more digits than the value has decides the same way
                // as dropping one more than it has.
                let dropped = new_scale.abs_diff(self.scale).min(self.digit_count() + 1);
                Ok(Self { unscaled: divide_rounded(&self.unscaled, &ten_pow(dropped), mode),
                          scale:    new_scale, })
            },
        }
    }

    /// Rounds to at most `digits` significant digits.
    #[must_use]
    pub fn round_to_precision(&self, digits: u64, mode: RoundingMode) -> Self {
        let current = self.digit_count();
        if self.is_zero() || current <= digits {
            return self.clone();
        }
        let dropped = current - digits;
        let rounded = Self { unscaled: divide_rounded(&self.unscaled, &ten_pow(dropped), mode),
                             scale:    self.scale.saturating_sub_unsigned(dropped), };

        // 9.99 -> 10.0 gains a digit; the extra one is always a zero.
        if rounded.digit_count() > digits {
            return Self { unscaled: rounded.unscaled / BigInt::from(10u8),
                          scale:    rounded.scale - 1, };
        }
        rounded
    }

    /// The integral part, truncated toward zero.
    #[must_use]
    pub fn trunc(&self) -> Self {
        if self.scale <= 0 {
            return self.clone();
        }
        let scale = self.scale.unsigned_abs();
        if scale >= self.digit_count() + 1 {
            return Self::zero();
        }
        Self { unscaled: &self.unscaled / ten_pow(scale),
               scale:    0, }
    }

    /// The fractional part, `self - self.trunc()`.
    #[must_use]
    pub fn fract(&self) -> Self {
        if self.scale <= 0 {
            return Self::zero();
        }
        let scale = self.scale.unsigned_abs();
        if scale >= self.digit_count() + 1 {
            return self.clone();
        }
        Self { unscaled: &self.unscaled % ten_pow(scale),
               scale:    self.scale, }
    }

    /// The value as an integer, if it has no fractional part and fits within
    /// [`MAX_SHIFT`] digits.
    #[must_use]
    pub fn to_bigint(&self) -> Option<BigInt> {
        if !self.is_integer() {
            return None;
        }
        if self.scale <= 0 {
            return checked_ten_pow(self.scale.unsigned_abs()).ok()
                                                             .map(|factor| &self.unscaled * factor);
        }
        Some(&self.unscaled / ten_pow(self.scale.unsigned_abs()))
    }

    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        if self.integer_digits() > 19 {
            return None;
        }
        self.to_bigint()?.to_i64()
    }

    /// Returns the unscaled integer rescaled to `scale`, which must not be
    /// smaller than the current scale.
    fn aligned(&self, scale: i64) -> Result<BigInt, ArithmeticError> {
        Ok(&self.unscaled * checked_ten_pow(scale.abs_diff(self.scale))?)
    }

    /// The remainder of a division whose quotient is truncated toward zero.
    /// The sign of the result follows the dividend.
    ///
    /// # Errors
    /// - [`ArithmeticError::DivisionByZero`] when `divisor` is zero.
    /// - [`ArithmeticError::ExponentTooLarge`] when the operand scales are too
    ///   far apart to be aligned.
    ///
    /// # Example
    /// ```
    /// use numtext::decimal::core::Decimal;
    ///
    /// let r = Decimal::from(-50).rem_trunc(&Decimal::from(7)).unwrap();
    /// assert_eq!(r, Decimal::from(-1));
    /// ```
    pub fn rem_trunc(&self, divisor: &Self) -> Result<Self, ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let scale = self.scale.max(divisor.scale);
        let remainder = self.aligned(scale)? % divisor.aligned(scale)?;
        Ok(Self { unscaled: remainder,
                  scale })
    }

    /// Unscaled integer rescaled to `scale` without any size guard.
    fn unscaled_at(&self, scale: i64) -> BigInt {
        &self.unscaled * ten_pow(scale.abs_diff(self.scale))
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (left, right) = (self.signum(), other.signum());
        if left != right {
            return left.cmp(&right);
        }
        if left == 0 {
            return Ordering::Equal;
        }

        let by_exponent = self.exponent().cmp(&other.exponent());
        if by_exponent != Ordering::Equal {
            return if left > 0 { by_exponent } else { by_exponent.reverse() };
        }

        // Equal exponents: the scales differ by at most the digit counts.
        let scale = self.scale.max(other.scale);
        self.unscaled_at(scale).cmp(&other.unscaled_at(scale))
    }
}

impl Add for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: Self) -> Decimal {
        let scale = self.scale.max(rhs.scale);
        Decimal { unscaled: self.unscaled_at(scale) + rhs.unscaled_at(scale),
                  scale }
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Self) -> Decimal {
        let scale = self.scale.max(rhs.scale);
        Decimal { unscaled: self.unscaled_at(scale) - rhs.unscaled_at(scale),
                  scale }
    }
}

impl Mul for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Self) -> Decimal {
        Decimal { unscaled: &self.unscaled * &rhs.unscaled,
                  scale:    self.scale.saturating_add(rhs.scale), }
    }
}

impl Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self {
        Self { unscaled: -self.unscaled,
               scale:    self.scale, }
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal { unscaled: -&self.unscaled,
                  scale:    self.scale, }
    }
}

impl From<BigInt> for Decimal {
    fn from(v: BigInt) -> Self {
        Self::new(v, 0)
    }
}

impl From<i64> for Decimal {
    fn from(v: i64) -> Self {
        Self::new(v, 0)
    }
}

impl From<i32> for Decimal {
    fn from(v: i32) -> Self {
        Self::new(v, 0)
    }
}

impl From<u64> for Decimal {
    fn from(v: u64) -> Self {
        Self::new(v, 0)
    }
}

impl From<u32> for Decimal {
    fn from(v: u32) -> Self {
        Self::new(v, 0)
    }
}

impl From<usize> for Decimal {
    fn from(v: usize) -> Self {
        Self::new(v, 0)
    }
}

impl FromStr for Decimal {
    type Err = ConversionError;

    /// Reads a plain decimal literal such as `-12.50`, `.5` or `7.`, with an
    /// optional `e`/`E` exponent.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || ConversionError::InvalidNumber { text: text.to_string() };
        let trimmed = text.trim();

        let (mantissa, exponent) = match trimmed.find(['e', 'E']) {
            Some(index) => {
                let exponent = trimmed[index + 1..].parse::<i64>().map_err(|_| invalid())?;
                (&trimmed[..index], exponent)
            },
            None => (trimmed, 0),
        };

        let (negative, body) = match mantissa.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
        };

        let (integral, fractional) = body.split_once('.').unwrap_or((body, ""));
        if integral.is_empty() && fractional.is_empty() {
            return Err(invalid());
        }
        if !integral.bytes().chain(fractional.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let digits = format!("{integral}{fractional}");
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        let unscaled = if negative { -magnitude } else { magnitude };

        let scale = i64::try_from(fractional.len()).map_err(|_| invalid())?
                                                   .checked_sub(exponent)
                                                   .ok_or_else(invalid)?;
        Ok(Self { unscaled, scale })
    }
}

impl fmt::Display for Decimal {
    /// Writes the plain (never scientific) form of the value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() && self.scale <= 0 {
            return f.write_str("0");
        }

        let digits = self.unscaled.magnitude().to_str_radix(10);
        let sign = if self.is_negative() { "-" } else { "" };

        if self.scale <= 0 {
            let zeros = "0".repeat(usize::try_from(self.scale.unsigned_abs()).unwrap_or(0));
            return write!(f, "{sign}{digits}{zeros}");
        }

        let scale = usize::try_from(self.scale).unwrap_or(usize::MAX);
        if digits.len() > scale {
            let (integral, fractional) = digits.split_at(digits.len() - scale);
            write!(f, "{sign}{integral}.{fractional}")
        } else {
            let zeros = "0".repeat(scale - digits.len());
            write!(f, "{sign}0.{zeros}{digits}")
        }
    }
}
