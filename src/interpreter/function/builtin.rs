use crate::{
    decimal::{
        context::{PrecisionContext, RoundingMode},
        core::Decimal,
        math::{self, MathResult},
    },
    error::ArithmeticError,
};

/// Absolute value, rounded to the context.
pub fn abs(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    Ok(ctx.round(&x.abs()))
}

/// The scientific-notation exponent of `x`.
///
/// # Example
/// ```
/// use numtext::{
///     decimal::{PrecisionContext, core::Decimal},
///     interpreter::function::builtin::exponent,
/// };
///
/// let ctx = PrecisionContext::default();
/// let x: Decimal = "0.0042".parse().unwrap();
/// assert_eq!(exponent(&x, &ctx).unwrap(), Decimal::from(-3));
/// ```
pub fn exponent(x: &Decimal, _ctx: &PrecisionContext) -> MathResult<Decimal> {
    Ok(math::exponent(x))
}

/// `x / 10^exponent(x)`.
pub fn mantissa(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    Ok(ctx.round(&math::mantissa(x)))
}

/// Rounds `x` to an integer with `mode`.
fn to_integer(x: &Decimal, mode: RoundingMode) -> MathResult<Decimal> {
    x.with_scale(0, mode)
}

pub fn ceiling(x: &Decimal, _ctx: &PrecisionContext) -> MathResult<Decimal> {
    to_integer(x, RoundingMode::Ceiling)
}

pub fn floor(x: &Decimal, _ctx: &PrecisionContext) -> MathResult<Decimal> {
    to_integer(x, RoundingMode::Floor)
}

/// Rounds half away from zero.
pub fn round(x: &Decimal, _ctx: &PrecisionContext) -> MathResult<Decimal> {
    to_integer(x, RoundingMode::HalfUp)
}

/// Rounds `x` to `digits` fractional digits, half away from zero. A negative
/// `digits` rounds to tens, hundreds and so on.
///
/// # Errors
/// `digits` must be an integer.
///
/// # Example
/// ```
/// use numtext::{
///     decimal::{PrecisionContext, core::Decimal},
///     interpreter::function::builtin::round_to,
/// };
///
/// let ctx = PrecisionContext::default();
/// let x: Decimal = "3.14159".parse().unwrap();
/// let r = round_to(&x, &Decimal::from(2), &ctx).unwrap();
/// assert_eq!(r.to_string(), "3.14");
/// ```
pub fn round_to(x: &Decimal, digits: &Decimal, _ctx: &PrecisionContext) -> MathResult<Decimal> {
    if !digits.is_integer() {
        return Err(ArithmeticError::Undefined { operation: "roundTo",
                                                reason:    "digit count must be an integer", });
    }
    let digits = digits.to_i64().ok_or(ArithmeticError::ExponentTooLarge)?;
    x.with_scale(digits, RoundingMode::HalfUp)
}
