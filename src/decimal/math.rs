use num_bigint::BigInt;

use crate::{
    decimal::{
        context::PrecisionContext,
        core::{Decimal, ten_pow},
    },
    error::ArithmeticError,
};

/// Result type used by the special functions.
pub type MathResult<T> = Result<T, ArithmeticError>;

/// Extra digits carried by intermediate results.
const GUARD_DIGITS: u64 = 10;

/// Largest factorial argument that is multiplied out.
const MAX_FACTORIAL: i64 = 1_000_000;

/// Largest degree taken with an exact integer root. The radicand grows by
/// `precision` digits per degree, so higher degrees go through logarithms.
const MAX_INTEGER_ROOT_DEGREE: u32 = 64;

/// Largest decimal exponent of a trigonometric argument. Angle reduction
/// carries one extra digit per integer digit of the argument.
const MAX_ANGLE_EXPONENT: i64 = 1000;

fn int(v: i64) -> Decimal {
    Decimal::from(v)
}

fn half() -> Decimal {
    Decimal::new(5, 1)
}

const fn working(ctx: &PrecisionContext) -> PrecisionContext {
    ctx.widened(GUARD_DIGITS)
}

/// A series term stops contributing once it falls below the last digit kept
/// relative to `reference`.
fn negligible(term: &Decimal, reference: &Decimal, ctx: &PrecisionContext) -> bool {
    term.is_zero()
    || reference.exponent().saturating_sub(term.exponent())
       > i64::try_from(ctx.precision()).unwrap_or(i64::MAX)
}

fn undefined(operation: &'static str, reason: &'static str) -> ArithmeticError {
    ArithmeticError::Undefined { operation, reason }
}

/// The constant π, by Machin's formula `16·atan(1/5) - 4·atan(1/239)`.
///
/// # Example
/// ```
/// use numtext::decimal::{context::PrecisionContext, math::pi};
///
/// let ctx = PrecisionContext::new(10, Default::default()).unwrap();
/// assert_eq!(pi(&ctx).unwrap().to_string(), "3.141592654");
/// ```
pub fn pi(ctx: &PrecisionContext) -> MathResult<Decimal> {
    let wc = working(ctx);
    let fifth = arctan_of_inverse(5, &wc)?;
    let small = arctan_of_inverse(239, &wc)?;
    Ok(ctx.round(&wc.sub(&wc.mul(&int(16), &fifth), &wc.mul(&int(4), &small))))
}

/// `atan(1/n)` from its alternating series.
fn arctan_of_inverse(n: i64, wc: &PrecisionContext) -> MathResult<Decimal> {
    let n_squared = int(n * n);
    let mut power = wc.div(&Decimal::one(), &int(n))?;
    let mut sum = power.clone();
    let reference = power.clone();

    for k in 1i64.. {
        power = wc.div(&power, &n_squared)?;
        let term = wc.div(&power, &int(2 * k + 1))?;
        if negligible(&term, &reference, wc) {
            break;
        }
        sum = if k % 2 == 1 { wc.sub(&sum, &term) } else { wc.add(&sum, &term) };
    }
    Ok(sum)
}

/// Euler's number.
pub fn e(ctx: &PrecisionContext) -> MathResult<Decimal> {
    exp(&Decimal::one(), ctx)
}

/// `e^x`.
///
/// The argument is halved until it is below one half, the Taylor series is
/// summed, and the result is squared back up.
pub fn exp(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    if x.is_zero() {
        return Ok(Decimal::one());
    }
    if x.exponent() > 15 {
        return Err(ArithmeticError::ExponentTooLarge);
    }
    if x.is_negative() {
        let positive = exp(&-x, &working(ctx))?;
        return ctx.div(&Decimal::one(), &positive);
    }

    let half = half();
    let mut reduced = x.clone();
    let mut halvings = 0u64;
    while reduced > half {
        reduced = &reduced * &half;
        halvings += 1;
    }

    let wc = ctx.widened(GUARD_DIGITS + halvings);
    let reduced = wc.round(&reduced);
    let mut sum = Decimal::one();
    let mut term = Decimal::one();

    for n in 1i64.. {
        term = wc.div(&wc.mul(&term, &reduced), &int(n))?;
        if negligible(&term, &sum, &wc) {
            break;
        }
        sum = wc.add(&sum, &term);
    }

    for _ in 0..halvings {
        sum = wc.mul(&sum, &sum);
    }
    Ok(ctx.round(&sum))
}

/// The natural logarithm.
///
/// # Errors
/// Undefined for zero and negative arguments.
pub fn ln(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    if !x.is_positive() {
        return Err(undefined("ln", "argument must be positive"));
    }
    if *x == Decimal::one() {
        return Ok(Decimal::zero());
    }

    let exponent = x.exponent();
    let wc = working(ctx).widened(int(exponent).digit_count());
    let mut result = ln_of_small(&x.shifted(-exponent), &wc)?;

    if exponent != 0 {
        let ln_ten = ln_of_small(&int(10), &wc)?;
        result = wc.add(&result, &wc.mul(&ln_ten, &int(exponent)));
    }
    Ok(ctx.round(&result))
}

/// `ln(m)` for `0 < m <= 10`: square roots pull `m` close to one, then
/// `ln(m) = 2·atanh((m - 1) / (m + 1))`.
fn ln_of_small(m: &Decimal, wc: &PrecisionContext) -> MathResult<Decimal> {
    let wc = wc.widened(4);
    let upper = Decimal::new(11, 1);
    let lower = Decimal::new(9, 1);
    let one = Decimal::one();

    let mut value = m.clone();
    let mut roots = 0u32;
    while value > upper || value < lower {
        value = sqrt(&value, &wc)?;
        roots += 1;
    }

    let z = wc.div(&wc.sub(&value, &one), &wc.add(&value, &one))?;
    if z.is_zero() {
        return Ok(Decimal::zero());
    }
    let z_squared = wc.mul(&z, &z);
    let mut power = z.clone();
    let mut sum = z.clone();

    for k in 1i64.. {
        power = wc.mul(&power, &z_squared);
        let term = wc.div(&power, &int(2 * k + 1))?;
        if negligible(&term, &z, &wc) {
            break;
        }
        sum = wc.add(&sum, &term);
    }

    let factor = Decimal::from(BigInt::from(2u8).pow(roots + 1));
    Ok(wc.mul(&sum, &factor))
}

/// `ln(value) / ln(base)`.
///
/// # Errors
/// Undefined for non-positive arguments; division by zero for base `1`.
pub fn log(base: &Decimal, value: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    let wc = working(ctx);
    let denominator = ln(base, &wc)?;
    ctx.div(&ln(value, &wc)?, &denominator)
}

pub fn log10(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    log(&int(10), x, ctx)
}

pub fn log2(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    log(&int(2), x, ctx)
}

/// The square root.
///
/// # Errors
/// Undefined for negative arguments.
pub fn sqrt(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    if x.is_negative() {
        return Err(undefined("sqrt", "argument must not be negative"));
    }
    nth_root(x, 2, ctx)
}

/// The `n`-th root for a whole degree, computed with an integer root of the
/// rescaled unscaled value. Degrees above [`MAX_INTEGER_ROOT_DEGREE`] use
/// `exp(ln(x) / n)`.
///
/// # Errors
/// Undefined for a zero degree and for even roots of negative numbers.
pub fn nth_root(x: &Decimal, n: u32, ctx: &PrecisionContext) -> MathResult<Decimal> {
    if n == 0 {
        return Err(undefined("root", "degree must not be zero"));
    }
    if x.is_zero() {
        return Ok(Decimal::zero());
    }
    if x.is_negative() {
        if n % 2 == 0 {
            return Err(undefined("root", "even root of a negative number"));
        }
        return Ok(-nth_root(&-x, n, ctx)?);
    }
    if n == 1 {
        return Ok(ctx.round(x));
    }
    if n > MAX_INTEGER_ROOT_DEGREE {
        return root_by_logarithm(x, &Decimal::from(n), ctx);
    }

    let degree = i64::from(n);
    let wanted = (ctx.precision() + 2) * u64::from(n);
    let mut shift = wanted.saturating_sub(x.digit_count());
    let mut scale = x.scale().saturating_add_unsigned(shift);
    let misalignment = scale.rem_euclid(degree);
    if misalignment != 0 {
        let pad = degree - misalignment;
        shift += pad.unsigned_abs();
        scale += pad;
    }

    let radicand = x.unscaled() * ten_pow(shift);
    let root = radicand.nth_root(n);
    let root_scale = scale / degree;

    if root.pow(n) == radicand {
        let exact = ctx.round(&Decimal::new(root, root_scale));
        return Ok(exact.stripped_to(x.scale().div_euclid(degree)));
    }

    let sticky = root * BigInt::from(10u8) + BigInt::from(1u8);
    Ok(ctx.round(&Decimal::new(sticky, root_scale + 1)))
}

/// The `degree`-th root, for any real degree.
///
/// Whole degrees use [`nth_root`]; other degrees go through
/// `exp(ln(x) / degree)`.
///
/// # Example
/// ```
/// use numtext::decimal::{context::PrecisionContext, core::Decimal, math::root};
///
/// let ctx = PrecisionContext::default();
/// assert_eq!(root(&Decimal::from(27), &Decimal::from(3), &ctx).unwrap(), Decimal::from(3));
/// assert!(root(&Decimal::from(2), &Decimal::from(100_000), &ctx).is_ok());
/// ```
pub fn root(x: &Decimal, degree: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    if let Some(n) = degree.to_i64().and_then(|d| u32::try_from(d).ok()) {
        return nth_root(x, n, ctx);
    }
    if degree.is_zero() {
        return Err(undefined("root", "degree must not be zero"));
    }
    if x.is_zero() {
        return Ok(Decimal::zero());
    }
    if x.is_negative() {
        return Err(undefined("root", "fractional root of a negative number"));
    }
    root_by_logarithm(x, degree, ctx)
}

/// `exp(ln(x) / degree)` for a positive `x`.
fn root_by_logarithm(x: &Decimal,
                     degree: &Decimal,
                     ctx: &PrecisionContext)
                     -> MathResult<Decimal> {
    let wc = working(ctx);
    let quotient = wc.div(&ln(x, &wc)?, degree)?;
    Ok(ctx.round(&exp(&quotient, &wc)?))
}

/// `base^exponent`.
///
/// Whole exponents are computed by repeated squaring; others go through
/// `exp(exponent · ln(base))`.
///
/// # Example
/// ```
/// use numtext::decimal::{context::PrecisionContext, core::Decimal, math::pow};
///
/// let ctx = PrecisionContext::default();
/// let r = pow(&Decimal::from(2), &Decimal::from(10), &ctx).unwrap();
/// assert_eq!(r, Decimal::from(1024));
/// ```
pub fn pow(base: &Decimal, exponent: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    if exponent.is_zero() {
        return Ok(Decimal::one());
    }
    if let Some(n) = exponent.to_i64() {
        return integer_pow(base, n, ctx);
    }
    if base.is_zero() {
        return if exponent.is_positive() {
            Ok(Decimal::zero())
        } else {
            Err(ArithmeticError::DivisionByZero)
        };
    }
    if base.is_negative() {
        return Err(undefined("pow", "negative base with a fractional exponent"));
    }

    let wc = working(ctx).widened(u64::try_from(exponent.exponent().max(0)).unwrap_or(0));
    let product = wc.mul(exponent, &ln(base, &wc)?);
    Ok(ctx.round(&exp(&product, &wc)?))
}

fn integer_pow(base: &Decimal, n: i64, ctx: &PrecisionContext) -> MathResult<Decimal> {
    if n == 0 {
        return Ok(Decimal::one());
    }
    if base.is_zero() {
        return if n > 0 { Ok(Decimal::zero()) } else { Err(ArithmeticError::DivisionByZero) };
    }

    let magnitude = n.unsigned_abs();
    let reach = (base.exponent().unsigned_abs() + 1).checked_mul(magnitude);
    if reach.is_none_or(|r| r > 1_000_000_000_000_000) {
        return Err(ArithmeticError::ExponentTooLarge);
    }

    let wc = working(ctx).widened(Decimal::from(magnitude).digit_count());
    let mut result = Decimal::one();
    let mut square = base.clone();
    let mut remaining = magnitude;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = wc.mul(&result, &square);
        }
        remaining >>= 1;
        if remaining > 0 {
            square = wc.mul(&square, &square);
        }
    }

    if n < 0 {
        return ctx.div(&Decimal::one(), &result);
    }
    Ok(ctx.round(&result))
}

/// Maps an angle into `[-π, π]`.
fn reduce_angle(x: &Decimal, wc: &PrecisionContext) -> MathResult<Decimal> {
    let pi = pi(wc)?;
    if x.abs() <= pi {
        return Ok(x.clone());
    }
    let two_pi = wc.mul(&pi, &int(2));
    let turns = wc.div(x, &two_pi)?.trunc();
    let mut reduced = wc.sub(x, &wc.mul(&turns, &two_pi));
    if reduced > pi {
        reduced = wc.sub(&reduced, &two_pi);
    } else if reduced < -&pi {
        reduced = wc.add(&reduced, &two_pi);
    }
    Ok(reduced)
}

/// Working context for trigonometry: large arguments lose their integer
/// digits to the angle reduction.
///
/// # Errors
/// [`ArithmeticError::ExponentTooLarge`] past [`MAX_ANGLE_EXPONENT`].
fn angle_context(x: &Decimal, ctx: &PrecisionContext) -> MathResult<PrecisionContext> {
    let exponent = x.exponent();
    if exponent > MAX_ANGLE_EXPONENT {
        return Err(ArithmeticError::ExponentTooLarge);
    }
    Ok(working(ctx).widened(u64::try_from(exponent.max(0)).unwrap_or(0)))
}

/// The sine of an angle in radians.
pub fn sin(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    if x.is_zero() {
        return Ok(Decimal::zero());
    }
    let wc = angle_context(x, ctx)?;
    let r = reduce_angle(x, &wc)?;
    let r_squared = wc.mul(&r, &r);
    let mut term = r.clone();
    let mut sum = r.clone();

    for n in 1i64.. {
        term = -wc.div(&wc.mul(&term, &r_squared), &int((2 * n) * (2 * n + 1)))?;
        if negligible(&term, &r, &wc) {
            break;
        }
        sum = wc.add(&sum, &term);
    }
    Ok(ctx.round(&sum))
}

/// The cosine of an angle in radians.
pub fn cos(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    if x.is_zero() {
        return Ok(Decimal::one());
    }
    let wc = angle_context(x, ctx)?;
    let r = reduce_angle(x, &wc)?;
    let r_squared = wc.mul(&r, &r);
    let one = Decimal::one();
    let mut term = Decimal::one();
    let mut sum = Decimal::one();

    for n in 1i64.. {
        term = -wc.div(&wc.mul(&term, &r_squared), &int((2 * n - 1) * (2 * n)))?;
        if negligible(&term, &one, &wc) {
            break;
        }
        sum = wc.add(&sum, &term);
    }
    Ok(ctx.round(&sum))
}

pub fn tan(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    let wc = working(ctx);
    ctx.div(&sin(x, &wc)?, &cos(x, &wc)?)
}

pub fn cot(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    let wc = working(ctx);
    ctx.div(&cos(x, &wc)?, &sin(x, &wc)?)
}

fn half_pi(wc: &PrecisionContext) -> MathResult<Decimal> {
    wc.div(&pi(wc)?, &int(2))
}

/// The arc tangent, in radians.
pub fn atan(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    if x.is_zero() {
        return Ok(Decimal::zero());
    }
    if x.is_negative() {
        return Ok(-atan(&-x, ctx)?);
    }
    let wc = working(ctx);
    let one = Decimal::one();
    if *x > one {
        let inverse = wc.div(&one, x)?;
        return Ok(ctx.round(&wc.sub(&half_pi(&wc)?, &atan_of_small(&inverse, &wc)?)));
    }
    Ok(ctx.round(&atan_of_small(x, &wc)?))
}

/// `atan(x)` for `0 < x <= 1`, halving the angle with
/// `atan(x) = 2·atan(x / (1 + sqrt(1 + x²)))` before summing the series.
fn atan_of_small(x: &Decimal, wc: &PrecisionContext) -> MathResult<Decimal> {
    let threshold = Decimal::new(1, 1);
    let one = Decimal::one();
    let mut value = x.clone();
    let mut doublings = 0u32;

    while value > threshold {
        let root = sqrt(&wc.add(&one, &wc.mul(&value, &value)), wc)?;
        value = wc.div(&value, &wc.add(&one, &root))?;
        doublings += 1;
    }

    let value_squared = wc.mul(&value, &value);
    let mut power = value.clone();
    let mut sum = value.clone();
    for k in 1i64.. {
        power = wc.mul(&power, &value_squared);
        let term = wc.div(&power, &int(2 * k + 1))?;
        if negligible(&term, &value, wc) {
            break;
        }
        sum = if k % 2 == 1 { wc.sub(&sum, &term) } else { wc.add(&sum, &term) };
    }

    Ok(wc.mul(&sum, &Decimal::from(BigInt::from(2u8).pow(doublings))))
}

/// The arc sine, in radians.
///
/// # Errors
/// Undefined outside `[-1, 1]`.
pub fn asin(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    let one = Decimal::one();
    if x.abs() > one {
        return Err(undefined("asin", "argument must lie in [-1, 1]"));
    }
    if x.is_zero() {
        return Ok(Decimal::zero());
    }
    let wc = working(ctx);
    if x.abs() == one {
        let quarter_turn = half_pi(&wc)?;
        return Ok(ctx.round(&if x.is_negative() { -quarter_turn } else { quarter_turn }));
    }
    let cosine = sqrt(&wc.sub(&one, &wc.mul(x, x)), &wc)?;
    atan(&wc.div(x, &cosine)?, ctx)
}

/// The arc cosine, in radians.
pub fn acos(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    let wc = working(ctx);
    Ok(ctx.round(&wc.sub(&half_pi(&wc)?, &asin(x, &wc)?)))
}

/// The arc cotangent, in radians.
pub fn acot(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    let wc = working(ctx);
    Ok(ctx.round(&wc.sub(&half_pi(&wc)?, &atan(x, &wc)?)))
}

/// Working context for hyperbolic functions: small arguments cancel.
fn hyperbolic_context(x: &Decimal, ctx: &PrecisionContext) -> PrecisionContext {
    working(ctx).widened(u64::try_from((-x.exponent()).max(0)).unwrap_or(0))
}

pub fn sinh(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    if x.is_zero() {
        return Ok(Decimal::zero());
    }
    let wc = hyperbolic_context(x, ctx);
    let grow = exp(x, &wc)?;
    let shrink = wc.div(&Decimal::one(), &grow)?;
    Ok(ctx.round(&wc.mul(&wc.sub(&grow, &shrink), &half())))
}

pub fn cosh(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    let wc = working(ctx);
    let grow = exp(x, &wc)?;
    let shrink = wc.div(&Decimal::one(), &grow)?;
    Ok(ctx.round(&wc.mul(&wc.add(&grow, &shrink), &half())))
}

pub fn tanh(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    if x.is_zero() {
        return Ok(Decimal::zero());
    }
    let wc = hyperbolic_context(x, ctx);
    let one = Decimal::one();
    let doubled = exp(&wc.mul(x, &int(2)), &wc)?;
    ctx.div(&wc.sub(&doubled, &one), &wc.add(&doubled, &one))
}

pub fn coth(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    if x.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    let wc = working(ctx);
    ctx.div(&Decimal::one(), &tanh(x, &wc)?)
}

pub fn asinh(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    if x.is_zero() {
        return Ok(Decimal::zero());
    }
    if x.is_negative() {
        return Ok(-asinh(&-x, ctx)?);
    }
    let wc = hyperbolic_context(x, ctx);
    let root = sqrt(&wc.add(&wc.mul(x, x), &Decimal::one()), &wc)?;
    Ok(ctx.round(&ln(&wc.add(x, &root), &wc)?))
}

/// # Errors
/// Undefined below `1`.
pub fn acosh(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    let one = Decimal::one();
    if *x < one {
        return Err(undefined("acosh", "argument must be at least 1"));
    }
    let wc = working(ctx);
    let root = sqrt(&wc.sub(&wc.mul(x, x), &one), &wc)?;
    Ok(ctx.round(&ln(&wc.add(x, &root), &wc)?))
}

/// # Errors
/// Undefined outside the open interval `(-1, 1)`.
pub fn atanh(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    let one = Decimal::one();
    if x.abs() >= one {
        return Err(undefined("atanh", "argument must lie strictly between -1 and 1"));
    }
    if x.is_zero() {
        return Ok(Decimal::zero());
    }
    let wc = hyperbolic_context(x, ctx);
    let ratio = wc.div(&wc.add(&one, x), &wc.sub(&one, x))?;
    Ok(ctx.round(&wc.mul(&ln(&ratio, &wc)?, &half())))
}

/// # Errors
/// Undefined inside the closed interval `[-1, 1]`.
pub fn acoth(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    let one = Decimal::one();
    if x.abs() <= one {
        return Err(undefined("acoth", "argument must lie outside [-1, 1]"));
    }
    let wc = working(ctx);
    let ratio = wc.div(&wc.add(x, &one), &wc.sub(x, &one))?;
    Ok(ctx.round(&wc.mul(&ln(&ratio, &wc)?, &half())))
}

/// `x!`. Whole arguments are multiplied out; fractional ones use
/// `gamma(x + 1)`.
///
/// # Errors
/// Undefined for negative integers; too large beyond one million.
pub fn factorial(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    if !x.is_integer() {
        let wc = working(ctx);
        return gamma(&wc.add(x, &Decimal::one()), ctx);
    }

    let n = x.to_i64().ok_or(ArithmeticError::ExponentTooLarge)?;
    if n < 0 {
        return Err(undefined("factorial", "negative integers have no factorial"));
    }
    if n > MAX_FACTORIAL {
        return Err(ArithmeticError::ExponentTooLarge);
    }

    let wc = working(ctx).widened(int(n).digit_count());
    let mut product = Decimal::one();
    for k in 2..=n {
        product = wc.mul(&product, &int(k));
    }
    Ok(ctx.round(&product))
}

/// The gamma function.
///
/// Uses Spouge's approximation for arguments from one half upward and the
/// reflection formula below.
///
/// # Errors
/// Undefined at zero and the negative integers.
pub fn gamma(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    if x.is_integer() {
        if !x.is_positive() {
            return Err(undefined("gamma", "poles at zero and the negative integers"));
        }
        return factorial(&(x - &Decimal::one()), ctx);
    }

    let wc = working(ctx);
    let one = Decimal::one();
    if *x < half() {
        // Γ(x) = π / (sin(πx) · Γ(1 - x))
        let pi = pi(&wc)?;
        let sine = sin(&wc.mul(&pi, x), &wc)?;
        let mirrored = gamma(&wc.sub(&one, x), &wc)?;
        return ctx.div(&pi, &wc.mul(&sine, &mirrored));
    }
    Ok(ctx.round(&spouge(&wc.sub(x, &one), &wc)?))
}

/// `Γ(z + 1)` by Spouge's formula with `a` chosen so that the truncation
/// error stays below the last kept digit.
fn spouge(z: &Decimal, wc: &PrecisionContext) -> MathResult<Decimal> {
    let a = i64::try_from(wc.precision() * 1253 / 1000 + 2).unwrap_or(i64::MAX);
    let inner = wc.widened(a.unsigned_abs());

    let two_pi = inner.mul(&int(2), &pi(&inner)?);
    let mut sum = sqrt(&two_pi, &inner)?;
    let mut factorial = Decimal::one();

    for k in 1..a {
        if k > 1 {
            factorial = inner.mul(&factorial, &int(k - 1));
        }
        let base = int(a - k);
        let power = inner.mul(&integer_pow(&base, k - 1, &inner)?, &sqrt(&base, &inner)?);
        let coefficient = inner.div(&inner.mul(&power, &exp(&base, &inner)?), &factorial)?;
        let term = inner.div(&coefficient, &inner.add(z, &int(k)))?;
        sum = if k % 2 == 1 { inner.add(&sum, &term) } else { inner.sub(&sum, &term) };
    }

    let shifted = inner.add(z, &int(a));
    let growth = pow(&shifted, &inner.add(z, &half()), &inner)?;
    let decay = exp(&-&shifted, &inner)?;
    Ok(inner.mul(&inner.mul(&growth, &decay), &sum))
}

/// Degrees to radians.
pub fn to_radians(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    let wc = working(ctx);
    ctx.div(&wc.mul(x, &pi(&wc)?), &int(180))
}

/// Radians to degrees.
pub fn to_degrees(x: &Decimal, ctx: &PrecisionContext) -> MathResult<Decimal> {
    let wc = working(ctx);
    ctx.div(&wc.mul(x, &int(180)), &pi(&wc)?)
}

/// The scientific-notation exponent of `x`.
#[must_use]
pub fn exponent(x: &Decimal) -> Decimal {
    int(x.exponent())
}

/// `x / 10^exponent(x)`, in `[1, 10)` for non-zero `x`.
#[must_use]
pub fn mantissa(x: &Decimal) -> Decimal {
    x.shifted(-x.exponent())
}
