/// Precision contexts and rounding modes.
///
/// A [`PrecisionContext`](context::PrecisionContext) pairs a significant-digit
/// count with a [`RoundingMode`](context::RoundingMode) and performs the four
/// basic operations under it.
pub mod context;
/// The arbitrary-precision decimal value type.
///
/// # Responsibilities
/// - Stores values as an unscaled `BigInt` and a power-of-ten scale.
/// - Compares by numeric value regardless of scale.
/// - Reads and writes plain decimal literals.
/// - Rounds to a scale or to a number of significant digits.
pub mod core;
/// Transcendental and special functions over decimals.
///
/// Every function takes the precision context of the caller, computes with a
/// few guard digits and rounds the result to that context. Functions outside
/// their domain return an [`ArithmeticError`](crate::error::ArithmeticError)
/// instead of a NaN or infinity.
pub mod math;

pub use context::{PrecisionContext, RoundingMode};
pub use self::core::Decimal;
