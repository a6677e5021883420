/// Memoized names of powers of one thousand, shared across threads.
pub mod cache;
/// The converter type and magnitude naming.
///
/// # Responsibilities
/// - Owns the precision context used for conversions.
/// - Names `10^(3k)` through the shared cache.
/// - Reduces exponents to multiples of three.
pub mod core;
/// Latin-derived names for powers of one thousand beyond the fixed table.
pub mod latin;
/// Tokenizer for spelled-out numbers.
pub mod lexer;
mod partial;
mod read;
mod spell;
/// Fixed English names for small numbers and the first magnitudes.
pub mod table;

pub use cache::MagnitudeCache;
pub use self::core::NumeralConverter;
