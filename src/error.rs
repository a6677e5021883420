/// Arithmetic errors.
///
/// Raised when an operation is undefined under the active precision context,
/// such as division by zero or a logarithm of a negative number.
pub mod arithmetic_error;
/// Numeral conversion errors.
///
/// Raised while spelling numbers as words, reading words back into numbers,
/// or reading decimal literals.
pub mod conversion_error;
/// Character cursor errors.
pub mod cursor_error;
/// Evaluation errors.
///
/// Unifies syntax and arithmetic failures for a single interpreter call.
pub mod eval_error;
/// Syntax errors.
///
/// Defines everything that can go wrong while scanning and parsing expression
/// text: unexpected characters, unmatched parentheses, unknown identifiers,
/// missing arguments and unresolved placeholders.
pub mod syntax_error;

pub use arithmetic_error::ArithmeticError;
pub use conversion_error::{ConversionError, ConversionResult};
pub use cursor_error::CursorError;
pub use eval_error::{EvalError, EvalResult};
pub use syntax_error::SyntaxError;
