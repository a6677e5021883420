#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents arithmetic that is undefined under the active precision context.
///
/// These are raised instead of producing NaN or infinity.
pub enum ArithmeticError {
    /// Attempted division by zero.
    DivisionByZero,
    /// A function was applied outside its domain.
    Undefined {
        /// The function or operator name.
        operation: &'static str,
        /// Why the operation is undefined for the given operand.
        reason:    &'static str,
    },
    /// A power or scale would exceed what can be represented.
    ExponentTooLarge,
}

impl std::fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Arithmetic error: Division by zero."),
            Self::Undefined { operation, reason } => {
                write!(f, "Arithmetic error: '{operation}' is undefined: {reason}.")
            },
            Self::ExponentTooLarge => {
                write!(f, "Arithmetic error: Exponent is too large to be represented.")
            },
        }
    }
}

impl std::error::Error for ArithmeticError {}
