use crate::error::{ArithmeticError, CursorError, SyntaxError};

/// Result type returned by interpreter calls.
pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every way an expression evaluation can fail.
///
/// Evaluation aborts on the first error; there is no partial result.
pub enum EvalError {
    /// The text does not follow the expression grammar.
    Syntax(SyntaxError),
    /// The text parsed, but an operation was undefined.
    Arithmetic(ArithmeticError),
}

impl EvalError {
    /// Returns `true` if this is the arity subtype of a syntax error.
    #[must_use]
    pub const fn is_arity_error(&self) -> bool {
        match self {
            Self::Syntax(e) => e.is_arity_error(),
            Self::Arithmetic(_) => false,
        }
    }
}

impl From<SyntaxError> for EvalError {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<ArithmeticError> for EvalError {
    fn from(e: ArithmeticError) -> Self {
        Self::Arithmetic(e)
    }
}

impl From<CursorError> for EvalError {
    fn from(e: CursorError) -> Self {
        match e {
            CursorError::Exhausted { position } => {
                Self::Syntax(SyntaxError::UnexpectedEnd { position })
            },
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => e.fmt(f),
            Self::Arithmetic(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Arithmetic(e) => Some(e),
        }
    }
}
