use crate::error::ArithmeticError;

/// Result type returned by numeral conversions.
pub type ConversionResult<T> = Result<T, ConversionError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors raised while converting between numbers and numeral
/// words, or while reading a decimal literal.
pub enum ConversionError {
    /// A decimal exponent could not be reduced to a multiple of three.
    IrregularExponent {
        /// The exponent that was being reduced.
        exponent: i64,
    },
    /// A word is neither a numeral, a magnitude name, nor a place name.
    UnknownWord {
        /// The offending word.
        word: String,
    },
    /// The words are individually known but do not form a number.
    MalformedPhrase {
        /// Details about what was expected.
        details: String,
    },
    /// Text could not be read as a decimal literal.
    InvalidNumber {
        /// The offending text.
        text: String,
    },
    /// Rescaling a value for display failed.
    Arithmetic(ArithmeticError),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IrregularExponent { exponent } => write!(f,
                                                           "Conversion error: Exponent {exponent} cannot be reduced to a multiple of three."),
            Self::UnknownWord { word } => {
                write!(f, "Conversion error: Unknown numeral word '{word}'.")
            },
            Self::MalformedPhrase { details } => {
                write!(f, "Conversion error: Malformed numeral phrase: {details}.")
            },
            Self::InvalidNumber { text } => {
                write!(f, "Conversion error: '{text}' is not a decimal number.")
            },
            Self::Arithmetic(e) => e.fmt(f),
        }
    }
}

impl From<ArithmeticError> for ConversionError {
    fn from(e: ArithmeticError) -> Self {
        Self::Arithmetic(e)
    }
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Arithmetic(e) => Some(e),
            _ => None,
        }
    }
}
