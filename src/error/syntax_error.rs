#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning and parsing expression
/// text.
///
/// Every variant carries the character position (zero based) at which the
/// problem was detected. Positions refer to the text after placeholder
/// substitution.
pub enum SyntaxError {
    /// Found a character that cannot start or continue the current production.
    UnexpectedCharacter {
        /// The character encountered.
        found:    char,
        /// The character position where the error occurred.
        position: usize,
    },
    /// Reached the end of the text while a production was incomplete.
    UnexpectedEnd {
        /// The character position where the error occurred.
        position: usize,
    },
    /// A `(` was opened but never closed, or a `)` was expected.
    UnmatchedParenthesis {
        /// The character position where the error occurred.
        position: usize,
    },
    /// An identifier does not name any builtin function or constant.
    UnknownIdentifier {
        /// The identifier.
        name:     String,
        /// The character position where the error occurred.
        position: usize,
    },
    /// A fixed-arity call is missing the `,` between two arguments.
    MissingComma {
        /// The function being called.
        function: String,
        /// The character position where the error occurred.
        position: usize,
    },
    /// A function that needs more than one argument was used without a
    /// parenthesized argument list.
    MissingArguments {
        /// The function being called.
        function: String,
        /// The character position where the error occurred.
        position: usize,
    },
    /// Text remained after a complete expression was parsed.
    TrailingText {
        /// The remaining text.
        text:     String,
        /// The character position where the error occurred.
        position: usize,
    },
    /// A `!` after a comparison operand was not followed by `=`.
    ExpectedEquals {
        /// The character position where the error occurred.
        position: usize,
    },
    /// A `$` placeholder survived substitution.
    UnresolvedPlaceholder {
        /// The character position where the error occurred.
        position: usize,
    },
    /// A `$(expr)` placeholder did not evaluate to a usable positional index.
    InvalidPlaceholderIndex {
        /// The placeholder expression.
        expression: String,
        /// The number of positional values that were supplied.
        available:  usize,
        /// The character position where the error occurred.
        position:   usize,
    },
    /// A numeric literal could not be read.
    InvalidNumber {
        /// The literal text.
        literal:  String,
        /// The character position where the error occurred.
        position: usize,
    },
    /// Parentheses or function calls were nested beyond the configured limit.
    NestingTooDeep {
        /// The configured nesting limit.
        limit:    usize,
        /// The character position where the error occurred.
        position: usize,
    },
}

impl SyntaxError {
    /// Returns `true` for the arity subtype: a fixed-arity or variadic
    /// function invoked without its parenthesized argument list.
    #[must_use]
    pub const fn is_arity_error(&self) -> bool {
        matches!(self, Self::MissingArguments { .. })
    }

    /// Returns the character position at which the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnexpectedEnd { position }
            | Self::UnmatchedParenthesis { position }
            | Self::UnknownIdentifier { position, .. }
            | Self::MissingComma { position, .. }
            | Self::MissingArguments { position, .. }
            | Self::TrailingText { position, .. }
            | Self::ExpectedEquals { position }
            | Self::UnresolvedPlaceholder { position }
            | Self::InvalidPlaceholderIndex { position, .. }
            | Self::InvalidNumber { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, position } => {
                write!(f, "Error at position {position}: Unexpected character '{found}'.")
            },
            Self::UnexpectedEnd { position } => {
                write!(f, "Error at position {position}: Unexpected end of input.")
            },
            Self::UnmatchedParenthesis { position } => write!(f,
                                                              "Error at position {position}: Expected closing parenthesis ')' but none found."),
            Self::UnknownIdentifier { name, position } => {
                write!(f, "Error at position {position}: Unknown identifier '{name}'.")
            },
            Self::MissingComma { function, position } => write!(f,
                                                                "Error at position {position}: Expected ',' between the arguments of '{function}'."),
            Self::MissingArguments { function, position } => write!(f,
                                                                    "Error at position {position}: Function '{function}' requires a parenthesized argument list."),
            Self::TrailingText { text, position } => write!(f,
                                                            "Error at position {position}: Extra text after expression. Check your input: {text}"),
            Self::ExpectedEquals { position } => {
                write!(f, "Error at position {position}: Expected '=' after '!'.")
            },
            Self::UnresolvedPlaceholder { position } => {
                write!(f, "Error at position {position}: Unresolved placeholder '$'.")
            },
            Self::InvalidPlaceholderIndex { expression,
                                            available,
                                            position, } => write!(f,
                                                                  "Error at position {position}: Placeholder '$({expression})' is not an index into {available} positional value(s)."),
            Self::InvalidNumber { literal, position } => {
                write!(f, "Error at position {position}: Invalid number '{literal}'.")
            },
            Self::NestingTooDeep { limit, position } => write!(f,
                                                               "Error at position {position}: Expression nests deeper than {limit} levels."),
        }
    }
}

impl std::error::Error for SyntaxError {}
