use logos::Logos;

/// A word of a spelled-out number.
///
/// Whitespace separates words and is skipped. Keywords match regardless of
/// case.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n]+")]
pub enum WordToken {
    /// `Negative`, leading a negative number.
    #[token("negative", ignore(ascii_case))]
    Negative,
    /// `and`, separating the integral part from the fraction.
    #[token("and", ignore(ascii_case))]
    And,
    /// Any other word: a numeral, a magnitude or a place name such as
    /// `Ten-Thousandths`.
    #[regex(r"[A-Za-z][A-Za-z-]*", |lex| lex.slice().to_string())]
    Word(String),
}

/// Splits `text` into words.
///
/// # Errors
/// Returns the offending text when something other than letters, hyphens and
/// whitespace is found.
///
/// # Example
/// ```
/// use numtext::numeral::lexer::{WordToken, tokenize};
///
/// let tokens = tokenize("Negative One AND Five Tenths").unwrap();
/// assert_eq!(tokens,
///            vec![WordToken::Negative,
///                 WordToken::Word("One".into()),
///                 WordToken::And,
///                 WordToken::Word("Five".into()),
///                 WordToken::Word("Tenths".into())]);
/// ```
pub fn tokenize(text: &str) -> Result<Vec<WordToken>, String> {
    let mut lexer = WordToken::lexer(text);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push(token),
            Err(()) => return Err(lexer.slice().to_string()),
        }
    }
    Ok(tokens)
}
