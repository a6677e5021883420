/// Core parser state and the expression and term levels.
///
/// Holds the cursor, the precision context, the nesting guard and the skip
/// mode used for untaken conditional branches.
pub mod core;
/// The factor level: signs, parentheses, numbers, identifiers and the `^`,
/// `%` and `%%` operators.
pub mod factor;
/// The boolean-statement sub-grammar used by `if` and `nif`.
///
/// # Responsibilities
/// - Parses comparisons and `&`/`|` chains.
/// - Rewinds parenthesized groups that turn out to be arithmetic operands.
/// - Stops at an explicit set of terminating characters.
pub mod statement;
