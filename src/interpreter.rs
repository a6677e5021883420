/// Placeholder bindings and the substitution pass.
///
/// Rewrites `$name` and `$(expr)` placeholders into decimal literals before
/// the grammar sees the text.
pub mod bindings;
/// The interpreter entry points.
///
/// # Responsibilities
/// - Holds the precision context and nesting limit of a call.
/// - Runs substitution, parsing and final rounding.
/// - Defines boolean evaluation in terms of `if`.
pub mod core;
/// The character cursor the parser scans with.
///
/// Moves in both directions, reports sentinels instead of out-of-range
/// characters, and supports marks for backtracking.
pub mod cursor;
/// Builtin functions and constants.
///
/// This module maps identifiers to arity classes and handlers, and parses the
/// argument list of each call.
pub mod function;
/// Single-pass recursive-descent parsing and evaluation.
///
/// There is no tokenizer and no syntax tree: each grammar rule reads
/// characters from the cursor and returns the value it denotes.
pub(crate) mod parser;
