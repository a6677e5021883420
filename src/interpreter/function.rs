/// Builtins that are not plain special functions: rounding, `abs`,
/// `exponent` and `mantissa`.
pub mod builtin;
/// The builtin table and call dispatch.
///
/// Maps every identifier to an arity class and a handler, and parses the
/// argument list each arity class expects.
pub mod core;
/// Folding rules for the variadic builtins.
pub mod variadic;
