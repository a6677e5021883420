use tracing::debug;

use crate::{
    decimal::{context::PrecisionContext, core::Decimal},
    error::EvalResult,
    interpreter::{
        bindings::{Bindings, substitute},
        parser::core::Parser,
    },
};

/// Evaluates expression text under one precision context.
///
/// An interpreter is a small `Copy` value holding configuration only; every
/// call parses its text afresh.
///
/// # Example
/// ```
/// use numtext::{
///     decimal::{PrecisionContext, RoundingMode},
///     interpreter::core::Interpreter,
/// };
///
/// let ctx = PrecisionContext::new(10, RoundingMode::HalfEven).unwrap();
/// let interpreter = Interpreter::new(ctx);
///
/// assert_eq!(interpreter.evaluate("10/3").unwrap().to_string(), "3.333333333");
/// assert_eq!(interpreter.evaluate("2^3^2").unwrap(), 512.into());
/// assert!(interpreter.evaluate_boolean("5>3 & 2=2").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpreter {
    context:   PrecisionContext,
    max_depth: usize,
}

impl Interpreter {
    /// Nesting allowed for parentheses, calls and unary operators.
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    #[must_use]
    pub const fn new(context: PrecisionContext) -> Self {
        Self { context,
               max_depth: Self::DEFAULT_MAX_DEPTH }
    }

    /// Replaces the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn context(&self) -> &PrecisionContext {
        &self.context
    }

    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Evaluates `text` without bindings.
    ///
    /// # Errors
    /// Returns a syntax error for malformed text and an arithmetic error for
    /// undefined operations. There is no partial result.
    pub fn evaluate(&self, text: &str) -> EvalResult<Decimal> {
        self.evaluate_with(text, &Bindings::new())
    }

    /// Substitutes the placeholders of `text` from `bindings`, then evaluates
    /// the result.
    ///
    /// The value is rounded to the context and stripped of trailing zeros.
    pub fn evaluate_with(&self, text: &str, bindings: &Bindings) -> EvalResult<Decimal> {
        debug!(text, precision = self.context.precision(), "evaluating expression");
        let concrete = substitute(text, bindings, self)?;
        let value = self.evaluate_concrete(&concrete)?;
        debug!(%value, "evaluated expression");
        Ok(value)
    }

    /// Evaluates `text` as the statement of `if(text, 1, 0)`.
    ///
    /// # Example
    /// ```
    /// use numtext::interpreter::core::Interpreter;
    ///
    /// let interpreter = Interpreter::default();
    /// assert!(interpreter.evaluate_boolean("(1+2)>2").unwrap());
    /// assert!(!interpreter.evaluate_boolean("!(1=1)").unwrap());
    /// ```
    pub fn evaluate_boolean(&self, text: &str) -> EvalResult<bool> {
        Ok(self.evaluate(&format!("if({text},1,0)"))? == Decimal::one())
    }

    /// Evaluates text that contains no placeholders.
    pub(crate) fn evaluate_concrete(&self, text: &str) -> EvalResult<Decimal> {
        let value = Parser::new(text, &self.context, self.max_depth).parse()?;
        Ok(self.context.round(&value).normalized())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(PrecisionContext::default())
    }
}
