use crate::{
    decimal::{context::PrecisionContext, core::Decimal, math::MathResult},
    error::{EvalResult, SyntaxError},
    interpreter::cursor::{CharCursor, Scan},
};

/// Single-pass parser and evaluator.
///
/// Every production computes its value as soon as it is recognized; no tree
/// is built. The parser owns a space-skipping [`CharCursor`] over the text
/// and borrows the precision context of the call.
///
/// While an untaken `if`/`nif` branch is parsed the parser is in skip mode:
/// syntax is still checked, but no arithmetic is performed, so undefined
/// operations in that branch raise nothing.
pub(crate) struct Parser<'a> {
    pub(crate) cursor: CharCursor,
    context:           &'a PrecisionContext,
    depth:             usize,
    max_depth:         usize,
    skipping:          bool,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(text: &str, context: &'a PrecisionContext, max_depth: usize) -> Self {
        Self { cursor: CharCursor::skipping_spaces(text),
               context,
               depth: 0,
               max_depth,
               skipping: false }
    }

    /// Parses and evaluates the whole text.
    ///
    /// # Errors
    /// Any syntax or arithmetic error; text left after a complete expression
    /// is [`SyntaxError::TrailingText`].
    pub(crate) fn parse(mut self) -> EvalResult<Decimal> {
        self.cursor.next()?;
        let value = self.parse_expression()?;
        self.expect_end()?;
        Ok(value)
    }

    fn expect_end(&mut self) -> EvalResult<()> {
        self.cursor.skip_spaces();
        let position = self.cursor.position();
        match self.cursor.current() {
            Scan::PastEnd => Ok(()),
            Scan::At(')') => Err(SyntaxError::UnmatchedParenthesis { position }.into()),
            _ => {
                let text = self.cursor.slice(position, self.cursor.len());
                Err(SyntaxError::TrailingText { text, position }.into())
            },
        }
    }

    /// Parses an expression.
    ///
    /// Grammar: `expression := term (('+' | '-') term)*`
    pub(crate) fn parse_expression(&mut self) -> EvalResult<Decimal> {
        let mut value = self.parse_term()?;
        loop {
            if self.cursor.eat('+') {
                let rhs = self.parse_term()?;
                value = self.compute(|ctx| Ok(ctx.add(&value, &rhs)))?;
            } else if self.cursor.eat('-') {
                let rhs = self.parse_term()?;
                value = self.compute(|ctx| Ok(ctx.sub(&value, &rhs)))?;
            } else {
                return Ok(value);
            }
        }
    }

    /// Parses a term.
    ///
    /// Grammar: `term := factor (('*' | '/') factor)*`
    fn parse_term(&mut self) -> EvalResult<Decimal> {
        let mut value = self.parse_factor()?;
        loop {
            if self.cursor.eat('*') {
                let rhs = self.parse_factor()?;
                value = self.compute(|ctx| Ok(ctx.mul(&value, &rhs)))?;
            } else if self.cursor.eat('/') {
                let rhs = self.parse_factor()?;
                value = self.compute(|ctx| ctx.div(&value, &rhs))?;
            } else {
                return Ok(value);
            }
        }
    }

    /// Runs `op` under the call's precision context, or yields zero in skip
    /// mode.
    pub(crate) fn compute(&self,
                          op: impl FnOnce(&PrecisionContext) -> MathResult<Decimal>)
                          -> EvalResult<Decimal> {
        if self.skipping {
            return Ok(Decimal::zero());
        }
        Ok(op(self.context)?)
    }

    /// Parses one conditional branch, skipping its arithmetic when it is not
    /// taken.
    pub(crate) fn parse_branch(&mut self, taken: bool) -> EvalResult<Decimal> {
        let outer = self.skipping;
        self.skipping = outer || !taken;
        let value = self.parse_expression();
        self.skipping = outer;
        value
    }

    /// Enters one nesting level.
    pub(crate) fn descend(&mut self) -> EvalResult<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(SyntaxError::NestingTooDeep { limit:    self.max_depth,
                                                     position: self.cursor.position(), }.into());
        }
        Ok(())
    }

    pub(crate) const fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Consumes a `)` or fails with [`SyntaxError::UnmatchedParenthesis`].
    pub(crate) fn expect_close(&mut self) -> EvalResult<()> {
        if self.cursor.eat(')') {
            return Ok(());
        }
        self.cursor.skip_spaces();
        Err(SyntaxError::UnmatchedParenthesis { position: self.cursor.position() }.into())
    }
}
