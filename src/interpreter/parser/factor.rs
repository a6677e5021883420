use crate::{
    decimal::{core::Decimal, math},
    error::{EvalResult, SyntaxError},
    interpreter::{cursor::Scan, parser::core::Parser},
};

impl Parser<'_> {
    /// Parses a factor.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ('+' | '-') factor
    ///             | primary ['^' factor] ['%' ('%' factor | factor)]
    /// ```
    /// `^` binds to the right because its exponent is itself a factor.
    pub(crate) fn parse_factor(&mut self) -> EvalResult<Decimal> {
        self.descend()?;
        let value = self.parse_signed();
        self.ascend();
        value
    }

    fn parse_signed(&mut self) -> EvalResult<Decimal> {
        if self.cursor.eat('+') {
            return self.parse_factor();
        }
        if self.cursor.eat('-') {
            return Ok(-self.parse_factor()?);
        }
        let value = self.parse_primary()?;
        self.parse_postfix(value)
    }

    /// Applies the optional `^`, `%` and `%%` operators.
    fn parse_postfix(&mut self, mut value: Decimal) -> EvalResult<Decimal> {
        if self.cursor.eat('^') {
            let exponent = self.parse_factor()?;
            value = self.compute(|ctx| math::pow(&value, &exponent, ctx))?;
        }
        if self.cursor.eat('%') {
            if self.cursor.eat('%') {
                let divisor = self.parse_factor()?;
                value = self.compute(|ctx| Ok(ctx.round(&value.rem_trunc(&divisor)?)))?;
            } else {
                let whole = self.parse_factor()?;
                value = self.compute(|ctx| {
                                let share = ctx.div(&value, &Decimal::from(100))?;
                                Ok(ctx.mul(&share, &whole))
                            })?;
            }
        }
        Ok(value)
    }

    /// Parses a parenthesized expression, a number or an identifier.
    fn parse_primary(&mut self) -> EvalResult<Decimal> {
        if self.cursor.eat('(') {
            let value = self.parse_expression()?;
            self.expect_close()?;
            return Ok(value);
        }

        self.cursor.skip_spaces();
        let position = self.cursor.position();
        match self.cursor.current() {
            Scan::At(c) if c.is_ascii_digit() || c == '.' => self.parse_number(),
            Scan::At(c) if c.is_ascii_alphabetic() => {
                let name = self.read_while(|c| c.is_ascii_alphabetic())?;
                self.call_function(&name, position)
            },
            Scan::At('$') => Err(SyntaxError::UnresolvedPlaceholder { position }.into()),
            Scan::At(found) => Err(SyntaxError::UnexpectedCharacter { found, position }.into()),
            Scan::BeforeStart | Scan::PastEnd => {
                Err(SyntaxError::UnexpectedEnd { position }.into())
            },
        }
    }

    /// Reads greedy digits with at most one decimal point.
    fn parse_number(&mut self) -> EvalResult<Decimal> {
        let position = self.cursor.position();
        let mut seen_point = false;
        let literal = self.read_while(|c| {
                              let point = c == '.' && !seen_point;
                              seen_point |= point;
                              point || c.is_ascii_digit()
                          })?;
        literal.parse()
               .map_err(|_| SyntaxError::InvalidNumber { literal, position }.into())
    }

    /// Consumes characters while `accept` holds and returns them.
    fn read_while(&mut self, mut accept: impl FnMut(char) -> bool) -> EvalResult<String> {
        let start = self.cursor.position();
        while self.cursor.current().is(&mut accept) {
            self.cursor.next()?;
        }
        Ok(self.cursor.slice(start, self.cursor.position()))
    }
}
