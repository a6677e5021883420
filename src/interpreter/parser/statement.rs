use std::cmp::Ordering;

use crate::{
    error::{EvalResult, SyntaxError},
    interpreter::{cursor::Scan, parser::core::Parser},
};

/// Characters that end a statement given as a function argument.
pub(crate) const ARGUMENT_STOP: &[char] = &[','];
/// Characters that end a parenthesized statement group.
pub(crate) const GROUP_STOP: &[char] = &[')'];

/// A comparison between two expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
    Equal,
    NotEqual,
}

impl Comparison {
    fn holds(self, ordering: Ordering) -> bool {
        match self {
            Self::Greater => ordering.is_gt(),
            Self::GreaterOrEqual => ordering.is_ge(),
            Self::Less => ordering.is_lt(),
            Self::LessOrEqual => ordering.is_le(),
            Self::Equal => ordering.is_eq(),
            Self::NotEqual => ordering.is_ne(),
        }
    }
}

impl Parser<'_> {
    /// Parses a boolean statement.
    ///
    /// Grammar:
    /// ```text
    ///     stmt := or_term (('&' | '|') or_term)*
    /// ```
    /// `&` and `|` chain left to right without precedence. A character from
    /// `stop` right after `&` or `|` ends the chain, leaving the dangling
    /// operator without effect.
    pub(crate) fn parse_statement(&mut self, stop: &[char]) -> EvalResult<bool> {
        let mut holds = self.parse_or_term()?;
        loop {
            let conjunction = if self.cursor.eat('&') {
                true
            } else if self.cursor.eat('|') {
                false
            } else {
                return Ok(holds);
            };

            if self.cursor.peek_significant().is(|c| stop.contains(&c)) {
                return Ok(holds);
            }

            let rhs = self.parse_or_term()?;
            holds = if conjunction { holds && rhs } else { holds || rhs };
        }
    }

    /// Grammar: `or_term := '!'? ('(' stmt ')' | compare_term)`
    fn parse_or_term(&mut self) -> EvalResult<bool> {
        let negated = self.cursor.eat('!');
        let holds = if self.cursor.peek_significant() == Scan::At('(') {
            self.parse_group_or_comparison()?
        } else {
            self.parse_comparison()?
        };
        Ok(holds != negated)
    }

    /// Tries `'(' stmt ')'` first. When the group fails to parse, or turns
    /// out to be the operand of an arithmetic or comparison operator as in
    /// `(1+2)>2`, the cursor is rewound and the text is read as a comparison.
    fn parse_group_or_comparison(&mut self) -> EvalResult<bool> {
        let mark = self.cursor.mark();

        self.descend()?;
        let grouped = self.parse_group();
        self.ascend();

        match grouped {
            Ok(holds) if !self.continues_operand() => Ok(holds),
            _ => {
                self.cursor.reset(mark);
                self.parse_comparison()
            },
        }
    }

    fn parse_group(&mut self) -> EvalResult<bool> {
        self.cursor.eat('(');
        let holds = self.parse_statement(GROUP_STOP)?;
        self.expect_close()?;
        Ok(holds)
    }

    fn continues_operand(&self) -> bool {
        self.cursor
            .peek_significant()
            .is(|c| matches!(c, '+' | '-' | '*' | '/' | '^' | '%' | '<' | '>' | '=' | '!'))
    }

    /// Grammar:
    /// ```text
    ///     compare_term := expression [('>' | '>=' | '<' | '<=' | '=' | '!=') expression]
    /// ```
    /// A lone expression holds when it is non-zero.
    fn parse_comparison(&mut self) -> EvalResult<bool> {
        let left = self.parse_expression()?;
        let Some(comparison) = self.parse_comparison_operator()? else {
            return Ok(!left.is_zero());
        };
        let right = self.parse_expression()?;
        Ok(comparison.holds(left.cmp(&right)))
    }

    fn parse_comparison_operator(&mut self) -> EvalResult<Option<Comparison>> {
        let comparison = if self.cursor.eat('>') {
            if self.cursor.eat('=') { Comparison::GreaterOrEqual } else { Comparison::Greater }
        } else if self.cursor.eat('<') {
            if self.cursor.eat('=') { Comparison::LessOrEqual } else { Comparison::Less }
        } else if self.cursor.eat('=') {
            Comparison::Equal
        } else if self.cursor.eat('!') {
            if !self.cursor.eat('=') {
                self.cursor.skip_spaces();
                return Err(SyntaxError::ExpectedEquals { position: self.cursor.position() }.into());
            }
            Comparison::NotEqual
        } else {
            return Ok(None);
        };
        Ok(Some(comparison))
    }
}
