use crate::{
    decimal::{context::PrecisionContext, core::Decimal, math::MathResult},
    error::ArithmeticError,
};

/// How the arguments of a variadic builtin are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accumulator {
    /// Arithmetic mean.
    Average,
    /// `a + b + c ...`
    Sum,
    /// `a - b - c ...`
    Reduce,
    /// `a × b × c ...`
    Multiply,
    /// `a ÷ b ÷ c ...`
    Divide,
    Max,
    Min,
}

impl Accumulator {
    /// Folds `values` left to right.
    ///
    /// # Errors
    /// Division by zero for `divide`; an empty argument list is undefined.
    ///
    /// # Example
    /// ```
    /// use numtext::{
    ///     decimal::{PrecisionContext, core::Decimal},
    ///     interpreter::function::variadic::Accumulator,
    /// };
    ///
    /// let ctx = PrecisionContext::default();
    /// let values = [Decimal::from(2), Decimal::from(4)];
    /// assert_eq!(Accumulator::Average.fold(&values, &ctx).unwrap(), Decimal::from(3));
    /// assert_eq!(Accumulator::Reduce.fold(&values, &ctx).unwrap(), Decimal::from(-2));
    /// ```
    pub fn fold(self, values: &[Decimal], ctx: &PrecisionContext) -> MathResult<Decimal> {
        let Some((first, rest)) = values.split_first() else {
            return Err(ArithmeticError::Undefined { operation: self.name(),
                                                    reason:    "no arguments were given", });
        };

        let mut acc = ctx.round(first);
        for value in rest {
            acc = match self {
                Self::Average | Self::Sum => ctx.add(&acc, value),
                Self::Reduce => ctx.sub(&acc, value),
                Self::Multiply => ctx.mul(&acc, value),
                Self::Divide => ctx.div(&acc, value)?,
                Self::Max => acc.max(ctx.round(value)),
                Self::Min => acc.min(ctx.round(value)),
            };
        }

        if self == Self::Average {
            return ctx.div(&acc, &Decimal::from(values.len()));
        }
        Ok(acc)
    }

    /// The builtin name bound to this accumulator.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Average => "average",
            Self::Sum => "sum",
            Self::Reduce => "reduce",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Max => "max",
            Self::Min => "min",
        }
    }
}
