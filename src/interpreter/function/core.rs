use crate::{
    decimal::{
        context::PrecisionContext,
        core::Decimal,
        math::{self, MathResult},
    },
    error::{EvalResult, SyntaxError},
    interpreter::{
        function::{builtin, variadic::Accumulator},
        parser::{core::Parser, statement::ARGUMENT_STOP},
    },
};

type ConstantFn = fn(&PrecisionContext) -> MathResult<Decimal>;
type UnaryFn = fn(&Decimal, &PrecisionContext) -> MathResult<Decimal>;
type BinaryFn = fn(&Decimal, &Decimal, &PrecisionContext) -> MathResult<Decimal>;

/// Number of arguments a builtin takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// A constant. An empty `()` may follow the name.
    Nullary,
    /// One argument, parenthesized or written directly after the name
    /// (`sin30`).
    Unary,
    Binary,
    Ternary,
    /// One or more comma-separated arguments.
    Variadic,
}

/// How a builtin is evaluated.
#[derive(Clone, Copy)]
enum Handler {
    Constant(ConstantFn),
    Unary(UnaryFn),
    Binary(BinaryFn),
    /// `if(stmt, then, else)`, or `nif` when `negated`.
    Conditional {
        negated: bool,
    },
    Variadic(Accumulator),
}

impl Handler {
    const fn arity(self) -> Arity {
        match self {
            Self::Constant(_) => Arity::Nullary,
            Self::Unary(_) => Arity::Unary,
            Self::Binary(_) => Arity::Binary,
            Self::Conditional { .. } => Arity::Ternary,
            Self::Variadic(_) => Arity::Variadic,
        }
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $handler:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:    &'static str,
            handler: Handler,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, handler: $handler },
            )*
        ];
        /// Every identifier the expression grammar recognizes.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "pi"        => Handler::Constant(math::pi),
    "e"         => Handler::Constant(math::e),
    "sqrt"      => Handler::Unary(math::sqrt),
    "sin"       => Handler::Unary(math::sin),
    "asin"      => Handler::Unary(math::asin),
    "sinh"      => Handler::Unary(math::sinh),
    "asinh"     => Handler::Unary(math::asinh),
    "cos"       => Handler::Unary(math::cos),
    "acos"      => Handler::Unary(math::acos),
    "cosh"      => Handler::Unary(math::cosh),
    "acosh"     => Handler::Unary(math::acosh),
    "tan"       => Handler::Unary(math::tan),
    "atan"      => Handler::Unary(math::atan),
    "tanh"      => Handler::Unary(math::tanh),
    "atanh"     => Handler::Unary(math::atanh),
    "cot"       => Handler::Unary(math::cot),
    "acot"      => Handler::Unary(math::acot),
    "coth"      => Handler::Unary(math::coth),
    "acoth"     => Handler::Unary(math::acoth),
    "abs"       => Handler::Unary(builtin::abs),
    "factorial" => Handler::Unary(math::factorial),
    "gamma"     => Handler::Unary(math::gamma),
    "exp"       => Handler::Unary(math::exp),
    "exponent"  => Handler::Unary(builtin::exponent),
    "mantissa"  => Handler::Unary(builtin::mantissa),
    "ceiling"   => Handler::Unary(builtin::ceiling),
    "floor"     => Handler::Unary(builtin::floor),
    "round"     => Handler::Unary(builtin::round),
    "logE"      => Handler::Unary(math::ln),
    "logTen"    => Handler::Unary(math::log10),
    "logTwo"    => Handler::Unary(math::log2),
    "rad"       => Handler::Unary(math::to_radians),
    "deg"       => Handler::Unary(math::to_degrees),
    "roundTo"   => Handler::Binary(builtin::round_to),
    "pow"       => Handler::Binary(math::pow),
    "root"      => Handler::Binary(math::root),
    "log"       => Handler::Binary(math::log),
    "if"        => Handler::Conditional { negated: false },
    "nif"       => Handler::Conditional { negated: true },
    "average"   => Handler::Variadic(Accumulator::Average),
    "sum"       => Handler::Variadic(Accumulator::Sum),
    "reduce"    => Handler::Variadic(Accumulator::Reduce),
    "multiply"  => Handler::Variadic(Accumulator::Multiply),
    "divide"    => Handler::Variadic(Accumulator::Divide),
    "max"       => Handler::Variadic(Accumulator::Max),
    "min"       => Handler::Variadic(Accumulator::Min),
}

fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

/// Returns the arity class of a builtin, or `None` for unknown names.
///
/// # Example
/// ```
/// use numtext::interpreter::function::core::{Arity, arity_of};
///
/// assert_eq!(arity_of("sin"), Some(Arity::Unary));
/// assert_eq!(arity_of("nif"), Some(Arity::Ternary));
/// assert_eq!(arity_of("foo"), None);
/// ```
#[must_use]
pub fn arity_of(name: &str) -> Option<Arity> {
    lookup(name).map(|b| b.handler.arity())
}

impl Parser<'_> {
    /// Evaluates the builtin `name`, whose identifier started at `position`.
    /// The cursor sits right after the identifier.
    ///
    /// # Errors
    /// - `UnknownIdentifier` if `name` is not a builtin.
    /// - `MissingArguments` if a function of two or more arguments is not
    ///   followed by `(`.
    /// - `MissingComma` if a fixed-arity call lacks a separator.
    pub(crate) fn call_function(&mut self, name: &str, position: usize) -> EvalResult<Decimal> {
        let Some(builtin) = lookup(name) else {
            return Err(SyntaxError::UnknownIdentifier { name: name.to_string(),
                                                        position }.into());
        };

        match builtin.handler {
            Handler::Constant(constant) => {
                if self.cursor.eat('(') {
                    self.expect_close()?;
                }
                self.compute(constant)
            },
            Handler::Unary(function) => {
                let argument = if self.cursor.eat('(') {
                    let value = self.parse_expression()?;
                    self.expect_close()?;
                    value
                } else {
                    self.parse_factor()?
                };
                self.compute(|ctx| function(&argument, ctx))
            },
            Handler::Binary(function) => {
                self.open_arguments(name, position)?;
                let left = self.parse_expression()?;
                self.expect_comma(name)?;
                let right = self.parse_expression()?;
                self.expect_close()?;
                self.compute(|ctx| function(&left, &right, ctx))
            },
            Handler::Conditional { negated } => {
                self.open_arguments(name, position)?;
                let holds = self.parse_statement(ARGUMENT_STOP)? != negated;
                self.expect_comma(name)?;
                let then = self.parse_branch(holds)?;
                self.expect_comma(name)?;
                let otherwise = self.parse_branch(!holds)?;
                self.expect_close()?;
                Ok(if holds { then } else { otherwise })
            },
            Handler::Variadic(accumulator) => {
                self.open_arguments(name, position)?;
                let mut values = vec![self.parse_expression()?];
                while self.cursor.eat(',') {
                    values.push(self.parse_expression()?);
                }
                self.expect_close()?;
                self.compute(|ctx| accumulator.fold(&values, ctx))
            },
        }
    }

    fn open_arguments(&mut self, name: &str, position: usize) -> EvalResult<()> {
        if self.cursor.eat('(') {
            return Ok(());
        }
        Err(SyntaxError::MissingArguments { function: name.to_string(),
                                            position }.into())
    }

    fn expect_comma(&mut self, name: &str) -> EvalResult<()> {
        if self.cursor.eat(',') {
            return Ok(());
        }
        self.cursor.skip_spaces();
        Err(SyntaxError::MissingComma { function: name.to_string(),
                                        position: self.cursor.position(), }.into())
    }
}
