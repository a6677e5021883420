use std::{error::Error, process};

use clap::{Parser, Subcommand, ValueEnum};
use numtext::{
    decimal::{Decimal, PrecisionContext, RoundingMode},
    interpreter::{bindings::Bindings, core::Interpreter},
    numeral::NumeralConverter,
};

/// numtext evaluates arithmetic over arbitrary-precision decimals and spells
/// numbers of any size in English words.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluates an arithmetic expression.
    Eval {
        expression: String,

        /// Significant digits kept by every operation.
        #[arg(short, long, default_value_t = 34)]
        precision: u64,

        /// Rounding applied when digits are discarded.
        #[arg(short, long, value_enum, default_value_t = Rounding::HalfEven)]
        rounding: Rounding,

        /// Binds `$NAME` to a value. May be repeated.
        #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
        vars: Vec<(String, Decimal)>,

        /// Appends a positional value, read as `$(0)`, `$(1)`, and so on.
        #[arg(long = "arg", value_name = "VALUE", allow_negative_numbers = true)]
        args: Vec<Decimal>,

        /// Prints the result in words instead of digits.
        #[arg(short, long)]
        words: bool,
    },
    /// Tests a boolean statement such as `1+1=2 & 3>2`.
    Test { statement: String },
    /// Spells a number in words.
    Words {
        #[arg(allow_negative_numbers = true)]
        number: Decimal,
    },
    /// Reads a number spelled in words.
    Number {
        #[arg(num_args = 1.., required = true)]
        words: Vec<String>,
    },
    /// Shortens a number to a numeral and one magnitude word.
    Short {
        #[arg(allow_negative_numbers = true)]
        number: Decimal,

        /// Integer digits kept before the magnitude word.
        #[arg(long, default_value_t = 3)]
        places: u64,

        /// Fractional digits kept in the numeral.
        #[arg(long, default_value_t = 2)]
        digits: u16,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Rounding {
    Up,
    Down,
    Ceiling,
    Floor,
    HalfUp,
    HalfDown,
    HalfEven,
}

impl From<Rounding> for RoundingMode {
    fn from(rounding: Rounding) -> Self {
        match rounding {
            Rounding::Up => Self::Up,
            Rounding::Down => Self::Down,
            Rounding::Ceiling => Self::Ceiling,
            Rounding::Floor => Self::Floor,
            Rounding::HalfUp => Self::HalfUp,
            Rounding::HalfDown => Self::HalfDown,
            Rounding::HalfEven => Self::HalfEven,
        }
    }
}

fn parse_binding(text: &str) -> Result<(String, Decimal), String> {
    let (name, value) =
        text.split_once('=').ok_or_else(|| format!("expected NAME=VALUE, found '{text}'"))?;
    let value = value.parse::<Decimal>().map_err(|e| e.to_string())?;
    Ok((name.trim().to_string(), value))
}

fn run(command: Command) -> Result<String, Box<dyn Error>> {
    let output = match command {
        Command::Eval { expression,
                        precision,
                        rounding,
                        vars,
                        args,
                        words, } => {
            let context = PrecisionContext::new(precision, rounding.into())
                .ok_or("Precision must be at least one digit.")?;

            let mut bindings = Bindings::new().with_positional(args);
            for (name, value) in vars {
                bindings.insert(name, value);
            }

            let value = Interpreter::new(context).evaluate_with(&expression, &bindings)?;
            if words {
                NumeralConverter::new().to_words(&value)?
            } else {
                value.to_string()
            }
        },
        Command::Test { statement } => {
            Interpreter::default().evaluate_boolean(&statement)?.to_string()
        },
        Command::Words { number } => NumeralConverter::new().to_words(&number)?,
        Command::Number { words } => NumeralConverter::new().from_words(&words.join(" "))?
                                                            .to_string(),
        Command::Short { number,
                         places,
                         digits, } => {
            NumeralConverter::new().to_partial_words(&number, places, digits)?
        },
    };
    Ok(output)
}

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    match run(args.command) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}
