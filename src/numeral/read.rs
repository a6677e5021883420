use crate::{
    decimal::core::Decimal,
    error::{ConversionError, ConversionResult},
    numeral::{
        core::NumeralConverter,
        lexer::{WordToken, tokenize},
        table,
    },
};

fn malformed(details: impl Into<String>) -> ConversionError {
    ConversionError::MalformedPhrase { details: details.into() }
}

fn unknown(word: &str) -> ConversionError {
    ConversionError::UnknownWord { word: word.to_string() }
}

impl NumeralConverter {
    /// Reads a number spelled in English words, ignoring case.
    ///
    /// Accepts everything [`to_words`](Self::to_words) produces, and place
    /// names in the plural (`"Zero and Three Tenths"`).
    ///
    /// # Errors
    /// - [`ConversionError::UnknownWord`] for a word that is not a numeral,
    ///   magnitude or place name.
    /// - [`ConversionError::MalformedPhrase`] for known words in an order that
    ///   does not form a number.
    ///
    /// # Example
    /// ```
    /// use numtext::{decimal::core::Decimal, numeral::core::NumeralConverter};
    ///
    /// let converter = NumeralConverter::new();
    /// let value = converter.from_words("negative twelve and three tenths").unwrap();
    /// assert_eq!(value, "-12.3".parse::<Decimal>().unwrap());
    /// ```
    pub fn from_words(&self, text: &str) -> ConversionResult<Decimal> {
        let tokens = tokenize(text).map_err(|word| ConversionError::UnknownWord { word })?;

        let (negative, tokens) = match tokens.split_first() {
            Some((WordToken::Negative, rest)) => (true, rest),
            _ => (false, tokens.as_slice()),
        };

        let (integral, fraction) = match tokens.iter().position(|t| *t == WordToken::And) {
            Some(at) => (&tokens[..at], Some(&tokens[at + 1..])),
            None => (tokens, None),
        };

        let mut value = self.read_integral(&words(integral)?)?;

        if let Some(fraction) = fraction {
            let fraction = words(fraction)?;
            let Some((place, numerator)) = fraction.split_last() else {
                return Err(malformed("expected a fraction after 'and'"));
            };
            let places = self.place_value(place)?;
            let numerator = self.read_integral(numerator)?;
            value = self.context.add(&value, &numerator.shifted(-places));
        }

        Ok(if negative { -value } else { value })
    }

    /// Reads a run of numeral and magnitude words as an integer.
    ///
    /// Small numerals add to a group; `Hundred` multiplies the group; larger
    /// magnitudes flush the group into the total.
    fn read_integral(&self, words: &[&str]) -> ConversionResult<Decimal> {
        match words {
            [] => return Err(malformed("expected a number")),
            [only] if only.eq_ignore_ascii_case("zero") => return Ok(Decimal::zero()),
            _ => {},
        }

        let mut total = Decimal::zero();
        let mut group = 0u64;

        for &word in words {
            if word.eq_ignore_ascii_case("hundred") {
                if group == 0 {
                    return Err(malformed(format!("'{word}' needs a multiplier")));
                }
                group *= 100;
            } else if let Some(exponent) = self.power_of(word) {
                if group == 0 {
                    return Err(malformed(format!("'{word}' needs a multiplier")));
                }
                total = self.context.add(&total, &Decimal::from(group).shifted(exponent));
                group = 0;
            } else if let Some(entry) = table::find_word(word) {
                group += entry.value;
            } else if word.eq_ignore_ascii_case("zero") {
                return Err(malformed("'Zero' must stand alone"));
            } else {
                return Err(unknown(word));
            }
        }

        Ok(self.context.add(&total, &Decimal::from(group)))
    }

    /// The number of decimal places named by a place word such as `Tenth`,
    /// `Hundredths` or `Ten-Millionth`.
    fn place_value(&self, word: &str) -> ConversionResult<i64> {
        let lower = word.to_ascii_lowercase();
        let singular = lower.strip_suffix('s').filter(|w| w.ends_with("th")).unwrap_or(&lower);
        let base = singular.strip_suffix("th").ok_or_else(|| unknown(word))?;

        let (extra, base) = if let Some(base) = base.strip_prefix("ten-") {
            (1, base)
        } else if let Some(base) = base.strip_prefix("hundred-") {
            (2, base)
        } else {
            (0, base)
        };

        let places = match base {
            "ten" if extra == 0 => 1,
            "hundred" if extra == 0 => 2,
            _ => self.power_of(base).ok_or_else(|| unknown(word))?,
        };
        Ok(places + extra)
    }
}

/// The words of a token run, which must contain no keyword.
fn words(tokens: &[WordToken]) -> ConversionResult<Vec<&str>> {
    tokens.iter()
          .map(|token| match token {
              WordToken::Word(word) => Ok(word.as_str()),
              WordToken::Negative => Err(malformed("'Negative' must come first")),
              WordToken::And => Err(malformed("'and' may appear only once")),
          })
          .collect()
}
