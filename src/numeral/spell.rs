use crate::{
    decimal::core::Decimal,
    error::{ConversionError, ConversionResult},
    numeral::{
        core::{NumeralConverter, canonical_exponent},
        table,
    },
};

impl NumeralConverter {
    /// Spells `value` in English words.
    ///
    /// A fraction is written as `"<integral> and <numerator> <Place>"`, with
    /// the place name in the singular.
    ///
    /// # Errors
    /// Returns [`ConversionError::IrregularExponent`] if a magnitude cannot be
    /// named.
    ///
    /// # Example
    /// ```
    /// use numtext::{decimal::core::Decimal, numeral::core::NumeralConverter};
    ///
    /// let converter = NumeralConverter::new();
    /// let value: Decimal = "-2.05".parse().unwrap();
    /// assert_eq!(converter.to_words(&value).unwrap(),
    ///            "Negative Two and Five Hundredth");
    /// assert_eq!(converter.to_words(&Decimal::ten_to(33)).unwrap(), "One Decillion");
    /// ```
    pub fn to_words(&self, value: &Decimal) -> ConversionResult<String> {
        let value = self.context.round(value);
        if value.is_zero() {
            return Ok("Zero".to_string());
        }

        let mut words = Vec::new();
        if value.is_negative() {
            words.push("Negative".to_string());
        }

        let magnitude = value.abs();
        self.spell_integral(&magnitude.trunc(), &mut words)?;

        let fraction = magnitude.fract().normalized();
        if !fraction.is_zero() {
            words.push("and".to_string());
            self.spell_integral(&Decimal::from(fraction.unscaled().clone()), &mut words)?;
            words.push(self.place_name(fraction.scale())?);
        }

        Ok(words.join(" "))
    }

    /// Spells a non-negative integer.
    ///
    /// Magnitudes from a billion up are peeled off one power of one thousand
    /// at a time; what remains is spelled from the fixed table.
    fn spell_integral(&self, n: &Decimal, words: &mut Vec<String>) -> ConversionResult<()> {
        if n.is_zero() {
            words.push("Zero".to_string());
            return Ok(());
        }

        let mut rest = n.clone();
        while rest >= Decimal::from(table::TABLE_LIMIT) {
            let exponent = canonical_exponent(rest.exponent())?;
            let count = rest.shifted(-exponent).trunc();
            spell_small(to_small(&count)?, words);
            words.push(self.magnitude_name(exponent)?);
            rest = &rest - &count.shifted(exponent);
        }

        if !rest.is_zero() {
            spell_small(to_small(&rest)?, words);
        }
        Ok(())
    }

    /// The name of the decimal place `10^-places`.
    fn place_name(&self, places: i64) -> ConversionResult<String> {
        let name = match places {
            1 => "Tenth".to_string(),
            2 => "Hundredth".to_string(),
            3 => "Thousandth".to_string(),
            _ => {
                let exponent = canonical_exponent(places)?;
                let prefix = match places - exponent {
                    0 => "",
                    1 => "Ten-",
                    _ => "Hundred-",
                };
                format!("{prefix}{}th", self.magnitude_name(exponent)?)
            },
        };
        Ok(name)
    }
}

fn to_small(n: &Decimal) -> ConversionResult<u64> {
    n.to_i64()
     .and_then(|n| u64::try_from(n).ok())
     .ok_or_else(|| ConversionError::InvalidNumber { text: n.to_string() })
}

/// Spells `n < 10^9` against the fixed table.
fn spell_small(n: u64, words: &mut Vec<String>) {
    let Some(entry) = table::largest_at_most(n) else {
        return;
    };
    if entry.value >= 100 {
        spell_small(n / entry.value, words);
    }
    words.push(entry.word.to_string());

    let remainder = n % entry.value;
    if remainder > 0 {
        spell_small(remainder, words);
    }
}
