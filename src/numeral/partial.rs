use crate::{
    decimal::core::Decimal,
    error::ConversionResult,
    numeral::core::NumeralConverter,
};

impl NumeralConverter {
    /// Writes `value` as a numeral followed by one magnitude word.
    ///
    /// At most `places_before_word` integer digits stay in the numeral (at
    /// least one); the rest of the magnitude is stripped as a power of one
    /// thousand and named. The numeral is rounded to `rounding_digits`
    /// fractional digits with trailing zeros dropped. Values too small to
    /// need a word are returned as a plain numeral. When rounding carries the
    /// numeral into the next thousand, the next magnitude word is used.
    ///
    /// # Example
    /// ```
    /// use numtext::{decimal::core::Decimal, numeral::core::NumeralConverter};
    ///
    /// let converter = NumeralConverter::new();
    /// let value = Decimal::from(1_234_567_890u64);
    ///
    /// assert_eq!(converter.to_partial_words(&value, 3, 2).unwrap(), "1.23 Billion");
    /// assert_eq!(converter.to_partial_words(&value, 6, 1).unwrap(), "1234.6 Million");
    /// assert_eq!(converter.to_partial_words(&Decimal::from(950), 3, 0).unwrap(), "950");
    /// assert_eq!(converter.to_partial_words(&Decimal::from(999_999), 3, 0).unwrap(),
    ///            "1 Million");
    /// ```
    pub fn to_partial_words(&self,
                            value: &Decimal,
                            places_before_word: u64,
                            rounding_digits: u16)
                            -> ConversionResult<String> {
        let value = self.context.round(value);
        let digits = value.integer_digits();
        let places = places_before_word.max(1);

        let mut exponent = if digits > places {
            let stripped = (digits - places).div_ceil(3) * 3;
            let largest = (digits - 1) / 3 * 3;
            i64::try_from(stripped.min(largest)).unwrap_or(i64::MAX)
        } else {
            0
        };

        let scale = i64::from(rounding_digits);
        let rounding = self.context.rounding();
        let mut numeral = value.shifted(-exponent).with_scale(scale, rounding)?.normalized();

        // Rounding can carry into a new thousand, as in 999.99 -> 1000.
        let kept = value.shifted(-exponent).integer_digits();
        let carried = numeral.integer_digits();
        if carried > places.max(kept) && carried > 3 {
            exponent += 3;
            numeral = value.shifted(-exponent).with_scale(scale, rounding)?.normalized();
        }

        if exponent < 3 {
            return Ok(numeral.to_string());
        }
        Ok(format!("{numeral} {}", self.magnitude_name(exponent)?))
    }
}
