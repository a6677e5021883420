use std::sync::Arc;

use crate::{
    decimal::context::PrecisionContext,
    error::{ConversionError, ConversionResult},
    numeral::{cache::MagnitudeCache, table},
};

/// Converts between decimals and English numeral words.
///
/// All arithmetic runs under [`PrecisionContext::NUMERAL`]. Names of large
/// magnitudes come from a [`MagnitudeCache`], which may be shared between
/// converters and threads.
///
/// # Example
/// ```
/// use numtext::{decimal::core::Decimal, numeral::core::NumeralConverter};
///
/// let converter = NumeralConverter::new();
/// let n = Decimal::from(1_234);
///
/// let words = converter.to_words(&n).unwrap();
/// assert_eq!(words, "One Thousand Two Hundred Thirty Four");
/// assert_eq!(converter.from_words(&words).unwrap(), n);
/// ```
#[derive(Debug, Clone)]
pub struct NumeralConverter {
    pub(crate) cache:   Arc<MagnitudeCache>,
    pub(crate) context: PrecisionContext,
}

impl NumeralConverter {
    /// Creates a converter with a private cache.
    #[must_use]
    pub fn new() -> Self {
        Self::with_cache(Arc::new(MagnitudeCache::new()))
    }

    /// Creates a converter that shares `cache`.
    #[must_use]
    pub const fn with_cache(cache: Arc<MagnitudeCache>) -> Self {
        Self { cache,
               context: PrecisionContext::NUMERAL }
    }

    #[must_use]
    pub const fn cache(&self) -> &Arc<MagnitudeCache> {
        &self.cache
    }

    #[must_use]
    pub const fn context(&self) -> &PrecisionContext {
        &self.context
    }

    /// The name of `10^exponent`.
    ///
    /// # Errors
    /// [`ConversionError::IrregularExponent`] unless `exponent` is a positive
    /// multiple of three.
    ///
    /// # Example
    /// ```
    /// use numtext::numeral::core::NumeralConverter;
    ///
    /// let converter = NumeralConverter::new();
    /// assert_eq!(converter.magnitude_name(3).unwrap(), "Thousand");
    /// assert_eq!(converter.magnitude_name(36).unwrap(), "Undecillion");
    /// assert!(converter.magnitude_name(7).is_err());
    /// ```
    pub fn magnitude_name(&self, exponent: i64) -> ConversionResult<String> {
        if exponent < 3 || exponent % 3 != 0 {
            return Err(ConversionError::IrregularExponent { exponent });
        }
        Ok(self.cache.name_for(exponent.unsigned_abs() / 3 - 1))
    }

    /// The power of ten named by a magnitude word at or above "Thousand".
    pub(crate) fn power_of(&self, word: &str) -> Option<i64> {
        if let Some(entry) = table::find_word(word).filter(|e| e.value >= 1000) {
            return Some(i64::from(entry.value.ilog10()));
        }
        let index = self.cache.index_of(word)?;
        index.checked_add(1)?.checked_mul(3).and_then(|e| i64::try_from(e).ok())
    }
}

impl Default for NumeralConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduces `exponent` to a multiple of three with at most two decrements.
///
/// # Errors
/// [`ConversionError::IrregularExponent`] when no multiple of three is
/// reached.
pub(crate) fn canonical_exponent(exponent: i64) -> ConversionResult<i64> {
    let mut reduced = exponent;
    for _ in 0..2 {
        if reduced % 3 == 0 {
            return Ok(reduced);
        }
        reduced = reduced.checked_sub(1)
                         .ok_or(ConversionError::IrregularExponent { exponent })?;
    }
    if reduced % 3 == 0 {
        Ok(reduced)
    } else {
        Err(ConversionError::IrregularExponent { exponent })
    }
}
