use std::{sync::Arc, thread};

use numtext::{
    decimal::Decimal,
    error::ConversionError,
    numeral::{MagnitudeCache, NumeralConverter, latin::group_name},
};

fn words(value: &str) -> String {
    let value: Decimal = value.parse().unwrap();
    NumeralConverter::new().to_words(&value)
                           .unwrap_or_else(|e| panic!("Failed to spell {value}: {e}"))
}

fn number(text: &str) -> Decimal {
    NumeralConverter::new().from_words(text)
                           .unwrap_or_else(|e| panic!("Failed to read '{text}': {e}"))
}

fn decimal(text: &str) -> Decimal {
    text.parse().unwrap()
}

#[test]
fn small_integers() {
    assert_eq!(words("0"), "Zero");
    assert_eq!(words("7"), "Seven");
    assert_eq!(words("19"), "Nineteen");
    assert_eq!(words("42"), "Forty Two");
    assert_eq!(words("100"), "One Hundred");
    assert_eq!(words("999"), "Nine Hundred Ninety Nine");
    assert_eq!(words("1234567"),
               "One Million Two Hundred Thirty Four Thousand Five Hundred Sixty Seven");
    assert_eq!(words("-15"), "Negative Fifteen");
}

#[test]
fn large_integers() {
    assert_eq!(words("1000000000"), "One Billion");
    assert_eq!(words("2500000000000"), "Two Trillion Five Hundred Billion");
    assert_eq!(words("1000000001"), "One Billion One");
    assert_eq!(words("1e33"), "One Decillion");
    assert_eq!(words("12e36"), "Twelve Undecillion");
    assert_eq!(words("1e3003"), "One Millinillion");
}

#[test]
fn fractions() {
    assert_eq!(words("0.5"), "Zero and Five Tenth");
    assert_eq!(words("-2.05"), "Negative Two and Five Hundredth");
    assert_eq!(words("3.125"), "Three and One Hundred Twenty Five Thousandth");
    assert_eq!(words("1.0001"), "One and One Ten-Thousandth");
    assert_eq!(words("0.000001"), "Zero and One Millionth");
    assert_eq!(words("0.0000001"), "Zero and One Ten-Millionth");
    assert_eq!(words("0.00000001"), "Zero and One Hundred-Millionth");
    assert_eq!(words("2.50"), "Two and Five Tenth");
}

#[test]
fn reading_words() {
    assert_eq!(number("Zero"), decimal("0"));
    assert_eq!(number("one hundred"), decimal("100"));
    assert_eq!(number("Twenty One"), decimal("21"));
    assert_eq!(number("Five Hundred Thousand"), decimal("500000"));
    assert_eq!(number("One Billion"), decimal("1000000000"));
    assert_eq!(number("Zero and Three Tenths"), decimal("0.3"));
    assert_eq!(number("Negative Zero and Five Tenth"), decimal("-0.5"));
    assert_eq!(number("One and Seven Ten-Thousandths"), decimal("1.0007"));
    assert_eq!(number("TWELVE UNDECILLION"), decimal("12e36"));
}

#[test]
fn unreadable_words_are_errors() {
    let converter = NumeralConverter::new();
    let error = |text: &str| converter.from_words(text).unwrap_err();

    assert!(matches!(error("Gazillion"), ConversionError::UnknownWord { .. }));
    assert!(matches!(error("One 2"), ConversionError::UnknownWord { .. }));
    assert!(matches!(error("One and Five"), ConversionError::UnknownWord { .. }));
    assert!(matches!(error("Hundred"), ConversionError::MalformedPhrase { .. }));
    assert!(matches!(error("Thousand Five"), ConversionError::MalformedPhrase { .. }));
    assert!(matches!(error("One and"), ConversionError::MalformedPhrase { .. }));
    assert!(matches!(error("One Negative"), ConversionError::MalformedPhrase { .. }));
    assert!(matches!(error("Zero One"), ConversionError::MalformedPhrase { .. }));
    assert!(matches!(error(""), ConversionError::MalformedPhrase { .. }));
}

#[test]
fn latin_group_names() {
    let expected = [(3, "Trillion"),
                    (4, "Quadrillion"),
                    (5, "Quintillion"),
                    (6, "Sextillion"),
                    (7, "Septillion"),
                    (8, "Octillion"),
                    (9, "Nonillion"),
                    (11, "Undecillion"),
                    (16, "Sedecillion"),
                    (17, "Septendecillion"),
                    (20, "Vigintillion"),
                    (100, "Centillion"),
                    (1001, "Millimillion")];
    for (index, name) in expected {
        assert_eq!(group_name(index), name, "group {index}");
    }
}

#[test]
fn magnitude_names() {
    let converter = NumeralConverter::new();
    assert_eq!(converter.magnitude_name(3).unwrap(), "Thousand");
    assert_eq!(converter.magnitude_name(6).unwrap(), "Million");
    assert!(matches!(converter.magnitude_name(0),
                     Err(ConversionError::IrregularExponent { exponent: 0 })));
    assert!(matches!(converter.magnitude_name(-3),
                     Err(ConversionError::IrregularExponent { .. })));
}

#[test]
fn magnitude_cache_is_idempotent() {
    let converter = NumeralConverter::new();
    let first = converter.magnitude_name(3003).unwrap();
    let second = converter.magnitude_name(3003).unwrap();
    assert_eq!(first, second);
    assert_eq!(converter.cache().len(), 1);

    let value = converter.from_words(&format!("One {first}")).unwrap();
    assert_eq!(value, Decimal::ten_to(3003));
}

#[test]
fn uncached_names_are_decoded() {
    let cache = Arc::new(MagnitudeCache::new());
    let converter = NumeralConverter::with_cache(Arc::clone(&cache));

    assert!(cache.is_empty());
    assert_eq!(converter.from_words("Two Vigintillion").unwrap(), Decimal::from(2).shifted(63));
    assert_eq!(cache.index_of("vigintillion"), Some(20));
    assert_eq!(cache.name_for(20), "Vigintillion");
}

#[test]
fn cache_is_shared_between_threads() {
    let cache = Arc::new(MagnitudeCache::new());

    let names = thread::scope(|scope| {
        let handles = (0..8).map(|_| {
                                let converter = NumeralConverter::with_cache(Arc::clone(&cache));
                                scope.spawn(move || converter.to_words(&Decimal::ten_to(303)))
                            })
                            .collect::<Vec<_>>();
        handles.into_iter()
               .map(|handle| handle.join().unwrap().unwrap())
               .collect::<Vec<_>>()
    });

    assert!(names.iter().all(|name| name == "One Centillion"));
    assert_eq!(cache.len(), 1);
}

#[test]
fn partial_words() {
    let converter = NumeralConverter::new();
    let short = |value: &str, places, digits| {
        converter.to_partial_words(&decimal(value), places, digits).unwrap()
    };

    assert_eq!(short("1234567890", 3, 2), "1.23 Billion");
    assert_eq!(short("1234567890", 6, 1), "1234.6 Million");
    assert_eq!(short("1500000", 3, 2), "1.5 Million");
    assert_eq!(short("-1500000", 3, 1), "-1.5 Million");
    assert_eq!(short("2000000000", 3, 2), "2 Billion");
    assert_eq!(short("123456", 3, 0), "123 Thousand");
    assert_eq!(short("950", 3, 0), "950");
    assert_eq!(short("12.346", 3, 2), "12.35");
    assert_eq!(short("1e303", 3, 2), "1 Centillion");
}

#[test]
fn partial_words_carry_into_the_next_magnitude() {
    let converter = NumeralConverter::new();
    let short = |value: &str, places, digits| {
        converter.to_partial_words(&decimal(value), places, digits).unwrap()
    };

    assert_eq!(short("999999999.9", 3, 0), "1 Billion");
    assert_eq!(short("999999", 1, 1), "1 Million");
    assert_eq!(short("999.9", 3, 0), "1 Thousand");
    assert_eq!(short("999499", 3, 0), "999 Thousand");
    assert_eq!(short("9.99", 1, 0), "10");
}
