//! Property-based tests for the numeral converter and the expression grammar.

use numtext::{decimal::Decimal, evaluate, numeral::NumeralConverter};
use proptest::prelude::*;

/// Runs fewer cases during development, full cases in CI.
fn proptest_config() -> ProptestConfig {
    if std::env::var("CI").is_ok() {
        ProptestConfig::default()
    } else {
        ProptestConfig { cases: 64,
                         max_shrink_iters: 256,
                         ..ProptestConfig::default() }
    }
}

fn round_trip(value: &Decimal) -> Decimal {
    let converter = NumeralConverter::new();
    let words = converter.to_words(value).unwrap();
    converter.from_words(&words)
             .unwrap_or_else(|e| panic!("Failed to read back '{words}': {e}"))
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn integers_survive_spelling(n in any::<i64>()) {
        let value = Decimal::from(n);
        prop_assert_eq!(round_trip(&value), value);
    }

    #[test]
    fn fractions_survive_spelling(n in any::<i64>(), scale in 0i64..24) {
        let value = Decimal::new(n, scale);
        prop_assert_eq!(round_trip(&value), value);
    }

    #[test]
    fn powers_of_one_thousand_survive_spelling(k in 1i64..3000, leading in 1u32..1000) {
        let value = Decimal::from(leading).shifted(3 * k);
        prop_assert_eq!(round_trip(&value), value);
    }

    #[test]
    fn multiplication_binds_tighter(a in -1000i64..1000, b in -1000i64..1000, c in -1000i64..1000) {
        let value = evaluate(&format!("{a}+{b}*{c}")).unwrap();
        prop_assert_eq!(value, Decimal::from(a + b * c));

        let value = evaluate(&format!("({a}+{b})*{c}")).unwrap();
        prop_assert_eq!(value, Decimal::from((a + b) * c));
    }

    #[test]
    fn subtraction_is_left_associative(a in -1000i64..1000, b in -1000i64..1000, c in -1000i64..1000) {
        let value = evaluate(&format!("{a}-{b}-{c}")).unwrap();
        prop_assert_eq!(value, Decimal::from(a - b - c));
    }

    #[test]
    fn power_is_right_associative(a in 1i64..5, b in 1i64..3, c in 1u32..3) {
        let value = evaluate(&format!("{a}^{b}^{c}")).unwrap();
        let exponent = u32::try_from(b.pow(c)).unwrap();
        prop_assert_eq!(value, Decimal::from(a.pow(exponent)));
    }
}
