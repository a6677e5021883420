// ============================================================================
// numtext Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Evaluation - Arithmetic, transcendental and conditional expressions
// 2. Precision - The same expression under growing precision contexts
// 3. Numerals - Spelling and reading numbers of growing magnitude
// ============================================================================

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use numtext::{
    decimal::{Decimal, PrecisionContext, RoundingMode},
    interpreter::{bindings::Bindings, core::Interpreter},
    numeral::NumeralConverter,
};

fn benchmark_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation");
    let interpreter = Interpreter::default();

    let expressions = [("arithmetic", "(1 + 2) * 3 - 4 / 5 + 2^10 %% 7"),
                       ("transcendental", "sin(rad(30)) + logE(10) + sqrt(2)"),
                       ("conditional", "if((1 + 2) > 2 & 3 != 4, sum(1, 2, 3), 0)"),
                       ("variadic", "average(1, 2, 3, 4, 5, 6, 7, 8, 9, 10)")];

    for (name, text) in expressions {
        group.bench_with_input(BenchmarkId::new("evaluate", name), text, |b, text| {
                 b.iter(|| black_box(interpreter.evaluate(black_box(text))));
             });
    }

    let bindings = Bindings::new().with("rate", 15).with_positional([80, 120]);
    group.bench_function("placeholders", |b| {
             b.iter(|| {
                  black_box(interpreter.evaluate_with(black_box("$rate % ($(0) + $(1))"),
                                                      &bindings))
              });
         });

    group.finish();
}

fn benchmark_precision(c: &mut Criterion) {
    let mut group = c.benchmark_group("precision");

    for digits in [16, 34, 100, 500] {
        let Some(context) = PrecisionContext::new(digits, RoundingMode::HalfEven) else {
            continue;
        };
        let interpreter = Interpreter::new(context);
        group.bench_with_input(BenchmarkId::new("pi_and_e", digits), &interpreter, |b, i| {
                 b.iter(|| black_box(i.evaluate(black_box("pi * e"))));
             });
    }

    group.finish();
}

fn benchmark_numerals(c: &mut Criterion) {
    let mut group = c.benchmark_group("numerals");
    let converter = NumeralConverter::new();

    for exponent in [6, 33, 303, 3003] {
        let value = Decimal::from(123_456_789).shifted(exponent);
        let Ok(words) = converter.to_words(&value) else {
            continue;
        };

        group.bench_with_input(BenchmarkId::new("to_words", exponent), &value, |b, value| {
                 b.iter(|| black_box(converter.to_words(black_box(value))));
             });
        group.bench_with_input(BenchmarkId::new("from_words", exponent), &words, |b, words| {
                 b.iter(|| black_box(converter.from_words(black_box(words))));
             });
    }

    group.finish();
}

criterion_group!(benches, benchmark_evaluation, benchmark_precision, benchmark_numerals);
criterion_main!(benches);
