// Criterion benchmarks for numspell-eu.
//
// Run:
//   cargo bench -p numspell-eu

use criterion::{Criterion, criterion_group, criterion_main};

use numspell_eu::handle::NumspellHandle;
use numspell_eu::speller::NumeralSpeller;
use numspell_eu::speller::basque::BasqueSpeller;

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Spell every number below one thousand.
fn bench_spell_below_thousand(c: &mut Criterion) {
    let speller = BasqueSpeller::new();

    c.bench_function("spell_0_to_999", |b| {
        b.iter(|| {
            for n in 0..1000 {
                std::hint::black_box(speller.spell(n).ok());
            }
        });
    });
}

/// Spell numbers spread over the whole supported range (thousands band).
fn bench_spell_thousands(c: &mut Criterion) {
    let speller = BasqueSpeller::new();
    let numbers: Vec<u64> = (0..1000).map(|i| i * 997 + 1000).collect();

    c.bench_function("spell_1000_thousands", |b| {
        b.iter(|| {
            for &n in &numbers {
                std::hint::black_box(speller.spell(n).ok());
            }
        });
    });
}

/// Convert a 10,000-line in-memory input.
fn bench_convert_lines(c: &mut Criterion) {
    let handle = NumspellHandle::new("eus").expect("NumspellHandle");
    let input: String = (0..10_000u64).map(|n| format!("{}\n", n * 73)).collect();

    c.bench_function("convert_10000_lines", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(input.len() * 8);
            std::hint::black_box(handle.convert(input.as_bytes(), &mut out).ok());
            std::hint::black_box(out);
        });
    });
}

criterion_group!(
    benches,
    bench_spell_below_thousand,
    bench_spell_thousands,
    bench_convert_lines,
);
criterion_main!(benches);
