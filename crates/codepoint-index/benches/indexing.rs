use codepoint_index::search::find_all;
use codepoint_index::{CodePointIndexer, SearchOptions, encode};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ASCII_WORDS: &[&str] = &["the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog"];
const WIDE_WORDS: &[&str] = &["𤔣𤔤", "ありがとう", "🇫🇷", "🇯🇵", "👋", "a𤔥b"];

fn mixed_text(words: usize, wide_ratio: f64) -> Vec<u16> {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut out = String::with_capacity(words * 8);
    for _ in 0..words {
        let word = if rng.gen_bool(wide_ratio) {
            WIDE_WORDS[rng.gen_range(0..WIDE_WORDS.len())]
        } else {
            ASCII_WORDS[rng.gen_range(0..ASCII_WORDS.len())]
        };
        out.push_str(word);
        out.push(' ');
    }
    encode(&out)
}

fn bench_length(c: &mut Criterion) {
    let ascii = mixed_text(20_000, 0.0);
    let mixed = mixed_text(20_000, 0.2);
    let indexer = CodePointIndexer::visual();

    c.bench_function("length/ascii_fast_path", |b| {
        b.iter(|| black_box(indexer.length(black_box(&ascii))))
    });
    c.bench_function("length/mixed_scan", |b| {
        b.iter(|| black_box(indexer.length(black_box(&mixed))))
    });
}

fn bench_offset_conversion(c: &mut Criterion) {
    let text = mixed_text(20_000, 0.2);
    let indexer = CodePointIndexer::standard();
    let mid = text.len() / 2;

    c.bench_function("char_index_for_code_unit/middle", |b| {
        b.iter(|| black_box(indexer.char_index_for_code_unit(&text, black_box(mid))))
    });
}

fn bench_search(c: &mut Criterion) {
    let text = mixed_text(20_000, 0.2);
    let indexer = CodePointIndexer::visual();
    let needle = encode("lazy dog");

    c.bench_function("index_of/mixed", |b| {
        b.iter(|| black_box(indexer.index_of(&text, black_box(&needle), 0)))
    });
    c.bench_function("find_all/mixed", |b| {
        b.iter(|| {
            let matches = find_all(&indexer, &text, "fox", SearchOptions::default()).unwrap();
            black_box(matches.len());
        })
    });
}

criterion_group!(benches, bench_length, bench_offset_conversion, bench_search);
criterion_main!(benches);
