//! Benchmarks for deckwright deck building and serialization.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use deckwright::{build_presentation, DeckOptions, Presentation, SlideContent, TitleContent};

/// Creates a synthetic deck with the given number of content slides.
fn create_test_deck(slide_count: usize) -> Presentation {
    let title = TitleContent::new("Benchmark Deck", "Generated\nfor timing");
    let slides: Vec<SlideContent> = (0..slide_count)
        .map(|i| {
            SlideContent::new(
                format!("Slide {}", i + 1),
                (0..5).map(|b| format!("Bullet {} of slide {}", b + 1, i + 1)),
                format!("Speaker notes for slide {}.", i + 1),
            )
        })
        .collect();
    build_presentation(&title, &slides, &DeckOptions::new()).unwrap()
}

/// Benchmark the built-in deck end to end, without touching the disk.
fn bench_default_deck(c: &mut Criterion) {
    let options = DeckOptions::new();
    c.bench_function("default_deck_to_bytes", |b| {
        b.iter(|| {
            let prs = deckwright::build_deck(black_box(&options)).unwrap();
            let _ = prs.to_bytes();
        });
    });
}

/// Benchmark serialization at various deck sizes.
fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");

    for slide_count in [10, 50, 200].iter() {
        let prs = create_test_deck(*slide_count);

        group.throughput(Throughput::Elements(*slide_count as u64));
        group.bench_with_input(BenchmarkId::new("slides", slide_count), &prs, |b, prs| {
            b.iter(|| {
                let _ = black_box(prs).to_bytes();
            });
        });
    }

    group.finish();
}

/// Benchmark reading written packages back.
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for slide_count in [10, 50, 200].iter() {
        let data = create_test_deck(*slide_count).to_bytes().unwrap();

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("slides", slide_count), &data, |b, data| {
            b.iter(|| {
                let _ = deckwright::parse_bytes(black_box(data));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_default_deck, bench_serialization, bench_parsing);
criterion_main!(benches);
