use criterion::{Criterion, criterion_group, criterion_main};
use sentio_analysis::Analyzer;
use std::hint::black_box;

const TWEETS: [&str; 4] = [
    "I love this product! It's amazing and wonderful!",
    "I hate this product! It's terrible and awful!",
    "The weather is 75 degrees today.",
    "I love the design but hate the price. It's good but expensive. 😍 #deal @shop",
];

fn bench_analyze(c: &mut Criterion) {
    let analyzer = Analyzer::default();

    c.bench_function("analyze_short_tweet", |b| {
        b.iter(|| analyzer.analyze(black_box(TWEETS[0])));
    });

    c.bench_function("analyze_mixed_batch", |b| {
        b.iter(|| {
            for tweet in TWEETS {
                let _ = black_box(analyzer.analyze(black_box(tweet)));
            }
        });
    });

    let long = "This is a very long positive message. ".repeat(7);
    c.bench_function("analyze_280_chars", |b| {
        b.iter(|| analyzer.analyze(black_box(&long)));
    });
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
