//! Benchmarks for query latency
//!
//! Run with: cargo bench --package recommender
//!
//! Uses a synthetic 2,000 movie catalog so the benchmark runs without the
//! real dataset.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{RawMovie, SimilarityMatrix};
use recommender::{filter_by_genre, RecommendationEngine, RecommenderConfig, RecommenderContext};

const SIZE: usize = 2_000;
const GENRES: [&str; 4] = ["Action", "Drama", "Comedy", "Thriller"];

fn build_context() -> RecommenderContext {
    let movies = (0..SIZE)
        .map(|i| RawMovie {
            title: format!("Movie {i}"),
            genres: vec![GENRES[i % GENRES.len()].to_string()],
            vote_average: (i % 100) as f64 / 10.0,
            vote_count: ((i * 37) % 5_000) as u32,
        })
        .collect();
    let rows = (0..SIZE)
        .map(|i| {
            (0..SIZE)
                .map(|j| if i == j { 1.0 } else { ((i * j) % 97) as f64 / 97.0 })
                .collect()
        })
        .collect();
    let matrix = SimilarityMatrix::from_rows(rows).expect("square matrix");
    RecommenderContext::build(movies, matrix, None, RecommenderConfig::default())
        .expect("consistent synthetic dataset")
}

fn bench_recommend(c: &mut Criterion) {
    let ctx = build_context();
    let engine = RecommendationEngine::new(&ctx);

    c.bench_function("recommend_unconstrained", |b| {
        b.iter(|| engine.recommend(black_box("Movie 42"), None, black_box(20)))
    });

    c.bench_function("recommend_with_genre", |b| {
        b.iter(|| engine.recommend(black_box("Movie 42"), Some("Drama"), black_box(20)))
    });
}

fn bench_filter_by_genre(c: &mut Criterion) {
    let ctx = build_context();

    c.bench_function("filter_by_genre", |b| {
        b.iter(|| filter_by_genre(&ctx, black_box("Thriller")))
    });
}

criterion_group!(benches, bench_recommend, bench_filter_by_genre);
criterion_main!(benches);
