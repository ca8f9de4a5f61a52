//! Presenter benchmarks: deriving a full view from a decoded response.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use factcheck_core::decode::decode_result;
use factcheck_core::VerificationResult;
use factcheck_view::Presenter;

fn make_result(sources: usize) -> VerificationResult {
    let sources: Vec<_> = (0..sources)
        .map(|i| {
            serde_json::json!({
                "url": format!("https://www.site{i}.example/article/{i}"),
                "title": format!("Article {i}"),
                "published_at": "2024-01-15T10:00:00Z",
                "chunks": ["first chunk of evidence", "second chunk"],
                "nli_evaluated": true,
                "nli_max_entail": (i % 10) as f64 / 10.0,
                "nli_max_contra": ((i + 5) % 10) as f64 / 10.0,
                "nli_best_ent_chunk": "best entailment",
                "nli_best_contra_chunk": "best contradiction"
            })
        })
        .collect();
    decode_result(&serde_json::json!({
        "claim": "bench claim",
        "score": 0.72,
        "sources": sources
    }))
}

fn bench_present(c: &mut Criterion) {
    let presenter = Presenter::default();
    let small = make_result(5);
    let large = make_result(500);

    c.bench_function("present_5_sources", |b| {
        b.iter(|| presenter.present(black_box(&small)))
    });
    c.bench_function("present_500_sources", |b| {
        b.iter(|| presenter.present(black_box(&large)))
    });
}

criterion_group!(benches, bench_present);
criterion_main!(benches);
