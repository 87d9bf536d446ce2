use criterion::{black_box, criterion_group, criterion_main, Criterion};
use clog_core::tokens::{estimate_tokens, CharRatioEstimator, TokenEstimator};
use rand::Rng;

fn random_text(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| if rng.gen_bool(0.15) { ' ' } else { rng.gen_range('a'..='z') })
        .collect()
}

fn bench_estimate_tokens(c: &mut Criterion) {
    let text_1k = random_text(1024);
    let text_100k = random_text(100 * 1024);
    let estimator = CharRatioEstimator::new(3);

    c.bench_function("estimate_tokens_1kb", |b| {
        b.iter(|| black_box(estimate_tokens(black_box(&text_1k))))
    });
    c.bench_function("estimate_tokens_100kb", |b| {
        b.iter(|| black_box(estimate_tokens(black_box(&text_100k))))
    });
    c.bench_function("estimate_tokens_ratio3_100kb", |b| {
        b.iter(|| black_box(estimator.estimate(black_box(&text_100k))))
    });
}

fn bench_config_parse(c: &mut Criterion) {
    let raw = r#"{"top_level_drop":"chatStart","prune_keys":["id","sessionId","traceId"]}"#;
    c.bench_function("config_from_json", |b| {
        b.iter(|| black_box(clog_core::OptimizerConfig::from_json_str(black_box(raw)).ok()))
    });
}

criterion_group!(benches, bench_estimate_tokens, bench_config_parse);
criterion_main!(benches);
