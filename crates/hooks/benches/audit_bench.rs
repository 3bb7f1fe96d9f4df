use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stageguard_hooks::rules::first_match;

const SAMPLE_CONTENT: &str = r#"
# Configuration
API_KEY = "sk-abcdefghijklmnopqrstuvwxyz"
password = "longenough1"

# Safe content
DEBUG=true
LOG_LEVEL=info
APP_NAME=stageguard
"#;

fn bench_mixed_content(c: &mut Criterion) {
    c.bench_function("first_match_mixed", |b| {
        b.iter(|| first_match(black_box(SAMPLE_CONTENT)))
    });
}

fn bench_clean_content(c: &mut Criterion) {
    // Worst case: both rules scan the whole input without matching.
    let clean = "DEBUG=true\nLOG_LEVEL=info\n".repeat(100);

    c.bench_function("first_match_clean", |b| {
        b.iter(|| first_match(black_box(&clean)))
    });
}

fn bench_secret_at_end(c: &mut Criterion) {
    let mut content = "DEBUG=true\nLOG_LEVEL=info\n".repeat(100);
    content.push_str("API_KEY = \"sk-abcdefghijklmnopqrstuvwxyz\"\n");

    c.bench_function("first_match_secret_at_end", |b| {
        b.iter(|| first_match(black_box(&content)))
    });
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");
    for size in [10, 100, 1000].iter() {
        let content = "DEBUG=true\nLOG_LEVEL=info\n".repeat(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| first_match(black_box(content)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_mixed_content,
    bench_clean_content,
    bench_secret_at_end,
    bench_scaling,
);
criterion_main!(benches);
