use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lintrc::{Environment, PolicyBuilder};

/// Build a synthetic table with `n` environment-default rules and one
/// derivation mirroring every other stem.
fn build_table(n: usize) -> PolicyBuilder {
    let mut builder = PolicyBuilder::new();
    let mut stems = Vec::new();
    for i in 0..n {
        let name = format!("rule-{i}");
        builder = builder.rule(&name, |r| r.env_default());
        if i % 2 == 0 {
            stems.push(name);
        }
    }
    builder.derive_namespace("", "vue", stems)
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for &n in &[10, 100, 500] {
        group.bench_function(&format!("{n}_rules"), |b| {
            b.iter(|| build_table(black_box(n)).resolve(Environment::Production).unwrap());
        });
    }

    group.bench_function("preset_development", |b| {
        b.iter(|| {
            lintrc::preset::policy()
                .resolve(black_box(Environment::Development))
                .unwrap()
        });
    });

    group.bench_function("preset_production", |b| {
        b.iter(|| {
            lintrc::preset::policy()
                .resolve(black_box(Environment::Production))
                .unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
