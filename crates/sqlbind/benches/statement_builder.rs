use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlbind::{StatementBuilder, Value};

/// Build an INSERT with `n` columns: INSERT INTO t (col0,...) VALUES (:col0,...)
fn build_insert(n: usize) -> String {
    let mut sb = StatementBuilder::new();
    sb.set_table("t");
    let values: Vec<(String, Value)> = (0..n)
        .map(|i| (format!("col{i}"), Value::Int(i as i64)))
        .collect();
    sb.insert(values)
}

/// Build a predicate chain with `n` conditions then DELETE.
fn build_predicate_chain(n: usize) -> String {
    let mut sb = StatementBuilder::new();
    sb.set_table("t");
    for i in 0..n {
        sb.and_where(&format!("col{i}"), "=", i as i64);
    }
    sb.delete()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement_builder/insert");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_insert(n)));
        });
    }

    group.finish();
}

fn bench_predicate_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement_builder/predicate_chain");

    for n in [1, 5, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_predicate_chain(n)));
        });
    }

    group.finish();
}

fn bench_update_rebind(c: &mut Criterion) {
    // Rebinding the same columns exercises the in-place overwrite path.
    let mut group = c.benchmark_group("statement_builder/update_rebind");

    for n in [5, 20, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut sb = StatementBuilder::new();
                sb.set_table("t");
                let values: Vec<(String, Value)> = (0..n)
                    .map(|i| (format!("col{i}"), Value::Int(i as i64)))
                    .collect();
                sb.insert(values.clone());
                black_box(sb.update(values));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_predicate_chain, bench_update_rebind);
criterion_main!(benches);
