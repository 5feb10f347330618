//! Benchmarks for filter, search and limit queries.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use sheetbase::query::engine;
use sheetbase::{Filters, Table, TableBuilder, Value};

const SMALL_ROWS: usize = 1_000;
const MEDIUM_ROWS: usize = 10_000;
const LARGE_ROWS: usize = 100_000;

const DEPARTMENTS: &[&str] = &["Engineering", "Sales", "Marketing", "Support", "Finance"];

fn setup_table(rows: usize) -> Table {
    let mut builder = TableBuilder::new("bench", ["id", "name", "dept", "salary", "active"]).unwrap();
    for i in 0..rows {
        builder
            .add_row(vec![
                Value::Int(i as i64),
                Value::String(format!("employee-{}", i)),
                Value::from(DEPARTMENTS[i % DEPARTMENTS.len()]),
                Value::Float(40_000.0 + (i % 997) as f64 * 12.5),
                if i % 7 == 0 { Value::Null } else { Value::Bool(i % 3 != 0) },
            ])
            .unwrap();
    }
    builder.build().unwrap()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filter");

    for &rows in &[SMALL_ROWS, MEDIUM_ROWS, LARGE_ROWS] {
        let table = setup_table(rows);
        let filters = Filters::new().with("dept", "eng").with("active", "true");

        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, _| {
            b.iter(|| black_box(engine::select(&table, &filters, None, i64::MAX)));
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Search");

    for &rows in &[SMALL_ROWS, MEDIUM_ROWS, LARGE_ROWS] {
        let table = setup_table(rows);
        let filters = Filters::new();

        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, _| {
            b.iter(|| black_box(engine::select(&table, &filters, Some("ee-99"), i64::MAX)));
        });
    }

    group.finish();
}

fn bench_run_with_limit(c: &mut Criterion) {
    let mut group = c.benchmark_group("Run (limit 10)");

    for &rows in &[SMALL_ROWS, MEDIUM_ROWS, LARGE_ROWS] {
        let table = setup_table(rows);
        let filters = Filters::new().with("dept", "sales");

        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, _| {
            b.iter(|| black_box(engine::run(&table, &filters, Some("1"), 10)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter, bench_search, bench_run_with_limit);
criterion_main!(benches);
