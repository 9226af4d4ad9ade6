use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use moneymind::core::recompute;
use moneymind::core::services::{ClassificationService, SummaryService};
use moneymind::domain::{catalog, AppState, Budget, Expense};
use moneymind::storage::{JsonFileStore, StorageAdapter};
use tempfile::tempdir;

fn build_sample_state(expense_count: usize) -> AppState {
    let mut state = AppState::new(Budget::new(250_000.0, 50.0, 30.0, "2025-06"));
    let names: Vec<&str> = catalog().names().collect();
    let start = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();

    for idx in 0..expense_count {
        let category = names[idx % names.len()];
        let amount = 5.0 + (idx % 97) as f64 * 1.25;
        let date = start + Duration::minutes(idx as i64);
        state.expenses.push(Expense::new(
            format!("Expense {idx}"),
            amount,
            category,
            ClassificationService::classify(category),
            date,
        ));
    }
    state
}

fn bench_aggregation(c: &mut Criterion) {
    let state = build_sample_state(black_box(10_000));

    c.bench_function("summarize_10k", |b| {
        b.iter(|| {
            let summary = SummaryService::summarize(&state.expenses, &state.budget);
            black_box(summary);
        })
    });

    c.bench_function("category_spending_10k", |b| {
        b.iter(|| black_box(SummaryService::category_spending(&state.expenses)))
    });

    c.bench_function("recompute_dashboard_10k", |b| {
        b.iter(|| black_box(recompute(&state)))
    });
}

fn bench_storage(c: &mut Criterion) {
    let state = build_sample_state(black_box(10_000));
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().to_path_buf()).expect("store");
    let adapter = StorageAdapter::new(Box::new(store));

    c.bench_function("state_save_10k", |b| {
        b.iter(|| black_box(adapter.save(&state)))
    });

    adapter.save(&state);

    c.bench_function("state_load_10k", |b| b.iter(|| black_box(adapter.load())));

    c.bench_function("state_decode_10k", |b| {
        b.iter_batched(
            || adapter.raw(),
            |raw| black_box(raw.map(|blob| moneymind::storage::decode(&blob))),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_aggregation, bench_storage);
criterion_main!(benches);
