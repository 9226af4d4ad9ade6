mod common;

use chrono::NaiveDate;
use common::{file_adapter, fixed_now, temp_base};
use moneymind::core::{services::ExpenseInput, BudgetController};
use moneymind::domain::{BudgetDefaults, BudgetUpdate};
use moneymind::storage::{JsonFileStore, StorageAdapter, DEFAULT_STORAGE_KEY};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 7).unwrap()
}

fn open(base: &std::path::Path) -> BudgetController {
    BudgetController::open(file_adapter(base), &BudgetDefaults::default(), today())
}

#[test]
fn state_survives_a_restart() {
    let base = temp_base();
    let mut controller = open(&base);
    controller
        .add_expense_at(
            ExpenseInput::new("Pharmacy", 18.5, "Healthcare").with_description("allergy tablets"),
            fixed_now(),
        )
        .unwrap();
    controller.update_budget(&BudgetUpdate::default().total_amount(3200.0));
    let saved = controller.into_state();

    let reopened = open(&base);
    assert_eq!(reopened.state(), &saved);
    assert_eq!(reopened.budget().total_amount, 3200.0);
    assert_eq!(reopened.summary().needs_spent, 18.5);
}

#[test]
fn first_launch_uses_defaults_for_the_current_month() {
    let base = temp_base();
    let controller = open(&base);
    let budget = controller.budget();
    assert_eq!(budget.total_amount, 3000.0);
    assert_eq!(budget.needs_percentage, 50.0);
    assert_eq!(budget.wants_percentage, 30.0);
    assert_eq!(budget.month, "2025-10");
    assert!(controller.expenses().is_empty());
    assert!(controller.storage().raw().is_none());
}

#[test]
fn corrupt_blob_falls_back_to_defaults() {
    let base = temp_base();
    let store = JsonFileStore::new(base.join("store")).unwrap();
    std::fs::write(store.blob_path(DEFAULT_STORAGE_KEY), "{not json").unwrap();

    let controller = open(&base);
    assert!(controller.expenses().is_empty());
    assert_eq!(controller.budget().month, "2025-10");
}

#[test]
fn blob_uses_the_documented_layout() {
    let base = temp_base();
    let mut controller = open(&base);
    controller
        .add_expense_at(ExpenseInput::new("Cinema", 14.0, "Entertainment"), fixed_now())
        .unwrap();

    let raw = controller.storage().raw().expect("blob written");
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let expense = &json["expenses"][0];
    assert_eq!(expense["type"], "want");
    assert_eq!(expense["category"], "Entertainment");
    assert_eq!(expense["date"], "2025-10-07T09:30:00Z");
    assert_eq!(json["budget"]["totalAmount"], 3000.0);
    assert_eq!(json["budget"]["id"], "1");
}

#[test]
fn legacy_blob_with_numeric_style_ids_loads() {
    let base = temp_base();
    let store = JsonFileStore::new(base.join("store")).unwrap();
    let legacy = concat!(
        r#"{"expenses":[{"id":"1728290000000","title":"Groceries","amount":52.3,"#,
        r#""category":"Groceries","type":"need","date":"2024-10-07T08:33:20.000Z","#,
        r#""description":"market"}],"budget":{"id":"1","totalAmount":2500,"#,
        r#""needsPercentage":50,"wantsPercentage":30,"month":"2024-10"}}"#
    );
    std::fs::write(store.blob_path(DEFAULT_STORAGE_KEY), legacy).unwrap();

    let adapter = StorageAdapter::new(Box::new(store));
    let state = adapter.load().expect("legacy blob parses");
    assert_eq!(state.expenses[0].id, "1728290000000");
    assert_eq!(state.expenses[0].description.as_deref(), Some("market"));
    assert_eq!(state.budget.total_amount, 2500.0);

    // Resaving normalizes number and date text but keeps every value.
    assert!(adapter.save(&state));
    let resaved = adapter.raw().expect("blob written");
    assert!(resaved.contains(r#""totalAmount":2500.0"#));
    assert!(resaved.contains(r#""date":"2024-10-07T08:33:20Z""#));
    assert_eq!(adapter.load().expect("resaved blob parses"), state);
}

#[test]
fn non_finite_budget_update_keeps_stored_expenses() {
    let base = temp_base();
    let mut controller = open(&base);
    controller
        .add_expense_at(ExpenseInput::new("Rent", 400.0, "Rent"), fixed_now())
        .unwrap();
    controller.update_budget(&BudgetUpdate::default().total_amount(f64::NAN));
    assert!(controller.last_save_succeeded());
    assert_eq!(controller.budget().total_amount, 3000.0);

    let raw = controller.storage().raw().expect("blob written");
    assert!(!raw.contains("null"));

    let reopened = open(&base);
    assert_eq!(reopened.expenses().len(), 1);
    assert_eq!(reopened.budget().total_amount, 3000.0);
}
