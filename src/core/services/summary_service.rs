use std::collections::HashMap;

use crate::domain::{
    common::total_amount, ActivityStats, Budget, CategorySpending, DistributionSlice, Expense,
    ExpenseType, FinancialSummary,
};

/// Days the footer's daily average is spread over.
const DAYS_PER_MONTH: f64 = 30.0;

struct SliceSpec {
    name: &'static str,
    color: &'static str,
    description: &'static str,
}

const NEEDS_SLICE: SliceSpec = SliceSpec {
    name: "Essential Needs",
    color: "#10B981",
    description: "Things you need to live",
};

const WANTS_SLICE: SliceSpec = SliceSpec {
    name: "Lifestyle Wants",
    color: "#8B5CF6",
    description: "Things that make life enjoyable",
};

const AVAILABLE_SLICE: SliceSpec = SliceSpec {
    name: "Available Funds",
    color: "#3B82F6",
    description: "Money left for saving or spending",
};

/// Stateless aggregation over an expense list and the active budget.
pub struct SummaryService;

impl SummaryService {
    /// Folds the expense list against the budget. The result does not depend on list order.
    pub fn summarize(expenses: &[Expense], budget: &Budget) -> FinancialSummary {
        let needs_spent = Self::spent_on(expenses, ExpenseType::Need);
        let wants_spent = Self::spent_on(expenses, ExpenseType::Want);
        // Every expense lands in exactly one bucket.
        let total_expenses = needs_spent + wants_spent;

        let needs_allocation = budget.needs_allocation();
        let wants_allocation = budget.wants_allocation();

        FinancialSummary {
            total_income: budget.total_amount,
            total_expenses,
            remaining_balance: budget.total_amount - total_expenses,
            needs_spent,
            wants_spent,
            needs_allocation,
            wants_allocation,
            needs_progress: progress(needs_spent, needs_allocation),
            wants_progress: progress(wants_spent, wants_allocation),
        }
    }

    pub fn spent_on(expenses: &[Expense], kind: ExpenseType) -> f64 {
        total_amount(expenses.iter().filter(|expense| expense.kind == kind))
    }

    /// One entry per distinct category in first-occurrence order. The first expense
    /// seen for a category decides its tag.
    pub fn category_spending(expenses: &[Expense]) -> Vec<CategorySpending> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut rows: Vec<CategorySpending> = Vec::new();
        for expense in expenses {
            match positions.get(expense.category.as_str()) {
                Some(&idx) => rows[idx].amount += expense.amount,
                None => {
                    positions.insert(expense.category.as_str(), rows.len());
                    rows.push(CategorySpending {
                        name: expense.category.clone(),
                        amount: expense.amount,
                        kind: expense.kind,
                    });
                }
            }
        }
        rows
    }

    /// Pie slices for needs, wants and what is left. Slices without a positive value are dropped.
    pub fn budget_distribution(summary: &FinancialSummary) -> Vec<DistributionSlice> {
        [
            (NEEDS_SLICE, summary.needs_spent),
            (WANTS_SLICE, summary.wants_spent),
            (AVAILABLE_SLICE, summary.remaining_balance.max(0.0)),
        ]
        .into_iter()
        .filter(|(_, value)| *value > 0.0)
        .map(|(spec, value)| DistributionSlice {
            name: spec.name.to_string(),
            value,
            color: spec.color.to_string(),
            description: spec.description.to_string(),
        })
        .collect()
    }

    pub fn activity_stats(expenses: &[Expense]) -> ActivityStats {
        let needs_total = Self::spent_on(expenses, ExpenseType::Need);
        let wants_total = Self::spent_on(expenses, ExpenseType::Want);
        ActivityStats {
            needs_total,
            wants_total,
            daily_average: (needs_total + wants_total) / DAYS_PER_MONTH,
            transaction_count: expenses.len(),
        }
    }
}

fn progress(spent: f64, allocation: f64) -> f64 {
    if allocation > 0.0 {
        spent / allocation * 100.0
    } else {
        0.0
    }
}
