//! Plain-text renderings of the dashboard. Every function returns a string so
//! the shell can colour it and tests can compare it verbatim.

use crate::domain::{
    catalog, ActivityStats, Advice, Budget, CategoryGroup, CategorySpending, DistributionSlice,
    Expense, FinancialSummary, ProgressStatus,
};
use crate::utils::format::{money, percent, short_date};

const PROGRESS_WIDTH: usize = 20;
const SPENDING_WIDTH: usize = 24;
const TITLE_WIDTH: usize = 20;
const SHORT_ID_LEN: usize = 8;

/// Prefix of an expense id shown in listings and accepted by `delete`.
pub fn short_id(id: &str) -> String {
    id.chars().take(SHORT_ID_LEN).collect()
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

fn bar(fraction: f64, width: usize) -> String {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (fraction * width as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}

fn status_label(status: ProgressStatus) -> &'static str {
    match status {
        ProgressStatus::OnTrack => "on track",
        ProgressStatus::Caution => "caution",
        ProgressStatus::Over => "over budget",
    }
}

pub fn expense_line(expense: &Expense, symbol: &str) -> String {
    format!(
        "{:<8}  {:<12}  {:<20}  {:<14}  {:<9}  {:>10}",
        short_id(&expense.id),
        short_date(&expense.date),
        truncate(&expense.title, TITLE_WIDTH),
        expense.category,
        expense.kind.label(),
        money(expense.amount, symbol)
    )
}

/// Newest-first expense table followed by the activity footer.
pub fn expense_list(expenses: &[Expense], activity: &ActivityStats, symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.".to_string();
    }
    let mut lines = vec![format!(
        "{:<8}  {:<12}  {:<20}  {:<14}  {:<9}  {:>10}",
        "ID", "Date", "Title", "Category", "Type", "Amount"
    )];
    for expense in expenses {
        lines.push(expense_line(expense, symbol));
        if let Some(description) = &expense.description {
            lines.push(format!("          {}", description));
        }
    }
    lines.push(activity_footer(activity, symbol));
    lines.join("\n")
}

pub fn activity_footer(activity: &ActivityStats, symbol: &str) -> String {
    format!(
        "Transactions: {}  Needs: {}  Wants: {}  Daily average: {}",
        activity.transaction_count,
        money(activity.needs_total, symbol),
        money(activity.wants_total, symbol),
        money(activity.daily_average, symbol)
    )
}

/// One progress bar. The bar is capped at full while the percentage shows the real value.
pub fn progress_line(
    label: &str,
    spent: f64,
    allocation: f64,
    progress: f64,
    symbol: &str,
) -> String {
    let status = ProgressStatus::from_progress(progress);
    let fill = ProgressStatus::display_percentage(progress) / 100.0;
    format!(
        "{:<16} [{}] {:>6}  {} of {}  {}",
        label,
        bar(fill, PROGRESS_WIDTH),
        percent(progress),
        money(spent, symbol),
        money(allocation, symbol),
        status_label(status)
    )
}

pub fn budget_overview(budget: &Budget, symbol: &str) -> String {
    let mut lines = vec![
        format!("Month:        {}", budget.month),
        format!("Total:        {}", money(budget.total_amount, symbol)),
        format!(
            "Needs:        {}% ({})",
            budget.needs_percentage,
            money(budget.needs_allocation(), symbol)
        ),
        format!(
            "Wants:        {}% ({})",
            budget.wants_percentage,
            money(budget.wants_allocation(), symbol)
        ),
        format!("Unallocated:  {}%", budget.unallocated_percentage()),
    ];
    if budget.is_over_allocated() {
        lines.push("Percentages exceed the budget.".to_string());
    }
    lines.join("\n")
}

/// Balance panel with both progress bars and the advice line.
pub fn summary(
    summary: &FinancialSummary,
    budget: &Budget,
    advice: &Advice,
    symbol: &str,
) -> String {
    [
        format!(
            "Budget {}: {} ({}% needs / {}% wants)",
            budget.month,
            money(budget.total_amount, symbol),
            budget.needs_percentage,
            budget.wants_percentage
        ),
        format!("Income:     {}", money(summary.total_income, symbol)),
        format!("Spent:      {}", money(summary.total_expenses, symbol)),
        format!("Remaining:  {}", money(summary.remaining_balance, symbol)),
        progress_line(
            "Essential Needs",
            summary.needs_spent,
            summary.needs_allocation,
            summary.needs_progress,
            symbol,
        ),
        progress_line(
            "Lifestyle Wants",
            summary.wants_spent,
            summary.wants_allocation,
            summary.wants_progress,
            symbol,
        ),
        format!("Advice: {}", advice.message),
    ]
    .join("\n")
}

/// Horizontal bars scaled to the largest category.
pub fn category_spending(rows: &[CategorySpending], symbol: &str) -> String {
    if rows.is_empty() {
        return "No spending recorded yet.".to_string();
    }
    let max = rows.iter().map(|row| row.amount).fold(0.0_f64, f64::max);
    rows.iter()
        .map(|row| {
            let fraction = if max > 0.0 { row.amount / max } else { 0.0 };
            format!(
                "{:<14}  {:<9}  {}  {:>10}",
                row.name,
                row.kind.label(),
                bar(fraction, SPENDING_WIDTH),
                money(row.amount, symbol)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn distribution(slices: &[DistributionSlice], symbol: &str) -> String {
    if slices.is_empty() {
        return "Nothing to chart.".to_string();
    }
    let total: f64 = slices.iter().map(|slice| slice.value).sum();
    slices
        .iter()
        .map(|slice| {
            format!(
                "{:<16} {:>10}  {:>6}  {}",
                slice.name,
                money(slice.value, symbol),
                percent(slice.share_of(total)),
                slice.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn categories() -> String {
    let catalog = catalog();
    let mut lines = Vec::new();
    for group in [CategoryGroup::Needs, CategoryGroup::Wants] {
        lines.push(format!("{} ({})", group, group.expense_type().label()));
        for def in catalog.group(group) {
            lines.push(format!("  {:<14}  {}", def.name, def.description));
        }
    }
    lines.join("\n")
}
