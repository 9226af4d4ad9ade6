use crate::cli::{output, render, CommandResult, ShellContext};
use crate::domain::AdviceKind;

use super::CommandDefinition;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "summary",
            "Show balance, progress bars and advice",
            "summary",
            cmd_summary,
        ),
        CommandDefinition::new(
            "spending",
            "Show spending per category",
            "spending",
            cmd_spending,
        ),
        CommandDefinition::new(
            "distribution",
            "Show how the budget splits into needs, wants and available funds",
            "distribution",
            cmd_distribution,
        ),
        CommandDefinition::new("advice", "Show the current advice", "advice", cmd_advice),
        CommandDefinition::new(
            "categories",
            "List the expense categories",
            "categories",
            cmd_categories,
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let view = context.controller.view();
    output::section("Summary");
    output::block(&render::summary(
        &view.summary,
        context.controller.budget(),
        &view.advice,
        context.symbol(),
    ));
    Ok(())
}

fn cmd_spending(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Spending by category");
    output::block(&render::category_spending(
        context.controller.category_spending(),
        context.symbol(),
    ));
    Ok(())
}

fn cmd_distribution(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Budget distribution");
    output::block(&render::distribution(
        context.controller.budget_distribution(),
        context.symbol(),
    ));
    Ok(())
}

fn cmd_advice(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let advice = context.controller.advice();
    match advice.kind {
        AdviceKind::Warning => output::warning(&advice.message),
        AdviceKind::Success => output::success(&advice.message),
        AdviceKind::Info => output::info(&advice.message),
    }
    Ok(())
}

fn cmd_categories(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Categories");
    output::block(&render::categories());
    Ok(())
}
