use chrono::NaiveDate;

use crate::cli::{output, render, CommandError, CommandResult, ShellContext};
use crate::core::Notice;
use crate::domain::BudgetUpdate;

use super::CommandDefinition;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "budget",
        "Show the budget, or change it with key=value pairs",
        "budget [total=<amount>] [needs=<percent>] [wants=<percent>] [month=<YYYY-MM>]",
        cmd_budget,
    )]
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        output::section("Budget");
        output::block(&render::budget_overview(
            context.controller.budget(),
            context.symbol(),
        ));
        return Ok(());
    }

    let update = parse_update(args)?;
    let budget = context.controller.update_budget(&update);
    context.show_notice(&Notice::budget_updated());
    output::block(&render::budget_overview(&budget, context.symbol()));
    context.check_saved();
    Ok(())
}

pub(crate) fn parse_update(args: &[&str]) -> Result<BudgetUpdate, CommandError> {
    let mut update = BudgetUpdate::default();
    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            return Err(CommandError::InvalidArguments(format!(
                "expected key=value, got `{}`",
                arg
            )));
        };
        let value = value.trim();
        update = match key.trim().to_lowercase().as_str() {
            "total" => update.total_amount(parse_number(key, value)?),
            "needs" => update.needs_percentage(parse_number(key, value)?),
            "wants" => update.wants_percentage(parse_number(key, value)?),
            "month" => update.month(parse_month(value)?),
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown budget field `{}`; use total, needs, wants or month",
                    other
                )))
            }
        };
    }
    Ok(update)
}

fn parse_number(key: &str, value: &str) -> Result<f64, CommandError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| {
            CommandError::InvalidArguments(format!("`{}` needs a number, got `{}`", key, value))
        })
}

fn parse_month(value: &str) -> Result<String, CommandError> {
    NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d")
        .map(|date| date.format("%Y-%m").to_string())
        .map_err(|_| {
            CommandError::InvalidArguments(format!(
                "month must look like 2025-10, got `{}`",
                value
            ))
        })
}
