use crate::cli::context::closest;
use crate::cli::{output, render, CommandError, CommandResult, ShellContext};
use crate::core::services::ExpenseInput;
use crate::core::Notice;
use crate::domain::catalog;
use crate::errors::ValidationError;

use super::CommandDefinition;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "add",
            "Record an expense",
            "add <title> <amount> <category> [description...]",
            cmd_add,
        ),
        CommandDefinition::new(
            "delete",
            "Remove an expense by id or id prefix",
            "delete <id>",
            cmd_delete,
        ),
        CommandDefinition::new("list", "List expenses, newest first", "list", cmd_list),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let field = |idx: usize| args.get(idx).copied().unwrap_or("");
    let description = (args.len() > 3).then(|| args[3..].join(" "));

    let added = ExpenseInput::from_form(field(0), field(1), field(2), description.as_deref())
        .and_then(|input| context.controller.add_expense(input));

    match added {
        Ok(expense) => {
            context.show_notice(&Notice::expense_added());
            output::block(&render::expense_line(&expense, context.symbol()));
            context.check_saved();
        }
        Err(err) => {
            context.show_notice(&Notice::rejected(&err));
            if let ValidationError::UnknownCategory(name) = &err {
                if let Some(best) = closest(name, catalog().names()) {
                    output::info(format!("Suggestion: `{}`?", best));
                }
                output::hint("Type `categories` to see the available categories.");
            }
        }
    }
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(needle) = args.first().map(|arg| arg.trim()).filter(|arg| !arg.is_empty()) else {
        return Err(CommandError::InvalidArguments("usage: delete <id>".into()));
    };

    let id = {
        let expenses = context.controller.expenses();
        if let Some(exact) = expenses.iter().find(|expense| expense.id == needle) {
            Some(exact.id.clone())
        } else {
            let matches: Vec<_> = expenses
                .iter()
                .filter(|expense| expense.id.starts_with(needle))
                .collect();
            if matches.len() > 1 {
                return Err(CommandError::InvalidArguments(format!(
                    "`{}` matches {} expenses; type more of the id.",
                    needle,
                    matches.len()
                )));
            }
            matches.first().map(|expense| expense.id.clone())
        }
    };

    match id.and_then(|id| context.controller.delete_expense(&id)) {
        Some(_) => {
            context.show_notice(&Notice::expense_removed());
            context.check_saved();
        }
        None => output::info(format!("No expense matches `{}`.", needle)),
    }
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Expenses");
    output::block(&render::expense_list(
        context.controller.expenses(),
        &context.controller.activity(),
        context.symbol(),
    ));
    Ok(())
}
