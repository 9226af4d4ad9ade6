use crate::cli::{output, CommandError, CommandResult, ShellContext};
use crate::utils::build_info;

use super::CommandDefinition;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("version", "Show build metadata", "version", cmd_version),
        CommandDefinition::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandDefinition::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("MoneyMind {}", meta.version));
    output::info(format!("  Build hash : {}", meta.git_hash));
    output::info(format!("  Built at   : {}", meta.timestamp));
    output::info(format!("  Profile    : {}", meta.profile));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first().map(|name| name.to_lowercase()) {
        match context.command(&name) {
            Some(command) => {
                output::info(format!("{} - {}", command.name, command.description));
                output::info(format!("Usage: {}", command.usage));
            }
            None => context.suggest_command(args[0]),
        }
        return Ok(());
    }

    output::section("Commands");
    let lines: Vec<String> = context
        .registry
        .iter()
        .map(|command| format!("  {:<14} {}", command.name, command.description))
        .collect();
    output::block(&lines.join("\n"));
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
