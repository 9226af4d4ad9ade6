use std::{
    borrow::Cow,
    fmt,
    io::{self, BufRead},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Context as ReadlineContext, Editor, Helper,
};
use shell_words::split;

use crate::cli::{output, CliError, CliMode, CommandError, LoopControl, ShellContext, SCRIPT_ENV};
use crate::domain::catalog;

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandHelper::new(context.command_names())));
    output::info("Type `help` to see available commands.");

    loop {
        if !context.running {
            break;
        }
        let prompt = context.prompt();
        match editor.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();

                match handle_line(context, trimmed) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => context.report_error(err)?,
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        let line = line?;
        match handle_line(context, &line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}

pub(crate) fn handle_line(
    context: &mut ShellContext,
    line: &str,
) -> Result<LoopControl, CommandError> {
    let tokens = match parse_command_line(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::warning(&err);
            return Ok(LoopControl::Continue);
        }
    };

    if tokens.is_empty() || tokens[0].starts_with('#') {
        return Ok(LoopControl::Continue);
    }

    let raw = &tokens[0];
    let command = raw.to_lowercase();
    let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

    context.last_command = Some(line.trim().to_string());
    tracing::debug!(command = %command, args = args.len(), "dispatching");

    match context.dispatch(&command, raw, &args) {
        Ok(LoopControl::Exit) => {
            context.running = false;
            Ok(LoopControl::Exit)
        }
        other => other,
    }
}

struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names
            .into_iter()
            .map(|name| name.to_ascii_lowercase())
            .collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }

    /// Candidates for the word being typed: commands first, then categories
    /// for the third argument of `add`.
    fn candidates(&self, prefix: &str, start: usize) -> Vec<Pair> {
        let needle = prefix[start..].to_ascii_lowercase();
        let words: Vec<&str> = prefix[..start].split_whitespace().collect();

        let pool: Vec<String> = match words.as_slice() {
            [] => self.commands.clone(),
            [command, _, _] if command.eq_ignore_ascii_case("add") => {
                catalog().names().map(str::to_string).collect()
            }
            _ => Vec::new(),
        };

        pool.into_iter()
            .filter(|name| name.to_ascii_lowercase().starts_with(&needle))
            .map(|name| Pair {
                display: name.clone(),
                replacement: if name.contains(' ') {
                    format!("\"{}\"", name)
                } else {
                    name
                },
            })
            .collect()
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        Ok((start, self.candidates(prefix, start)))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        let _ = ctx;
        Ok(ValidationResult::Valid(None))
    }
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    split(input).map_err(|err| ParseError {
        message: err.to_string(),
    })
}

#[derive(Debug)]
pub(crate) struct ParseError {
    message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::BudgetController;
    use crate::domain::{AppState, Budget};
    use crate::storage::{MemoryStore, StorageAdapter};

    fn context() -> ShellContext {
        let state = AppState::new(Budget::new(1000.0, 50.0, 30.0, "2025-10"));
        let controller =
            BudgetController::with_state(state, StorageAdapter::new(Box::new(MemoryStore::new())));
        ShellContext::with_controller(CliMode::Script, controller, Config::default())
    }

    #[test]
    fn quoted_arguments_stay_together() {
        let tokens =
            parse_command_line(r#"add "Weekly shop" 82.4 Groceries fruit and veg"#).unwrap();
        assert_eq!(tokens[1], "Weekly shop");
        assert_eq!(tokens.len(), 7);
        assert!(parse_command_line("add \"unterminated").is_err());
    }

    #[test]
    fn lines_drive_the_controller() {
        let mut context = context();
        handle_line(&mut context, "add Rent 400 rent").unwrap();
        handle_line(&mut context, "add \"Movie night\" 25 \"Entertainment\" popcorn").unwrap();
        assert_eq!(context.controller.expenses().len(), 2);
        assert_eq!(context.controller.expenses()[0].description.as_deref(), Some("popcorn"));
        assert_eq!(context.controller.summary().needs_spent, 400.0);

        let prefix: String = context.controller.expenses()[1].id.chars().take(8).collect();
        handle_line(&mut context, &format!("delete {}", prefix)).unwrap();
        assert_eq!(context.controller.expenses().len(), 1);

        handle_line(&mut context, "budget total=2000 wants=40").unwrap();
        assert_eq!(context.controller.budget().total_amount, 2000.0);
        assert_eq!(context.controller.budget().wants_percentage, 40.0);
    }

    #[test]
    fn rejected_input_and_unknown_commands_keep_running() {
        let mut context = context();
        assert_eq!(handle_line(&mut context, "add Lunch").unwrap(), LoopControl::Continue);
        assert_eq!(handle_line(&mut context, "add Gift 20 Gifts").unwrap(), LoopControl::Continue);
        assert_eq!(handle_line(&mut context, "sumary").unwrap(), LoopControl::Continue);
        assert_eq!(handle_line(&mut context, "# comment").unwrap(), LoopControl::Continue);
        assert!(context.controller.expenses().is_empty());
        assert!(handle_line(&mut context, "budget nonsense").is_err());
    }

    #[test]
    fn exit_stops_the_loop() {
        let mut context = context();
        assert_eq!(handle_line(&mut context, "EXIT").unwrap(), LoopControl::Exit);
        assert!(!context.running);
    }

    #[test]
    fn completion_offers_commands_then_categories() {
        let helper = CommandHelper::new(vec!["summary", "spending", "add"]);
        let names: Vec<_> = helper
            .candidates("s", 0)
            .into_iter()
            .map(|pair| pair.replacement)
            .collect();
        assert_eq!(names, ["spending", "summary"]);

        let line = "add Lunch 12 di";
        let start = line.rfind(' ').map(|idx| idx + 1).unwrap_or(0);
        let names: Vec<_> = helper
            .candidates(line, start)
            .into_iter()
            .map(|pair| pair.replacement)
            .collect();
        assert_eq!(names, ["\"Dining Out\""]);
    }
}
