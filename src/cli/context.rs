//! Shell state and command dispatch.

use chrono::Utc;
use strsim::levenshtein;

use crate::config::{Config, ConfigManager};
use crate::core::utils::PathResolver;
use crate::core::{BudgetController, Notice, NoticeKind};
use crate::storage::{json_backend::JsonFileStore, StorageAdapter};

use super::commands::{all_definitions, CommandDefinition, CommandRegistry};
use super::output;
use super::{CliError, CliMode, CommandError, LoopControl};

const SUGGESTION_DISTANCE: usize = 3;

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub controller: BudgetController,
    pub config: Config,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    /// Loads configuration from the data directory and opens the stored state.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let base = PathResolver::base_dir();
        let config = ConfigManager::from_base(&base).load()?;
        crate::init_with_filter(config.log_filter.as_deref());
        output::set_preferences(output::OutputPreferences {
            color_enabled: config.color_enabled,
        });

        let store = JsonFileStore::new(config.store_dir(&base))?;
        let storage = StorageAdapter::with_key(Box::new(store), config.storage_key.clone());
        let controller =
            BudgetController::open(storage, &config.default_budget, Utc::now().date_naive());
        tracing::info!(
            base = %base.display(),
            expenses = controller.expenses().len(),
            "shell started"
        );

        Ok(Self::with_controller(mode, controller, config))
    }

    pub fn with_controller(mode: CliMode, controller: BudgetController, config: Config) -> Self {
        Self {
            mode,
            registry: CommandRegistry::new(all_definitions()),
            controller,
            config,
            last_command: None,
            running: true,
        }
    }

    pub fn prompt(&self) -> String {
        format!("moneymind [{}]> ", self.controller.budget().month)
    }

    pub fn symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn command(&self, name: &str) -> Option<&CommandDefinition> {
        self.registry.get(name)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.get(command).map(|def| def.handler) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = closest(input, self.registry.names()) {
            output::info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                output::error(other);
                Ok(())
            }
        }
    }

    pub(crate) fn show_notice(&self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Success => output::success(notice),
            NoticeKind::Info => output::info(notice),
            NoticeKind::Error => output::error(notice),
        }
    }

    /// Warns when the last mutation could not be written out.
    pub(crate) fn check_saved(&self) {
        if !self.controller.last_save_succeeded() {
            output::warning("Changes could not be saved; they will be lost on exit.");
        }
    }
}

/// Closest candidate within a small edit distance, used for typo suggestions.
pub(crate) fn closest<'a>(
    input: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<&'a str> {
    let needle = input.to_lowercase();
    candidates
        .map(|candidate| (levenshtein(&candidate.to_lowercase(), &needle), candidate))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .map(|(_, candidate)| candidate)
}
