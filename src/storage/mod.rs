pub mod json_backend;
pub mod memory;

use chrono::NaiveDate;

use crate::domain::{AppState, BudgetDefaults, PersistedState};
use crate::errors::{BudgetError, Result};

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;

/// Key under which the whole state blob is stored.
pub const DEFAULT_STORAGE_KEY: &str = "smart-expense-tracker-data";

/// Opaque string key-value medium holding the serialized state.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Reads and writes the state blob under a fixed key.
///
/// Failures never leave this type: loads report `None` and saves report `false`,
/// each with a logged warning.
pub struct StorageAdapter {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl StorageAdapter {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn load(&self) -> Option<PersistedState> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "error reading from storage");
                return None;
            }
        };
        match decode(&raw) {
            Ok(state) => Some(state),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "stored state is unreadable");
                None
            }
        }
    }

    /// Overwrites the whole blob. Returns `false` if the write failed.
    pub fn save(&self, state: &PersistedState) -> bool {
        let result = encode(state).and_then(|blob| self.store.set(&self.key, &blob));
        match result {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "error saving to storage");
                false
            }
        }
    }

    /// Stored state, or an empty list with a default budget when nothing usable is stored.
    pub fn load_or_default(&self, defaults: &BudgetDefaults, today: NaiveDate) -> AppState {
        self.load().unwrap_or_else(|| {
            tracing::info!(key = %self.key, "no stored state, starting fresh");
            AppState::with_defaults(defaults, today)
        })
    }

    /// Raw blob as stored, for diagnostics.
    pub fn raw(&self) -> Option<String> {
        self.store.get(&self.key).ok().flatten()
    }
}

/// Serializes the state. Non-finite numbers are refused since JSON would store them as `null`.
pub fn encode(state: &PersistedState) -> Result<String> {
    let budget = &state.budget;
    let budget_ok = [
        budget.total_amount,
        budget.needs_percentage,
        budget.wants_percentage,
    ]
    .iter()
    .all(|value| value.is_finite());
    if !budget_ok || state.expenses.iter().any(|e| !e.amount.is_finite()) {
        return Err(BudgetError::StorageError("state holds a non-finite number".into()));
    }
    Ok(serde_json::to_string(state)?)
}

pub fn decode(raw: &str) -> Result<PersistedState> {
    Ok(serde_json::from_str(raw)?)
}
