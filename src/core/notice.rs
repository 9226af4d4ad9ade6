//! Short user-facing messages emitted after each front-end action.

use std::fmt;

use crate::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn expense_added() -> Self {
        Self::new(NoticeKind::Success, "Expense added successfully!")
    }

    pub fn expense_removed() -> Self {
        Self::new(NoticeKind::Info, "Expense removed!")
    }

    pub fn budget_updated() -> Self {
        Self::new(NoticeKind::Success, "Budget updated!")
    }

    pub fn rejected(err: &ValidationError) -> Self {
        if err.is_missing_field() {
            Self::new(NoticeKind::Error, "Please fill in all required fields!")
        } else {
            Self::new(NoticeKind::Error, err.to_string())
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
