//! Expense records and their need/want tag.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// Bucket an expense is counted against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseType {
    Need,
    Want,
}

impl ExpenseType {
    /// Badge text shown next to an expense in lists.
    pub fn label(self) -> &'static str {
        match self {
            ExpenseType::Need => "Essential",
            ExpenseType::Want => "Lifestyle",
        }
    }

    /// Bar colour used by the category spending chart.
    pub fn chart_color(self) -> &'static str {
        match self {
            ExpenseType::Need => "#10B981",
            ExpenseType::Want => "#8B5CF6",
        }
    }
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseType::Need => "need",
            ExpenseType::Want => "want",
        };
        f.write_str(label)
    }
}

/// A single logged expense. Immutable once created; removed by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: ExpenseType,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Expense {
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        kind: ExpenseType,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            amount,
            category: category.into(),
            kind,
            date,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Identifiable for Expense {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!("{} ({}, {})", self.title, self.category, self.kind.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Expense {
        let date = Utc.with_ymd_and_hms(2025, 10, 7, 3, 11, 12).unwrap();
        Expense::new("Weekly shop", 82.4, "Groceries", ExpenseType::Need, date)
    }

    #[test]
    fn serializes_kind_under_type_key() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "need");
        assert_eq!(json["category"], "Groceries");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn accepts_blobs_with_timestamp_ids_and_empty_descriptions() {
        let raw = r#"{"id":"1696648272000","title":"Cinema","amount":12.5,
            "category":"Entertainment","type":"want",
            "date":"2023-10-07T03:11:12.000Z","description":""}"#;
        let expense: Expense = serde_json::from_str(raw).unwrap();
        assert_eq!(expense.id, "1696648272000");
        assert_eq!(expense.kind, ExpenseType::Want);
        assert_eq!(expense.description.as_deref(), Some(""));
    }

    #[test]
    fn fresh_expenses_get_distinct_ids() {
        assert_ne!(sample().id, sample().id);
    }

    #[test]
    fn display_label_uses_badge_text() {
        assert_eq!(sample().display_label(), "Weekly shop (Groceries, Essential)");
    }
}
