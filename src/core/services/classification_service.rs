use crate::domain::category::NEED_CATEGORIES;
use crate::domain::expense::ExpenseType;

pub struct ClassificationService;

impl ClassificationService {
    /// Maps a category name to its bucket. Total over all strings: anything outside
    /// the fixed need list, including unknown names, is a want.
    pub fn classify(category: &str) -> ExpenseType {
        if NEED_CATEGORIES.contains(&category) {
            ExpenseType::Need
        } else {
            ExpenseType::Want
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::catalog;

    #[test]
    fn need_names_classify_as_needs() {
        for name in ["Groceries", "Rent", "Utilities", "Healthcare", "Transportation"] {
            assert_eq!(ClassificationService::classify(name), ExpenseType::Need, "{name}");
        }
    }

    #[test]
    fn everything_else_is_a_want() {
        for name in ["Dining Out", "Hobbies", "Crypto", "", "rent", "Rent "] {
            assert_eq!(ClassificationService::classify(name), ExpenseType::Want, "{name:?}");
        }
    }

    #[test]
    fn catalog_groups_agree_with_classifier() {
        for def in catalog().all() {
            assert_eq!(ClassificationService::classify(def.name), def.group.expense_type());
        }
    }
}
