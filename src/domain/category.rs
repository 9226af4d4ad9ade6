//! Static category catalog and the presentation descriptors attached to it.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::domain::expense::ExpenseType;

/// The two fixed category groups offered by the entry form.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CategoryGroup {
    Needs,
    Wants,
}

impl CategoryGroup {
    pub fn expense_type(self) -> ExpenseType {
        match self {
            CategoryGroup::Needs => ExpenseType::Need,
            CategoryGroup::Wants => ExpenseType::Want,
        }
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CategoryGroup::Needs => "Needs",
            CategoryGroup::Wants => "Wants",
        };
        f.write_str(label)
    }
}

/// Icon and colour used to draw a category.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Presentation {
    pub icon: &'static str,
    pub color: &'static str,
}

impl Presentation {
    /// Descriptor for categories outside the catalog.
    pub const DEFAULT: Presentation = Presentation {
        icon: "category",
        color: "text-gray-500",
    };
}

/// One entry in the catalog.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CategoryDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub group: CategoryGroup,
    pub presentation: Presentation,
}

const fn define(
    name: &'static str,
    description: &'static str,
    group: CategoryGroup,
    icon: &'static str,
    color: &'static str,
) -> CategoryDefinition {
    CategoryDefinition {
        name,
        description,
        group,
        presentation: Presentation { icon, color },
    }
}

/// Category names classified as needs. Everything else is a want.
pub const NEED_CATEGORIES: [&str; 5] = [
    "Groceries",
    "Rent",
    "Utilities",
    "Healthcare",
    "Transportation",
];

static DEFINITIONS: [CategoryDefinition; 9] = [
    define(
        "Groceries",
        "Food and household essentials",
        CategoryGroup::Needs,
        "local_grocery_store",
        "text-green-500",
    ),
    define(
        "Rent",
        "Housing payments",
        CategoryGroup::Needs,
        "account_balance_wallet",
        "text-blue-500",
    ),
    define(
        "Utilities",
        "Electricity, water, internet",
        CategoryGroup::Needs,
        "health_and_safety",
        "text-yellow-500",
    ),
    define(
        "Healthcare",
        "Medical and health expenses",
        CategoryGroup::Needs,
        "health_and_safety",
        "text-red-500",
    ),
    define(
        "Transportation",
        "Fuel, tickets, maintenance",
        CategoryGroup::Needs,
        "car_crash",
        "text-purple-500",
    ),
    define(
        "Dining Out",
        "Restaurants and takeout",
        CategoryGroup::Wants,
        "restaurant",
        "text-pink-500",
    ),
    define(
        "Entertainment",
        "Movies, events, subscriptions",
        CategoryGroup::Wants,
        "event_available",
        "text-indigo-500",
    ),
    define(
        "Shopping",
        "Clothes, gadgets, non-essentials",
        CategoryGroup::Wants,
        "shopping_cart",
        "text-orange-500",
    ),
    define(
        "Hobbies",
        "Sports, games, activities",
        CategoryGroup::Wants,
        "sports_esports",
        "text-teal-500",
    ),
];

static CATALOG: Lazy<CategoryCatalog> = Lazy::new(|| CategoryCatalog::new(&DEFINITIONS));

/// Returns the process-wide catalog, indexed on first use.
pub fn catalog() -> &'static CategoryCatalog {
    &CATALOG
}

/// Ordered category groups plus a name index.
#[derive(Debug)]
pub struct CategoryCatalog {
    entries: &'static [CategoryDefinition],
    by_name: HashMap<&'static str, usize>,
}

impl CategoryCatalog {
    fn new(entries: &'static [CategoryDefinition]) -> Self {
        let by_name = entries
            .iter()
            .enumerate()
            .map(|(idx, def)| (def.name, idx))
            .collect();
        Self { entries, by_name }
    }

    /// All categories, needs first, in form order.
    pub fn all(&self) -> &'static [CategoryDefinition] {
        self.entries
    }

    pub fn group(&self, group: CategoryGroup) -> impl Iterator<Item = &'static CategoryDefinition> {
        let entries = self.entries;
        entries.iter().filter(move |def| def.group == group)
    }

    pub fn needs(&self) -> impl Iterator<Item = &'static CategoryDefinition> {
        self.group(CategoryGroup::Needs)
    }

    pub fn wants(&self) -> impl Iterator<Item = &'static CategoryDefinition> {
        self.group(CategoryGroup::Wants)
    }

    pub fn find(&self, name: &str) -> Option<&'static CategoryDefinition> {
        let entries = self.entries;
        self.by_name.get(name).map(|&idx| &entries[idx])
    }

    /// Case-insensitive lookup used when parsing typed input.
    pub fn find_ignore_case(&self, name: &str) -> Option<&'static CategoryDefinition> {
        let needle = name.trim();
        self.find(needle).or_else(|| {
            self.entries
                .iter()
                .find(|def| def.name.eq_ignore_ascii_case(needle))
        })
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        let entries = self.entries;
        entries.iter().map(|def| def.name)
    }

    /// Presentation for `name`, or [`Presentation::DEFAULT`] when the category is unknown.
    pub fn presentation(&self, name: &str) -> Presentation {
        self.find(name)
            .map(|def| def.presentation)
            .unwrap_or(Presentation::DEFAULT)
    }
}
