use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

pub mod aggregation;
pub mod disclosure;
pub mod host;
pub mod ledger;
pub mod navigation;
pub mod routing;
pub mod theme;

pub use aggregation::{aggregate, aggregate_flow, CategoryBucket};
pub use disclosure::{Disclosure, DisclosureTiming, ModalPhase, PendingTransition};
pub use host::{HostBridge, HostError, HostPlatform, HostUser, NoopHost, ThemeParams};
pub use ledger::{balance_cents, format_balance, format_cents, format_timestamp, group_by_day, parse_amount_input, AmountError, DaySection};
pub use navigation::{active_entry, NavEntry};
pub use routing::{normalize_path, ListenerId, RouteDefinition, RouteTable, RouteTableError, Router};
pub use theme::VisualContext;

/// Category id used for records whose category cannot be resolved
pub const UNCATEGORIZED_ID: &str = "uncategorized";

/// A single income or expense entry, owned by the external data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: Uuid,
    /// Reference to a `Category`; unknown ids aggregate as "Uncategorized"
    pub category_id: String,
    /// Signed amount in cents (negative for expense, positive for income)
    pub amount_cents: i64,
    pub timestamp_utc: DateTime<Utc>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl TransactionRecord {
    pub fn is_expense(&self) -> bool {
        self.amount_cents < 0
    }

    pub fn is_income(&self) -> bool {
        self.amount_cents > 0
    }
}

/// Payload for creating a record through the data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub category_id: String,
    pub amount_cents: i64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl NewTransaction {
    /// Stamp the payload into an immutable record
    pub fn into_record(self, timestamp_utc: DateTime<Utc>) -> TransactionRecord {
        TransactionRecord {
            id: Uuid::new_v4(),
            category_id: self.category_id,
            amount_cents: self.amount_cents,
            timestamp_utc,
            description: self.description,
            label: self.label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Stable visual color key, resolved through the chart palette
    pub color_token: String,
}

impl Category {
    pub fn new(id: &str, name: &str, color_token: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color_token: color_token.to_string(),
        }
    }

    /// Synthetic category for records that reference an unknown category
    pub fn uncategorized() -> Self {
        Self::new(UNCATEGORIZED_ID, "Uncategorized", "gray")
    }
}

/// Known categories, looked up by id
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl CategoryCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        let mut catalog = Self::default();
        for category in categories {
            catalog.insert(category);
        }
        catalog
    }

    /// Built-in categories shown when the data source supplies none
    pub fn builtin() -> Self {
        Self::new(vec![
            Category::new("bills", "Bills", "blue"),
            Category::new("food", "Foods & Drinks", "orange"),
            Category::new("transport", "Transport", "teal"),
            Category::new("shopping", "Shopping", "purple"),
            Category::new("health", "Health", "red"),
            Category::new("entertainment", "Entertainment", "yellow"),
            Category::new("salary", "Salary", "green"),
            Category::new("gifts", "Gifts", "pink"),
        ])
    }

    /// Adds a category, replacing any previous one with the same id
    pub fn insert(&mut self, category: Category) {
        match self.index.get(&category.id) {
            Some(&position) => self.categories[position] = category,
            None => {
                self.index.insert(category.id.clone(), self.categories.len());
                self.categories.push(category);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.index.get(id).map(|&position| &self.categories[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Inclusive time window used to filter records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Period {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Period covering every representable timestamp
    pub fn all() -> Self {
        Self {
            start: DateTime::<Utc>::MIN_UTC,
            end: DateTime::<Utc>::MAX_UTC,
        }
    }

    /// The `days` days ending at `now`
    pub fn last_days(days: i64, now: DateTime<Utc>) -> Self {
        Self {
            start: now - Duration::days(days),
            end: now,
        }
    }

    pub fn contains(&self, timestamp: &DateTime<Utc>) -> bool {
        *timestamp >= self.start && *timestamp <= self.end
    }
}

/// Range choices offered by the insight page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PeriodPreset {
    Last7Days,
    #[default]
    Last30Days,
    Last90Days,
    LastYear,
    AllTime,
}

impl PeriodPreset {
    pub const ALL: [PeriodPreset; 5] = [
        PeriodPreset::Last7Days,
        PeriodPreset::Last30Days,
        PeriodPreset::Last90Days,
        PeriodPreset::LastYear,
        PeriodPreset::AllTime,
    ];

    fn to_days(self) -> Option<i64> {
        match self {
            PeriodPreset::Last7Days => Some(7),
            PeriodPreset::Last30Days => Some(30),
            PeriodPreset::Last90Days => Some(90),
            PeriodPreset::LastYear => Some(365),
            PeriodPreset::AllTime => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PeriodPreset::Last7Days => "7 Days",
            PeriodPreset::Last30Days => "30 Days",
            PeriodPreset::Last90Days => "90 Days",
            PeriodPreset::LastYear => "1 Year",
            PeriodPreset::AllTime => "All",
        }
    }

    pub fn to_period(self, now: DateTime<Utc>) -> Period {
        match self.to_days() {
            Some(days) => Period::last_days(days, now),
            None => Period::all(),
        }
    }
}

/// Sign filter applied before aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Flow {
    #[default]
    Expense,
    Income,
    All,
}

impl Flow {
    pub fn label(self) -> &'static str {
        match self {
            Flow::Expense => "Expenses",
            Flow::Income => "Income",
            Flow::All => "All",
        }
    }

    pub fn matches(self, record: &TransactionRecord) -> bool {
        match self {
            Flow::Expense => record.is_expense(),
            Flow::Income => record.is_income(),
            Flow::All => true,
        }
    }
}
