use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use shared::{CategoryCatalog, NewTransaction, Period, TransactionRecord};
use uuid::Uuid;

use crate::config::DataSourceConfig;
use crate::services::api::ApiClient;

/// External supplier of transaction records
#[derive(Clone, Debug)]
pub enum DataSource {
    Demo(Rc<RefCell<Vec<TransactionRecord>>>),
    Http(ApiClient),
}

impl PartialEq for DataSource {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DataSource::Demo(a), DataSource::Demo(b)) => Rc::ptr_eq(a, b),
            (DataSource::Http(a), DataSource::Http(b)) => a == b,
            _ => false,
        }
    }
}

impl DataSource {
    pub fn from_config(config: &DataSourceConfig) -> Self {
        match config {
            DataSourceConfig::Demo => DataSource::Demo(Rc::new(RefCell::new(demo_records(Utc::now())))),
            DataSourceConfig::Http { base_url } => {
                let client = ApiClient::with_base_url(base_url);
                log::info!(target: "data-source", "fetching records from {}", client.base_url());
                DataSource::Http(client)
            }
        }
    }

    pub async fn fetch_transactions(&self, period: Period) -> Result<Vec<TransactionRecord>> {
        match self {
            DataSource::Demo(records) => Ok(records
                .borrow()
                .iter()
                .filter(|record| period.contains(&record.timestamp_utc))
                .cloned()
                .collect()),
            DataSource::Http(client) => client.fetch_transactions(&period).await,
        }
    }

    pub async fn fetch_categories(&self) -> Result<CategoryCatalog> {
        match self {
            DataSource::Demo(_) => Ok(CategoryCatalog::builtin()),
            DataSource::Http(client) => {
                let categories = client.fetch_categories().await?;
                if categories.is_empty() {
                    Ok(CategoryCatalog::builtin())
                } else {
                    Ok(CategoryCatalog::new(categories))
                }
            }
        }
    }

    pub async fn add_transaction(&self, request: NewTransaction) -> Result<TransactionRecord> {
        match self {
            DataSource::Demo(records) => {
                let record = request.into_record(Utc::now());
                records.borrow_mut().push(record.clone());
                Ok(record)
            }
            DataSource::Http(client) => client.add_transaction(&request).await,
        }
    }
}

/// Sample records relative to `now`, unordered like a real feed
fn demo_records(now: DateTime<Utc>) -> Vec<TransactionRecord> {
    let sample = |category_id: &str, amount_cents: i64, ago: Duration, description: &str| TransactionRecord {
        id: Uuid::new_v4(),
        category_id: category_id.to_string(),
        amount_cents,
        timestamp_utc: now - ago,
        description: description.to_string(),
        label: None,
    };

    vec![
        sample("food", -1200, Duration::minutes(40), "Lunch with the team"),
        sample("bills", -20000, Duration::hours(3), "Electricity bill"),
        sample("salary", 250000, Duration::days(2), "Monthly salary"),
        sample("transport", -350, Duration::days(1), "Metro card top-up"),
        sample("food", -4580, Duration::days(1) + Duration::hours(5), "Groceries"),
        sample("shopping", -8999, Duration::days(6), "Running shoes"),
        sample("entertainment", -1500, Duration::days(9), "Cinema"),
        sample("gym", -3000, Duration::days(12), "Gym membership"),
        sample("health", -2450, Duration::days(20), "Pharmacy"),
        sample("gifts", 5000, Duration::days(25), "Birthday gift"),
        sample("bills", -6500, Duration::days(33), "Internet"),
        sample("food", -900, Duration::days(48), "Coffee beans"),
        sample("salary", 250000, Duration::days(32), "Monthly salary"),
        sample("bills", -20000, Duration::days(64), "Rent share"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_records_cover_expenses_income_and_unknown_category() {
        let now = Utc::now();
        let records = demo_records(now);
        let catalog = CategoryCatalog::builtin();

        assert!(records.iter().any(TransactionRecord::is_expense));
        assert!(records.iter().any(TransactionRecord::is_income));
        assert!(records.iter().any(|r| catalog.get(&r.category_id).is_none()));
        assert!(records.iter().all(|r| r.timestamp_utc <= now));
    }

    #[test]
    fn test_demo_sources_compare_by_identity() {
        let a = DataSource::from_config(&DataSourceConfig::Demo);
        let b = DataSource::from_config(&DataSourceConfig::Demo);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(
            DataSource::from_config(&DataSourceConfig::Http { base_url: "http://x".to_string() }),
            DataSource::Http(ApiClient::with_base_url("http://x"))
        );
    }
}
