use anyhow::{anyhow, Result};
use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use shared::{Category, NewTransaction, Period, TransactionRecord};

/// Client for a transaction service speaking the record JSON format
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Records inside `period`; the service may return them in any order
    pub async fn fetch_transactions(&self, period: &Period) -> Result<Vec<TransactionRecord>> {
        let url = transactions_url(&self.base_url, period);
        self.get_json(&url, "transactions").await
    }

    pub async fn fetch_categories(&self) -> Result<Vec<Category>> {
        let url = format!("{}/api/categories", self.base_url);
        self.get_json(&url, "categories").await
    }

    pub async fn add_transaction(&self, request: &NewTransaction) -> Result<TransactionRecord> {
        let url = format!("{}/api/transactions", self.base_url);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| anyhow!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| anyhow!("Network error: {}", e))?;

        if !response.ok() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow!("Server error {}: {}", response.status(), error_text));
        }

        response
            .json::<TransactionRecord>()
            .await
            .map_err(|e| anyhow!("Failed to parse response: {}", e))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> Result<T> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to fetch {}: {}", what, e))?;

        if !response.ok() {
            return Err(anyhow!("Failed to fetch {}: HTTP {}", what, response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| anyhow!("Failed to parse {}: {}", what, e))
    }
}

fn transactions_url(base_url: &str, period: &Period) -> String {
    format!(
        "{}/api/transactions?from={}&to={}",
        base_url,
        period.start.timestamp(),
        period.end.timestamp()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        assert_eq!(ApiClient::with_base_url("https://api.example.com/").base_url(), "https://api.example.com");
    }

    #[test]
    fn test_transactions_url_uses_unix_bounds() {
        let period = Period::new(
            Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 7, 2, 0, 0, 0).unwrap(),
        );
        assert_eq!(
            transactions_url("https://api.example.com", &period),
            "https://api.example.com/api/transactions?from=1719792000&to=1719878400"
        );
    }
}
