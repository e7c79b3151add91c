use shared::{CategoryCatalog, Period, TransactionRecord};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::DataSource;

#[derive(Clone, PartialEq)]
pub struct TransactionState {
    pub records: Vec<TransactionRecord>,
    pub catalog: CategoryCatalog,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseTransactionsResult {
    pub state: TransactionState,
    pub actions: UseTransactionsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseTransactionsActions {
    pub refresh_transactions: Callback<()>,
}

/// Numbers fetches so only the latest one may write to state
#[derive(Debug, Default)]
struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    fn is_current(&self, request: u64) -> bool {
        self.latest == request
    }
}

/// Records of `period` plus the category catalog, reloaded when the period changes.
/// A response that arrives after a newer fetch started is dropped.
#[hook]
pub fn use_transactions(data_source: &DataSource, period: Period) -> UseTransactionsResult {
    let records = use_state(Vec::<TransactionRecord>::new);
    let catalog = use_state(CategoryCatalog::builtin);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let requests = use_mut_ref(RequestSequence::default);

    let refresh_transactions = {
        let data_source = data_source.clone();
        let records = records.clone();
        let catalog = catalog.clone();
        let loading = loading.clone();
        let error = error.clone();
        let requests = requests.clone();

        use_callback(period, move |_, period| {
            let data_source = data_source.clone();
            let records = records.clone();
            let catalog = catalog.clone();
            let loading = loading.clone();
            let error = error.clone();
            let requests = requests.clone();
            let period = *period;
            let request = requests.borrow_mut().begin();

            spawn_local(async move {
                loading.set(true);

                let categories = data_source.fetch_categories().await;
                let fetched_records = data_source.fetch_transactions(period).await;

                if !requests.borrow().is_current(request) {
                    log::debug!(target: "transactions", "dropping stale response #{}", request);
                    return;
                }

                match categories {
                    Ok(fetched) => catalog.set(fetched),
                    Err(e) => log::warn!(target: "transactions", "keeping built-in categories: {:#}", e),
                }

                match fetched_records {
                    Ok(fetched) => {
                        log::debug!(target: "transactions", "fetched {} records", fetched.len());
                        records.set(fetched);
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!(target: "transactions", "failed to fetch transactions: {:#}", e);
                        error.set(Some(format!("{:#}", e)));
                    }
                }

                loading.set(false);
            });
        })
    };

    {
        let refresh_transactions = refresh_transactions.clone();
        use_effect_with(refresh_transactions, move |refresh| {
            refresh.emit(());
            || ()
        });
    }

    let state = TransactionState {
        records: (*records).clone(),
        catalog: (*catalog).clone(),
        loading: *loading,
        error: (*error).clone(),
    };

    let actions = UseTransactionsActions { refresh_transactions };

    UseTransactionsResult { state, actions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_request_is_current() {
        let mut requests = RequestSequence::default();
        let slow = requests.begin();
        let fast = requests.begin();

        // the newer fetch finishes first and applies
        assert!(requests.is_current(fast));
        // the older one finishes later and is dropped
        assert!(!requests.is_current(slow));
    }
}
