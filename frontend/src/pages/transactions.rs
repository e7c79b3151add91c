use chrono::Utc;
use shared::{DisclosureTiming, Period};
use yew::prelude::*;

use crate::components::{TransactionList, TransactionModal};
use crate::hooks::{use_disclosure, use_transactions};
use crate::services::DataSource;

#[derive(Properties, PartialEq)]
pub struct TransactionsPageProps {
    pub data_source: DataSource,
    pub disclosure_timing: DisclosureTiming,
}

/// Day-grouped list; selecting a row opens the detail modal
#[function_component(TransactionsPage)]
pub fn transactions_page(props: &TransactionsPageProps) -> Html {
    let transactions = use_transactions(&props.data_source, Period::all());
    let modal = use_disclosure(props.disclosure_timing);
    let today = use_memo((), |_| Utc::now().date_naive());

    let state = &transactions.state;
    let on_refresh = {
        let refresh = transactions.actions.refresh_transactions.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };
    let category = modal
        .disclosure
        .active_record()
        .and_then(|record| state.catalog.get(&record.category_id))
        .cloned();

    html! {
        <div class="page transactions-page">
            <div class="page-header">
                <h1 class="page-title">{"Transactions"}</h1>
                <button class="icon-button" onclick={on_refresh} disabled={state.loading} aria-label="Refresh">
                    <i class="fas fa-rotate-right"></i>
                </button>
            </div>

            {if let Some(error) = &state.error {
                html! { <div class="error-message">{error}</div> }
            } else { html! {} }}

            <TransactionList
                records={state.records.clone()}
                catalog={state.catalog.clone()}
                today={*today}
                loading={state.loading}
                on_select={modal.open.clone()}
            />

            <TransactionModal
                disclosure={modal.disclosure.clone()}
                category={category}
                on_close={modal.close.clone()}
            />
        </div>
    }
}
