use shared::{parse_amount_input, CategoryCatalog, Flow, NewTransaction, UNCATEGORIZED_ID};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::DataSource;

#[derive(Clone, PartialEq)]
pub struct AddTransactionState {
    pub flow: Flow,
    pub description: String,
    pub amount: String,
    pub category_id: String,
    pub submitting: bool,
    pub form_error: Option<String>,
    pub form_success: bool,
}

#[derive(Clone, PartialEq)]
pub struct AddTransactionActions {
    pub set_flow: Callback<Flow>,
    pub on_description_change: Callback<Event>,
    pub on_amount_change: Callback<Event>,
    pub on_category_change: Callback<Event>,
    pub submit: Callback<()>,
}

/// How long the success notice stays before `on_added` fires
const SUCCESS_NOTICE_MS: u32 = 1500;

pub struct UseAddTransactionResult {
    pub state: AddTransactionState,
    pub actions: AddTransactionActions,
}

/// Form state of the add-transaction page. `on_added` fires once the data
/// source accepted the record and the success notice was shown.
///
/// The selected category always belongs to `catalog`; when the catalog is
/// replaced the selection moves to its first category.
#[hook]
pub fn use_add_transaction(data_source: &DataSource, catalog: &CategoryCatalog, on_added: Callback<()>) -> UseAddTransactionResult {
    let flow = use_state(|| Flow::Income);
    let description = use_state(String::new);
    let amount = use_state(String::new);
    let category_id = {
        let initial = selected_category("", catalog);
        use_state(move || initial)
    };
    let submitting = use_state(|| false);
    let form_error = use_state(|| None::<String>);
    let form_success = use_state(|| false);

    let set_flow = {
        let flow = flow.clone();
        use_callback((), move |selected: Flow, _| flow.set(selected))
    };

    let on_description_change = {
        let description = description.clone();
        let form_error = form_error.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            description.set(input.value());
            form_error.set(None);
        })
    };

    let on_amount_change = {
        let amount = amount.clone();
        let form_error = form_error.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
            form_error.set(None);
        })
    };

    let on_category_change = {
        let category_id = category_id.clone();
        use_callback((), move |e: Event, _| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category_id.set(select.value());
        })
    };

    {
        let category_id = category_id.clone();
        use_effect_with(catalog.clone(), move |catalog| {
            let selected = selected_category(&category_id, catalog);
            if selected != *category_id {
                log::debug!(target: "add-transaction", "category {} not in catalog, selecting {}", *category_id, selected);
                category_id.set(selected);
            }
            || ()
        });
    }

    let submit = {
        let data_source = data_source.clone();
        let catalog = catalog.clone();
        let flow = flow.clone();
        let description = description.clone();
        let amount = amount.clone();
        let category_id = category_id.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();

        Callback::from(move |_: ()| {
            form_error.set(None);
            form_success.set(false);

            let cents = match parse_amount_input(&amount) {
                Ok(cents) => cents,
                Err(e) => {
                    form_error.set(Some(e.to_string()));
                    return;
                }
            };
            if description.trim().is_empty() {
                form_error.set(Some("Please enter a description".to_string()));
                return;
            }

            let request = NewTransaction {
                category_id: selected_category(&category_id, &catalog),
                amount_cents: signed_amount(*flow, cents),
                description: description.trim().to_string(),
                label: None,
            };

            let data_source = data_source.clone();
            let description = description.clone();
            let amount = amount.clone();
            let submitting = submitting.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();
            let on_added = on_added.clone();

            spawn_local(async move {
                submitting.set(true);

                match data_source.add_transaction(request).await {
                    Ok(record) => {
                        log::info!(target: "add-transaction", "added record {}", record.id);
                        description.set(String::new());
                        amount.set(String::new());
                        form_success.set(true);

                        let form_success_clear = form_success.clone();
                        spawn_local(async move {
                            gloo::timers::future::TimeoutFuture::new(SUCCESS_NOTICE_MS).await;
                            form_success_clear.set(false);
                            on_added.emit(());
                        });
                    }
                    Err(e) => {
                        log::error!(target: "add-transaction", "failed to add record: {:#}", e);
                        form_error.set(Some(format!("{:#}", e)));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let state = AddTransactionState {
        flow: *flow,
        description: (*description).clone(),
        amount: (*amount).clone(),
        category_id: (*category_id).clone(),
        submitting: *submitting,
        form_error: (*form_error).clone(),
        form_success: *form_success,
    };

    let actions = AddTransactionActions {
        set_flow,
        on_description_change,
        on_amount_change,
        on_category_change,
        submit,
    };

    UseAddTransactionResult { state, actions }
}

/// `current` when the catalog knows it, else the catalog's first category
fn selected_category(current: &str, catalog: &CategoryCatalog) -> String {
    if catalog.get(current).is_some() {
        return current.to_string();
    }
    catalog
        .iter()
        .next()
        .map(|category| category.id.clone())
        .unwrap_or_else(|| UNCATEGORIZED_ID.to_string())
}

/// Positive form amount signed by the selected flow
fn signed_amount(flow: Flow, cents: i64) -> i64 {
    match flow {
        Flow::Expense => -cents,
        Flow::Income | Flow::All => cents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Category;

    #[test]
    fn test_expense_amounts_are_negative() {
        assert_eq!(signed_amount(Flow::Expense, 1200), -1200);
        assert_eq!(signed_amount(Flow::Income, 1200), 1200);
    }

    #[test]
    fn test_selected_category_comes_from_catalog() {
        let fetched = CategoryCatalog::new(vec![
            Category::new("groceries", "Groceries", "green"),
            Category::new("rent", "Rent", "blue"),
        ]);

        // built-in default that the fetched catalog lacks
        assert_eq!(selected_category("bills", &fetched), "groceries");
        assert_eq!(selected_category("rent", &fetched), "rent");
        assert_eq!(selected_category("", &CategoryCatalog::builtin()), "bills");
        assert_eq!(selected_category("rent", &CategoryCatalog::default()), UNCATEGORIZED_ID);
    }
}
