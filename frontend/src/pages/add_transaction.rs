use shared::{CategoryCatalog, Flow};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_add_transaction;
use crate::services::DataSource;

const FLOWS: [Flow; 2] = [Flow::Income, Flow::Expense];

#[derive(Properties, PartialEq)]
pub struct AddTransactionPageProps {
    pub data_source: DataSource,
    /// Fired after the new record was accepted and the notice shown
    pub on_added: Callback<()>,
}

#[function_component(AddTransactionPage)]
pub fn add_transaction_page(props: &AddTransactionPageProps) -> Html {
    let catalog = use_state(CategoryCatalog::builtin);

    {
        let catalog = catalog.clone();
        use_effect_with(props.data_source.clone(), move |data_source| {
            let data_source = data_source.clone();
            spawn_local(async move {
                match data_source.fetch_categories().await {
                    Ok(fetched) => catalog.set(fetched),
                    Err(e) => log::warn!(target: "add-transaction", "keeping built-in categories: {:#}", e),
                }
            });
            || ()
        });
    }

    let form = use_add_transaction(&props.data_source, &catalog, props.on_added.clone());
    let state = &form.state;
    let actions = &form.actions;

    let on_submit = {
        let submit = actions.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    html! {
        <div class="page add-transaction-page">
            <h1 class="page-title">{"Add Transaction"}</h1>

            <div class="toggle-group flow-toggle">
                {for FLOWS.iter().map(|&option| {
                    let onclick = {
                        let set_flow = actions.set_flow.clone();
                        Callback::from(move |_: MouseEvent| set_flow.emit(option))
                    };
                    let class = if state.flow == option { "toggle-button active" } else { "toggle-button" };
                    html! { <button type="button" class={class} onclick={onclick}>{option.label()}</button> }
                })}
            </div>

            <form class="transaction-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="description">{"Description"}</label>
                    <input
                        type="text"
                        id="description"
                        placeholder="e.g. Lunch with friends"
                        value={state.description.clone()}
                        onchange={actions.on_description_change.clone()}
                        disabled={state.submitting}
                        maxlength="256"
                    />
                </div>

                <div class="form-group">
                    <label for="amount">{"Amount ($)"}</label>
                    <input
                        type="text"
                        inputmode="decimal"
                        id="amount"
                        placeholder="0.00"
                        value={state.amount.clone()}
                        onchange={actions.on_amount_change.clone()}
                        disabled={state.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="category">{"Category"}</label>
                    <select
                        id="category"
                        onchange={actions.on_category_change.clone()}
                        disabled={state.submitting}
                    >
                        {for catalog.iter().map(|category| html! {
                            <option
                                value={category.id.clone()}
                                selected={category.id == state.category_id}
                            >
                                {&category.name}
                            </option>
                        })}
                    </select>
                </div>

                {if let Some(error) = &state.form_error {
                    html! { <div class="form-message error">{error}</div> }
                } else { html! {} }}

                {if state.form_success {
                    html! { <div class="form-message success">{"Transaction added"}</div> }
                } else { html! {} }}

                <button type="submit" class="btn btn-primary" disabled={state.submitting}>
                    {if state.submitting { "Saving..." } else { "Add Transaction" }}
                </button>
            </form>
        </div>
    }
}
