use chrono::Utc;
use shared::{aggregate_flow, balance_cents, Flow, HostUser, Period, PeriodPreset, VisualContext};
use yew::prelude::*;

use crate::components::{CategoryChart, Header};
use crate::hooks::use_transactions;
use crate::services::DataSource;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub data_source: DataSource,
    pub user: Option<HostUser>,
    pub on_navigate: Callback<String>,
}

/// Greeting, all-time balance and the recent spending breakdown
#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let visual = use_context::<VisualContext>().unwrap_or_default();
    let transactions = use_transactions(&props.data_source, Period::all());
    let recent = use_memo((), |_| PeriodPreset::default().to_period(Utc::now()));

    let state = &transactions.state;
    let buckets = aggregate_flow(&state.records, &recent, &state.catalog, Flow::Expense);
    let chart_title = format!("Spending, last {}", PeriodPreset::default().label());

    let on_see_all = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit("/transactions".to_string()))
    };

    html! {
        <div class="page home-page">
            <Header
                user={props.user.clone()}
                balance_cents={balance_cents(&state.records)}
                loading={state.loading}
            />

            {if let Some(error) = &state.error {
                html! { <div class="error-message">{error}</div> }
            } else { html! {} }}

            <section class="home-chart">
                <CategoryChart
                    buckets={buckets}
                    loading={state.loading}
                    title={Some(chart_title)}
                    background={Some(visual.background.clone())}
                />
            </section>

            <button class="link-button" onclick={on_see_all}>{"See all transactions"}</button>
        </div>
    }
}
