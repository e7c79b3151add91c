use chrono::Utc;
use shared::{aggregate_flow, Flow, PeriodPreset, VisualContext};
use yew::prelude::*;

use crate::components::CategoryChart;
use crate::hooks::use_transactions;
use crate::services::DataSource;

const FLOWS: [Flow; 2] = [Flow::Expense, Flow::Income];

#[derive(Properties, PartialEq)]
pub struct InsightPageProps {
    pub data_source: DataSource,
}

#[function_component(InsightPage)]
pub fn insight_page(props: &InsightPageProps) -> Html {
    let visual = use_context::<VisualContext>().unwrap_or_default();
    let preset = use_state(PeriodPreset::default);
    let flow = use_state(Flow::default);

    // Memoized so the fetch only reruns when the preset changes
    let period = use_memo(*preset, |preset| preset.to_period(Utc::now()));
    let transactions = use_transactions(&props.data_source, *period);

    let state = &transactions.state;
    let buckets = aggregate_flow(&state.records, &period, &state.catalog, *flow);

    html! {
        <div class="page insight-page">
            <h1 class="page-title">{"Insight"}</h1>

            <div class="toggle-group flow-toggle">
                {for FLOWS.iter().map(|&option| {
                    let onclick = {
                        let flow = flow.clone();
                        Callback::from(move |_: MouseEvent| flow.set(option))
                    };
                    let class = if *flow == option { "toggle-button active" } else { "toggle-button" };
                    html! { <button class={class} onclick={onclick}>{option.label()}</button> }
                })}
            </div>

            <div class="toggle-group period-toggle">
                {for PeriodPreset::ALL.iter().map(|&option| {
                    let onclick = {
                        let preset = preset.clone();
                        Callback::from(move |_: MouseEvent| preset.set(option))
                    };
                    let class = if *preset == option { "toggle-button active" } else { "toggle-button" };
                    html! { <button class={class} onclick={onclick}>{option.label()}</button> }
                })}
            </div>

            {if let Some(error) = &state.error {
                html! { <div class="error-message">{error}</div> }
            } else { html! {} }}

            <CategoryChart
                buckets={buckets}
                loading={state.loading}
                background={Some(visual.background.clone())}
            />
        </div>
    }
}
