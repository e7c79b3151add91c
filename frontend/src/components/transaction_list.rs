use chrono::NaiveDate;
use shared::{format_cents, group_by_day, CategoryCatalog, TransactionRecord};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionListProps {
    pub records: Vec<TransactionRecord>,
    pub catalog: CategoryCatalog,
    pub today: NaiveDate,
    pub loading: bool,
    pub on_select: Callback<TransactionRecord>,
}

#[function_component(TransactionList)]
pub fn transaction_list(props: &TransactionListProps) -> Html {
    if props.loading && props.records.is_empty() {
        return html! { <div class="loading">{"Loading transactions..."}</div> };
    }

    if props.records.is_empty() {
        return html! {
            <div class="empty-state">
                <i class="fas fa-receipt empty-icon"></i>
                <p>{"No transactions yet"}</p>
            </div>
        };
    }

    html! {
        <section class="transaction-list">
            {for group_by_day(&props.records, props.today).into_iter().map(|section| html! {
                <div class="day-section" key={section.date.to_string()}>
                    <div class="day-header">
                        <h2 class="day-title">{&section.title}</h2>
                    </div>
                    {for section.records.into_iter().map(|record| {
                        let category_name = props
                            .catalog
                            .get(&record.category_id)
                            .map(|category| category.name.clone())
                            .unwrap_or_else(|| "Uncategorized".to_string());
                        let amount_class = if record.is_expense() { "amount negative" } else { "amount positive" };
                        let time = record.timestamp_utc.format("%-I:%M %p").to_string();
                        let amount = format_cents(record.amount_cents);
                        let key = record.id.to_string();
                        let onclick = {
                            let on_select = props.on_select.clone();
                            Callback::from(move |_: MouseEvent| on_select.emit(record.clone()))
                        };

                        html! {
                            <article class="transaction-row" key={key}>
                                <button class="transaction-button" onclick={onclick}>
                                    <div class="transaction-info">
                                        <p class="transaction-category">{category_name}</p>
                                        <p class="transaction-time">{time}</p>
                                    </div>
                                    <div class={amount_class}>{amount}</div>
                                </button>
                            </article>
                        }
                    })}
                </div>
            })}
        </section>
    }
}
