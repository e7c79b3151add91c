use shared::{format_cents, format_timestamp, Category, Disclosure, TransactionRecord};
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionModalProps {
    pub disclosure: Disclosure<TransactionRecord>,
    /// Category of the shown record, `None` when it is uncategorized
    pub category: Option<Category>,
    pub on_close: Callback<()>,
}

/// Detail view of one record. Mounted while the disclosure is not closed,
/// fully visible only once it is open.
#[function_component(TransactionModal)]
pub fn transaction_modal(props: &TransactionModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let record = match props.disclosure.active_record() {
        Some(record) if props.disclosure.is_mounted() => record,
        _ => return html! {},
    };

    let visible = props.disclosure.is_visible();
    let backdrop_class = classes!("modal-backdrop", if visible { "visible" } else { "hidden" });
    let window_class = classes!("modal-window", if visible { "visible" } else { "hidden" });
    let amount_class = if record.is_expense() { "modal-amount negative" } else { "modal-amount positive" };
    let category_name = props
        .category
        .as_ref()
        .map(|category| category.name.clone())
        .unwrap_or_else(|| "Uncategorized".to_string());

    html! {
        <section class="transaction-modal">
            <div class={backdrop_class} onclick={on_backdrop_click}></div>
            <div class="modal-container">
                <div class={window_class} onclick={on_modal_click}>
                    <button class="modal-close" onclick={on_close_click} aria-label="Close">
                        <i class="fas fa-xmark"></i>
                    </button>

                    <h2 class="modal-title">{&category_name}</h2>
                    <div class={amount_class}>{format_cents(record.amount_cents)}</div>
                    <p class="modal-description">{&record.description}</p>
                    {if let Some(label) = &record.label {
                        html! { <p class="modal-label">{label}</p> }
                    } else { html! {} }}
                    <p class="modal-date">{format_timestamp(&record.timestamp_utc)}</p>
                </div>
            </div>
        </section>
    }
}
