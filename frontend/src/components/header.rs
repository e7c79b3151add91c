use shared::{format_balance, HostUser};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub user: Option<HostUser>,
    pub balance_cents: i64,
    pub loading: bool,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let greeting = match &props.user {
        // First name only; the rest of the display name is too long for the header
        Some(user) => format!("Hi, {}", user.first_name),
        None => "Hi there".to_string(),
    };

    html! {
        <header class="header">
            <div class="container">
                <h1 class="greeting">{greeting}</h1>
                <div class="balance-display">
                    <span class="balance-label">{"Current Balance"}</span>
                    <span class="balance-amount">
                        {if props.loading {
                            "Loading...".to_string()
                        } else {
                            format_balance(props.balance_cents)
                        }}
                    </span>
                </div>
            </div>
        </header>
    }
}
