use shared::{active_entry, NavEntry};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavigationBarProps {
    pub entries: Vec<NavEntry>,
    pub location: String,
    pub default_path: String,
    pub on_navigate: Callback<String>,
}

#[function_component(NavigationBar)]
pub fn navigation_bar(props: &NavigationBarProps) -> Html {
    let active = active_entry(&props.entries, &props.location, &props.default_path);

    html! {
        <nav class="nav-bar">
            <ul class="nav-bar-list">
                {for props.entries.iter().enumerate().map(|(index, entry)| {
                    let is_active = active == Some(index);
                    let onclick = {
                        let on_navigate = props.on_navigate.clone();
                        let path = entry.path.clone();
                        Callback::from(move |_: MouseEvent| on_navigate.emit(path.clone()))
                    };

                    html! {
                        <NavButton
                            icon={entry.icon.clone()}
                            label={entry.label.clone()}
                            is_active={is_active}
                            onclick={onclick}
                        />
                    }
                })}
            </ul>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct NavButtonProps {
    icon: Option<String>,
    label: Option<String>,
    is_active: bool,
    onclick: Callback<MouseEvent>,
}

#[function_component(NavButton)]
fn nav_button(props: &NavButtonProps) -> Html {
    let class = match (props.label.is_some(), props.is_active) {
        (false, true) => "nav-button icon-only active",
        (false, false) => "nav-button icon-only",
        (true, true) => "nav-button active",
        (true, false) => "nav-button",
    };
    let alt = props.label.clone().unwrap_or_else(|| "icon".to_string());

    html! {
        <li class="nav-item">
            <button class={class} onclick={props.onclick.clone()} aria-label={alt}>
                {if let Some(icon) = &props.icon {
                    html! { <i class={icon.clone()}></i> }
                } else { html! {} }}
                {if let Some(label) = &props.label {
                    html! { <span class="nav-label">{label}</span> }
                } else { html! {} }}
            </button>
        </li>
    }
}
