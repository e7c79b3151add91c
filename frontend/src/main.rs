use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod pages;
mod routes;
mod services;

use components::NavigationBar;
use config::AppConfig;
use hooks::{use_host_bridge, use_router};
use pages::{AddTransactionPage, HomePage, InsightPage, ProfilePage, TransactionsPage};
use routes::Page;
use services::{ConsoleLogger, DataSource};
use shared::VisualContext;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let host = use_host_bridge(props.config.main_button_text.clone());
    let router = use_router();
    let data_source = {
        let source_config = props.config.data_source.clone();
        use_memo((), move |_| DataSource::from_config(&source_config))
    };

    let data_source = (*data_source).clone();
    let on_navigate = router.navigate.clone();

    let on_added = {
        let navigate = router.navigate.clone();
        Callback::from(move |_: ()| navigate.emit("/transactions".to_string()))
    };

    let page = match router.state.page {
        Page::Home => html! {
            <HomePage
                data_source={data_source.clone()}
                user={host.user.clone()}
                on_navigate={on_navigate.clone()}
            />
        },
        Page::Insight => html! { <InsightPage data_source={data_source.clone()} /> },
        Page::AddTransaction => html! {
            <AddTransactionPage data_source={data_source.clone()} on_added={on_added} />
        },
        Page::Transactions => html! {
            <TransactionsPage
                data_source={data_source.clone()}
                disclosure_timing={props.config.disclosure}
            />
        },
        Page::Profile => html! { <ProfilePage user={host.user.clone()} /> },
    };

    html! {
        <ContextProvider<VisualContext> context={host.visual.clone()}>
            <div class="app" style={host.visual.root_style()}>
                <main class="app-content">
                    {page}
                </main>
                <NavigationBar
                    entries={router.state.entries.clone()}
                    location={router.state.location.clone()}
                    default_path={router.state.default_path.clone()}
                    on_navigate={on_navigate}
                />
            </div>
        </ContextProvider<VisualContext>>
    }
}

fn main() {
    // Installed before loading so a broken stored config is reported
    ConsoleLogger::init(log::LevelFilter::Info);
    let config = AppConfig::load();
    log::set_max_level(config.log_level());
    log::info!(target: "app", "starting with {:?} data source", config.data_source);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
