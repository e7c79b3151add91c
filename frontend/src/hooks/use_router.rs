use gloo::history::{BrowserHistory, History};
use shared::{NavEntry, Router};
use yew::prelude::*;

use crate::routes::{route_table, Page};

#[derive(Clone, PartialEq)]
pub struct RouterState {
    /// Location as requested by the user or the browser
    pub location: String,
    /// Page of the resolved route
    pub page: Page,
    pub entries: Vec<NavEntry>,
    pub default_path: String,
}

pub struct UseRouterResult {
    pub state: RouterState,
    pub navigate: Callback<String>,
}

/// Binds the route table to the browser history.
///
/// Navigation pushes a history entry without reloading the page; back and
/// forward come in through the history listener. Both paths go through
/// `Router::navigate`, which ignores repeats of the current location.
#[hook]
pub fn use_router() -> UseRouterResult {
    let history = use_memo((), |_| BrowserHistory::new());
    let router = {
        let initial = history.location().path().to_string();
        use_mut_ref(move || Router::new(route_table(), &initial))
    };
    let location = {
        let router = router.clone();
        use_state(move || router.borrow().location().to_string())
    };

    {
        let router = router.clone();
        let history = history.clone();
        let location = location.clone();
        use_effect_with((), move |_| {
            let subscription = router
                .borrow_mut()
                .subscribe(move |path| location.set(path.to_string()));

            let history_listener = {
                let router = router.clone();
                let browser_history = (*history).clone();
                history.listen(move || {
                    let path = browser_history.location().path().to_string();
                    router.borrow_mut().navigate(&path);
                })
            };

            move || {
                drop(history_listener);
                router.borrow_mut().unsubscribe(subscription);
            }
        });
    }

    let navigate = {
        let router = router.clone();
        let history = history.clone();
        use_callback((), move |path: String, _| {
            let changed = router.borrow_mut().navigate(&path);
            if changed {
                let location = router.borrow().location().to_string();
                history.push(location);
            }
        })
    };

    let state = {
        let router = router.borrow();
        RouterState {
            location: (*location).clone(),
            page: router.table().resolve(&location).component,
            entries: NavEntry::from_table(router.table()),
            default_path: router.table().default_route().path.clone(),
        }
    };

    UseRouterResult { state, navigate }
}
