use std::cell::RefCell;
use std::rc::Rc;

use shared::{HostBridge, HostPlatform, HostUser, VisualContext};
use yew::prelude::*;

use crate::services::TelegramWebApp;

#[derive(Clone, PartialEq)]
pub struct HostState {
    pub visual: VisualContext,
    pub user: Option<HostUser>,
}

/// Initializes the host bridge once, after the first render.
///
/// Until then (and for good outside Telegram) the light default theme applies.
#[hook]
pub fn use_host_bridge(main_button_text: String) -> HostState {
    let visual = use_state(VisualContext::default);
    let user = use_state(|| None::<HostUser>);

    {
        let visual = visual.clone();
        let user = user.clone();
        use_effect_with((), move |_| {
            let telegram = Rc::new(TelegramWebApp::detect());
            let platform: Rc<dyn HostPlatform> = telegram.clone();
            let bridge = Rc::new(RefCell::new(HostBridge::new(platform, &main_button_text)));

            let initial = bridge.borrow_mut().initialize().clone();
            visual.set(initial);
            user.set(bridge.borrow().user().cloned());

            if telegram.is_available() {
                let bridge = bridge.clone();
                let visual = visual.clone();
                let on_theme_changed = Box::new(move || {
                    let updated = bridge.borrow_mut().reapply_theme().clone();
                    log::debug!(target: "host-bridge", "theme changed, background {}", updated.background);
                    visual.set(updated);
                });
                if let Err(e) = telegram.on_theme_changed(on_theme_changed) {
                    log::warn!(target: "host-bridge", "theme change events unavailable: {}", e);
                }
            }

            || ()
        });
    }

    HostState {
        visual: (*visual).clone(),
        user: (*user).clone(),
    }
}
