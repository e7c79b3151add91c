//! `HostPlatform` backed by `window.Telegram.WebApp`.

use js_sys::{Array, Function, Reflect, JSON};
use serde::de::DeserializeOwned;
use shared::{HostError, HostPlatform, HostUser, ThemeParams};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

pub struct TelegramWebApp {
    web_app: Option<JsValue>,
}

impl TelegramWebApp {
    /// Looks up the WebApp object injected by telegram-web-app.js
    pub fn detect() -> Self {
        let web_app = web_sys::window()
            .and_then(|window| property(&JsValue::from(window), "Telegram"))
            .and_then(|telegram| property(&telegram, "WebApp"));
        Self { web_app }
    }

    /// Calls `handler` whenever the user switches the host theme
    pub fn on_theme_changed(&self, handler: Box<dyn Fn()>) -> Result<(), HostError> {
        let web_app = self.web_app()?;
        let closure = Closure::<dyn Fn()>::wrap(handler);
        call(
            web_app,
            "onEvent",
            &[JsValue::from_str("themeChanged"), closure.into_js_value()],
        )?;
        Ok(())
    }

    fn web_app(&self) -> Result<&JsValue, HostError> {
        self.web_app.as_ref().ok_or(HostError::Unavailable)
    }

    fn main_button(&self) -> Result<JsValue, HostError> {
        property(self.web_app()?, "MainButton").ok_or_else(|| HostError::MissingCapability("MainButton".to_string()))
    }
}

impl HostPlatform for TelegramWebApp {
    fn is_available(&self) -> bool {
        // Outside Telegram the script still defines WebApp, with empty initData
        self.web_app
            .as_ref()
            .and_then(|web_app| property(web_app, "initData"))
            .and_then(|init_data| init_data.as_string())
            .map_or(false, |init_data| !init_data.is_empty())
    }

    fn expand(&self) -> Result<(), HostError> {
        call(self.web_app()?, "expand", &[]).map(|_| ())
    }

    fn theme_params(&self) -> Result<ThemeParams, HostError> {
        let params = property(self.web_app()?, "themeParams")
            .ok_or_else(|| HostError::MissingCapability("themeParams".to_string()))?;
        from_js(&params, "themeParams")
    }

    fn user(&self) -> Option<HostUser> {
        let user = property(self.web_app.as_ref()?, "initDataUnsafe").and_then(|data| property(&data, "user"))?;
        match from_js(&user, "initDataUnsafe.user") {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!(target: "telegram", "{}", e);
                None
            }
        }
    }

    fn set_main_button_text(&self, text: &str) -> Result<(), HostError> {
        call(&self.main_button()?, "setText", &[JsValue::from_str(text)]).map(|_| ())
    }

    fn on_main_button_click(&self, handler: Box<dyn Fn()>) -> Result<(), HostError> {
        // The host keeps the handler for the lifetime of the app
        let closure = Closure::<dyn Fn()>::wrap(handler);
        call(&self.main_button()?, "onClick", &[closure.into_js_value()]).map(|_| ())
    }

    fn show_main_button(&self) -> Result<(), HostError> {
        call(&self.main_button()?, "show", &[]).map(|_| ())
    }

    fn close(&self) -> Result<(), HostError> {
        call(self.web_app()?, "close", &[]).map(|_| ())
    }
}

fn property(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn call(target: &JsValue, method: &str, args: &[JsValue]) -> Result<JsValue, HostError> {
    let function: Function = property(target, method)
        .and_then(|value| value.dyn_into().ok())
        .ok_or_else(|| HostError::MissingCapability(method.to_string()))?;

    let js_args = Array::new();
    for arg in args {
        js_args.push(arg);
    }

    function.apply(target, &js_args).map_err(|e| HostError::CallFailed {
        method: method.to_string(),
        message: format!("{:?}", e),
    })
}

/// Round-trips a plain JS object through JSON into a Rust value
fn from_js<T: DeserializeOwned>(value: &JsValue, what: &str) -> Result<T, HostError> {
    let failed = |message: String| HostError::CallFailed {
        method: what.to_string(),
        message,
    };
    let json = JSON::stringify(value)
        .map_err(|e| failed(format!("{:?}", e)))?
        .as_string()
        .ok_or_else(|| failed("not serializable".to_string()))?;
    serde_json::from_str(&json).map_err(|e| failed(e.to_string()))
}
