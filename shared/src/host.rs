//! Bridge to the embedding mini-app host.
//!
//! The host's capabilities come in through [`HostPlatform`] so the client can
//! run (and be tested) outside the host with [`NoopHost`]. [`HostBridge`]
//! performs the one-time startup sequence: expand the viewport, derive the
//! visual context from the host theme, wire the primary button to close the
//! app, and capture the current user. Every step is best effort.

use std::rc::Rc;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::VisualContext;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("mini-app host is not available")]
    Unavailable,
    #[error("host does not provide `{0}`")]
    MissingCapability(String),
    #[error("host call `{method}` failed: {message}")]
    CallFailed { method: String, message: String },
}

/// Theme parameters as the host reports them; any key may be missing
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeParams {
    pub bg_color: Option<String>,
    pub text_color: Option<String>,
    pub hint_color: Option<String>,
    pub button_color: Option<String>,
    pub button_text_color: Option<String>,
}

/// Identity of the user who opened the mini-app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostUser {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
}

impl HostUser {
    pub fn display_name(&self) -> String {
        match &self.last_name {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }
}

/// Capabilities of the embedding host
pub trait HostPlatform {
    /// `false` when the app is not running inside the host
    fn is_available(&self) -> bool;
    fn expand(&self) -> Result<(), HostError>;
    fn theme_params(&self) -> Result<ThemeParams, HostError>;
    fn user(&self) -> Option<HostUser>;
    fn set_main_button_text(&self, text: &str) -> Result<(), HostError>;
    fn on_main_button_click(&self, handler: Box<dyn Fn()>) -> Result<(), HostError>;
    fn show_main_button(&self) -> Result<(), HostError>;
    fn close(&self) -> Result<(), HostError>;
}

/// Stand-in used outside the host
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl HostPlatform for NoopHost {
    fn is_available(&self) -> bool {
        false
    }

    fn expand(&self) -> Result<(), HostError> {
        Err(HostError::Unavailable)
    }

    fn theme_params(&self) -> Result<ThemeParams, HostError> {
        Err(HostError::Unavailable)
    }

    fn user(&self) -> Option<HostUser> {
        None
    }

    fn set_main_button_text(&self, _text: &str) -> Result<(), HostError> {
        Err(HostError::Unavailable)
    }

    fn on_main_button_click(&self, _handler: Box<dyn Fn()>) -> Result<(), HostError> {
        Err(HostError::Unavailable)
    }

    fn show_main_button(&self) -> Result<(), HostError> {
        Err(HostError::Unavailable)
    }

    fn close(&self) -> Result<(), HostError> {
        Err(HostError::Unavailable)
    }
}

pub struct HostBridge {
    platform: Rc<dyn HostPlatform>,
    main_button_text: String,
    visual: VisualContext,
    user: Option<HostUser>,
    initialized: bool,
}

impl HostBridge {
    pub fn new(platform: Rc<dyn HostPlatform>, main_button_text: &str) -> Self {
        Self {
            platform,
            main_button_text: main_button_text.to_string(),
            visual: VisualContext::default(),
            user: None,
            initialized: false,
        }
    }

    /// Runs the startup sequence once; later calls return the same context.
    /// Never fails: when the host is missing the light theme is kept.
    pub fn initialize(&mut self) -> &VisualContext {
        if self.initialized {
            return &self.visual;
        }
        self.initialized = true;

        if !self.platform.is_available() {
            info!(target: "host-bridge", "host not available, keeping default theme");
            return &self.visual;
        }

        if let Err(e) = self.platform.expand() {
            warn!(target: "host-bridge", "expand failed: {}", e);
        }

        self.apply_theme();

        self.user = self.platform.user();
        match &self.user {
            Some(user) => info!(target: "host-bridge", "host user {} ({})", user.id, user.display_name()),
            None => info!(target: "host-bridge", "host did not report a user"),
        }

        self.register_main_button();

        &self.visual
    }

    /// Reads the host theme again, e.g. after the host reports a theme change
    pub fn reapply_theme(&mut self) -> &VisualContext {
        if self.platform.is_available() {
            self.apply_theme();
        }
        &self.visual
    }

    pub fn visual_context(&self) -> &VisualContext {
        &self.visual
    }

    pub fn user(&self) -> Option<&HostUser> {
        self.user.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn platform(&self) -> Rc<dyn HostPlatform> {
        Rc::clone(&self.platform)
    }

    fn apply_theme(&mut self) {
        self.visual = match self.platform.theme_params() {
            Ok(params) => VisualContext::from_theme(&params),
            Err(e) => {
                warn!(target: "host-bridge", "theme params unavailable: {}", e);
                VisualContext::default()
            }
        };
    }

    fn register_main_button(&self) {
        if let Err(e) = self.platform.set_main_button_text(&self.main_button_text) {
            warn!(target: "host-bridge", "main button text not set: {}", e);
        }

        // The handler owns its platform handle so it works after the bridge is gone
        let platform = Rc::clone(&self.platform);
        let handler = Box::new(move || {
            if let Err(e) = platform.close() {
                warn!(target: "host-bridge", "close request failed: {}", e);
            }
        });

        if let Err(e) = self.platform.on_main_button_click(handler) {
            warn!(target: "host-bridge", "main button handler not registered: {}", e);
            return;
        }
        if let Err(e) = self.platform.show_main_button() {
            warn!(target: "host-bridge", "main button not shown: {}", e);
        }
    }
}
