use serde::{Deserialize, Serialize};

use crate::host::ThemeParams;

pub const DEFAULT_BACKGROUND: &str = "#ffffff";
pub const DEFAULT_TEXT: &str = "#000000";

/// Colors applied to the application's root, handed down to every renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualContext {
    pub background: String,
    pub text: String,
    /// Secondary text (dates, captions)
    pub hint: Option<String>,
    pub accent: Option<String>,
}

impl Default for VisualContext {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND.to_string(),
            text: DEFAULT_TEXT.to_string(),
            hint: None,
            accent: None,
        }
    }
}

impl VisualContext {
    /// Host theme on top of the light default; missing keys keep the default
    pub fn from_theme(params: &ThemeParams) -> Self {
        let defaults = Self::default();
        Self {
            background: non_empty(&params.bg_color).unwrap_or(defaults.background),
            text: non_empty(&params.text_color).unwrap_or(defaults.text),
            hint: non_empty(&params.hint_color),
            accent: non_empty(&params.button_color),
        }
    }

    /// Inline style for the root element
    pub fn root_style(&self) -> String {
        format!("background-color: {}; color: {};", self.background, self.text)
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_params_keep_light_theme() {
        let context = VisualContext::from_theme(&ThemeParams::default());
        assert_eq!(context, VisualContext::default());
        assert_eq!(context.root_style(), "background-color: #ffffff; color: #000000;");
    }

    #[test]
    fn test_host_colors_override_defaults() {
        let params = ThemeParams {
            bg_color: Some("#17212b".to_string()),
            text_color: Some("  ".to_string()),
            hint_color: Some("#708499".to_string()),
            ..ThemeParams::default()
        };
        let context = VisualContext::from_theme(&params);
        assert_eq!(context.background, "#17212b");
        assert_eq!(context.text, DEFAULT_TEXT);
        assert_eq!(context.hint.as_deref(), Some("#708499"));
        assert_eq!(context.accent, None);
    }
}
