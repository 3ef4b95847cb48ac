use super::error::ConfigError;
use super::view::View;
use serde::{Deserialize, Serialize};

/// CSS tokens marking a view container as hidden or visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityClasses {
    pub hidden: String,
    pub visible: String,
}

impl VisibilityClasses {
    pub fn new(hidden: impl Into<String>, visible: impl Into<String>) -> Self {
        Self {
            hidden: hidden.into(),
            visible: visible.into(),
        }
    }

    /// Both tokens must be single, distinct class names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let is_token = |s: &str| !s.is_empty() && !s.chars().any(char::is_whitespace);
        if !is_token(&self.hidden) || !is_token(&self.visible) || self.hidden == self.visible {
            return Err(ConfigError::InvalidClasses {
                hidden: self.hidden.clone(),
                visible: self.visible.clone(),
            });
        }
        Ok(())
    }
}

impl Default for VisibilityClasses {
    fn default() -> Self {
        Self::new("d-none", "block")
    }
}

/// A fixed-purpose button inside one view that always opens `target`.
///
/// Located in the page as `#tab-<scope> button[title="<label>"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub scope: View,
    pub label: String,
    pub target: View,
}

impl Shortcut {
    pub fn new(scope: View, label: impl Into<String>, target: View) -> Self {
        Self {
            scope,
            label: label.into(),
            target,
        }
    }

    /// CSS selector for the shortcut button.
    pub fn selector(&self) -> String {
        format!(
            "#{} button[title=\"{}\"]",
            self.scope.element_id(),
            self.label.replace('\\', "\\\\").replace('"', "\\\"")
        )
    }
}

/// Named presets matching the two page flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// `hidden`/`block` tokens, navigation buttons only.
    Strict,
    /// `d-none`/`block` tokens plus Back/Share/Close shortcuts.
    Lenient,
}

impl Variant {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.trim() {
            "strict" => Ok(Variant::Strict),
            "lenient" => Ok(Variant::Lenient),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }

    pub fn config(self) -> SwitcherConfig {
        match self {
            Variant::Strict => SwitcherConfig::strict(),
            Variant::Lenient => SwitcherConfig::lenient(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitcherConfig {
    pub classes: VisibilityClasses,
    pub shortcuts: Vec<Shortcut>,
    /// View shown right after the controls are wired.
    pub initial: View,
}

impl SwitcherConfig {
    pub fn strict() -> Self {
        Self {
            classes: VisibilityClasses::new("hidden", "block"),
            shortcuts: Vec::new(),
            initial: View::Main,
        }
    }

    pub fn lenient() -> Self {
        Self {
            classes: VisibilityClasses::new("d-none", "block"),
            shortcuts: vec![
                Shortcut::new(View::Detail, "Back", View::Main),
                Shortcut::new(View::Detail, "Share", View::Share),
                Shortcut::new(View::Share, "Close", View::Main),
            ],
            initial: View::Main,
        }
    }

    /// Parse a JSON config block. Missing fields fall back to the lenient preset.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.classes.validate()?;
        Ok(config)
    }
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self::lenient()
    }
}
