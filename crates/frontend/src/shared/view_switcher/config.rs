//! Switcher configuration from the host page.
//!
//! Sources, first match wins:
//!   1. `<script type="application/json" id="namecard-config">` with a JSON
//!      [`SwitcherConfig`] (missing fields default to the lenient preset).
//!   2. `data-variant="strict" | "lenient"` on `<body>`.
//!   3. Built-in default (lenient preset).
//!
//! A broken source is logged and skipped.

use contracts::shared::view_switcher::{SwitcherConfig, Variant};
use web_sys::Document;

pub const CONFIG_SCRIPT_ID: &str = "namecard-config";
pub const VARIANT_ATTRIBUTE: &str = "data-variant";

/// Read the configuration sources from the document.
pub fn load_config(document: &Document) -> SwitcherConfig {
    let script = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content());
    let variant = document
        .body()
        .and_then(|body| body.get_attribute(VARIANT_ATTRIBUTE));

    resolve_config(script.as_deref(), variant.as_deref())
}

pub fn resolve_config(script: Option<&str>, variant: Option<&str>) -> SwitcherConfig {
    if let Some(json) = script.filter(|s| !s.trim().is_empty()) {
        match SwitcherConfig::from_json(json) {
            Ok(config) => return config,
            Err(e) => log::error!("#{}: {}", CONFIG_SCRIPT_ID, e),
        }
    }

    if let Some(name) = variant {
        match Variant::parse(name) {
            Ok(variant) => return variant.config(),
            Err(e) => log::error!("{}: {}", VARIANT_ATTRIBUTE, e),
        }
    }

    SwitcherConfig::default()
}
