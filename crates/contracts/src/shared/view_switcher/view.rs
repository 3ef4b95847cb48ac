use serde::{Deserialize, Serialize};

/// Prefix of the element id that hosts a view's section.
pub const ELEMENT_ID_PREFIX: &str = "tab-";

/// One of the named sections of the card page.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Main,
    Detail,
    Share,
}

impl View {
    /// Returns the view key as used in `data-tab` attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Main => "main",
            View::Detail => "detail",
            View::Share => "share",
        }
    }

    /// Parse a view key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "main" => Some(View::Main),
            "detail" => Some(View::Detail),
            "share" => Some(View::Share),
            _ => None,
        }
    }

    /// Id of the DOM container for this view, e.g. `tab-detail`.
    pub fn element_id(&self) -> String {
        format!("{}{}", ELEMENT_ID_PREFIX, self.as_str())
    }

    /// All views in page order.
    pub fn all() -> [View; 3] {
        [View::Main, View::Detail, View::Share]
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_and_element_ids() {
        assert_eq!(View::Main.element_id(), "tab-main");
        assert_eq!(View::Detail.element_id(), "tab-detail");
        assert_eq!(View::Share.element_id(), "tab-share");
        for view in View::all() {
            assert_eq!(View::from_key(view.as_str()), Some(view));
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(View::from_key("settings"), None);
        assert_eq!(View::from_key("Main"), None);
        assert_eq!(View::from_key(""), None);
    }

    #[test]
    fn test_serde_uses_keys() {
        assert_eq!(serde_json::to_string(&View::Share).unwrap(), "\"share\"");
        let view: View = serde_json::from_str("\"detail\"").unwrap();
        assert_eq!(view, View::Detail);
    }
}
