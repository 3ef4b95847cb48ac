//! Built-in card markup, used when the host page ships none.

mod page;

pub use page::NameCard;

use serde::{Deserialize, Serialize};
use web_sys::Document;

pub const PROFILE_SCRIPT_ID: &str = "namecard-profile";

/// Content shown on the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardProfile {
    pub name: String,
    pub role: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub bio: String,
}

impl Default for CardProfile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            role: "Software Engineer".to_string(),
            company: "Company".to_string(),
            email: "hello@example.com".to_string(),
            phone: "+82 10-0000-0000".to_string(),
            website: "https://example.com".to_string(),
            bio: "Short introduction goes here.".to_string(),
        }
    }
}

impl CardProfile {
    /// `mailto:` link for the email address.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link with everything but digits and a leading `+` stripped.
    pub fn tel(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .enumerate()
            .filter(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '+'))
            .map(|(_, c)| c)
            .collect();
        format!("tel:{}", digits)
    }

    /// Profile from `<script type="application/json" id="namecard-profile">`,
    /// or the default one.
    pub fn load(document: &Document) -> Self {
        let Some(json) = document
            .get_element_by_id(PROFILE_SCRIPT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        Self::from_json_or_default(&json)
    }

    fn from_json_or_default(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|e| {
            log::error!("#{}: {}", PROFILE_SCRIPT_ID, e);
            Self::default()
        })
    }
}
