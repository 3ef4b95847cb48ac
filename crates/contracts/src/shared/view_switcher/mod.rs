//! Tab-set visibility switching for the business card page.
//!
//! The page has three sections (`main`, `detail`, `share`). Exactly one is
//! shown at a time; the rest carry the configured "hidden" CSS token.
//! [`ViewSwitcher`] keeps the current view as plain state and projects it
//! onto whatever implements [`ViewHost`] (the browser DOM in the frontend,
//! an in-memory map in tests).

mod config;
mod error;
mod host;
mod switcher;
mod view;

pub use config::{Shortcut, SwitcherConfig, Variant, VisibilityClasses};
pub use error::ConfigError;
pub use host::ViewHost;
pub use switcher::ViewSwitcher;
pub use view::View;
