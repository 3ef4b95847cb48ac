//! Browser side of the view switcher: DOM projection, config loading and
//! click wiring.

pub mod bind;
pub mod config;
pub mod dom;

#[cfg(test)]
pub(crate) mod memory_host;

pub use bind::bind_page;
pub use config::load_config;
pub use dom::DocumentHost;
