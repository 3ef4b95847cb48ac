pub mod card;
pub mod view_switcher;
