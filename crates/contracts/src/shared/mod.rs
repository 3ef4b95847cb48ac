pub mod view_switcher;
