pub mod pane_layout;
pub mod terminal_app;
