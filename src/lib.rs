pub mod model;
pub mod session;
pub mod tui;

mod tui_shell;
