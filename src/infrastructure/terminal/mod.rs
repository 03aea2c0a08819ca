pub mod driver;
pub mod script_builder;

pub use driver::{resolve_terminal_app, TerminalDriver};
pub use script_builder::ScriptBuilder;
