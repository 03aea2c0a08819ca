/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - File system operations (repository scanning, config files)
/// - Process execution (the AppleScript bridge)
/// - Terminal automation (script generation, pane layout)
pub mod filesystem;
pub mod process;
pub mod terminal;

// Re-export commonly used types
pub use filesystem::{
    config_store::ConfigStore,
    repository_scanner::{RepositoryFilter, RepositoryScanner},
};
pub use process::{ExecutionResult, OsascriptRunner, ScriptRunner};
pub use terminal::{resolve_terminal_app, ScriptBuilder, TerminalDriver};
