pub mod script_runner;

pub use script_runner::{ExecutionResult, OsascriptRunner, ScriptRunner};
