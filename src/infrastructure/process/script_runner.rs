use async_trait::async_trait;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command as TokioCommand;
use tracing::debug;

use crate::common::error::RepoTabsError;
use crate::common::result::RepoTabsResult;

/// Result of running one script through the bridge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Program that was invoked
    pub command: String,

    /// Exit code of the process (-1 when terminated by a signal)
    pub exit_code: i32,

    pub stdout: String,

    pub stderr: String,

    /// Execution time in milliseconds
    pub execution_time_ms: u64,

    /// Whether the command was successful (exit code 0)
    pub success: bool,
}

impl ExecutionResult {
    pub fn new(
        command: impl Into<String>,
        exit_code: i32,
        stdout: String,
        stderr: String,
        execution_time_ms: u64,
    ) -> Self {
        Self {
            command: command.into(),
            exit_code,
            stdout,
            stderr,
            execution_time_ms,
            success: exit_code == 0,
        }
    }
}

/// Hands an automation script to the host scripting bridge.
///
/// A non-zero exit is reported through [`ExecutionResult`], not as an error;
/// `Err` means the bridge could not be started at all.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScriptRunner: Send + Sync {
    async fn run_script(&self, script: &str) -> RepoTabsResult<ExecutionResult>;
}

/// Runs scripts with `<program> -e <script>` and waits for completion
#[derive(Debug, Clone)]
pub struct OsascriptRunner {
    program: String,
}

impl OsascriptRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for OsascriptRunner {
    fn default() -> Self {
        Self::new("osascript")
    }
}

#[async_trait]
impl ScriptRunner for OsascriptRunner {
    async fn run_script(&self, script: &str) -> RepoTabsResult<ExecutionResult> {
        let start_time = Instant::now();
        debug!("Running {} with {} byte script", self.program, script.len());

        let output = TokioCommand::new(&self.program)
            .arg("-e")
            .arg(script)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                RepoTabsError::command_error_with_source(
                    format!("Failed to spawn '{}'", self.program),
                    self.program.clone(),
                    e,
                )
            })?;

        let execution_time = start_time.elapsed().as_millis() as u64;

        Ok(ExecutionResult::new(
            self.program.clone(),
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
            execution_time,
        ))
    }
}
