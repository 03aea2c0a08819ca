use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::common::error::RepoTabsError;
use crate::common::result::{OptionExt, RepoTabsResult};
use crate::domain::entities::group::RepositoryGroup;
use crate::domain::value_objects::terminal_app::TerminalApp;
use crate::infrastructure::process::{ExecutionResult, ScriptRunner};
use crate::infrastructure::terminal::script_builder::{applescript_escape, ScriptBuilder};

/// Opens repository groups in the terminal application, one bridge call per group
pub struct TerminalDriver {
    builder: ScriptBuilder,
    runner: Arc<dyn ScriptRunner>,
}

impl TerminalDriver {
    pub fn new(app: TerminalApp, runner: Arc<dyn ScriptRunner>) -> Self {
        Self {
            builder: ScriptBuilder::new(app),
            runner,
        }
    }

    pub fn app(&self) -> &TerminalApp {
        self.builder.app()
    }

    pub fn script_for(&self, group: &RepositoryGroup) -> String {
        self.builder.build_for_group(group)
    }

    /// Build the group's script and wait for the bridge to finish running it.
    ///
    /// A non-zero exit status becomes a [`RepoTabsError::CommandError`].
    pub async fn open_group(&self, group: &RepositoryGroup) -> RepoTabsResult<ExecutionResult> {
        let script = self.script_for(group);
        debug!("Generated script for group {}:\n{}", group.index + 1, script);

        let result = self.runner.run_script(&script).await?;
        if !result.success {
            error!(
                "{} exited with code {} for group {}",
                result.command,
                result.exit_code,
                group.index + 1
            );
            let stderr = result.stderr.trim();
            let message = if stderr.is_empty() {
                format!(
                    "{} exited with code {} while opening {}",
                    result.command,
                    result.exit_code,
                    group.names().join(", ")
                )
            } else {
                format!(
                    "{} exited with code {} while opening {}: {}",
                    result.command,
                    result.exit_code,
                    group.names().join(", "),
                    stderr
                )
            };
            return Err(RepoTabsError::command_error(
                message,
                result.command,
                Some(result.exit_code),
            ));
        }

        info!(
            "Opened group {} ({} panes) in {}ms",
            group.index + 1,
            group.len(),
            result.execution_time_ms
        );
        Ok(result)
    }
}

/// Script that succeeds only if the application is known to the system
pub fn probe_script(app: &TerminalApp) -> String {
    format!("id of application \"{}\"", applescript_escape(app.as_str()))
}

/// Pick the first candidate the bridge can address.
///
/// Falls back to the first candidate when none can be confirmed, so the
/// subsequent open reports the real error.
pub async fn resolve_terminal_app(
    candidates: &[TerminalApp],
    runner: &dyn ScriptRunner,
) -> RepoTabsResult<TerminalApp> {
    let first = candidates
        .first()
        .ok_or_validation_error("app_names", "at least one application name is required")?;

    for app in candidates {
        match runner.run_script(&probe_script(app)).await {
            Ok(result) if result.success => {
                debug!("Resolved terminal application: {}", app);
                return Ok(app.clone());
            }
            Ok(result) => debug!("{} not available (exit {})", app, result.exit_code),
            Err(e) => {
                warn!("Failed to probe {}: {}", app, e);
                break;
            }
        }
    }

    warn!("No terminal application confirmed, using {}", first);
    Ok(first.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::repository::Repository;
    use crate::infrastructure::process::script_runner::MockScriptRunner;
    use mockall::predicate::*;

    fn ok_result() -> RepoTabsResult<ExecutionResult> {
        Ok(ExecutionResult::new("osascript", 0, String::new(), String::new(), 1))
    }

    fn failed_result(stderr: &str) -> RepoTabsResult<ExecutionResult> {
        Ok(ExecutionResult::new("osascript", 1, String::new(), stderr.to_string(), 1))
    }

    fn group(index: usize, names: &[&str]) -> RepositoryGroup {
        RepositoryGroup::new(
            index,
            names
                .iter()
                .map(|n| Repository::new(*n, format!("/w/{n}")))
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_open_group_passes_generated_script() {
        let mut runner = MockScriptRunner::new();
        runner
            .expect_run_script()
            .withf(|script: &str| {
                script.contains("create window with default profile")
                    && script.contains("cd /w/a && clear")
                    && !script.contains("create tab")
            })
            .times(1)
            .returning(|_| ok_result());

        let driver = TerminalDriver::new(TerminalApp::default(), Arc::new(runner));
        let result = driver.open_group(&group(0, &["a"])).await.unwrap();
        assert!(result.success);
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_command_error() {
        let mut runner = MockScriptRunner::new();
        runner
            .expect_run_script()
            .times(1)
            .returning(|_| failed_result("execution error: iTerm2 got an error"));

        let driver = TerminalDriver::new(TerminalApp::default(), Arc::new(runner));
        let err = driver.open_group(&group(1, &["a", "b"])).await.unwrap_err();

        assert_eq!(err.exit_code(), Some(1));
        let message = err.to_string();
        assert!(message.contains("a, b"), "{message}");
        assert!(message.contains("iTerm2 got an error"), "{message}");
    }

    #[tokio::test]
    async fn test_resolve_picks_first_available() {
        let mut runner = MockScriptRunner::new();
        runner
            .expect_run_script()
            .with(eq("id of application \"iTerm2\""))
            .times(1)
            .returning(|_| failed_result("Can't get application"));
        runner
            .expect_run_script()
            .with(eq("id of application \"iTerm\""))
            .times(1)
            .returning(|_| ok_result());

        let app = resolve_terminal_app(&TerminalApp::default_candidates(), &runner)
            .await
            .unwrap();
        assert_eq!(app.as_str(), "iTerm");
    }

    #[tokio::test]
    async fn test_resolve_falls_back_to_first_candidate() {
        let mut runner = MockScriptRunner::new();
        runner
            .expect_run_script()
            .times(2)
            .returning(|_| failed_result("Can't get application"));

        let app = resolve_terminal_app(&TerminalApp::default_candidates(), &runner)
            .await
            .unwrap();
        assert_eq!(app, TerminalApp::default());
    }

    #[tokio::test]
    async fn test_resolve_requires_candidates() {
        let runner = MockScriptRunner::new();
        assert!(resolve_terminal_app(&[], &runner).await.is_err());
    }
}
