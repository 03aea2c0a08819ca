use anyhow::Result;
use colored::Colorize;
use std::sync::Arc;

use crate::application::services::grouping_service::GroupingService;
use crate::application::use_cases::{
    find_repositories::{FindRepositoriesConfig, FindRepositoriesUseCase, FindResult},
    open_repositories::{OpenRepositoriesConfig, OpenRepositoriesUseCase},
};
use crate::common::result::OptionExt;
use crate::domain::entities::app_config::AppConfig;
use crate::domain::value_objects::terminal_app::TerminalApp;
use crate::infrastructure::process::{OsascriptRunner, ScriptRunner};
use crate::infrastructure::terminal::{resolve_terminal_app, TerminalDriver};

/// Print the discovery report shared by `open` and `list`.
/// Returns false when there is nothing to open.
pub fn print_discovery_report(found: &FindResult) -> bool {
    println!("Found {} repositories", found.repositories.len());
    if found.is_empty() {
        println!("No Git repositories found in {}", found.base_dir.display());
        return false;
    }
    println!("Repositories: {:?}", found.names());
    true
}

/// Find repositories and open them in terminal tabs and panes
pub struct OpenCommand {
    config: AppConfig,
    dry_run: bool,
    verbose: bool,
}

impl OpenCommand {
    pub fn new(config: AppConfig, dry_run: bool, verbose: bool) -> Self {
        Self {
            config,
            dry_run,
            verbose,
        }
    }

    pub async fn execute(&self) -> Result<()> {
        let found =
            FindRepositoriesUseCase::new(FindRepositoriesConfig::from(&self.config)).execute()?;
        if !print_discovery_report(&found) {
            return Ok(());
        }

        let runner: Arc<dyn ScriptRunner> =
            Arc::new(OsascriptRunner::new(self.config.bridge_command.clone()));
        let app = self.select_app(runner.as_ref()).await?;
        let group_count = GroupingService::new(self.config.group_size)?
            .group_count(found.repositories.len());

        if !self.dry_run {
            println!(
                "{} Opening {} tabs in {}...",
                "::".blue().bold(),
                group_count,
                app
            );
        }

        let driver = TerminalDriver::new(app, runner);
        let config = OpenRepositoriesConfig::from(&self.config).with_dry_run(self.dry_run);
        let result = OpenRepositoriesUseCase::new(config, driver)
            .execute(found.repositories)
            .await?;

        if self.dry_run {
            println!();
            println!("{}", result.scripts.join("\n\n"));
            return Ok(());
        }

        println!(
            "{} Opened {} repositories in {} tabs",
            "✓".green().bold(),
            result.repositories_opened,
            result.groups_opened
        );

        if !result.is_success() {
            println!("{} Some groups failed:", "⚠".yellow().bold());
            for failure in &result.failures {
                println!(
                    "  {} {}: {}",
                    format!("tab {}", failure.index + 1).bold(),
                    failure.repositories.join(", "),
                    failure.error_message.red()
                );
            }
        } else if self.verbose {
            println!("  Groups opened: {}", result.groups_opened);
        }

        Ok(())
    }

    async fn select_app(&self, runner: &dyn ScriptRunner) -> Result<TerminalApp> {
        let candidates = self.config.terminal_apps();
        if self.config.resolve_app && !self.dry_run {
            return Ok(resolve_terminal_app(candidates, runner).await?);
        }
        Ok(candidates
            .first()
            .cloned()
            .ok_or_validation_error("app_names", "at least one application name is required")?)
    }
}
