use anyhow::Result;
use colored::Colorize;

use crate::application::use_cases::find_repositories::{
    FindRepositoriesConfig, FindRepositoriesUseCase, FindResult,
};
use crate::domain::entities::app_config::AppConfig;
use crate::presentation::cli::commands::open::print_discovery_report;
use crate::presentation::cli::OutputFormat;

/// List the repositories that `open` would use, without touching the terminal
pub struct ListCommand {
    config: AppConfig,
    output: OutputFormat,
}

impl ListCommand {
    pub fn new(config: AppConfig, output: OutputFormat) -> Self {
        Self { config, output }
    }

    pub fn execute(&self) -> Result<()> {
        let found =
            FindRepositoriesUseCase::new(FindRepositoriesConfig::from(&self.config)).execute()?;

        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&found)?),
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&found)?),
            OutputFormat::Text => self.print_text(&found),
        }
        Ok(())
    }

    fn print_text(&self, found: &FindResult) {
        if !print_discovery_report(found) {
            return;
        }
        for repo in &found.repositories {
            println!("  {} {}", repo.name.bold(), repo.display_path().dimmed());
        }
    }
}
