pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::EnvFilter;

use crate::domain::entities::app_config::{AppConfig, ConfigOverrides};
use crate::domain::value_objects::terminal_app::TerminalApp;
use crate::infrastructure::filesystem::config_store::ConfigStore;

/// Output format options for the list command
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    Text,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

/// repotabs - open every git repository under a directory in iTerm2
#[derive(Parser)]
#[command(name = "repotabs")]
#[command(about = "Open every git repository under a directory in iTerm2 tabs and panes")]
#[command(version)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), " ", env!("BUILD_DATE"), ")"
))]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file (defaults to ~/.config/repotabs/repotabs.yaml when present)
    #[arg(short, long, global = true, env = "REPOTABS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory to scan for repositories
    #[arg(short, long, global = true, env = "REPOTABS_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// Number of panes per tab (1-4)
    #[arg(short, long, global = true)]
    pub group_size: Option<usize>,

    /// Skip directories whose name contains this text (repeatable)
    #[arg(short, long = "exclude", global = true)]
    pub exclude: Vec<String>,

    /// Terminal application name, in order of preference (repeatable)
    #[arg(long = "app", global = true)]
    pub apps: Vec<TerminalApp>,

    /// Use the first installed application from the app list
    #[arg(long, global = true)]
    pub resolve_app: bool,

    /// Scripting bridge command
    #[arg(long, global = true, env = "REPOTABS_BRIDGE")]
    pub bridge: Option<String>,

    /// Keep opening remaining groups after a failure
    #[arg(long, global = true)]
    pub continue_on_error: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open repositories in terminal tabs and panes (default)
    Open {
        /// Print the generated scripts instead of running them
        #[arg(long)]
        dry_run: bool,
    },

    /// List the repositories that would be opened
    List {
        /// Output format (text, json, yaml)
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Write a repotabs.yaml template
    Init {
        /// File to create (defaults to ~/.config/repotabs/repotabs.yaml)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Force overwrite existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        if self.cli.no_color {
            colored::control::set_override(false);
        }
        init_logging(self.cli.verbose);

        match self.handle_command().await {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    async fn handle_command(&self) -> anyhow::Result<()> {
        match &self.cli.command {
            Some(Commands::Init { path, force }) => {
                self.handle_init_command(path.clone(), *force).await
            }
            Some(Commands::List { output }) => {
                let config = self.load_config().await?;
                commands::list::ListCommand::new(config, output.clone()).execute()
            }
            Some(Commands::Open { dry_run }) => {
                let config = self.load_config().await?;
                commands::open::OpenCommand::new(config, *dry_run, self.cli.verbose)
                    .execute()
                    .await
            }
            None => {
                let config = self.load_config().await?;
                commands::open::OpenCommand::new(config, false, self.cli.verbose)
                    .execute()
                    .await
            }
        }
    }

    async fn handle_init_command(&self, path: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
        let target = match path.or_else(ConfigStore::default_config_path) {
            Some(target) => target,
            None => anyhow::bail!("Could not determine home directory, pass --path"),
        };
        let base_dir = self
            .cli
            .base_dir
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| AppConfig::default().base_dir.display().to_string());

        commands::init::InitCommand::new(target, base_dir, force)
            .execute()
            .await
    }

    /// Defaults, then the config file, then environment and flags
    async fn load_config(&self) -> anyhow::Result<AppConfig> {
        let file_config = ConfigStore::new().load(self.cli.config.as_deref()).await?;
        let overrides = ConfigOverrides {
            base_dir: self.cli.base_dir.clone(),
            group_size: self.cli.group_size,
            exclude: self.cli.exclude.clone(),
            app_names: self.cli.apps.clone(),
            resolve_app: self.cli.resolve_app,
            bridge_command: self.cli.bridge.clone(),
            continue_on_error: self.cli.continue_on_error,
        };
        Ok(file_config.apply_overrides(overrides).validated()?)
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "repotabs=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
