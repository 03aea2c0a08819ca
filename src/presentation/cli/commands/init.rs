use anyhow::Result;
use std::path::PathBuf;

use crate::common::templates::TemplateProcessor;
use crate::infrastructure::filesystem::config_store::ConfigStore;

/// Write a repotabs.yaml template
pub struct InitCommand {
    /// File to create
    pub path: PathBuf,
    /// Value written as `base_dir`
    pub base_dir: String,
    /// Force overwrite existing file
    pub force: bool,
}

impl InitCommand {
    pub fn new(path: PathBuf, base_dir: String, force: bool) -> Self {
        Self {
            path,
            base_dir,
            force,
        }
    }

    /// Execute the init command
    pub async fn execute(&self) -> Result<()> {
        if self.path.exists() && !self.force {
            return Err(anyhow::anyhow!(
                "File {} already exists. Use --force to overwrite.",
                self.path.display()
            ));
        }

        let content = TemplateProcessor::new().render_config_template(&self.base_dir)?;
        ConfigStore::new().write_raw(&self.path, &content).await?;

        println!("✅ Successfully created config file");
        println!("📁 Location: {}", self.path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Edit base_dir and the other settings");
        println!("   2. Run 'repotabs list' to check which repositories are found");
        println!("   3. Run 'repotabs' to open them in iTerm2");

        Ok(())
    }
}
