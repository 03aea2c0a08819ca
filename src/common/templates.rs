use crate::common::result::RepoTabsResult;

/// Templates module for embedded YAML templates
/// This module provides access to embedded template files using include_str! macro

/// Get the default repotabs.yaml template content
pub fn get_config_template() -> &'static str {
    include_str!("../../templates/repotabs.yaml")
}

/// Template replacement functionality
pub struct TemplateProcessor;

impl TemplateProcessor {
    /// Create a new template processor
    pub fn new() -> Self {
        Self
    }

    /// Replace `{{key}}` placeholders with the given values
    pub fn process(
        &self,
        template: &str,
        replacements: Option<&std::collections::HashMap<String, String>>,
    ) -> String {
        let mut output = template.to_string();
        if let Some(replacements) = replacements {
            for (key, value) in replacements {
                output = output.replace(&format!("{{{{{}}}}}", key), value);
            }
        }
        output
    }

    /// Render repotabs.yaml with the given base directory filled in.
    ///
    /// The value is serialized as a YAML scalar, so quotes and backslashes
    /// in the path survive a reload.
    pub fn render_config_template(&self, base_dir: &str) -> RepoTabsResult<String> {
        let scalar = serde_yaml::to_string(base_dir)?;
        let mut replacements = std::collections::HashMap::new();
        replacements.insert("base_dir".to_string(), scalar.trim_end().to_string());
        Ok(self.process(get_config_template(), Some(&replacements)))
    }
}

impl Default for TemplateProcessor {
    fn default() -> Self {
        Self::new()
    }
}
