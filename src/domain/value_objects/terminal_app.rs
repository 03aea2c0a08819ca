use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::common::error::RepoTabsError;

/// Primary scripting target, tried first
pub const PRIMARY_APP_NAME: &str = "iTerm2";

/// Older bundle name of the same application
pub const FALLBACK_APP_NAME: &str = "iTerm";

/// Name of the GUI terminal application addressed by `tell application`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TerminalApp(String);

impl TerminalApp {
    /// Create a new application name.
    ///
    /// The name is embedded inside an AppleScript string literal, so quotes,
    /// backslashes and line breaks are rejected.
    pub fn new(name: impl Into<String>) -> Result<Self, RepoTabsError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RepoTabsError::validation_error(
                "app_names",
                "application name must not be empty",
                Some(name),
            ));
        }
        if trimmed.contains(['"', '\\', '\n', '\r']) {
            return Err(RepoTabsError::validation_error(
                "app_names",
                "application name contains characters not allowed in AppleScript",
                Some(name),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// `iTerm2` followed by `iTerm`
    pub fn default_candidates() -> Vec<TerminalApp> {
        vec![
            Self(PRIMARY_APP_NAME.to_string()),
            Self(FALLBACK_APP_NAME.to_string()),
        ]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TerminalApp {
    fn default() -> Self {
        Self(PRIMARY_APP_NAME.to_string())
    }
}

impl fmt::Display for TerminalApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TerminalApp {
    type Err = RepoTabsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TerminalApp {
    type Error = RepoTabsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TerminalApp> for String {
    fn from(app: TerminalApp) -> Self {
        app.0
    }
}
