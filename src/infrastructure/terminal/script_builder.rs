use std::path::Path;

use crate::domain::entities::group::RepositoryGroup;
use crate::domain::value_objects::pane_layout::{splits_for, PaneRef, MAX_PANES};
use crate::domain::value_objects::terminal_app::TerminalApp;

const INDENT: &str = "  ";

/// Generates the AppleScript that opens one group of repositories.
///
/// The first group always gets a fresh window; later groups become a new
/// tab of the current window, or a new window if none is left. Panes are
/// split in a fixed order:
///
/// ```text
/// pane 2: split pane 1 horizontally
/// pane 3: split pane 1 vertically
/// pane 4: split pane 2 vertically
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptBuilder {
    app: TerminalApp,
}

impl ScriptBuilder {
    pub fn new(app: TerminalApp) -> Self {
        Self { app }
    }

    pub fn app(&self) -> &TerminalApp {
        &self.app
    }

    pub fn build_for_group(&self, group: &RepositoryGroup) -> String {
        let paths: Vec<&Path> = group.repositories.iter().map(|r| r.path.as_path()).collect();
        self.build(&paths, group.is_first())
    }

    /// Build the script for up to four paths. Extra paths are ignored.
    pub fn build(&self, paths: &[&Path], first_tab_in_new_window: bool) -> String {
        let mut lines = ScriptLines::default();

        lines.push(0, format!("tell application \"{}\"", self.app));
        lines.push(1, "activate");

        if first_tab_in_new_window {
            lines.push(1, "create window with default profile");
        } else {
            lines.push(1, "if (count of windows) is 0 then");
            lines.push(2, "create window with default profile");
            lines.push(1, "else");
            lines.push(2, "tell current window to create tab with default profile");
            lines.push(1, "end if");
        }

        lines.push(1, "set currentWindow to current window");
        lines.push(1, "set currentTab to current tab of currentWindow");
        lines.push(1, "set currentSession to current session of currentTab");

        let paths = &paths[..paths.len().min(MAX_PANES)];
        if let Some(first) = paths.first() {
            lines.push(1, write_text(PaneRef::FIRST, first));
        }

        for (split, path) in splits_for(paths.len()).iter().zip(paths.iter().skip(1)) {
            lines.push(
                1,
                format!(
                    "tell {} to split {} with default profile",
                    split.source.variable(),
                    split.direction
                ),
            );
            lines.push(
                1,
                format!("set {} to last session of currentTab", split.created.variable()),
            );
            lines.push(1, write_text(split.created, path));
        }

        lines.push(0, "end tell");
        lines.finish()
    }
}

#[derive(Default)]
struct ScriptLines(Vec<String>);

impl ScriptLines {
    fn push(&mut self, depth: usize, line: impl AsRef<str>) {
        self.0.push(format!("{}{}", INDENT.repeat(depth), line.as_ref()));
    }

    fn finish(self) -> String {
        self.0.join("\n")
    }
}

fn write_text(pane: PaneRef, path: &Path) -> String {
    let command = format!("cd {} && clear", shell_quote(&path.to_string_lossy()));
    format!(
        "tell {} to write text \"{}\"",
        pane.variable(),
        applescript_escape(&command)
    )
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-' | '+' | ',' | ':' | '@' | '%')
}

/// Quote a path for the shell running inside the pane.
/// Paths made only of safe characters are returned unchanged.
pub fn shell_quote(value: &str) -> String {
    if !value.is_empty() && value.chars().all(is_shell_safe) {
        return value.to_string();
    }
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Escape text for use inside an AppleScript string literal
pub fn applescript_escape(value: &str) -> String {
    value.replace('\\', r"\\").replace('"', "\\\"")
}
