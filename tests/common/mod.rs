//! Shared fixtures for the integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Separator the fake bridge writes after each received script
pub const SCRIPT_SEPARATOR: &str = "=====";

/// Create `<base>/<name>/.git`
pub fn create_repo(base: &Path, name: &str) -> PathBuf {
    let path = base.join(name);
    fs::create_dir_all(path.join(".git")).unwrap();
    path
}

/// Create a base directory populated with the given repositories
pub fn workspace_with_repos(temp_dir: &TempDir, names: &[&str]) -> PathBuf {
    let base = temp_dir.path().join("work");
    fs::create_dir_all(&base).unwrap();
    for name in names {
        create_repo(&base, name);
    }
    base
}

/// The binary with a clean environment: no user config, no env overrides
pub fn repotabs(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("repotabs").unwrap();
    cmd.env("HOME", home)
        .env_remove("REPOTABS_CONFIG")
        .env_remove("REPOTABS_BASE_DIR")
        .env_remove("REPOTABS_BRIDGE")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

/// A stand-in for `osascript` that logs each script it receives.
///
/// The call numbered `fail_on` (1-based) exits with status 1; 0 never fails.
#[cfg(unix)]
pub struct FakeBridge {
    pub program: PathBuf,
    pub log: PathBuf,
}

#[cfg(unix)]
impl FakeBridge {
    pub fn new(dir: &Path, fail_on: usize) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let program = dir.join("fake-osascript");
        let log = dir.join("bridge-calls.log");
        let script = format!(
            "#!/bin/sh\n\
             printf '%s\\n{sep}\\n' \"$2\" >> '{log}'\n\
             n=$(grep -c '^{sep}$' '{log}')\n\
             if [ \"$n\" -eq {fail_on} ]; then echo 'execution error: scripted failure' >&2; exit 1; fi\n\
             exit 0\n",
            sep = SCRIPT_SEPARATOR,
            log = log.display(),
            fail_on = fail_on,
        );
        fs::write(&program, script).unwrap();
        fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();

        Self { program, log }
    }

    /// Scripts received so far, in call order
    pub fn scripts(&self) -> Vec<String> {
        let Ok(content) = fs::read_to_string(&self.log) else {
            return Vec::new();
        };
        content
            .split(&format!("\n{}\n", SCRIPT_SEPARATOR))
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.to_string())
            .collect()
    }
}
