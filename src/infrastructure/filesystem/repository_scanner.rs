use path_clean::PathClean;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::common::error::RepoTabsError;
use crate::common::result::{RepoTabsResult, ResultExt};
use crate::domain::entities::repository::Repository;

/// Version control marker directory looked up in each child
pub const GIT_MARKER: &str = ".git";

/// Predicate deciding whether a directory entry is a repository to open
#[derive(Debug, Clone, Default)]
pub struct RepositoryFilter {
    exclude: Vec<String>,
}

impl RepositoryFilter {
    pub fn new(exclude: Vec<String>) -> Self {
        Self { exclude }
    }

    /// True if the name contains any exclusion substring
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|pattern| name.contains(pattern.as_str()))
    }

    pub fn matches(&self, name: &str, is_dir: bool, has_marker: bool) -> bool {
        is_dir && has_marker && !self.is_excluded(name)
    }
}

/// Scans the immediate children of a base directory for git repositories
#[derive(Debug, Clone, Default)]
pub struct RepositoryScanner {
    filter: RepositoryFilter,
}

impl RepositoryScanner {
    pub fn new(filter: RepositoryFilter) -> Self {
        Self { filter }
    }

    /// Find repositories directly under `base_dir`, sorted by name.
    ///
    /// A missing base directory yields an empty list. Errors while reading
    /// the directory, including a base that cannot be stat'ed, are returned
    /// to the caller.
    pub fn find_repositories(&self, base_dir: &Path) -> RepoTabsResult<Vec<Repository>> {
        let exists = base_dir.try_exists().with_filesystem_error(
            "Failed to access base directory",
            Some(base_dir.to_path_buf()),
        )?;
        if !exists {
            warn!("Base directory does not exist: {}", base_dir.display());
            return Ok(Vec::new());
        }
        if !base_dir.is_dir() {
            return Err(RepoTabsError::filesystem_error(
                format!("Base path is not a directory: {}", base_dir.display()),
                Some(base_dir.to_path_buf()),
            ));
        }

        let base_dir = absolute_path(base_dir)?;
        let mut repositories = Vec::new();

        for entry in WalkDir::new(&base_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let path = entry.path();

            // Path::is_dir follows symlinks, so linked checkouts qualify too
            let is_dir = path.is_dir();
            let has_marker = is_dir && path.join(GIT_MARKER).is_dir();

            if self.filter.matches(&name, is_dir, has_marker) {
                debug!("Found repository: {}", path.display());
                repositories.push(Repository::from_path(path)?);
            } else {
                debug!(
                    "Skipping {} (dir: {}, marker: {}, excluded: {})",
                    path.display(),
                    is_dir,
                    has_marker,
                    self.filter.is_excluded(&name)
                );
            }
        }

        Ok(repositories)
    }
}

/// Absolute form of `path` with `.` and `..` removed lexically
fn absolute_path(path: &Path) -> RepoTabsResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.clean());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path).clean())
        .with_filesystem_error("Failed to resolve current directory", None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn create_repo(base: &Path, name: &str) {
        fs::create_dir_all(base.join(name).join(GIT_MARKER)).unwrap();
    }

    fn names(repos: &[Repository]) -> Vec<&str> {
        repos.iter().map(|r| r.name.as_str()).collect()
    }

    fn default_scanner() -> RepositoryScanner {
        RepositoryScanner::new(RepositoryFilter::new(vec!["helm-charts".to_string()]))
    }

    #[test]
    fn test_filter_predicate() {
        let filter = RepositoryFilter::new(vec!["helm-charts".to_string()]);
        assert!(filter.matches("api", true, true));
        assert!(!filter.matches("api", false, true));
        assert!(!filter.matches("api", true, false));
        assert!(!filter.matches("helm-charts-x", true, true));
        assert!(!filter.matches("my-helm-charts", true, true));
        assert!(filter.matches("helm", true, true));
    }

    #[test]
    fn test_missing_base_dir_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");
        let repos = default_scanner().find_repositories(&missing).unwrap();
        assert!(repos.is_empty());
    }

    #[test]
    fn test_base_path_is_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        fs::write(&file, "x").unwrap();
        let result = default_scanner().find_repositories(&file);
        assert!(matches!(result, Err(RepoTabsError::FileSystemError { .. })));
    }

    #[test]
    fn test_finds_repositories_in_lexicographic_order() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        create_repo(base, "c");
        create_repo(base, "a");
        create_repo(base, "b");
        create_repo(base, "helm-charts-x");
        fs::create_dir(base.join("plain-dir")).unwrap();
        fs::write(base.join("notes.txt"), "not a repo").unwrap();

        let repos = default_scanner().find_repositories(base).unwrap();
        assert_eq!(names(&repos), vec!["a", "b", "c"]);
        assert_eq!(repos[0].path, base.join("a"));
        assert!(repos.iter().all(|r| r.path.is_absolute()));
    }

    #[test]
    fn test_git_file_is_not_a_marker() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        fs::create_dir(base.join("worktree")).unwrap();
        fs::write(base.join("worktree").join(GIT_MARKER), "gitdir: /elsewhere").unwrap();

        let repos = default_scanner().find_repositories(base).unwrap();
        assert!(repos.is_empty());
    }

    #[test]
    fn test_scan_is_repeatable() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        for name in ["one", "two", "three"] {
            create_repo(base, name);
        }
        let scanner = default_scanner();
        let first = scanner.find_repositories(base).unwrap();
        let second = scanner.find_repositories(base).unwrap();
        assert_eq!(first, second);
        assert_eq!(names(&first), vec!["one", "three", "two"]);
    }

    #[test]
    fn test_dot_components_are_removed() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("base");
        create_repo(&base, "a");
        fs::create_dir(base.join("sub")).unwrap();

        let dotted = base.join(".").join("sub").join("..");
        let repos = default_scanner().find_repositories(&dotted).unwrap();
        assert_eq!(names(&repos), vec!["a"]);
        assert_eq!(repos[0].path, base.join("a"));
    }

    #[test]
    fn test_relative_path_is_made_absolute() {
        let resolved = absolute_path(Path::new("./work/../work/api")).unwrap();
        assert!(resolved.is_absolute());
        assert_eq!(resolved, std::env::current_dir().unwrap().join("work").join("api"));
    }

    #[cfg(unix)]
    mod permissions {
        use super::*;
        use std::os::unix::fs::PermissionsExt;

        /// Set `dir` to mode 000 and restore it when dropped
        struct Locked<'a>(&'a Path);

        impl<'a> Locked<'a> {
            fn new(dir: &'a Path) -> Self {
                fs::set_permissions(dir, fs::Permissions::from_mode(0o000)).unwrap();
                Self(dir)
            }

            /// Permission bits are not enforced, e.g. when running as root
            fn is_bypassed(&self) -> bool {
                fs::read_dir(self.0).is_ok()
            }
        }

        impl Drop for Locked<'_> {
            fn drop(&mut self) {
                let _ = fs::set_permissions(self.0, fs::Permissions::from_mode(0o755));
            }
        }

        #[test]
        fn test_unreadable_base_dir_is_error() {
            let temp_dir = TempDir::new().unwrap();
            let base = temp_dir.path().join("base");
            create_repo(&base, "a");

            let locked = Locked::new(&base);
            if locked.is_bypassed() {
                return;
            }
            let result = default_scanner().find_repositories(&base);
            assert!(
                matches!(result, Err(RepoTabsError::FileSystemError { .. })),
                "unexpected result: {result:?}"
            );
        }

        #[test]
        fn test_base_dir_under_locked_parent_is_error() {
            let temp_dir = TempDir::new().unwrap();
            let parent = temp_dir.path().join("locked");
            let base = parent.join("base");
            create_repo(&base, "a");

            let locked = Locked::new(&parent);
            if locked.is_bypassed() {
                return;
            }
            let result = default_scanner().find_repositories(&base);
            assert!(
                matches!(result, Err(RepoTabsError::FileSystemError { .. })),
                "unexpected result: {result:?}"
            );
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_repository_is_included() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("base");
        fs::create_dir(&base).unwrap();
        create_repo(temp_dir.path(), "real");
        std::os::unix::fs::symlink(temp_dir.path().join("real"), base.join("linked")).unwrap();

        let repos = default_scanner().find_repositories(&base).unwrap();
        assert_eq!(names(&repos), vec!["linked"]);
    }
}
