use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use crate::common::result::RepoTabsResult;
use crate::domain::entities::{app_config::AppConfig, repository::Repository};
use crate::infrastructure::filesystem::repository_scanner::{RepositoryFilter, RepositoryScanner};

/// リポジトリ探索の設定
#[derive(Debug, Clone)]
pub struct FindRepositoriesConfig {
    /// 探索するディレクトリ
    pub base_dir: PathBuf,

    /// 除外する名前の部分文字列
    pub exclude: Vec<String>,
}

impl FindRepositoriesConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            exclude: Vec::new(),
        }
    }

    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }
}

impl From<&AppConfig> for FindRepositoriesConfig {
    fn from(config: &AppConfig) -> Self {
        Self::new(config.base_dir.clone()).with_exclude(config.exclude.clone())
    }
}

/// 探索結果
#[derive(Debug, Clone, Serialize)]
pub struct FindResult {
    pub base_dir: PathBuf,
    pub repositories: Vec<Repository>,
}

impl FindResult {
    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.repositories.iter().map(|r| r.name.as_str()).collect()
    }
}

/// ベースディレクトリ直下のGitリポジトリを探すユースケース
pub struct FindRepositoriesUseCase {
    config: FindRepositoriesConfig,
}

impl FindRepositoriesUseCase {
    pub fn new(config: FindRepositoriesConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> RepoTabsResult<FindResult> {
        let scanner = RepositoryScanner::new(RepositoryFilter::new(self.config.exclude.clone()));
        let repositories = scanner.find_repositories(&self.config.base_dir)?;

        info!(
            "Found {} repositories in {}",
            repositories.len(),
            self.config.base_dir.display()
        );

        Ok(FindResult {
            base_dir: self.config.base_dir.clone(),
            repositories,
        })
    }
}
