use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::common::result::{OptionExt, RepoTabsResult};

/// ベースディレクトリ直下で見つかったGitリポジトリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// ディレクトリ名
    pub name: String,

    /// リポジトリの絶対パス
    pub path: PathBuf,
}

impl Repository {
    /// 新しいRepositoryインスタンスを作成
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// パスの最後の要素を名前としてRepositoryを作成
    pub fn from_path(path: impl AsRef<Path>) -> RepoTabsResult<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .ok_or_internal_error(format!("Path has no file name: {}", path.display()))?
            .to_string_lossy()
            .into_owned();
        Ok(Self::new(name, path))
    }

    /// 表示用のパス文字列
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}
