use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::common::error::RepoTabsError;
use crate::common::result::RepoTabsResult;
use crate::domain::value_objects::pane_layout::MAX_PANES;
use crate::domain::value_objects::terminal_app::TerminalApp;

/// 設定のデフォルト値
pub const DEFAULT_BASE_DIR: &str = "~/Desktop/work/hli";
pub const DEFAULT_GROUP_SIZE: usize = MAX_PANES;
pub const DEFAULT_EXCLUDE_PATTERN: &str = "helm-charts";
pub const DEFAULT_BRIDGE_COMMAND: &str = "osascript";

/// repotabs.yaml設定ファイルの構造
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    /// リポジトリを探すディレクトリ（`~`は展開される）
    pub base_dir: PathBuf,

    /// タブあたりのペイン数
    #[validate(range(min = 1, max = 4))]
    pub group_size: usize,

    /// 名前にこれらの部分文字列を含むディレクトリは除外
    pub exclude: Vec<String>,

    /// 対象アプリケーション名（優先順）
    #[validate(length(min = 1))]
    pub app_names: Vec<TerminalApp>,

    /// インストール済みのアプリケーションを探すか
    pub resolve_app: bool,

    /// AppleScriptを実行するコマンド
    #[validate(length(min = 1))]
    pub bridge_command: String,

    /// グループの失敗後も続行するか
    pub continue_on_error: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            group_size: DEFAULT_GROUP_SIZE,
            exclude: vec![DEFAULT_EXCLUDE_PATTERN.to_string()],
            app_names: TerminalApp::default_candidates(),
            resolve_app: false,
            bridge_command: DEFAULT_BRIDGE_COMMAND.to_string(),
            continue_on_error: false,
        }
    }
}

/// コマンドラインや環境変数から与えられる上書き値
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_dir: Option<PathBuf>,
    pub group_size: Option<usize>,
    pub exclude: Vec<String>,
    pub app_names: Vec<TerminalApp>,
    pub resolve_app: bool,
    pub bridge_command: Option<String>,
    pub continue_on_error: bool,
}

impl AppConfig {
    /// 上書き値を適用する（リストは空でなければ置き換え、フラグは立っていれば有効化）
    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(base_dir) = overrides.base_dir {
            self.base_dir = base_dir;
        }
        if let Some(group_size) = overrides.group_size {
            self.group_size = group_size;
        }
        if !overrides.exclude.is_empty() {
            self.exclude = overrides.exclude;
        }
        if !overrides.app_names.is_empty() {
            self.app_names = overrides.app_names;
        }
        if let Some(bridge_command) = overrides.bridge_command {
            self.bridge_command = bridge_command;
        }
        self.resolve_app |= overrides.resolve_app;
        self.continue_on_error |= overrides.continue_on_error;
        self
    }

    /// 設定値を検証し、`~`を展開した設定を返す
    pub fn validated(mut self) -> RepoTabsResult<Self> {
        self.validate()?;

        // 空文字列はすべての名前にマッチしてしまう
        if let Some(pattern) = self.exclude.iter().find(|p| p.is_empty()) {
            return Err(RepoTabsError::validation_error(
                "exclude",
                "exclusion pattern must not be empty",
                Some(pattern.clone()),
            ));
        }

        self.base_dir = expand_home(&self.base_dir);
        Ok(self)
    }

    /// 優先順のアプリケーション候補
    pub fn terminal_apps(&self) -> &[TerminalApp] {
        &self.app_names
    }
}

/// 先頭の`~`をホームディレクトリに展開する
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) if rest.as_os_str().is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
