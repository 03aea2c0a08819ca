use tracing::{info, warn};

use crate::application::services::grouping_service::GroupingService;
use crate::common::result::RepoTabsResult;
use crate::domain::entities::{app_config::AppConfig, repository::Repository};
use crate::infrastructure::terminal::TerminalDriver;

/// ターミナルでリポジトリを開く際の設定
#[derive(Debug, Clone)]
pub struct OpenRepositoriesConfig {
    /// タブあたりのペイン数
    pub group_size: usize,

    /// グループが失敗しても残りを開き続けるか
    pub continue_on_error: bool,

    /// スクリプトを生成するだけで実行しない
    pub dry_run: bool,
}

impl Default for OpenRepositoriesConfig {
    fn default() -> Self {
        Self {
            group_size: 4,
            continue_on_error: false,
            dry_run: false,
        }
    }
}

impl OpenRepositoriesConfig {
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl From<&AppConfig> for OpenRepositoriesConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            group_size: config.group_size,
            continue_on_error: config.continue_on_error,
            dry_run: false,
        }
    }
}

/// 開けなかったグループ
#[derive(Debug, Clone)]
pub struct GroupFailure {
    /// 0始まりのグループ番号
    pub index: usize,
    pub repositories: Vec<String>,
    pub error_message: String,
    pub exit_code: Option<i32>,
}

/// 実行結果
#[derive(Debug, Clone, Default)]
pub struct OpenResult {
    pub groups_opened: usize,
    pub repositories_opened: usize,
    pub failures: Vec<GroupFailure>,
    /// dry-run時に生成したスクリプト（グループ順）
    pub scripts: Vec<String>,
}

impl OpenResult {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// リポジトリをグループごとにタブ・ペインへ開くユースケース
///
/// グループは1つずつ順番に処理し、前のブリッジ呼び出しが終わるまで
/// 次のグループには進まない。
pub struct OpenRepositoriesUseCase {
    config: OpenRepositoriesConfig,
    driver: TerminalDriver,
}

impl OpenRepositoriesUseCase {
    pub fn new(config: OpenRepositoriesConfig, driver: TerminalDriver) -> Self {
        Self { config, driver }
    }

    pub async fn execute(&self, repositories: Vec<Repository>) -> RepoTabsResult<OpenResult> {
        let grouping = GroupingService::new(self.config.group_size)?;
        let mut result = OpenResult::default();

        for group in grouping.group(repositories) {
            if self.config.dry_run {
                result.scripts.push(self.driver.script_for(&group));
                continue;
            }

            match self.driver.open_group(&group).await {
                Ok(_) => {
                    result.groups_opened += 1;
                    result.repositories_opened += group.len();
                }
                Err(e) if self.config.continue_on_error => {
                    warn!("Group {} failed, continuing: {}", group.index + 1, e);
                    result.failures.push(GroupFailure {
                        index: group.index,
                        repositories: group.names().iter().map(|n| n.to_string()).collect(),
                        exit_code: e.exit_code(),
                        error_message: e.to_string(),
                    });
                }
                // Windows opened by earlier groups are left as they are
                Err(e) => return Err(e),
            }
        }

        info!(
            "Opened {} repositories in {} groups with {}",
            result.repositories_opened,
            result.groups_opened,
            self.driver.app()
        );
        Ok(result)
    }
}
