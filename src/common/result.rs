use crate::common::error::RepoTabsError;

/// repotabs全体で使用するResult型のエイリアス
///
/// # Examples
///
/// ```
/// use repotabs::common::result::RepoTabsResult;
/// use repotabs::common::error::RepoTabsError;
///
/// fn example_function() -> RepoTabsResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> RepoTabsResult<()> {
///     Err(RepoTabsError::internal_error("Something went wrong"))
/// }
/// ```
pub type RepoTabsResult<T> = Result<T, RepoTabsError>;

/// OptionをRepoTabsResultに変換するためのヘルパー
pub trait OptionExt<T> {
    /// Noneの場合はInternalErrorを返す
    ///
    /// ```
    /// use repotabs::common::result::{RepoTabsResult, OptionExt};
    ///
    /// let none_value: Option<String> = None;
    /// let result: RepoTabsResult<String> = none_value.ok_or_internal_error("Value not found");
    /// assert!(result.is_err());
    /// ```
    fn ok_or_internal_error(self, message: impl Into<String>) -> RepoTabsResult<T>;

    /// Noneの場合はValidationErrorを返す
    fn ok_or_validation_error(
        self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> RepoTabsResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_internal_error(self, message: impl Into<String>) -> RepoTabsResult<T> {
        self.ok_or_else(|| RepoTabsError::internal_error(message))
    }

    fn ok_or_validation_error(
        self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> RepoTabsResult<T> {
        self.ok_or_else(|| RepoTabsError::validation_error(field, message, None))
    }
}

/// 標準のResult型をRepoTabsResultに変換するためのヘルパー
pub trait ResultExt<T, E> {
    /// ファイルシステムエラーとしてRepoTabsResultに変換
    ///
    /// ```
    /// use repotabs::common::result::{RepoTabsResult, ResultExt};
    ///
    /// let result: Result<String, std::io::Error> = Err(std::io::Error::new(
    ///     std::io::ErrorKind::NotFound, "file not found"
    /// ));
    /// let converted: RepoTabsResult<String> = result.with_filesystem_error("read failed", None);
    /// assert!(converted.is_err());
    /// ```
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> RepoTabsResult<T>
    where
        E: Into<std::io::Error>;

    /// 設定エラーとしてRepoTabsResultに変換
    fn with_config_error(self, message: impl Into<String>) -> RepoTabsResult<T>
    where
        E: std::error::Error + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> RepoTabsResult<T>
    where
        E: Into<std::io::Error>,
    {
        self.map_err(|e| RepoTabsError::filesystem_error_with_source(message, path, e.into()))
    }

    fn with_config_error(self, message: impl Into<String>) -> RepoTabsResult<T>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.map_err(|e| RepoTabsError::config_error_with_source(message, e))
    }
}
