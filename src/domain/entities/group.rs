use super::repository::Repository;

/// 1つのタブにまとめて開くリポジトリのグループ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryGroup {
    /// 実行内でのグループ番号（0始まり）
    pub index: usize,

    /// グループに含まれるリポジトリ（順序付き）
    pub repositories: Vec<Repository>,
}

impl RepositoryGroup {
    pub fn new(index: usize, repositories: Vec<Repository>) -> Self {
        Self {
            index,
            repositories,
        }
    }

    /// 最初のグループは新しいウィンドウで開く
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.repositories.iter().map(|r| r.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_first_flag() {
        let repos = vec![Repository::new("a", "/base/a")];
        assert!(RepositoryGroup::new(0, repos.clone()).is_first());
        assert!(!RepositoryGroup::new(1, repos).is_first());
    }

    #[test]
    fn test_group_names() {
        let group = RepositoryGroup::new(
            0,
            vec![Repository::new("a", "/base/a"), Repository::new("b", "/base/b")],
        );
        assert_eq!(group.len(), 2);
        assert_eq!(group.names(), vec!["a", "b"]);
    }
}
