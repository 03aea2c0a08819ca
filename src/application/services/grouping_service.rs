use std::iter::FusedIterator;

use crate::common::error::RepoTabsError;
use crate::common::result::RepoTabsResult;
use crate::domain::entities::{group::RepositoryGroup, repository::Repository};
use crate::domain::value_objects::pane_layout::MAX_PANES;

/// 固定サイズの連続したチャンクを順に返すイテレータ
///
/// 最後のチャンク以外は必ず`size`要素、最後は残り（1..=size）。
/// 空のチャンクは返さない。
#[derive(Debug, Clone)]
pub struct Chunks<I: Iterator> {
    inner: I,
    size: usize,
}

/// `iter`を`size`要素ずつのチャンクに分割する
///
/// # Panics
///
/// `size`が0の場合（`slice::chunks`と同じ）
pub fn chunked<I: IntoIterator>(iter: I, size: usize) -> Chunks<I::IntoIter> {
    assert!(size > 0, "chunk size must be non-zero");
    Chunks {
        inner: iter.into_iter(),
        size,
    }
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk: Vec<I::Item> = self.inner.by_ref().take(self.size).collect();
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        let div_ceil = |n: usize| (n + self.size - 1) / self.size;
        (div_ceil(lower), upper.map(div_ceil))
    }
}

impl<I: FusedIterator> FusedIterator for Chunks<I> {}

/// リポジトリ列をタブ単位のグループに分けるサービス
#[derive(Debug, Clone, Copy)]
pub struct GroupingService {
    group_size: usize,
}

impl GroupingService {
    /// グループサイズは1..=4
    pub fn new(group_size: usize) -> RepoTabsResult<Self> {
        if group_size == 0 || group_size > MAX_PANES {
            return Err(RepoTabsError::validation_error(
                "group_size",
                format!("must be between 1 and {}", MAX_PANES),
                Some(group_size.to_string()),
            ));
        }
        Ok(Self { group_size })
    }

    /// 番号付きのグループを遅延生成する
    pub fn group<I>(&self, repositories: I) -> impl Iterator<Item = RepositoryGroup>
    where
        I: IntoIterator<Item = Repository>,
    {
        chunked(repositories, self.group_size)
            .enumerate()
            .map(|(index, repos)| RepositoryGroup::new(index, repos))
    }

    /// グループ数（ceil(N / size)）
    pub fn group_count(&self, repository_count: usize) -> usize {
        (repository_count + self.group_size - 1) / self.group_size
    }
}
