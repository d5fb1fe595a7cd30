use std::cmp::Ordering;

use super::pagination::{DEFAULT_LINK_RADIUS, Page, Pagination};
use super::query::{ListingFilter, ListingQuery, SortDirection, SortKey, Sorting};
use crate::catalog::VideoGame;
use crate::error::{CatalogError, CatalogResult};

/// 列表查询引擎
///
/// 只读、无状态：输入目录快照，输出一页结果。
#[derive(Debug, Clone, Copy)]
pub struct ListingQueryEngine {
    link_radius: u64,
}

impl Default for ListingQueryEngine {
    fn default() -> Self {
        Self::new(DEFAULT_LINK_RADIUS)
    }
}

impl ListingQueryEngine {
    pub fn new(link_radius: u64) -> Self {
        Self { link_radius }
    }

    /// 筛选、排序并截取当前页
    pub fn list(
        &self,
        games: impl IntoIterator<Item = VideoGame>,
        query: &ListingQuery,
    ) -> CatalogResult<Page<VideoGame>> {
        if query.page < 1 || query.limit < 1 {
            return Err(CatalogError::InvalidPagination {
                page: query.page,
                limit: query.limit,
            });
        }

        let mut matched: Vec<VideoGame> = games
            .into_iter()
            .filter(|game| matches_filter(game, &query.filter))
            .collect();

        matched.sort_by(|a, b| compare(a, b, &query.sorting));

        let pagination = Pagination::new(
            query.page,
            query.limit,
            matched.len() as u64,
            self.link_radius,
        );
        let (start, end) = pagination.window();
        let items: Vec<VideoGame> = matched.drain(start..end).collect();

        log::debug!(
            "列表查询: filter={:?}, sorting={:?}, page={}, limit={} -> {}/{}",
            query.filter,
            query.sorting,
            query.page,
            query.limit,
            items.len(),
            pagination.total
        );

        Ok(Page { items, pagination })
    }

    /// 仅统计匹配数量
    pub fn count<'a>(
        &self,
        games: impl IntoIterator<Item = &'a VideoGame>,
        filter: &ListingFilter,
    ) -> usize {
        games
            .into_iter()
            .filter(|game| matches_filter(game, filter))
            .count()
    }
}

fn matches_filter(game: &VideoGame, filter: &ListingFilter) -> bool {
    let search_ok = filter
        .search
        .as_deref()
        .is_none_or(|text| game.title.contains(text));

    search_ok && game.has_all_tags(&filter.tags)
}

/// 标题按字符串直接比较，"Game 1" < "Game 10" < "Game 2"；相同标题按 ID 升序
fn compare(a: &VideoGame, b: &VideoGame, sorting: &Sorting) -> Ordering {
    let direction = sorting.effective_direction();
    match sorting.key {
        SortKey::Default => apply(direction, a.id.cmp(&b.id)),
        SortKey::Title => apply(direction, a.title.cmp(&b.title)).then(a.id.cmp(&b.id)),
    }
}

fn apply(direction: SortDirection, ordering: Ordering) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
