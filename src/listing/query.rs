use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::TagId;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// 排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// 按入库顺序（ID）
    #[default]
    Default,
    /// 按标题字符串逐字符比较（非自然排序）
    Title,
}

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "title" => Ok(Self::Title),
            other => Err(format!("无效的排序字段: {}", other)),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ascending" | "asc" => Ok(Self::Ascending),
            "descending" | "desc" => Ok(Self::Descending),
            other => Err(format!("无效的排序方向: {}", other)),
        }
    }
}

/// 排序选项
///
/// 未指定方向时：默认排序为升序，按标题排序为降序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sorting {
    pub key: SortKey,
    pub direction: Option<SortDirection>,
}

impl Sorting {
    pub fn new(key: SortKey, direction: Option<SortDirection>) -> Self {
        Self { key, direction }
    }

    pub fn effective_direction(&self) -> SortDirection {
        self.direction.unwrap_or(match self.key {
            SortKey::Default => SortDirection::Ascending,
            SortKey::Title => SortDirection::Descending,
        })
    }
}

/// 筛选条件，多个条件之间为 AND 关系
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListingFilter {
    /// 标题子串（区分大小写），`None` 表示不过滤
    pub search: Option<String>,
    /// 游戏必须同时拥有的标签，空集合表示不过滤
    pub tags: BTreeSet<TagId>,
}

impl ListingFilter {
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn tags(mut self, tags: impl IntoIterator<Item = TagId>) -> Self {
        self.tags.extend(tags);
        self
    }
}

/// 列表查询参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    pub filter: ListingFilter,
    pub sorting: Sorting,
    pub page: u64,
    pub limit: u64,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            filter: ListingFilter::default(),
            sorting: Sorting::default(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListingQuery {
    pub fn with_limit(limit: u64) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }

    pub fn page(mut self, page: u64) -> Self {
        self.page = page;
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    pub fn sorting(mut self, key: SortKey, direction: Option<SortDirection>) -> Self {
        self.sorting = Sorting::new(key, direction);
        self
    }

    pub fn filter(mut self, filter: ListingFilter) -> Self {
        self.filter = filter;
        self
    }

    /// 从 URL 查询字符串解析
    ///
    /// 支持 `page`、`limit`、`sorting`、`direction`、`filter[search]`、
    /// `filter[tags][]`（或 `filter[tags][0]` 形式）。
    /// 非法或为 0 的页码/条数回落到默认值，无法识别的排序字段回落到默认排序，
    /// 无法解析的标签 ID 直接忽略。
    pub fn from_query_str(query: &str) -> Self {
        Self::from_query_str_with_limit(query, DEFAULT_LIMIT)
    }

    /// 同 [`Self::from_query_str`]，但未指定 `limit` 时使用 `default_limit`
    pub fn from_query_str_with_limit(query: &str, default_limit: u64) -> Self {
        let query = query.trim_start_matches('?');
        let default_limit = default_limit.max(1);
        let mut parsed = Self::with_limit(default_limit);

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let trimmed = value.trim();
            match key.as_ref() {
                "page" => parsed.page = parse_positive(trimmed).unwrap_or(DEFAULT_PAGE),
                "limit" => parsed.limit = parse_positive(trimmed).unwrap_or(default_limit),
                "sorting" => {
                    parsed.sorting.key = trimmed.parse().unwrap_or_else(|e| {
                        log::debug!("{}，使用默认排序", e);
                        SortKey::Default
                    })
                }
                "direction" => parsed.sorting.direction = trimmed.parse().ok(),
                // 搜索词原样保留，按子串精确匹配
                "filter[search]" => {
                    parsed.filter.search = (!value.is_empty()).then(|| value.to_string())
                }
                k if k.starts_with("filter[tags][") => match trimmed.parse::<TagId>() {
                    Ok(tag) => {
                        parsed.filter.tags.insert(tag);
                    }
                    Err(_) => log::debug!("忽略无法解析的标签 ID: {}", trimmed),
                },
                other => log::trace!("忽略未知查询参数: {}", other),
            }
        }

        parsed
    }
}

fn parse_positive(value: &str) -> Option<u64> {
    value.parse::<u64>().ok().filter(|v| *v > 0)
}
