//! 游戏列表查询
//!
//! 对目录做筛选（标题搜索 + 标签交集）、排序和分页，并生成分页链接。

mod engine;
mod pagination;
mod query;

pub use engine::ListingQueryEngine;
pub use pagination::{DEFAULT_LINK_RADIUS, Page, PageLink, PageLinkKind, Pagination};
pub use query::{
    DEFAULT_LIMIT, DEFAULT_PAGE, ListingFilter, ListingQuery, SortDirection, SortKey, Sorting,
};
