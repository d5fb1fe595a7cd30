use serde::{Deserialize, Serialize};

/// 页码窗口半径：当前页前后各显示的页码数
pub const DEFAULT_LINK_RADIUS: u64 = 3;

/// 分页链接类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLinkKind {
    First,
    Previous,
    Number,
    Next,
    Last,
}

/// 单个分页链接
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub kind: PageLinkKind,
    /// 链接指向的页码
    pub page: u64,
    pub active: bool,
}

impl PageLink {
    fn new(kind: PageLinkKind, page: u64) -> Self {
        Self {
            kind,
            page,
            active: false,
        }
    }

    pub fn label(&self) -> String {
        match self.kind {
            PageLinkKind::First => "First page".to_string(),
            PageLinkKind::Previous => "Previous".to_string(),
            PageLinkKind::Number => self.page.to_string(),
            PageLinkKind::Next => "Next".to_string(),
            PageLinkKind::Last => "Last page".to_string(),
        }
    }
}

/// 分页元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    /// 当前页第一条的序号（从 1 开始），当前页为空时为 0
    pub offset_from: u64,
    /// 当前页最后一条的序号，当前页为空时为 0
    pub offset_to: u64,
    /// 仅当总页数大于 1 时存在
    pub links: Option<Vec<PageLink>>,
}

impl Pagination {
    /// `page` 与 `limit` 必须大于 0，由调用方保证
    pub fn new(page: u64, limit: u64, total: u64, link_radius: u64) -> Self {
        let total_pages = total.div_ceil(limit);
        let start = page.saturating_sub(1).saturating_mul(limit);

        let (offset_from, offset_to) = if start >= total {
            (0, 0)
        } else {
            (start + 1, page.saturating_mul(limit).min(total))
        };

        // 超出末页时按末页生成链接，保证所有链接都指向存在的页
        let links = (total_pages > 1)
            .then(|| build_links(page.min(total_pages), total_pages, link_radius));

        Self {
            page,
            limit,
            total,
            total_pages,
            offset_from,
            offset_to,
            links,
        }
    }

    /// 当前页的切片范围 `[start, end)`
    pub fn window(&self) -> (usize, usize) {
        if self.offset_from == 0 {
            return (0, 0);
        }
        ((self.offset_from - 1) as usize, self.offset_to as usize)
    }

    /// 窗口中的页码
    pub fn page_numbers(&self) -> Vec<u64> {
        self.links
            .iter()
            .flatten()
            .filter(|link| link.kind == PageLinkKind::Number)
            .map(|link| link.page)
            .collect()
    }
}

/// 生成分页链接
///
/// 页码窗口为 `[max(1, page - radius), min(total_pages, page + radius)]`，
/// `page > 1` 时前置“首页/上一页”，`page < total_pages` 时追加“下一页/末页”。
fn build_links(page: u64, total_pages: u64, radius: u64) -> Vec<PageLink> {
    let mut links = Vec::new();

    if page > 1 {
        links.push(PageLink::new(PageLinkKind::First, 1));
        links.push(PageLink::new(PageLinkKind::Previous, page - 1));
    }

    let low = page.saturating_sub(radius).max(1);
    let high = page.saturating_add(radius).min(total_pages);
    for number in low..=high {
        links.push(PageLink {
            active: number == page,
            ..PageLink::new(PageLinkKind::Number, number)
        });
    }

    if page < total_pages {
        links.push(PageLink::new(PageLinkKind::Next, page + 1));
        links.push(PageLink::new(PageLinkKind::Last, total_pages));
    }

    links
}

/// 一页结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    /// 列表摘要文本
    pub fn summary(&self) -> String {
        format!(
            "Showing {} video games from {} to {} of {} video games",
            self.items.len(),
            self.pagination.offset_from,
            self.pagination.offset_to,
            self.pagination.total
        )
    }
}
