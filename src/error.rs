//! 统一错误类型
//!
//! 仓库层沿用 `DbErr`，服务层与纯计算组件统一返回 [`CatalogError`]。

use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// 评分超出 1-5 范围（调用方或数据完整性问题）
    #[error("评分超出范围: review {review_id:?} 的评分为 {rating}，应在 1-5 之间")]
    InvalidRating { review_id: Option<i32>, rating: i32 },

    /// 分页参数非法
    #[error("分页参数非法: page={page}, limit={limit}")]
    InvalidPagination { page: u64, limit: u64 },

    /// 实体不存在
    #[error("{entity} 不存在: {key}")]
    NotFound { entity: &'static str, key: String },

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    #[error("数据库错误: {0}")]
    Database(#[from] DbErr),
}

impl CatalogError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
