//! 评分聚合
//!
//! 由游戏的完整评论集合重新计算平均分和评分分布。每次都是全量重建，
//! 不做增量累加。

mod aggregator;
mod distribution;

pub use aggregator::{RatingAggregator, average_of, distribution_of};
pub use distribution::RatingDistribution;

/// 合法评分的下限与上限（含）
pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

pub fn is_valid_rating(rating: i32) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}
