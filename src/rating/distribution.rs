//! 评分分布 JSON 结构体
//!
//! 存储在 games.rating_distribution 列中，记录 1-5 分各自的评论数量。

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, FromJsonQueryResult,
)]
#[serde(default)]
pub struct RatingDistribution {
    pub one: u32,
    pub two: u32,
    pub three: u32,
    pub four: u32,
    pub five: u32,
}

impl RatingDistribution {
    /// 对应评分的计数加一，评分不在 1-5 之间时返回错误
    pub fn increase(&mut self, rating: i32) -> CatalogResult<()> {
        let counter = match rating {
            1 => &mut self.one,
            2 => &mut self.two,
            3 => &mut self.three,
            4 => &mut self.four,
            5 => &mut self.five,
            _ => {
                return Err(CatalogError::InvalidRating {
                    review_id: None,
                    rating,
                });
            }
        };
        *counter += 1;
        Ok(())
    }

    /// 获取某个评分的数量，非法评分返回 0
    pub fn count(&self, rating: i32) -> u32 {
        match rating {
            1 => self.one,
            2 => self.two,
            3 => self.three,
            4 => self.four,
            5 => self.five,
            _ => 0,
        }
    }

    /// 按 1-5 顺序返回所有计数
    pub fn as_array(&self) -> [u32; 5] {
        [self.one, self.two, self.three, self.four, self.five]
    }

    pub fn total(&self) -> u32 {
        self.as_array().iter().sum()
    }
}
