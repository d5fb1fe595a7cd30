use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Review;
use crate::entity::{games, tags};
use crate::rating::RatingDistribution;

pub type TagId = i32;

/// 标签（共享参考数据）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
}

impl From<tags::Model> for Tag {
    fn from(model: tags::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

/// 视频游戏
///
/// `average_rating` 与 `rating_distribution` 是由评论集合派生的缓存值，
/// 评论变化后需要调用 [`crate::rating::RatingAggregator`] 重新计算。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VideoGame {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub release_date: Option<NaiveDate>,
    /// 初始评分，与计算出的平均分无关
    pub rating: Option<i32>,
    pub tags: BTreeSet<TagId>,
    pub reviews: Vec<Review>,
    pub average_rating: Option<i32>,
    pub rating_distribution: RatingDistribution,
}

impl VideoGame {
    pub fn new(id: i32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = TagId>) -> Self {
        self.tags.extend(tags);
        self
    }

    /// 追加评论，不会自动刷新聚合值
    pub fn add_review(&mut self, review: Review) {
        self.reviews.push(review);
    }

    pub fn has_all_tags(&self, required: &BTreeSet<TagId>) -> bool {
        required.is_subset(&self.tags)
    }

    /// 由持久层模型组装
    pub fn from_model(
        model: games::Model,
        tags: impl IntoIterator<Item = TagId>,
        reviews: Vec<Review>,
    ) -> Self {
        Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            description: model.description,
            release_date: model.release_date,
            rating: model.rating,
            tags: tags.into_iter().collect(),
            reviews,
            average_rating: model.average_rating,
            rating_distribution: model.rating_distribution,
        }
    }
}
