//! 数据传输对象 (DTO)
//!
//! 服务层输入输出的结构定义。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{Review, Tag, TagId, VideoGame};

/// 用于创建游戏的数据结构
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewGame {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub release_date: Option<NaiveDate>,
    pub rating: Option<i32>,
    #[serde(default)]
    pub tags: Vec<TagId>,
}

impl NewGame {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// 用户提交的评论
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewReview {
    pub game_id: i32,
    pub user_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
}

/// 评论及其作者
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewDetails {
    pub review: Review,
    pub username: String,
}

/// 游戏详情页数据
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameDetails {
    pub game: VideoGame,
    pub tags: Vec<Tag>,
    /// 按提交顺序排列，最新的在最后
    pub reviews: Vec<ReviewDetails>,
}

impl GameDetails {
    pub fn latest_review(&self) -> Option<&ReviewDetails> {
        self.reviews.last()
    }
}
