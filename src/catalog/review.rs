use serde::{Deserialize, Serialize};

use crate::entity::reviews;

/// 单个用户对游戏的评论
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i32,
    pub game_id: i32,
    pub user_id: i32,
    /// 评分，约定在 1-5 之间，由调用方保证
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: Option<i64>,
}

impl Review {
    /// 构造一条尚未持久化的评论（id 为 0）
    pub fn new(game_id: i32, user_id: i32, rating: i32, comment: Option<String>) -> Self {
        Self {
            id: 0,
            game_id,
            user_id,
            rating,
            comment,
            created_at: None,
        }
    }
}

impl From<reviews::Model> for Review {
    fn from(model: reviews::Model) -> Self {
        Self {
            id: model.id,
            game_id: model.game_id,
            user_id: model.user_id,
            rating: model.rating,
            comment: model.comment,
            created_at: model.created_at,
        }
    }
}
