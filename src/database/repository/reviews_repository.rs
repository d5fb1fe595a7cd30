use crate::entity::prelude::*;
use crate::entity::reviews;
use sea_orm::*;

/// 评论数据仓库
pub struct ReviewsRepository;

impl ReviewsRepository {
    /// 插入评论
    pub async fn insert<C>(
        db: &C,
        game_id: i32,
        user_id: i32,
        rating: i32,
        comment: Option<String>,
    ) -> Result<reviews::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let review = reviews::ActiveModel {
            id: NotSet,
            game_id: Set(game_id),
            user_id: Set(user_id),
            rating: Set(rating),
            comment: Set(comment),
            created_at: Set(Some(chrono::Utc::now().timestamp())),
        };

        review.insert(db).await
    }

    /// 获取游戏的全部评论（按提交顺序）
    pub async fn find_by_game(
        db: &DatabaseConnection,
        game_id: i32,
    ) -> Result<Vec<reviews::Model>, DbErr> {
        Reviews::find()
            .filter(reviews::Column::GameId.eq(game_id))
            .order_by_asc(reviews::Column::Id)
            .all(db)
            .await
    }

    /// 获取游戏的评论数量
    pub async fn count_by_game(db: &DatabaseConnection, game_id: i32) -> Result<u64, DbErr> {
        Reviews::find()
            .filter(reviews::Column::GameId.eq(game_id))
            .count(db)
            .await
    }
}
