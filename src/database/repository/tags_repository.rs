use crate::entity::prelude::*;
use crate::entity::{game_tags, tags};
use sea_orm::*;

/// 标签数据仓库
pub struct TagsRepository;

impl TagsRepository {
    // ==================== 标签 CRUD 操作 ====================

    /// 创建标签
    pub async fn create(db: &DatabaseConnection, name: String) -> Result<tags::Model, DbErr> {
        let tag = tags::ActiveModel {
            id: NotSet,
            name: Set(name),
        };

        tag.insert(db).await
    }

    /// 获取所有标签
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<tags::Model>, DbErr> {
        Tags::find().order_by_asc(tags::Column::Id).all(db).await
    }

    /// 根据名称查询标签
    pub async fn find_by_name(
        db: &DatabaseConnection,
        name: &str,
    ) -> Result<Option<tags::Model>, DbErr> {
        Tags::find()
            .filter(tags::Column::Name.eq(name))
            .one(db)
            .await
    }

    /// 统计给定 ID 中实际存在的标签数量
    pub async fn count_existing<C>(db: &C, ids: &[i32]) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        Tags::find()
            .filter(tags::Column::Id.is_in(ids.iter().copied()))
            .count(db)
            .await
    }

    // ==================== 游戏-标签关联操作 ====================

    /// 为游戏关联一组标签
    pub async fn attach_to_game<C>(db: &C, game_id: i32, tag_ids: &[i32]) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        if tag_ids.is_empty() {
            return Ok(0);
        }

        let links = tag_ids.iter().map(|tag_id| game_tags::ActiveModel {
            game_id: Set(game_id),
            tag_id: Set(*tag_id),
        });

        GameTags::insert_many(links).exec_without_returning(db).await
    }

    /// 获取游戏的所有标签（按 ID 升序）
    pub async fn find_by_game(
        db: &DatabaseConnection,
        game_id: i32,
    ) -> Result<Vec<tags::Model>, DbErr> {
        Tags::find()
            .inner_join(GameTags)
            .filter(game_tags::Column::GameId.eq(game_id))
            .order_by_asc(tags::Column::Id)
            .all(db)
            .await
    }
}
