//! 游戏数据仓库

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;

use crate::catalog::{Review, TagId, VideoGame};
use crate::entity::prelude::*;
use crate::entity::{game_tags, games, reviews};
use crate::rating::RatingDistribution;
use sea_orm::*;

/// 游戏数据仓库
pub struct GamesRepository;

impl GamesRepository {
    // ==================== 游戏 CRUD 操作 ====================

    /// 插入游戏基础数据，评分缓存初始化为空
    pub async fn insert<C>(
        db: &C,
        title: String,
        slug: String,
        description: String,
        release_date: Option<NaiveDate>,
        rating: Option<i32>,
    ) -> Result<games::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = chrono::Utc::now().timestamp();

        let game_active = games::ActiveModel {
            id: NotSet,
            title: Set(title),
            slug: Set(slug),
            description: Set(description),
            release_date: Set(release_date),
            rating: Set(rating),
            average_rating: Set(None),
            rating_distribution: Set(RatingDistribution::default()),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
        };

        game_active.insert(db).await
    }

    /// 写回评分缓存（平均分 + 评分分布）
    pub async fn update_aggregates<C>(db: &C, game: &VideoGame) -> Result<games::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let game_active = games::ActiveModel {
            id: Set(game.id),
            average_rating: Set(game.average_rating),
            rating_distribution: Set(game.rating_distribution),
            updated_at: Set(Some(chrono::Utc::now().timestamp())),
            ..Default::default()
        };

        game_active.update(db).await
    }

    /// 删除游戏（关联的标签与评论级联删除）
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<DeleteResult, DbErr> {
        Games::delete_by_id(id).exec(db).await
    }

    // ==================== 查询操作 ====================

    /// 根据 ID 查询游戏
    pub async fn find_by_id<C>(db: &C, id: i32) -> Result<Option<games::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Games::find_by_id(id).one(db).await
    }

    /// 根据 slug 查询游戏
    pub async fn find_by_slug(
        db: &DatabaseConnection,
        slug: &str,
    ) -> Result<Option<games::Model>, DbErr> {
        Games::find()
            .filter(games::Column::Slug.eq(slug))
            .one(db)
            .await
    }

    /// 检查 slug 是否已存在
    pub async fn exists_slug<C>(db: &C, slug: &str) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(Games::find()
            .filter(games::Column::Slug.eq(slug))
            .count(db)
            .await?
            > 0)
    }

    /// 获取游戏总数
    pub async fn count(db: &DatabaseConnection) -> Result<u64, DbErr> {
        Games::find().count(db).await
    }

    /// 加载单个游戏及其标签和全部评论
    pub async fn load_game<C>(db: &C, id: i32) -> Result<Option<VideoGame>, DbErr>
    where
        C: ConnectionTrait,
    {
        let Some(model) = Self::find_by_id(db, id).await? else {
            return Ok(None);
        };

        let tag_ids = GameTags::find()
            .filter(game_tags::Column::GameId.eq(id))
            .all(db)
            .await?
            .into_iter()
            .map(|link| link.tag_id);

        let reviews = Reviews::find()
            .filter(reviews::Column::GameId.eq(id))
            .order_by_asc(reviews::Column::Id)
            .all(db)
            .await?
            .into_iter()
            .map(Review::from)
            .collect();

        Ok(Some(VideoGame::from_model(model, tag_ids, reviews)))
    }

    /// 加载整个目录快照（按 ID 升序）
    ///
    /// 固定三次查询：游戏、标签关联、评论，然后在内存中按游戏分组，避免 N+1 查询。
    pub async fn load_catalog(db: &DatabaseConnection) -> Result<Vec<VideoGame>, DbErr> {
        let models = Games::find()
            .order_by_asc(games::Column::Id)
            .all(db)
            .await?;

        let mut tags_by_game: HashMap<i32, BTreeSet<TagId>> = HashMap::new();
        for link in GameTags::find().all(db).await? {
            tags_by_game
                .entry(link.game_id)
                .or_default()
                .insert(link.tag_id);
        }

        let mut reviews_by_game: HashMap<i32, Vec<Review>> = HashMap::new();
        for review in Reviews::find()
            .order_by_asc(reviews::Column::Id)
            .all(db)
            .await?
        {
            reviews_by_game
                .entry(review.game_id)
                .or_default()
                .push(Review::from(review));
        }

        let catalog: Vec<VideoGame> = models
            .into_iter()
            .map(|model| {
                let tags = tags_by_game.remove(&model.id).unwrap_or_default();
                let reviews = reviews_by_game.remove(&model.id).unwrap_or_default();
                VideoGame::from_model(model, tags, reviews)
            })
            .collect();

        log::debug!("目录快照已加载: {} 个游戏", catalog.len());
        Ok(catalog)
    }
}
