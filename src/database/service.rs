use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::catalog::{Review, Tag, VideoGame};
use crate::database::dto::{GameDetails, NewGame, NewReview, ReviewDetails};
use crate::database::repository::{
    games_repository::GamesRepository, reviews_repository::ReviewsRepository,
    tags_repository::TagsRepository, users_repository::UsersRepository,
};
use crate::entity::users;
use crate::error::{CatalogError, CatalogResult};
use crate::listing::{ListingQuery, ListingQueryEngine, Page};
use crate::rating::{RatingAggregator, is_valid_rating};
use crate::utils::slug::slugify;

// ==================== 游戏列表 ====================

/// 按筛选、排序、分页参数获取游戏列表
pub async fn list_games(
    db: &DatabaseConnection,
    engine: &ListingQueryEngine,
    query: &ListingQuery,
) -> CatalogResult<Page<VideoGame>> {
    let catalog = GamesRepository::load_catalog(db).await?;
    engine.list(catalog, query)
}

/// 获取游戏总数
pub async fn count_games(db: &DatabaseConnection) -> CatalogResult<u64> {
    Ok(GamesRepository::count(db).await?)
}

// ==================== 游戏数据 ====================

/// 创建游戏并关联标签，slug 由标题生成，重复时追加序号
pub async fn create_game(db: &DatabaseConnection, game: NewGame) -> CatalogResult<VideoGame> {
    let txn = db.begin().await?;

    let existing = TagsRepository::count_existing(&txn, &game.tags).await?;
    let mut requested = game.tags.clone();
    requested.sort_unstable();
    requested.dedup();
    if existing != requested.len() as u64 {
        return Err(CatalogError::not_found("Tag", format!("{:?}", requested)));
    }

    let base = slugify(&game.title);
    let mut slug = base.clone();
    let mut suffix = 1;
    while GamesRepository::exists_slug(&txn, &slug).await? {
        suffix += 1;
        slug = format!("{}-{}", base, suffix);
    }

    let model = GamesRepository::insert(
        &txn,
        game.title,
        slug,
        game.description,
        game.release_date,
        game.rating,
    )
    .await?;
    TagsRepository::attach_to_game(&txn, model.id, &requested).await?;

    txn.commit().await?;
    log::info!("游戏已创建: {} ({})", model.title, model.slug);

    Ok(VideoGame::from_model(model, requested, Vec::new()))
}

/// 游戏详情：游戏本身、标签、按提交顺序排列的评论及作者
pub async fn show_game(db: &DatabaseConnection, slug: &str) -> CatalogResult<GameDetails> {
    let model = GamesRepository::find_by_slug(db, slug)
        .await?
        .ok_or_else(|| CatalogError::not_found("VideoGame", slug))?;

    let game = GamesRepository::load_game(db, model.id)
        .await?
        .ok_or_else(|| CatalogError::not_found("VideoGame", slug))?;

    let tags: Vec<Tag> = TagsRepository::find_by_game(db, game.id)
        .await?
        .into_iter()
        .map(Tag::from)
        .collect();

    let user_ids: Vec<i32> = game.reviews.iter().map(|review| review.user_id).collect();
    let usernames: HashMap<i32, String> = UsersRepository::find_by_ids(db, user_ids)
        .await?
        .into_iter()
        .map(|user| (user.id, user.username))
        .collect();

    let reviews = game
        .reviews
        .iter()
        .cloned()
        .map(|review| ReviewDetails {
            username: usernames.get(&review.user_id).cloned().unwrap_or_default(),
            review,
        })
        .collect();

    Ok(GameDetails {
        game,
        tags,
        reviews,
    })
}

// ==================== 评论 ====================

/// 提交评论并刷新游戏的评分缓存
///
/// 在同一事务中：插入评论，重新读取完整评论集合，重算平均分与评分分布，写回后提交。
/// 任一步骤失败则整体回滚。
pub async fn submit_review(db: &DatabaseConnection, review: NewReview) -> CatalogResult<VideoGame> {
    if !is_valid_rating(review.rating) {
        return Err(CatalogError::InvalidRating {
            review_id: None,
            rating: review.rating,
        });
    }

    let txn = db.begin().await?;

    if GamesRepository::find_by_id(&txn, review.game_id)
        .await?
        .is_none()
    {
        return Err(CatalogError::not_found("VideoGame", review.game_id));
    }
    if UsersRepository::find_by_id(&txn, review.user_id)
        .await?
        .is_none()
    {
        return Err(CatalogError::not_found("User", review.user_id));
    }

    let inserted = ReviewsRepository::insert(
        &txn,
        review.game_id,
        review.user_id,
        review.rating,
        review.comment,
    )
    .await?;

    let mut game = GamesRepository::load_game(&txn, review.game_id)
        .await?
        .ok_or_else(|| CatalogError::not_found("VideoGame", review.game_id))?;

    RatingAggregator::refresh(&mut game)?;
    GamesRepository::update_aggregates(&txn, &game).await?;

    txn.commit().await?;
    log::info!(
        "评论 {} 已提交: 游戏 {} 平均分 {:?}",
        inserted.id,
        game.id,
        game.average_rating
    );

    Ok(game)
}

/// 重新计算所有游戏的评分缓存
pub async fn recompute_all_ratings(db: &DatabaseConnection) -> CatalogResult<usize> {
    let catalog = GamesRepository::load_catalog(db).await?;
    let txn = db.begin().await?;
    let mut updated = 0;

    for mut game in catalog {
        RatingAggregator::refresh(&mut game)?;
        GamesRepository::update_aggregates(&txn, &game).await?;
        updated += 1;
    }

    txn.commit().await?;
    log::info!("已重新计算 {} 个游戏的评分", updated);
    Ok(updated)
}

/// 获取游戏的评论（未附带作者）
pub async fn get_reviews(db: &DatabaseConnection, game_id: i32) -> CatalogResult<Vec<Review>> {
    Ok(ReviewsRepository::find_by_game(db, game_id)
        .await?
        .into_iter()
        .map(Review::from)
        .collect())
}

// ==================== 标签与用户 ====================

/// 创建标签
pub async fn create_tag(db: &DatabaseConnection, name: &str) -> CatalogResult<Tag> {
    Ok(TagsRepository::create(db, name.to_string()).await?.into())
}

/// 获取所有标签
pub async fn find_all_tags(db: &DatabaseConnection) -> CatalogResult<Vec<Tag>> {
    Ok(TagsRepository::find_all(db)
        .await?
        .into_iter()
        .map(Tag::from)
        .collect())
}

/// 注册评论作者（已存在时直接返回）
pub async fn register_user(
    db: &DatabaseConnection,
    username: &str,
    email: Option<String>,
) -> CatalogResult<users::Model> {
    Ok(UsersRepository::find_or_create(db, username, email).await?)
}
