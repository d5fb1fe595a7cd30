mod common;

use common::{GAME_COUNT, TAG_COUNT, fixture_tags, game_titles};
use game_catalog_lib::database::connection::{
    close_connection, connect_in_memory, establish_connection, run_migrations,
};
use game_catalog_lib::database::dto::{NewGame, NewReview};
use game_catalog_lib::database::repository::games_repository::GamesRepository;
use game_catalog_lib::database::repository::reviews_repository::ReviewsRepository;
use game_catalog_lib::database::repository::tags_repository::TagsRepository;
use game_catalog_lib::database as service;
use game_catalog_lib::{
    CatalogError, DatabaseTarget, ListingQuery, ListingQueryEngine, RatingDistribution,
};
use sea_orm::DatabaseConnection;

async fn empty_db() -> DatabaseConnection {
    let db = connect_in_memory().await.unwrap();
    run_migrations(&db).await.unwrap();
    db
}

/// 20 个标签、5 个用户、50 个游戏 "Jeu vidéo 0".."Jeu vidéo 49"
async fn seeded_db() -> DatabaseConnection {
    let db = empty_db().await;

    for index in 1..=TAG_COUNT {
        service::create_tag(&db, &format!("Tag {}", index))
            .await
            .unwrap();
    }
    for index in 0..5 {
        service::register_user(
            &db,
            &format!("user+{}", index),
            Some(format!("user+{}@email.com", index)),
        )
        .await
        .unwrap();
    }
    for index in 0..GAME_COUNT {
        service::create_game(
            &db,
            NewGame {
                title: format!("Jeu vidéo {}", index),
                description: "Lorem ipsum".to_string(),
                rating: Some((index % 5) as i32 + 1),
                tags: fixture_tags(index),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    }

    db
}

async fn list(db: &DatabaseConnection, query: &str) -> Vec<String> {
    service::list_games(
        db,
        &ListingQueryEngine::default(),
        &ListingQuery::from_query_str(query),
    )
    .await
    .unwrap()
    .items
    .into_iter()
    .map(|game| game.title)
    .collect()
}

#[tokio::test]
async fn lists_seeded_catalog() {
    let db = seeded_db().await;

    assert_eq!(service::count_games(&db).await.unwrap(), 50);
    assert_eq!(list(&db, "").await, game_titles("Jeu vidéo", 0..10));
    assert_eq!(
        list(&db, "sorting=Title").await,
        game_titles("Jeu vidéo", [9, 8, 7, 6, 5, 49, 48, 47, 46, 45])
    );
    assert_eq!(
        list(&db, "filter[search]=Jeu+vid%C3%A9o+49").await,
        ["Jeu vidéo 49"]
    );
    assert_eq!(
        list(&db, "filter[tags][]=1&filter[tags][]=2&filter[tags][]=3").await,
        game_titles("Jeu vidéo", [0, 18, 19, 20, 38, 39, 40])
    );
}

#[tokio::test]
async fn listing_reports_pagination() {
    let db = seeded_db().await;

    let page = service::list_games(
        &db,
        &ListingQueryEngine::default(),
        &ListingQuery::from_query_str("page=2"),
    )
    .await
    .unwrap();

    assert_eq!(page.pagination.total, 50);
    assert_eq!(page.pagination.page_numbers(), [1, 2, 3, 4, 5]);

    let err = service::list_games(
        &db,
        &ListingQueryEngine::default(),
        &ListingQuery::default().page(0),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidPagination { .. }));
}

#[tokio::test]
async fn games_get_slugs_and_tags() {
    let db = seeded_db().await;

    let details = service::show_game(&db, "jeu-video-0").await.unwrap();
    assert_eq!(details.game.title, "Jeu vidéo 0");
    assert_eq!(details.game.rating, Some(1));
    let tag_names: Vec<&str> = details.tags.iter().map(|tag| tag.name.as_str()).collect();
    assert_eq!(tag_names, ["Tag 1", "Tag 2", "Tag 3", "Tag 4", "Tag 5"]);
    assert!(details.reviews.is_empty());
    assert_eq!(details.game.average_rating, None);

    let duplicate = service::create_game(&db, NewGame::titled("Jeu vidéo 0"))
        .await
        .unwrap();
    assert_eq!(duplicate.slug, "jeu-video-0-2");

    assert!(matches!(
        service::show_game(&db, "missing").await,
        Err(CatalogError::NotFound { .. })
    ));
}

#[tokio::test]
async fn creating_a_game_with_unknown_tag_fails() {
    let db = seeded_db().await;

    let err = service::create_game(
        &db,
        NewGame {
            tags: vec![1, 99],
            ..NewGame::titled("Orphan")
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CatalogError::NotFound { entity: "Tag", .. }));
    assert_eq!(service::count_games(&db).await.unwrap(), 50);
    assert!(TagsRepository::find_by_name(&db, "Tag 20").await.unwrap().is_some());
}

#[tokio::test]
async fn submitting_reviews_refreshes_aggregates() {
    let db = seeded_db().await;
    let user = service::register_user(&db, "user+0", None).await.unwrap();
    let game = GamesRepository::find_by_slug(&db, "jeu-video-49")
        .await
        .unwrap()
        .unwrap();

    let updated = service::submit_review(
        &db,
        NewReview {
            game_id: game.id,
            user_id: user.id,
            rating: 5,
            comment: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.average_rating, Some(5));

    let updated = service::submit_review(
        &db,
        NewReview {
            game_id: game.id,
            user_id: user.id,
            rating: 4,
            comment: Some("Mon commentaire".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.average_rating, Some(5));
    assert_eq!(updated.rating_distribution.as_array(), [0, 0, 0, 1, 1]);

    // 缓存已写回数据库
    let stored = GamesRepository::find_by_id(&db, game.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.average_rating, Some(5));
    assert_eq!(stored.rating_distribution.total(), 2);

    let details = service::show_game(&db, "jeu-video-49").await.unwrap();
    let latest = details.latest_review().unwrap();
    assert_eq!(latest.username, "user+0");
    assert_eq!(latest.review.comment.as_deref(), Some("Mon commentaire"));
    assert_eq!(latest.review.rating, 4);
    assert_eq!(service::get_reviews(&db, game.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn invalid_submissions_leave_no_trace() {
    let db = seeded_db().await;
    let user = service::register_user(&db, "user+1", None).await.unwrap();

    let err = service::submit_review(
        &db,
        NewReview {
            game_id: 1,
            user_id: user.id,
            rating: 6,
            comment: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidRating { rating: 6, .. }));

    let err = service::submit_review(
        &db,
        NewReview {
            game_id: 1,
            user_id: 999,
            rating: 3,
            comment: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { entity: "User", .. }));

    let err = service::submit_review(
        &db,
        NewReview {
            game_id: 999,
            user_id: user.id,
            rating: 3,
            comment: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { entity: "VideoGame", .. }));

    assert_eq!(ReviewsRepository::count_by_game(&db, 1).await.unwrap(), 0);
}

#[tokio::test]
async fn corrupted_rating_rolls_back_the_submission() {
    let db = seeded_db().await;
    let user = service::register_user(&db, "user+2", None).await.unwrap();

    let corrupted = ReviewsRepository::insert(&db, 2, user.id, 9, None)
        .await
        .unwrap();

    let err = service::submit_review(
        &db,
        NewReview {
            game_id: 2,
            user_id: user.id,
            rating: 3,
            comment: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        CatalogError::InvalidRating { review_id: Some(id), rating: 9 } if id == corrupted.id
    ));
    assert_eq!(ReviewsRepository::count_by_game(&db, 2).await.unwrap(), 1);
    let stored = GamesRepository::find_by_id(&db, 2).await.unwrap().unwrap();
    assert_eq!(stored.rating_distribution, RatingDistribution::default());
}

#[tokio::test]
async fn recompute_all_ratings_rebuilds_every_game() {
    let db = seeded_db().await;
    let user = service::register_user(&db, "user+3", None).await.unwrap();

    for rating in [1, 2, 2, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 5] {
        ReviewsRepository::insert(&db, 3, user.id, rating, None)
            .await
            .unwrap();
    }

    assert_eq!(service::recompute_all_ratings(&db).await.unwrap(), 50);

    let stored = GamesRepository::find_by_id(&db, 3).await.unwrap().unwrap();
    assert_eq!(stored.average_rating, Some(4));
    assert_eq!(stored.rating_distribution.as_array(), [1, 2, 3, 4, 5]);

    let untouched = GamesRepository::find_by_id(&db, 4).await.unwrap().unwrap();
    assert_eq!(untouched.average_rating, None);
}

#[tokio::test]
async fn deleting_a_game_cascades_to_reviews() {
    let db = seeded_db().await;
    let user = service::register_user(&db, "user+4", None).await.unwrap();
    ReviewsRepository::insert(&db, 5, user.id, 4, None)
        .await
        .unwrap();

    let result = GamesRepository::delete(&db, 5).await.unwrap();

    assert_eq!(result.rows_affected, 1);
    assert_eq!(ReviewsRepository::count_by_game(&db, 5).await.unwrap(), 0);
    assert_eq!(service::count_games(&db).await.unwrap(), 49);
}

#[tokio::test]
async fn file_database_persists_between_connections() {
    let dir = tempfile::tempdir().unwrap();
    let target = DatabaseTarget::File(catalog_path::db_path_in(dir.path()));

    let db = establish_connection(&target).await.unwrap();
    run_migrations(&db).await.unwrap();
    service::create_tag(&db, "Tag 1").await.unwrap();
    close_connection(db).await.unwrap();

    let db = establish_connection(&target).await.unwrap();
    run_migrations(&db).await.unwrap();
    let tags = service::find_all_tags(&db).await.unwrap();

    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "Tag 1");
}
