use super::{RatingDistribution, is_valid_rating};
use crate::catalog::VideoGame;
use crate::error::{CatalogError, CatalogResult};

/// 评分聚合器
///
/// 无状态，可以重复调用；评论集合变化后由调用方负责重新触发。
pub struct RatingAggregator;

impl RatingAggregator {
    /// 计算并写入游戏的平均分
    ///
    /// 无评论时为 `None`，否则为均值四舍五入（0.5 向上取整）后的整数。
    pub fn calculate_average(game: &mut VideoGame) {
        game.average_rating = average_of(game.reviews.iter().map(|review| review.rating));
    }

    /// 重建游戏的评分分布
    ///
    /// 先清零再按当前全部评论计数。遇到超出 1-5 的评分时返回错误，
    /// 且保留原有分布不变。
    pub fn count_ratings_per_value(game: &mut VideoGame) -> CatalogResult<()> {
        let distribution = distribution_of(game.reviews.iter().map(|review| review.rating))
            .map_err(|err| {
                let Some(review) = game
                    .reviews
                    .iter()
                    .find(|review| !is_valid_rating(review.rating))
                else {
                    return err;
                };
                log::error!(
                    "游戏 {} 的评论 {} 评分非法: {}",
                    game.id,
                    review.id,
                    review.rating
                );
                CatalogError::InvalidRating {
                    review_id: Some(review.id),
                    rating: review.rating,
                }
            })?;

        game.rating_distribution = distribution;
        Ok(())
    }

    /// 同时刷新平均分和评分分布
    pub fn refresh(game: &mut VideoGame) -> CatalogResult<()> {
        Self::count_ratings_per_value(game)?;
        Self::calculate_average(game);
        log::debug!(
            "游戏 {} 聚合已刷新: average={:?}, distribution={:?}",
            game.id,
            game.average_rating,
            game.rating_distribution.as_array()
        );
        Ok(())
    }
}

/// 计算评分均值并四舍五入
pub fn average_of(ratings: impl IntoIterator<Item = i32>) -> Option<i32> {
    let (sum, count) = ratings
        .into_iter()
        .fold((0i64, 0i64), |(sum, count), rating| {
            (sum + i64::from(rating), count + 1)
        });

    if count == 0 {
        return None;
    }

    // f64::round 即远离零方向的四舍五入
    Some((sum as f64 / count as f64).round() as i32)
}

/// 统计评分分布
pub fn distribution_of(
    ratings: impl IntoIterator<Item = i32>,
) -> CatalogResult<RatingDistribution> {
    let mut distribution = RatingDistribution::default();
    for rating in ratings {
        distribution.increase(rating)?;
    }
    Ok(distribution)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::catalog::Review;

    fn game_with_ratings(ratings: &[i32]) -> VideoGame {
        let mut game = VideoGame::new(1, "Game 1");
        for (index, rating) in ratings.iter().enumerate() {
            let mut review = Review::new(1, index as i32 + 1, *rating, None);
            review.id = index as i32 + 1;
            game.add_review(review);
        }
        game
    }

    const MIXED: [i32; 15] = [1, 2, 2, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 5];

    #[test]
    fn no_review_has_no_average() {
        let mut game = VideoGame::new(1, "Game 1");
        RatingAggregator::calculate_average(&mut game);

        assert_eq!(game.average_rating, None);
    }

    #[test]
    fn single_review_returns_same_value() {
        let mut game = game_with_ratings(&[5]);
        RatingAggregator::calculate_average(&mut game);

        assert_eq!(game.average_rating, Some(5));
    }

    #[test]
    fn multiple_reviews_return_rounded_average() {
        let mut game = game_with_ratings(&MIXED);
        RatingAggregator::calculate_average(&mut game);

        // 55 / 15 = 3.67
        assert_eq!(game.average_rating, Some(4));
    }

    #[test]
    fn half_average_rounds_up() {
        let mut game = game_with_ratings(&[4, 5]);
        RatingAggregator::calculate_average(&mut game);

        assert_eq!(game.average_rating, Some(5));
        assert_eq!(average_of([1, 2]), Some(2));
        assert_eq!(average_of([1, 1, 2]), Some(1));
    }

    #[test]
    fn no_review_has_empty_distribution() {
        let mut game = VideoGame::new(1, "Game 1");
        RatingAggregator::count_ratings_per_value(&mut game).unwrap();

        assert_eq!(game.rating_distribution, RatingDistribution::default());
    }

    #[test]
    fn counts_each_value() {
        let mut game = game_with_ratings(&MIXED);
        RatingAggregator::count_ratings_per_value(&mut game).unwrap();

        assert_eq!(game.rating_distribution.as_array(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn recount_discards_previous_counts() {
        let mut game = game_with_ratings(&[5]);
        game.rating_distribution = RatingDistribution {
            one: 7,
            ..Default::default()
        };

        RatingAggregator::count_ratings_per_value(&mut game).unwrap();
        RatingAggregator::count_ratings_per_value(&mut game).unwrap();

        assert_eq!(game.rating_distribution.as_array(), [0, 0, 0, 0, 1]);
    }

    #[test]
    fn invalid_rating_is_reported_and_keeps_previous_state() {
        let mut game = game_with_ratings(&[4, 9]);
        let previous = RatingDistribution {
            two: 1,
            ..Default::default()
        };
        game.rating_distribution = previous;

        let err = RatingAggregator::count_ratings_per_value(&mut game).unwrap_err();

        assert!(matches!(
            err,
            CatalogError::InvalidRating {
                review_id: Some(2),
                rating: 9
            }
        ));
        assert_eq!(game.rating_distribution, previous);
    }

    #[test]
    fn distribution_of_plain_ratings() {
        let distribution = distribution_of(MIXED).unwrap();

        assert_eq!(distribution.as_array(), [1, 2, 3, 4, 5]);
        assert!(matches!(
            distribution_of([3, 0]),
            Err(CatalogError::InvalidRating {
                review_id: None,
                rating: 0
            })
        ));
    }

    #[test]
    fn refresh_updates_both_aggregates() {
        let mut game = game_with_ratings(&[4, 5]);
        RatingAggregator::refresh(&mut game).unwrap();

        assert_eq!(game.average_rating, Some(5));
        assert_eq!(game.rating_distribution.as_array(), [0, 0, 0, 1, 1]);
    }

    proptest! {
        #[test]
        fn distribution_sums_to_review_count(ratings in prop::collection::vec(1i32..=5, 0..64)) {
            let mut game = game_with_ratings(&ratings);
            RatingAggregator::refresh(&mut game).unwrap();
            let first = game.clone();
            RatingAggregator::refresh(&mut game).unwrap();

            prop_assert_eq!(game.rating_distribution.total() as usize, ratings.len());
            for value in 1..=5 {
                let expected = ratings.iter().filter(|r| **r == value).count() as u32;
                prop_assert_eq!(game.rating_distribution.count(value), expected);
            }
            prop_assert_eq!(&game, &first);
        }

        #[test]
        fn average_stays_within_rating_bounds(ratings in prop::collection::vec(1i32..=5, 1..64)) {
            let average = average_of(ratings.iter().copied()).unwrap();
            prop_assert!((1..=5).contains(&average));
        }
    }
}
