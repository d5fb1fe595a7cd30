#![allow(dead_code)]

use game_catalog_lib::VideoGame;

pub const GAME_COUNT: usize = 50;
pub const TAG_COUNT: usize = 20;
pub const TAGS_PER_GAME: usize = 5;

/// 第 `index` 个游戏的标签 ID：从 `index % 20` 开始连续取 5 个（循环），ID 从 1 开始
pub fn fixture_tags(index: usize) -> Vec<i32> {
    (0..TAGS_PER_GAME)
        .map(|offset| ((index + offset) % TAG_COUNT) as i32 + 1)
        .collect()
}

/// 50 个游戏 "Game 0".."Game 49"，ID 为 1..50
pub fn fixture_catalog() -> Vec<VideoGame> {
    (0..GAME_COUNT)
        .map(|index| {
            VideoGame::new(index as i32 + 1, format!("Game {}", index))
                .with_tags(fixture_tags(index))
        })
        .collect()
}

pub fn game_titles(prefix: &str, indexes: impl IntoIterator<Item = usize>) -> Vec<String> {
    indexes
        .into_iter()
        .map(|index| format!("{} {}", prefix, index))
        .collect()
}
