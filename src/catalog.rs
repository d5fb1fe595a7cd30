//! 目录领域模型
//!
//! 游戏、标签、评论的内存表示。标签以 ID 集合的形式挂在游戏上，
//! 标签本身由持久层统一维护。

mod review;
mod video_game;

pub use review::Review;
pub use video_game::{Tag, TagId, VideoGame};
