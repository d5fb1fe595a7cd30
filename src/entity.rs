//! 数据实体模块
//!
//! 包含所有 SeaORM 实体定义。

pub mod prelude;

pub mod game_tags;
pub mod games;
pub mod reviews;
pub mod tags;
pub mod users;
