//! 游戏数据实体
//!
//! games 表是核心表，包含游戏基础信息以及由评论派生的评分缓存
//! （average_rating 与 JSON 列 rating_distribution）。

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::rating::RatingDistribution;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    // === 基础信息 ===
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text", unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub release_date: Option<Date>,
    pub rating: Option<i32>,

    // === 评分缓存 ===
    pub average_rating: Option<i32>,
    #[sea_orm(column_type = "Text")]
    pub rating_distribution: RatingDistribution,

    // === 时间戳 ===
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_tags::Entity")]
    GameTags,
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
}

impl Related<super::game_tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameTags.def()
    }
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl Related<super::tags::Entity> for Entity {
    fn to() -> RelationDef {
        super::game_tags::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::game_tags::Relation::Game.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
