//! 添加评分聚合缓存字段
//!
//! 1. games 表添加 average_rating 字段（无评论时为 NULL）
//! 2. games 表添加 rating_distribution 字段，以 JSON 文本存储 1-5 分各自的数量

use sea_orm_migration::prelude::*;

const EMPTY_DISTRIBUTION: &str = r#"{"one":0,"two":0,"three":0,"four":0,"five":0}"#;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Games::Table)
                    .add_column(ColumnDef::new(Games::AverageRating).integer().null())
                    .to_owned(),
            )
            .await?;

        // SQLite 每条 ALTER 语句只能添加一列
        manager
            .alter_table(
                Table::alter()
                    .table(Games::Table)
                    .add_column(
                        ColumnDef::new(Games::RatingDistribution)
                            .text()
                            .not_null()
                            .default(EMPTY_DISTRIBUTION),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Err(DbErr::Custom(
            "此迁移无法回滚，请从备份恢复数据库".to_string(),
        ))
    }
}

#[derive(DeriveIden)]
enum Games {
    Table,
    AverageRating,
    RatingDistribution,
}
