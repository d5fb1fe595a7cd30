//! 基线迁移：创建目录的核心表
//!
//! - games：游戏基础信息
//! - tags：共享的标签参考数据
//! - game_tags：游戏与标签的多对多关联
//! - users：评论作者
//! - reviews：用户评论（评分 1-5 + 评论内容）

use log::info;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. games 表
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Games::Title).text().not_null())
                    .col(ColumnDef::new(Games::Slug).text().not_null().unique_key())
                    .col(ColumnDef::new(Games::Description).text().not_null().default(""))
                    .col(ColumnDef::new(Games::ReleaseDate).date().null())
                    .col(ColumnDef::new(Games::Rating).integer().null())
                    .col(ColumnDef::new(Games::CreatedAt).big_integer().null())
                    .col(ColumnDef::new(Games::UpdatedAt).big_integer().null())
                    .to_owned(),
            )
            .await?;

        // 2. tags 表
        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tags::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tags::Name).text().not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        // 3. game_tags 关联表（复合主键）
        manager
            .create_table(
                Table::create()
                    .table(GameTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(GameTags::GameId).integer().not_null())
                    .col(ColumnDef::new(GameTags::TagId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(GameTags::GameId)
                            .col(GameTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_tags_game")
                            .from(GameTags::Table, GameTags::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_tags_tag")
                            .from(GameTags::Table, GameTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 4. users 表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Username).text().not_null().unique_key())
                    .col(ColumnDef::new(Users::Email).text().null())
                    .to_owned(),
            )
            .await?;

        // 5. reviews 表
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reviews::GameId).integer().not_null())
                    .col(ColumnDef::new(Reviews::UserId).integer().not_null())
                    .col(ColumnDef::new(Reviews::Rating).integer().not_null())
                    .col(ColumnDef::new(Reviews::Comment).text().null())
                    .col(ColumnDef::new(Reviews::CreatedAt).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_game")
                            .from(Reviews::Table, Reviews::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_user")
                            .from(Reviews::Table, Reviews::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_game_id")
                    .table(Reviews::Table)
                    .col(Reviews::GameId)
                    .to_owned(),
            )
            .await?;

        info!("[MIGRATION] baseline catalog schema created");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GameTags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Games {
    Table,
    Id,
    Title,
    Slug,
    Description,
    ReleaseDate,
    Rating,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum GameTags {
    Table,
    GameId,
    TagId,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    Id,
    GameId,
    UserId,
    Rating,
    Comment,
    CreatedAt,
}
