use crate::entity::prelude::*;
use crate::entity::users;
use sea_orm::*;

/// 用户数据仓库
pub struct UsersRepository;

impl UsersRepository {
    /// 按用户名查找，不存在时创建
    pub async fn find_or_create(
        db: &DatabaseConnection,
        username: &str,
        email: Option<String>,
    ) -> Result<users::Model, DbErr> {
        let existing = Users::find()
            .filter(users::Column::Username.eq(username))
            .one(db)
            .await?;

        if let Some(user) = existing {
            return Ok(user);
        }

        let user = users::ActiveModel {
            id: NotSet,
            username: Set(username.to_string()),
            email: Set(email),
        };

        user.insert(db).await
    }

    /// 根据 ID 查询用户
    pub async fn find_by_id<C>(db: &C, id: i32) -> Result<Option<users::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Users::find_by_id(id).one(db).await
    }

    /// 批量查询用户
    pub async fn find_by_ids(
        db: &DatabaseConnection,
        ids: Vec<i32>,
    ) -> Result<Vec<users::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        Users::find()
            .filter(users::Column::Id.is_in(ids))
            .all(db)
            .await
    }
}
