use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, RuntimeErr};
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::config::DatabaseTarget;

/// 内存数据库连接串（测试使用）
pub const IN_MEMORY_URL: &str = "sqlite::memory:";

/// 将文件路径转换为 sqlite 连接 URL
pub fn sqlite_url_for(db_path: &Path) -> Result<String, DbErr> {
    // 使用 `url` crate 安全地构建连接字符串
    let db_url = Url::from_file_path(db_path).map_err(|_| {
        DbErr::Conn(RuntimeErr::Internal(format!(
            "Invalid database path: {}",
            db_path.display()
        )))
    })?;

    Ok(format!("sqlite:{}?mode=rwc", db_url.path()))
}

/// 确保数据库所在的目录存在
pub fn ensure_db_dir_exists(db_path: &Path) -> Result<(), DbErr> {
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            DbErr::Conn(RuntimeErr::Internal(format!("无法创建数据库目录: {}", e)))
        })?;
    }
    Ok(())
}

/// 按配置建立数据库连接
pub async fn establish_connection(target: &DatabaseTarget) -> Result<DatabaseConnection, DbErr> {
    let connection_string = match target {
        DatabaseTarget::Url(url) => url.clone(),
        DatabaseTarget::File(db_path) => {
            if !db_path.exists() {
                log::info!("首次启动，创建数据库: {}", db_path.display());
            } else {
                log::info!("使用数据库: {}", db_path.display());
            }
            ensure_db_dir_exists(db_path)?;
            sqlite_url_for(db_path)?
        }
    };

    connect(connection_string).await
}

/// 建立内存数据库连接
///
/// 内存数据库只存在于单个连接中，连接池必须固定为 1。
pub async fn connect_in_memory() -> Result<DatabaseConnection, DbErr> {
    connect(IN_MEMORY_URL.to_string()).await
}

async fn connect(connection_string: String) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(connection_string);
    // 对于本地 SQLite，连接池大小为 1 即可，同时也串行化了所有写入
    options
        .max_connections(1)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    log::debug!("Database connection string: {}", options.get_url());
    Database::connect(options).await
}

/// 执行数据库迁移
pub async fn run_migrations(conn: &DatabaseConnection) -> Result<(), DbErr> {
    log::info!("开始执行数据库迁移...");
    Migrator::up(conn, None).await?;
    log::info!("数据库迁移完成");
    Ok(())
}

/// 关闭数据库连接
pub async fn close_connection(conn: DatabaseConnection) -> Result<(), DbErr> {
    conn.close().await?;
    Ok(())
}
