pub mod catalog;
pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod listing;
pub mod rating;
pub mod utils;

pub use catalog::{Review, Tag, TagId, VideoGame};
pub use config::{CatalogConfig, DatabaseTarget};
pub use error::{CatalogError, CatalogResult};
pub use listing::{ListingFilter, ListingQuery, ListingQueryEngine, Page, Pagination};
pub use rating::{RatingAggregator, RatingDistribution};

use database::connection;

/// 命令行入口：连接数据库、执行迁移，按查询字符串输出一页游戏列表
pub fn run() -> CatalogResult<()> {
    let config = CatalogConfig::from_env()?;
    utils::logs::init_logger(config.rust_log.as_deref(), config.log_level);

    let query_string = std::env::args().nth(1).unwrap_or_default();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CatalogError::Config(format!("无法创建异步运行时: {}", e)))?;

    runtime.block_on(async move {
        let conn = connection::establish_connection(&config.database).await?;
        log::info!("数据库连接建立成功");

        connection::run_migrations(&conn).await?;

        let query = config.parse_query(&query_string);
        let result = database::list_games(&conn, &config.engine(), &query).await;

        // 无论查询成功与否都关闭连接
        match connection::close_connection(conn).await {
            Ok(_) => log::info!("数据库连接已成功关闭"),
            Err(e) => log::error!("关闭数据库连接时出错: {}", e),
        }

        print_page(&result?);
        Ok::<(), CatalogError>(())
    })
}

fn print_page(page: &Page<VideoGame>) {
    println!("{}", page.summary());
    for game in &page.items {
        let average = game
            .average_rating
            .map_or_else(|| "-".to_string(), |rating| rating.to_string());
        println!("  [{}] {} ({})", game.id, game.title, average);
    }

    if let Some(links) = &page.pagination.links {
        let labels: Vec<String> = links
            .iter()
            .map(|link| {
                if link.active {
                    format!("[{}]", link.label())
                } else {
                    link.label()
                }
            })
            .collect();
        println!("{}", labels.join(" | "));
    }
}
