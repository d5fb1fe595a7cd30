//! 运行配置
//!
//! 从环境变量读取：
//! - `CATALOG_DATABASE_URL`：完整的数据库连接串，优先级最高
//! - `CATALOG_DATA_DIR`：数据目录，数据库文件位于其下的 `data/game_catalog.db`
//! - `CATALOG_PAGE_SIZE`：默认每页条数
//! - `CATALOG_LINK_RADIUS`：分页链接中当前页前后显示的页码数
//! - `CATALOG_LOG_LEVEL`：初始日志级别
//! - `RUST_LOG`：日志过滤规则

use std::path::PathBuf;

use crate::error::{CatalogError, CatalogResult};
use crate::listing::{DEFAULT_LIMIT, DEFAULT_LINK_RADIUS, ListingQuery, ListingQueryEngine};
use crate::utils::logs::parse_level;

/// 数据库位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    /// 完整连接串
    Url(String),
    /// SQLite 文件路径，连接前会创建父目录
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub database: DatabaseTarget,
    pub page_size: u64,
    pub link_radius: u64,
    pub log_level: log::LevelFilter,
    pub rust_log: Option<String>,
}

impl CatalogConfig {
    pub fn from_env() -> CatalogResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过任意键值来源构建配置
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CatalogResult<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let database = match (get("CATALOG_DATABASE_URL"), get(catalog_path::DATA_DIR_ENV)) {
            (Some(url), _) => DatabaseTarget::Url(url),
            (None, Some(dir)) => DatabaseTarget::File(catalog_path::db_path_in(dir)),
            (None, None) => {
                DatabaseTarget::File(catalog_path::get_db_path().map_err(CatalogError::Config)?)
            }
        };

        let page_size = parse_positive(get("CATALOG_PAGE_SIZE"), "CATALOG_PAGE_SIZE")?
            .unwrap_or(DEFAULT_LIMIT);
        let link_radius = match get("CATALOG_LINK_RADIUS") {
            Some(value) => value.parse::<u64>().map_err(|_| {
                CatalogError::Config(format!("CATALOG_LINK_RADIUS 必须是非负整数: {}", value))
            })?,
            None => DEFAULT_LINK_RADIUS,
        };
        let log_level = match get("CATALOG_LOG_LEVEL") {
            Some(level) => parse_level(&level)?,
            None => log::LevelFilter::Info,
        };

        Ok(Self {
            database,
            page_size,
            link_radius,
            log_level,
            rust_log: get("RUST_LOG"),
        })
    }

    pub fn engine(&self) -> ListingQueryEngine {
        ListingQueryEngine::new(self.link_radius)
    }

    /// 解析查询字符串，未指定 `limit` 时使用配置的每页条数
    pub fn parse_query(&self, query: &str) -> ListingQuery {
        ListingQuery::from_query_str_with_limit(query, self.page_size)
    }
}

fn parse_positive(value: Option<String>, key: &str) -> CatalogResult<Option<u64>> {
    value
        .map(|v| match v.parse::<u64>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(CatalogError::Config(format!("{} 必须是正整数: {}", key, v))),
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> CatalogResult<CatalogConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CatalogConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn database_url_takes_precedence() {
        let config = config_from(&[
            ("CATALOG_DATABASE_URL", "sqlite::memory:"),
            ("CATALOG_DATA_DIR", "/tmp/catalog"),
        ])
        .unwrap();

        assert_eq!(
            config.database,
            DatabaseTarget::Url("sqlite::memory:".to_string())
        );
    }

    #[test]
    fn data_dir_resolves_database_file() {
        let config = config_from(&[("CATALOG_DATA_DIR", "/tmp/catalog")]).unwrap();

        assert_eq!(
            config.database,
            DatabaseTarget::File(PathBuf::from("/tmp/catalog/data/game_catalog.db"))
        );
        assert_eq!(config.page_size, DEFAULT_LIMIT);
        assert_eq!(config.link_radius, DEFAULT_LINK_RADIUS);
        assert_eq!(config.log_level, log::LevelFilter::Info);
    }

    #[test]
    fn numeric_settings_are_validated() {
        let config = config_from(&[
            ("CATALOG_DATA_DIR", "/tmp/catalog"),
            ("CATALOG_PAGE_SIZE", "25"),
            ("CATALOG_LINK_RADIUS", "2"),
            ("CATALOG_LOG_LEVEL", "debug"),
        ])
        .unwrap();
        assert_eq!(config.page_size, 25);
        assert_eq!(config.link_radius, 2);
        assert_eq!(config.log_level, log::LevelFilter::Debug);
        assert_eq!(config.parse_query("page=2").limit, 25);
        assert_eq!(config.parse_query("limit=5").limit, 5);

        assert!(matches!(
            config_from(&[("CATALOG_DATA_DIR", "/tmp"), ("CATALOG_PAGE_SIZE", "0")]),
            Err(CatalogError::Config(_))
        ));
        assert!(matches!(
            config_from(&[("CATALOG_DATA_DIR", "/tmp"), ("CATALOG_LINK_RADIUS", "-1")]),
            Err(CatalogError::Config(_))
        ));
    }
}
