use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

/// 初始化日志
///
/// 底层过滤器放开到 Debug（`RUST_LOG` 指定时以其为准），
/// 实际输出级别由 `log::max_level` 控制，可在运行时调整。重复初始化时忽略。
pub fn init_logger(rust_log: Option<&str>, initial: log::LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Debug);
    if let Some(filters) = rust_log {
        builder.parse_filters(filters);
    }

    if builder.target(env_logger::Target::Stderr).try_init().is_ok() {
        log::set_max_level(initial);
    }
}

pub fn parse_level(level: &str) -> CatalogResult<log::LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "error" => Ok(log::LevelFilter::Error),
        "warn" => Ok(log::LevelFilter::Warn),
        "info" => Ok(log::LevelFilter::Info),
        "debug" => Ok(log::LevelFilter::Debug),
        "trace" => Ok(log::LevelFilter::Trace),
        "off" => Ok(log::LevelFilter::Off),
        other => Err(CatalogError::Config(format!("无效的日志级别: {}", other))),
    }
}

/// 动态设置日志输出级别（不持久化）
pub fn set_log_level(level: &str) -> CatalogResult<()> {
    log::set_max_level(parse_level(level)?);
    Ok(())
}

/// 获取当前日志级别
pub fn get_log_level() -> LogLevel {
    let level = log::max_level();
    match level {
        log::LevelFilter::Error => LogLevel::Error,
        log::LevelFilter::Warn => LogLevel::Warn,
        log::LevelFilter::Info => LogLevel::Info,
        log::LevelFilter::Debug => LogLevel::Debug,
        log::LevelFilter::Trace => LogLevel::Trace,
        log::LevelFilter::Off => LogLevel::Off,
    }
}
