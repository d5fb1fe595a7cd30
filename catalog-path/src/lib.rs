use std::path::PathBuf;

/// 数据库相关路径常量
pub const DB_DATA_DIR: &str = "data";
pub const DB_FILE_NAME: &str = "game_catalog.db";

/// 覆盖数据目录的环境变量
pub const DATA_DIR_ENV: &str = "CATALOG_DATA_DIR";

/// 获取基础数据目录
///
/// 优先使用 `CATALOG_DATA_DIR` 环境变量，否则使用系统应用数据目录
pub fn get_base_data_dir() -> Result<PathBuf, String> {
    match std::env::var(DATA_DIR_ENV) {
        Ok(dir) if !dir.trim().is_empty() => Ok(PathBuf::from(dir.trim())),
        _ => get_system_data_dir(),
    }
}

/// 获取系统数据目录（跨平台）
fn get_system_data_dir() -> Result<PathBuf, String> {
    use directories::BaseDirs;

    let base_dirs = BaseDirs::new().ok_or_else(|| "无法获取系统目录信息".to_string())?;

    #[cfg(target_os = "linux")]
    {
        Ok(base_dirs.data_dir().join("game-catalog"))
    }

    #[cfg(not(target_os = "linux"))]
    {
        Ok(base_dirs.data_dir().join("com.gamecatalog.dev"))
    }
}

/// 获取指定基础目录下的数据库文件路径
pub fn db_path_in(base_dir: impl Into<PathBuf>) -> PathBuf {
    base_dir.into().join(DB_DATA_DIR).join(DB_FILE_NAME)
}

/// 获取数据库文件路径
pub fn get_db_path() -> Result<PathBuf, String> {
    Ok(db_path_in(get_base_data_dir()?))
}
