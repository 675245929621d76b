//! 评审文档导出与定位

use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// 导出文件名前缀
pub const EXPORT_PREFIX: &str = "litreview_";

/// 导出文件扩展名
pub const EXPORT_EXTENSION: &str = "md";

/// 文件名时间戳格式，秒级精度，字典序即时间序
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// 导出相关错误
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// 导出目录中尚无任何评审文档
    #[error("导出目录 {0} 中尚无评审文档")]
    NotFound(PathBuf),

    /// 文档落盘或目录读取失败
    #[error("评审文档持久化失败: {0}")]
    Persistence(#[from] std::io::Error),
}

/// 构造导出文件名，如 litreview_20250830_142501.md
pub fn export_filename(timestamp: &DateTime<Local>) -> String {
    format!(
        "{}{}.{}",
        EXPORT_PREFIX,
        timestamp.format(TIMESTAMP_FORMAT),
        EXPORT_EXTENSION
    )
}

/// 将最终评审文档写入导出目录，返回完整路径。
/// 文件内容为最终文档本身，不附加任何元数据。
pub fn save_review(
    export_dir: &Path,
    document: &str,
    timestamp: &DateTime<Local>,
) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(export_dir)?;

    let path = export_dir.join(export_filename(timestamp));
    fs::write(&path, document)?;

    println!("💾 已保存评审文档: {}", path.display());
    Ok(path)
}

/// 定位最近一次导出的评审文档。
/// 依赖文件名时间戳的字典序，前提是同一进程内同一时刻只有一次运行。
pub fn latest_export(export_dir: &Path) -> Result<PathBuf, ExportError> {
    let suffix = format!(".{}", EXPORT_EXTENSION);
    let mut candidates: Vec<String> = Vec::new();

    let entries = match fs::read_dir(export_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ExportError::NotFound(export_dir.to_path_buf()));
        }
        Err(e) => return Err(ExportError::Persistence(e)),
    };

    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with(EXPORT_PREFIX) && name.ends_with(&suffix) {
            candidates.push(name);
        }
    }

    candidates.sort();
    candidates
        .pop()
        .map(|name| export_dir.join(name))
        .ok_or_else(|| ExportError::NotFound(export_dir.to_path_buf()))
}

// Include tests
#[cfg(test)]
mod tests;
