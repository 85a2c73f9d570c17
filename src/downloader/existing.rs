// src/downloader/existing.rs

//! “是否已经下载过”的判断。
//!
//! 先按 `<标题>.<扩展名>` 精确查找，再做模糊匹配：文件名（小写）包含标题（小写）
//! 或标题的前 30 个字符即视为同一视频。这是尽力而为的启发式规则，标题相近的
//! 不同视频可能被误判为已存在，被截断得更短的文件名也可能漏判。

use crate::constants::youtube::{FUZZY_PREFIX_CHARS, VIDEO_EXTENSIONS};
use log::debug;
use std::path::{Path, PathBuf};

fn has_video_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| VIDEO_EXTENSIONS.iter().any(|v| v.eq_ignore_ascii_case(ext)))
}

/// `title` 应已经过 [`crate::utils::clean_filename`] 处理
pub fn find_existing(output_dir: &Path, title: &str) -> Option<PathBuf> {
    if title.is_empty() || !output_dir.is_dir() {
        return None;
    }

    for ext in VIDEO_EXTENSIONS {
        let candidate = output_dir.join(format!("{}.{}", title, ext));
        if candidate.is_file() {
            debug!("精确匹配到已存在文件: {}", candidate.display());
            return Some(candidate);
        }
    }

    let title_lower = title.to_lowercase();
    let needle: String = if title_lower.chars().count() > FUZZY_PREFIX_CHARS {
        title_lower.chars().take(FUZZY_PREFIX_CHARS).collect()
    } else {
        title_lower
    };

    let entries = std::fs::read_dir(output_dir).ok()?;
    let mut matches: Vec<PathBuf> = entries
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && has_video_extension(p))
        .filter(|p| {
            p.file_stem()
                .map(|s| s.to_string_lossy().to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .collect();
    matches.sort();
    let found = matches.into_iter().next();
    if let Some(path) = &found {
        debug!("模糊匹配到已存在文件: {}", path.display());
    }
    found
}
