// src/config/sample.rs

use super::{BilibiliConfig, Settings, YoutubeConfig, YoutubeSettings};
use crate::{
    cli::ConfigKind,
    constants::{bilibili, youtube},
    error::{AppError, AppResult},
    models::{DownloadTarget, YoutubeTarget},
};
use log::info;
use std::{fs, path::Path};

pub fn default_file_name(kind: ConfigKind) -> &'static str {
    match kind {
        ConfigKind::Bilibili => bilibili::CONFIG_FILE_NAME,
        ConfigKind::Youtube => youtube::CONFIG_FILE_NAME,
    }
}

fn bilibili_sample() -> BilibiliConfig {
    BilibiliConfig {
        videos: vec![
            DownloadTarget {
                name: "示例视频1".into(),
                url: "https://www.bilibili.com/video/BV1xxxxxxxxx/".into(),
                cookie: "cookie内容".into(),
            },
            DownloadTarget {
                name: "示例视频2".into(),
                url: "https://www.bilibili.com/video/BV2xxxxxxxxx/".into(),
                cookie: "cookie内容".into(),
            },
        ],
        settings: Settings::default(),
    }
}

fn youtube_sample() -> YoutubeConfig {
    YoutubeConfig {
        download_settings: YoutubeSettings::default(),
        videos: vec![
            YoutubeTarget {
                url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".into(),
                description: "Rick Astley - Never Gonna Give You Up".into(),
                category: "music".into(),
            },
            YoutubeTarget {
                url: "https://www.youtube.com/watch?v=9bZkp7q19f0".into(),
                description: "PSY - GANGNAM STYLE".into(),
                category: "music".into(),
            },
        ],
    }
}

/// 写入示例配置文件；目标文件已存在时拒绝覆盖。
pub fn write_sample(kind: ConfigKind, path: &Path) -> AppResult<()> {
    if path.exists() {
        return Err(AppError::UserInputError(format!(
            "文件 '{}' 已存在，未覆盖。",
            path.display()
        )));
    }
    let json = match kind {
        ConfigKind::Bilibili => serde_json::to_string_pretty(&bilibili_sample())?,
        ConfigKind::Youtube => serde_json::to_string_pretty(&youtube_sample())?,
    };
    fs::write(path, json)?;
    info!("已写入示例配置文件: {}", path.display());
    Ok(())
}
