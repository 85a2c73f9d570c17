// src/config.rs

pub mod sample;

use crate::{
    constants::{bilibili, youtube},
    error::{AppError, AppResult},
    models::{DownloadTarget, YoutubeTarget},
};
use log::{debug, info};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::{io::ErrorKind, path::Path, time::Duration};

// --- B 站页面流程的配置 ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BilibiliConfig {
    #[serde(default)]
    pub videos: Vec<DownloadTarget>,
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_output_directory")]
    pub output_directory: String,
    #[serde(default = "default_temp_directory")]
    pub temp_directory: String,
    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_delay_secs")]
    pub delay_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
}

// --- 为上面的 serde default 添加辅助函数 ---
fn default_output_directory() -> String {
    bilibili::DEFAULT_OUTPUT_DIR.to_string()
}
fn default_temp_directory() -> String {
    bilibili::DEFAULT_TEMP_DIR.to_string()
}
fn default_ffmpeg_path() -> String {
    bilibili::DEFAULT_FFMPEG_PATH.to_string()
}
fn default_user_agent() -> String {
    bilibili::USER_AGENT.to_string()
}
fn default_delay_secs() -> u64 {
    bilibili::DEFAULT_DELAY_SECS
}
fn default_connect_timeout_secs() -> u64 {
    bilibili::DEFAULT_CONNECT_TIMEOUT_SECS
}
fn default_read_timeout_secs() -> u64 {
    bilibili::DEFAULT_READ_TIMEOUT_SECS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_directory: default_output_directory(),
            temp_directory: default_temp_directory(),
            ffmpeg_path: default_ffmpeg_path(),
            user_agent: default_user_agent(),
            delay_secs: default_delay_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: default_read_timeout_secs(),
        }
    }
}

impl Settings {
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}

// --- yt-dlp 流程的配置 ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubeConfig {
    #[serde(default)]
    pub download_settings: YoutubeSettings,
    #[serde(default)]
    pub videos: Vec<YoutubeTarget>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubeSettings {
    #[serde(default = "default_yt_output_directory")]
    pub output_directory: String,
    #[serde(default = "default_video_quality")]
    pub video_quality: String,
    #[serde(default)]
    pub download_subtitles: bool,
    #[serde(default)]
    pub download_info: bool,
    #[serde(default = "default_skip_existing")]
    pub skip_existing: bool,
    #[serde(default = "default_ytdlp_path")]
    pub ytdlp_path: String,
    #[serde(default)]
    pub delay_secs: u64,
}

fn default_yt_output_directory() -> String {
    youtube::DEFAULT_OUTPUT_DIR.to_string()
}
fn default_video_quality() -> String {
    youtube::DEFAULT_VIDEO_QUALITY.to_string()
}
fn default_skip_existing() -> bool {
    true
}
fn default_ytdlp_path() -> String {
    youtube::DEFAULT_YTDLP_PATH.to_string()
}

impl Default for YoutubeSettings {
    fn default() -> Self {
        Self {
            output_directory: default_yt_output_directory(),
            video_quality: default_video_quality(),
            download_subtitles: false,
            download_info: false,
            skip_existing: default_skip_existing(),
            ytdlp_path: default_ytdlp_path(),
            delay_secs: 0,
        }
    }
}

/// 读取并解析 JSON 配置文件。文件缺失与格式错误分别报告，二者都会终止整个运行。
pub fn load_config<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::ConfigMissing(path.to_path_buf()),
        _ => AppError::Io(e),
    })?;
    let config = serde_json::from_str(&content).map_err(|source| AppError::ConfigMalformed {
        path: path.to_path_buf(),
        source,
    })?;
    info!("已加载配置文件: {}", path.display());
    debug!("配置文件内容长度: {} 字节", content.len());
    Ok(config)
}
