// src/constants.rs

pub const UI_WIDTH: usize = 60;
pub const LABEL_TRUNCATE_LENGTH: usize = 60;
pub const MAX_FILENAME_BYTES: usize = 200;
pub const CONFIG_DIR_NAME: &str = concat!(".", clap::crate_name!());
pub const LOG_FILE_NAME: &str = concat!(clap::crate_name!(), ".log");
pub const LOG_FALLBACK_FILE_NAME: &str = "fallback.log";

/// 写入磁盘时使用的固定缓冲区大小
pub const CHUNK_SIZE: usize = 8192;

pub mod bilibili {
    pub const CONFIG_FILE_NAME: &str = "bilibili-video-config.json";
    pub const ORIGIN: &str = "https://www.bilibili.com";
    pub const DEFAULT_OUTPUT_DIR: &str = "downloads";
    pub const DEFAULT_TEMP_DIR: &str = "temp";
    pub const DEFAULT_FFMPEG_PATH: &str = "ffmpeg";
    pub const DEFAULT_TARGET_NAME: &str = "unknown_video";
    pub const DEFAULT_DELAY_SECS: u64 = 3;
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
    pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 60;
    pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    pub const FULL_RANGE: &str = "bytes=0-";
}

pub mod youtube {
    pub const CONFIG_FILE_NAME: &str = "youtube-video-config.json";
    pub const DEFAULT_OUTPUT_DIR: &str = "downloads";
    pub const DEFAULT_VIDEO_QUALITY: &str = "best[height<=720]/best";
    pub const DEFAULT_YTDLP_PATH: &str = "yt-dlp";
    pub const DEFAULT_DESCRIPTION: &str = "未知视频";
    pub const UNCATEGORIZED: &str = "未分类";
    pub const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "webm", "avi", "mov", "flv"];
    /// 模糊匹配时比较的标题前缀长度（字符数）
    pub const FUZZY_PREFIX_CHARS: usize = 30;
}
