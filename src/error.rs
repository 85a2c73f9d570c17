// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("配置文件 '{0}' 不存在")]
    ConfigMissing(PathBuf),
    #[error("配置文件 '{path}' 格式错误: {source}")]
    ConfigMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("网络请求失败: {0}")]
    Network(#[from] reqwest::Error),
    #[error("请求头无效 (请检查 Cookie 或 User-Agent): {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("无法提取视频播放信息 (Cookie 过期、需要登录或页面结构已变化)")]
    UnextractableMetadata,
    #[error("无法获取视频/音频地址: {0} (视频可能需要大会员权限)")]
    StreamUnavailable(String),
    #[error("FFmpeg 合并失败: {0}")]
    MuxFailure(String),
    #[error("视频不可访问: {0}")]
    ContentUnavailable(String),
    #[error("yt-dlp 执行失败: {0}")]
    Extractor(String),
    #[error("无效的下载条目: {0}")]
    InvalidTarget(String),
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON 解析错误: {0}")]
    Json(#[from] serde_json::Error),
    #[error("用户中断")]
    UserInterrupt,
    #[error("{0}")] // 只打印内部信息，不加任何前缀
    UserInputError(String),
    #[error("未知错误: {0}")]
    Other(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;
