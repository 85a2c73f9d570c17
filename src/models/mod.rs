// src/models/mod.rs

pub mod playinfo;
pub mod ytdlp;

use crate::{constants, error::AppError, ui::symbols};
use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_target_name() -> String {
    constants::bilibili::DEFAULT_TARGET_NAME.to_string()
}
fn default_description() -> String {
    constants::youtube::DEFAULT_DESCRIPTION.to_string()
}
fn default_category() -> String {
    constants::youtube::UNCATEGORIZED.to_string()
}

/// 页面流程的一个下载条目，以 `url` 为标识
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadTarget {
    #[serde(default = "default_target_name")]
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub cookie: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubeTarget {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_category")]
    pub category: String,
}

/// 从页面中提取出的单个视频信息，合并完成后即丢弃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMedia {
    pub title: String,
    pub video_stream_url: String,
    pub audio_stream_url: String,
}

/// 单个条目成功结束时的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetOutcome {
    Downloaded(PathBuf),
    Skipped(PathBuf),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum FailureKind {
    Network,
    Unextractable,
    StreamUnavailable,
    Mux,
    ContentUnavailable,
    Extractor,
    InvalidTarget,
    Io,
    Unknown,
}

impl FailureKind {
    pub fn get_display_info(
        &self,
    ) -> (
        &'static ColoredString,
        fn(ColoredString) -> ColoredString,
        &'static str,
    ) {
        match self {
            FailureKind::Network => (&symbols::ERROR, |s| s.red(), "网络请求失败"),
            FailureKind::Unextractable => (&symbols::ERROR, |s| s.red(), "无法提取播放信息"),
            FailureKind::StreamUnavailable => {
                (&symbols::WARN, |s| s.yellow(), "音视频地址不可用 (可能需要大会员)")
            }
            FailureKind::Mux => (&symbols::ERROR, |s| s.red(), "FFmpeg 合并失败"),
            FailureKind::ContentUnavailable => (&symbols::WARN, |s| s.yellow(), "视频受限不可访问"),
            FailureKind::Extractor => (&symbols::ERROR, |s| s.red(), "yt-dlp 下载失败"),
            FailureKind::InvalidTarget => (&symbols::WARN, |s| s.yellow(), "条目配置无效"),
            FailureKind::Io => (&symbols::ERROR, |s| s.red(), "本地文件读写错误"),
            FailureKind::Unknown => (&symbols::ERROR, |s| s.red(), "发生未知错误"),
        }
    }
}

impl From<&AppError> for FailureKind {
    fn from(error: &AppError) -> Self {
        match error {
            AppError::Network(_) => FailureKind::Network,
            AppError::UnextractableMetadata => FailureKind::Unextractable,
            AppError::StreamUnavailable(_) => FailureKind::StreamUnavailable,
            AppError::MuxFailure(_) => FailureKind::Mux,
            AppError::ContentUnavailable(_) => FailureKind::ContentUnavailable,
            AppError::Extractor(_) => FailureKind::Extractor,
            AppError::InvalidTarget(_) => FailureKind::InvalidTarget,
            AppError::Io(_) => FailureKind::Io,
            _ => FailureKind::Unknown,
        }
    }
}

/// 报告中记录的一次失败
#[derive(Debug, Clone)]
pub struct FailureRecord {
    pub index: usize,
    pub label: String,
    pub url: String,
    pub kind: FailureKind,
    pub message: String,
}
