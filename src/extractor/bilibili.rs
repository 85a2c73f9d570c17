// src/extractor/bilibili.rs

use super::first_match;
use crate::{
    error::{AppError, AppResult},
    models::{ExtractedMedia, playinfo::PlayInfo},
};
use log::{debug, warn};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

static TITLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"<title data-vue-meta="true">(.*?)_哔哩哔哩_bilibili</title>"#,
        r"<title>(.*?)_哔哩哔哩_bilibili</title>",
        r#""title":"(.*?)""#,
        r#"<h1[^>]*title="([^"]*)""#,
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static PLAYINFO_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?s)window\.__playinfo__=(.*?)</script>",
        r"(?s)window\.__playinfo__\s*=\s*(.*?);",
        r#"(?s)"playInfo":(.*?),"videoData""#,
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// 从页面中提取标题。空标题视为未命中。
pub fn extract_title(html: &str) -> Option<String> {
    first_match(html, &TITLE_PATTERNS, |s| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    })
}

/// 从页面中提取内嵌的播放信息 JSON，仅接受能完整解析的候选。
pub fn extract_playinfo(html: &str) -> Option<Value> {
    first_match(html, &PLAYINFO_PATTERNS, |s| match serde_json::from_str::<Value>(s.trim()) {
        Ok(v) => Some(v),
        Err(e) => {
            debug!("播放信息候选无法解析为 JSON: {}", e);
            None
        }
    })
}

/// 取第一个视频流和第一个音频流的直链。
pub fn resolve_streams(playinfo: &Value) -> AppResult<(String, String)> {
    let info = PlayInfo::deserialize(playinfo)
        .map_err(|e| AppError::StreamUnavailable(e.to_string()))?;
    let video = info
        .data
        .dash
        .video
        .into_iter()
        .next()
        .ok_or_else(|| AppError::StreamUnavailable("视频流列表为空".into()))?;
    let audio = info
        .data
        .dash
        .audio
        .into_iter()
        .next()
        .ok_or_else(|| AppError::StreamUnavailable("音频流列表为空".into()))?;
    debug!(
        "选中视频流 id={:?} codecs={:?}，音频流 id={:?} bandwidth={:?}",
        video.id, video.codecs, audio.id, audio.bandwidth
    );
    Ok((video.base_url, audio.base_url))
}

/// 标题 + 播放信息 + 音视频直链。标题缺失时回退到 `fallback_name` 并给出警告。
pub fn extract_media(html: &str, fallback_name: &str) -> AppResult<ExtractedMedia> {
    let title = extract_title(html).unwrap_or_else(|| {
        warn!("无法提取视频标题，使用配置中的名称 '{}'", fallback_name);
        crate::ui::warn("无法提取视频标题，使用配置中的名称");
        fallback_name.to_string()
    });
    let playinfo = extract_playinfo(html).ok_or(AppError::UnextractableMetadata)?;
    let (video_stream_url, audio_stream_url) = resolve_streams(&playinfo)?;
    Ok(ExtractedMedia {
        title,
        video_stream_url,
        audio_stream_url,
    })
}
