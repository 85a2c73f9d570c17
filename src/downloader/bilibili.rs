// src/downloader/bilibili.rs

use super::{TargetJob, TempFiles, download_to_file, mux_streams};
use crate::{
    client::PageClient,
    config::Settings,
    constants::bilibili,
    error::*,
    extractor,
    models::{DownloadTarget, TargetOutcome},
    ui, utils,
};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{HeaderValue, RANGE};
use std::{
    fmt,
    fs,
    path::{Path, PathBuf},
};
use url::Url;

/// 单个条目在页面流程中所处的阶段，仅用于日志
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Fetching,
    Extracting,
    Downloading,
    Muxing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Fetching => "获取页面",
            Stage::Extracting => "提取播放信息",
            Stage::Downloading => "下载音视频流",
            Stage::Muxing => "合并音视频",
        };
        f.write_str(s)
    }
}

/// 页面抓取 → 提取 → 下载 → 合并
pub struct BilibiliJob {
    client: PageClient,
    settings: Settings,
}

impl BilibiliJob {
    pub fn new(settings: Settings) -> AppResult<Self> {
        let client = PageClient::new(&settings)?;
        Ok(Self { client, settings })
    }

    fn enter(&self, target: &DownloadTarget, stage: Stage) {
        debug!("[{}] 阶段: {}", target.url, stage);
        ui::plain(&format!("正在{}...", stage));
    }

    fn output_path(&self, safe_title: &str) -> PathBuf {
        Path::new(&self.settings.output_directory).join(format!("{}.mp4", safe_title))
    }

    pub async fn download(&self, target: &DownloadTarget) -> AppResult<PathBuf> {
        info!("开始处理: {} ({})", target.name, target.url);
        validate_url(&target.url)?;
        ui::info(&format!("URL: {}", target.url));
        let headers = self.client.target_headers(target)?;

        self.enter(target, Stage::Fetching);
        let html = self.client.fetch_text(&target.url, headers.clone()).await?;

        self.enter(target, Stage::Extracting);
        let media = extractor::bilibili::extract_media(&html, &target.name)?;
        let safe_title = utils::sanitize_filename(&media.title);
        ui::info(&format!("视频标题: {}", media.title));

        let temp_dir = Path::new(&self.settings.temp_directory);
        fs::create_dir_all(temp_dir)?;
        fs::create_dir_all(&self.settings.output_directory)?;
        let temps = TempFiles::new(temp_dir, &safe_title);

        self.enter(target, Stage::Downloading);
        let mut video_headers = headers.clone();
        video_headers.insert(RANGE, HeaderValue::from_static(bilibili::FULL_RANGE));
        download_to_file(&self.client, &media.video_stream_url, video_headers, &temps.video, "视频").await?;
        download_to_file(&self.client, &media.audio_stream_url, headers, &temps.audio, "音频").await?;

        self.enter(target, Stage::Muxing);
        let output = self.output_path(&safe_title);
        mux_streams(&self.settings.ffmpeg_path, &temps.video, &temps.audio, &output).await?;
        drop(temps);

        let shown = dunce::canonicalize(&output).unwrap_or_else(|_| output.clone());
        ui::success(&format!("下载完成！文件保存到: {}", shown.display()));
        Ok(output)
    }
}

/// 只接受 http(s) 链接，在发出任何请求之前拒绝明显无效的条目
fn validate_url(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| AppError::InvalidTarget(format!("无法解析 URL '{}': {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::InvalidTarget(format!("不支持的协议: {}", other))),
    }
}

#[async_trait]
impl TargetJob for BilibiliJob {
    type Target = DownloadTarget;

    fn label(&self, target: &DownloadTarget) -> String {
        target.name.clone()
    }

    fn url<'a>(&self, target: &'a DownloadTarget) -> &'a str {
        &target.url
    }

    async fn process(&self, target: &DownloadTarget) -> AppResult<TargetOutcome> {
        self.download(target).await.map(TargetOutcome::Downloaded)
    }
}
