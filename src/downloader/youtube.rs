// src/downloader/youtube.rs

use super::{TargetJob, existing};
use crate::{
    config::YoutubeSettings,
    constants::youtube,
    error::*,
    extractor::ytdlp::YtDlp,
    models::{TargetOutcome, YoutubeTarget},
    ui, utils,
};
use async_trait::async_trait;
use log::{info, warn};
use std::{fs, path::PathBuf};

/// 基于 yt-dlp 的下载流程：查询信息 → 跳过已存在 → 检查可访问性 → 下载
pub struct YoutubeJob {
    ytdlp: YtDlp,
    settings: YoutubeSettings,
}

impl YoutubeJob {
    pub fn new(settings: YoutubeSettings) -> Self {
        Self {
            ytdlp: YtDlp::new(settings.ytdlp_path.clone()),
            settings,
        }
    }

    /// 分类不为空且不是“未分类”时使用子目录
    pub fn category_dir(&self, target: &YoutubeTarget) -> PathBuf {
        let base = PathBuf::from(&self.settings.output_directory);
        let category = target.category.trim();
        if category.is_empty() || category == youtube::UNCATEGORIZED {
            base
        } else {
            base.join(utils::clean_filename(category))
        }
    }
}

#[async_trait]
impl TargetJob for YoutubeJob {
    type Target = YoutubeTarget;

    fn label(&self, target: &YoutubeTarget) -> String {
        target.description.clone()
    }

    fn url<'a>(&self, target: &'a YoutubeTarget) -> &'a str {
        &target.url
    }

    async fn process(&self, target: &YoutubeTarget) -> AppResult<TargetOutcome> {
        let url = target.url.trim();
        if url.is_empty() {
            return Err(AppError::InvalidTarget("缺少URL".into()));
        }
        ui::info(&format!("分类: {}", target.category));
        ui::info(&format!("URL: {}", url));

        let output_dir = self.category_dir(target);
        fs::create_dir_all(&output_dir)?;

        ui::plain(&format!("正在分析: {}", url));
        let info = self.ytdlp.fetch_info(url).await?;

        if self.settings.skip_existing {
            let title = utils::clean_filename(&info.title);
            if let Some(path) = existing::find_existing(&output_dir, &title) {
                info!("'{}' 已存在于 {}，跳过", title, path.display());
                return Ok(TargetOutcome::Skipped(path));
            }
        }

        if let Some(reason) = info.availability().restriction() {
            warn!("{} 不可访问: {}", url, reason);
            return Err(AppError::ContentUnavailable(reason.into()));
        }

        let na = || "N/A".to_string();
        ui::plain(&format!("标题: {}", info.title));
        ui::plain(&format!("频道: {}", info.uploader.clone().unwrap_or_else(na)));
        ui::plain(&format!(
            "时长: {}",
            info.duration.map(utils::format_seconds).unwrap_or_else(na)
        ));
        ui::plain(&format!(
            "观看次数: {}",
            info.view_count.map(|v| v.to_string()).unwrap_or_else(na)
        ));

        ui::plain("开始下载...");
        self.ytdlp.download(url, &output_dir, &self.settings).await?;
        ui::success("下载完成！");
        let saved = existing::find_existing(&output_dir, &utils::clean_filename(&info.title))
            .unwrap_or(output_dir);
        Ok(TargetOutcome::Downloaded(saved))
    }
}
