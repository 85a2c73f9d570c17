// src/workflows.rs

use crate::{
    cli::ConfigKind,
    config::{self, BilibiliConfig, YoutubeConfig, sample},
    downloader::{BilibiliJob, RunStatistics, YoutubeJob, run_batch},
    error::{AppError, AppResult},
    ui,
};
use chrono::Local;
use log::{error, info};
use serde::de::DeserializeOwned;
use std::{path::Path, sync::atomic::AtomicBool, time::Duration};

/// 运行 B 站页面流程
pub async fn run_bilibili(config_path: &Path, cancellation_token: &AtomicBool) -> AppResult<RunStatistics> {
    ui::print_header("B站视频批量下载器");
    let config: BilibiliConfig = load_or_offer_sample(config_path, ConfigKind::Bilibili).await?;

    if config.videos.is_empty() {
        ui::warn("配置文件中没有视频信息");
        return Ok(RunStatistics::default());
    }
    ui::info(&format!("找到 {} 个视频待下载", config.videos.len()));

    let delay = config.settings.delay();
    let job = BilibiliJob::new(config.settings)?;
    let stats = run_batch(&job, &config.videos, delay, cancellation_token).await;
    finish(stats)
}

/// 运行 yt-dlp 流程
pub async fn run_youtube(config_path: &Path, cancellation_token: &AtomicBool) -> AppResult<RunStatistics> {
    ui::print_header("YouTube批量视频下载器");
    ui::info(&format!("开始时间: {}", Local::now().format("%Y-%m-%d %H:%M:%S")));
    let config: YoutubeConfig = load_or_offer_sample(config_path, ConfigKind::Youtube).await?;

    if config.videos.is_empty() {
        ui::warn("配置文件中没有找到视频列表");
        return Ok(RunStatistics::default());
    }
    let s = &config.download_settings;
    ui::info(&format!("找到 {} 个视频待下载", config.videos.len()));
    ui::info(&format!("输出目录: {}", s.output_directory));
    ui::info(&format!("视频质量: {}", s.video_quality));
    ui::info(&format!("跳过已存在: {}", if s.skip_existing { "是" } else { "否" }));

    let delay = Duration::from_secs(s.delay_secs);
    let job = YoutubeJob::new(config.download_settings);
    let stats = run_batch(&job, &config.videos, delay, cancellation_token).await;
    let result = finish(stats);
    ui::info(&format!("结束时间: {}", Local::now().format("%Y-%m-%d %H:%M:%S")));
    result
}

/// 在 `path` 写入示例配置
pub fn init_sample(kind: ConfigKind, path: &Path) -> AppResult<()> {
    sample::write_sample(kind, path)?;
    ui::success(&format!("已创建示例配置文件 {}，请修改其中的 URL 和 Cookie", path.display()));
    Ok(())
}

// --- 模块内部辅助函数 ---

/// 加载配置；文件缺失时询问是否生成示例配置，但本次运行仍以错误结束。
async fn load_or_offer_sample<T: DeserializeOwned>(path: &Path, kind: ConfigKind) -> AppResult<T> {
    match config::load_config(path) {
        Err(e @ AppError::ConfigMissing(_)) => {
            error!("{}", e);
            ui::warn(&format!("{}", e));
            let create = ui::interact(|| ui::confirm("是否创建示例配置文件？", false)).await;
            if create == Some(true) {
                init_sample(kind, path)?;
            }
            Err(e)
        }
        other => other,
    }
}

fn finish(stats: RunStatistics) -> AppResult<RunStatistics> {
    stats.print_report();
    if stats.interrupted {
        info!("批量任务被用户中断");
        return Err(AppError::UserInterrupt);
    }
    Ok(stats)
}
