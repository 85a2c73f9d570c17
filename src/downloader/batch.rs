// src/downloader/batch.rs

use super::RunStatistics;
use crate::{
    constants,
    error::*,
    models::{FailureKind, FailureRecord, TargetOutcome},
    ui::{self, symbols},
    utils,
};
use async_trait::async_trait;
use colored::*;
use log::{info, warn};
use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::{Duration, Instant},
};

/// 一种下载流程：对单个条目从头到尾执行一次，结果要么成功要么带原因的失败。
#[async_trait]
pub trait TargetJob: Send + Sync {
    type Target: Send + Sync;

    /// 用于进度行与报告的显示名
    fn label(&self, target: &Self::Target) -> String;
    fn url<'a>(&self, target: &'a Self::Target) -> &'a str;
    async fn process(&self, target: &Self::Target) -> AppResult<TargetOutcome>;
}

/// 顺序处理所有条目。单个条目的失败只计数，不会中断整个批次；
/// 条目之间（最后一个之后除外）等待 `delay`。
pub async fn run_batch<J: TargetJob>(
    job: &J,
    targets: &[J::Target],
    delay: Duration,
    cancellation_token: &AtomicBool,
) -> RunStatistics {
    let start = Instant::now();
    let mut stats = RunStatistics::new(targets.len());
    info!("开始批量任务，共 {} 个条目", targets.len());

    for (i, target) in targets.iter().enumerate() {
        let index = i + 1;
        if cancellation_token.load(Ordering::Relaxed) {
            warn!("用户中断，剩余 {} 个条目未处理", targets.len() - i);
            stats.interrupted = true;
            break;
        }

        let label = job.label(target);
        ui::print_sub_header(&format!(
            "进度: {}/{} - {}",
            index,
            targets.len(),
            utils::truncate_text(&label, constants::LABEL_TRUNCATE_LENGTH)
        ));

        match job.process(target).await {
            Ok(TargetOutcome::Downloaded(path)) => {
                stats.record_success();
                println!("{} 第 {} 个视频下载成功: {}", *symbols::OK, index, path.display());
            }
            Ok(TargetOutcome::Skipped(path)) => {
                stats.record_skip();
                println!("{} 第 {} 个视频已存在，跳过: {}", *symbols::SKIP, index, path.display());
            }
            Err(e) => {
                let kind = FailureKind::from(&e);
                let (symbol, color_fn, reason) = kind.get_display_info();
                eprintln!(
                    "{} 第 {} 个视频下载失败: {}",
                    symbol,
                    index,
                    color_fn(format!("{} ({})", reason, e).into())
                );
                stats.record_failure(FailureRecord {
                    index,
                    label,
                    url: job.url(target).to_string(),
                    kind,
                    message: e.to_string(),
                });
            }
        }

        if index < targets.len() && !delay.is_zero() && !cancellation_token.load(Ordering::Relaxed) {
            println!("{}", format!("等待{}秒后继续下载下一个视频...", delay.as_secs()).dimmed());
            tokio::time::sleep(delay).await;
        }
    }

    stats.elapsed = start.elapsed();
    stats
}
