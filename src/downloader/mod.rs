// src/downloader/mod.rs

mod batch;
mod bilibili;
pub mod existing;
mod muxer;
mod stream;
mod youtube;

pub use batch::{TargetJob, run_batch};
pub use bilibili::BilibiliJob;
pub use muxer::{TempFiles, mux_streams, remove_active_temp_files};
pub use stream::download_to_file;
pub use youtube::YoutubeJob;

use crate::{
    models::{FailureKind, FailureRecord},
    ui,
};
use colored::*;
use indicatif::HumanDuration;
use log::info;
use std::{collections::BTreeMap, time::Duration};

/// 一次批量运行的统计，只由批量循环持有和更新
#[derive(Debug, Clone, Default)]
pub struct RunStatistics {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
    pub elapsed: Duration,
    pub interrupted: bool,
    pub failures: Vec<FailureRecord>,
}

impl RunStatistics {
    pub fn new(total: usize) -> Self {
        Self { total, ..Default::default() }
    }

    /// 已经处理完（成功、失败或跳过）的条目数
    pub fn processed(&self) -> usize {
        self.succeeded + self.failed + self.skipped
    }

    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    pub fn record_failure(&mut self, record: FailureRecord) {
        log::error!(
            "条目 #{} '{}' 失败 ({:?}): {}",
            record.index, record.label, record.kind, record.message
        );
        self.failed += 1;
        self.failures.push(record);
    }

    pub fn print_report(&self) {
        info!(
            "下载报告: Total={}, Success={}, Skipped={}, Failed={}, Elapsed={:?}",
            self.total, self.succeeded, self.skipped, self.failed, self.elapsed
        );

        if !self.failures.is_empty() {
            ui::print_sub_header("失败详情");
            print_grouped_failures(&self.failures);
        }

        ui::print_header("下载完成！");
        println!("总计: {} 个视频", self.total);
        println!("{}", format!("成功: {} 个", self.succeeded).green());
        if self.skipped > 0 {
            println!("{}", format!("跳过: {} 个", self.skipped).cyan());
        }
        println!("{}", format!("失败: {} 个", self.failed).red());
        if self.interrupted {
            println!(
                "{}",
                format!("未处理: {} 个 (用户中断)", self.total - self.processed()).yellow()
            );
        }
        println!("耗时: {}", HumanDuration(self.elapsed));
    }
}

// 按失败原因分组打印
fn print_grouped_failures(items: &[FailureRecord]) {
    let mut grouped: BTreeMap<FailureKind, Vec<&FailureRecord>> = BTreeMap::new();
    for record in items {
        grouped.entry(record.kind).or_default().push(record);
    }
    for (kind, records) in grouped {
        let (symbol, color_fn, reason) = kind.get_display_info();
        println!("  {} {}", symbol, color_fn(format!("原因: {}", reason).into()));
        for r in records {
            println!("    {}. {}", r.index, r.label);
            println!("       {}", r.url);
            println!("       {}", r.message.dimmed());
        }
    }
}
