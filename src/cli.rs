// src/cli.rs

use clap::{Parser, ValueEnum, command, crate_version};
use std::path::PathBuf;

/// 定义日志输出级别
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// 示例配置文件的种类
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigKind {
    Bilibili,
    Youtube,
}

#[derive(Parser, Debug, Clone)]
#[command(
    version = crate_version!(),
    about,
    long_about = None,
    arg_required_else_help = true,
    disable_help_flag = true,
    disable_version_flag = true,
)]
#[command(group(
    clap::ArgGroup::new("mode")
        .required(true)
        .args(&["config", "youtube", "init"]),
))]
pub struct Cli {
    // --- 运行模式 (Mode) ---
    /// 按配置文件批量下载 B 站视频 (抓取页面 + FFmpeg 合并)
    #[arg(short, long, value_name = "FILE", help_heading = "Mode")]
    pub config: Option<PathBuf>,
    /// 按配置文件批量下载 yt-dlp 支持的视频
    #[arg(short, long, value_name = "FILE", help_heading = "Mode")]
    pub youtube: Option<PathBuf>,
    /// 在当前目录生成示例配置文件并退出
    #[arg(long, value_enum, value_name = "KIND", help_heading = "Mode")]
    pub init: Option<ConfigKind>,

    // --- 通用选项 (General) ---
    /// 显示此帮助信息并退出
    #[arg(short = 'h', long, action = clap::ArgAction::Help, global = true, help_heading = "General")]
    _help: Option<bool>,
    /// 显示版本信息并退出
    #[arg(short = 'V', long, action = clap::ArgAction::Version, global = true, help_heading = "General")]
    _version: Option<bool>,
    /// (隐藏参数) 设置日志文件的输出级别，用于调试
    #[arg(long, value_enum, default_value_t = LogLevel::Off, global = true, hide = true)]
    pub log_level: LogLevel,
}

impl LogLevel {
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
