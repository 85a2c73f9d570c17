// src/lib.rs

pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod downloader;
pub mod error;
pub mod extractor;
pub mod models;
pub mod ui;
pub mod utils;
pub mod workflows;

use crate::{cli::Cli, config::sample, error::AppResult};
use log::debug;
use std::{path::Path, sync::atomic::AtomicBool};

/// 库的公共入口点，由 `main.rs` 调用
pub async fn run_from_cli(args: &Cli, cancellation_token: &AtomicBool) -> AppResult<()> {
    debug!("CLI 参数: {:?}", args);

    if let Some(kind) = args.init {
        let path = Path::new(sample::default_file_name(kind));
        workflows::init_sample(kind, path)?;
    } else if let Some(path) = &args.config {
        workflows::run_bilibili(path, cancellation_token).await?;
    } else if let Some(path) = &args.youtube {
        workflows::run_youtube(path, cancellation_token).await?;
    }

    Ok(())
}
