// src/downloader/muxer.rs

use crate::error::*;
use log::{debug, error, info, warn};
use std::{
    fs,
    path::{Path, PathBuf},
    process::Stdio,
    sync::{Mutex, MutexGuard},
};
use tokio::process::Command;

/// 当前存活的 `TempFiles` 登记的路径，供强制退出时清理
static ACTIVE_TEMP_FILES: Mutex<Vec<PathBuf>> = Mutex::new(Vec::new());

fn active() -> MutexGuard<'static, Vec<PathBuf>> {
    ACTIVE_TEMP_FILES.lock().unwrap_or_else(|e| e.into_inner())
}

fn remove_if_exists(path: &Path) -> bool {
    if !path.exists() {
        return false;
    }
    match fs::remove_file(path) {
        Ok(()) => {
            debug!("已删除临时文件 '{}'", path.display());
            true
        }
        Err(e) => {
            warn!("删除临时文件 '{}' 失败: {}", path.display(), e);
            false
        }
    }
}

/// `std::process::exit` 不会运行 Drop，强制退出前调用此函数删除仍在登记中的临时文件。
/// 返回实际删除的文件数。
pub fn remove_active_temp_files() -> usize {
    let paths: Vec<PathBuf> = active().drain(..).collect();
    paths.iter().filter(|p| remove_if_exists(p)).count()
}

/// 一个条目的临时音视频文件。离开作用域时删除仍然存在的文件，
/// 因此成功、失败和提前返回的路径都会清理。
pub struct TempFiles {
    pub video: PathBuf,
    pub audio: PathBuf,
}

impl TempFiles {
    pub fn new(temp_dir: &Path, safe_title: &str) -> Self {
        let temps = Self {
            video: temp_dir.join(format!("video_{}.m4s", safe_title)),
            audio: temp_dir.join(format!("audio_{}.m4s", safe_title)),
        };
        active().extend([temps.video.clone(), temps.audio.clone()]);
        temps
    }
}

impl Drop for TempFiles {
    fn drop(&mut self) {
        active().retain(|p| p != &self.video && p != &self.audio);
        for path in [&self.video, &self.audio] {
            remove_if_exists(path);
        }
    }
}

/// 调用外部编码器合并音视频：视频流直接复制，音频转为 AAC，并把元数据前置。
/// 失败时删除可能残留的半成品输出文件。
pub async fn mux_streams(ffmpeg: &str, video: &Path, audio: &Path, output: &Path) -> AppResult<()> {
    info!("合并 '{}' + '{}' -> '{}'", video.display(), audio.display(), output.display());
    let result = Command::new(ffmpeg)
        .arg("-i")
        .arg(video)
        .arg("-i")
        .arg(audio)
        .args(["-c:v", "copy", "-c:a", "aac", "-movflags", "+faststart", "-y"])
        .arg(output)
        .stdin(Stdio::null())
        .output()
        .await;

    let failure = match result {
        Ok(out) if out.status.success() => return Ok(()),
        Ok(out) => {
            let stderr = String::from_utf8_lossy(&out.stderr);
            let tail: Vec<&str> = stderr.lines().rev().take(3).collect();
            let detail = tail.into_iter().rev().collect::<Vec<_>>().join(" | ");
            error!("FFmpeg 退出状态 {}: {}", out.status, stderr.trim());
            format!("{} {}", out.status, detail)
        }
        Err(e) => {
            error!("无法启动 FFmpeg '{}': {}", ffmpeg, e);
            format!("无法启动 '{}': {}", ffmpeg, e)
        }
    };

    if output.exists() {
        if let Err(e) = fs::remove_file(output) {
            warn!("删除不完整的输出文件 '{}' 失败: {}", output.display(), e);
        }
    }
    Err(AppError::MuxFailure(failure.trim().to_string()))
}
