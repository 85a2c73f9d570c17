// src/extractor/ytdlp.rs

use crate::{
    config::YoutubeSettings,
    constants::youtube,
    error::{AppError, AppResult},
    models::ytdlp::VideoInfo,
};
use log::{debug, error, info};
use std::{path::Path, process::Stdio};
use tokio::process::Command;

/// 外部 `yt-dlp` 程序的薄封装
pub struct YtDlp {
    program: String,
}

impl YtDlp {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    /// 只获取视频信息，不下载
    pub async fn fetch_info(&self, url: &str) -> AppResult<VideoInfo> {
        debug!("yt-dlp 获取信息: {}", url);
        let output = Command::new(&self.program)
            .args(["--dump-json", "--no-playlist", "--no-warnings", url])
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| AppError::Extractor(format!("无法启动 '{}': {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("yt-dlp 获取信息失败 ({}): {}", output.status, stderr.trim());
            return Err(classify_failure(&stderr));
        }
        let info: VideoInfo = serde_json::from_slice(&output.stdout)?;
        debug!("yt-dlp 返回标题: '{}'", info.title);
        Ok(info)
    }

    /// 下载到 `output_dir`，文件名由 yt-dlp 按标题生成
    pub async fn download(&self, url: &str, output_dir: &Path, settings: &YoutubeSettings) -> AppResult<()> {
        let template = output_dir.join(youtube::OUTPUT_TEMPLATE);
        let mut cmd = Command::new(&self.program);
        cmd.arg("-f")
            .arg(&settings.video_quality)
            .arg("-o")
            .arg(&template)
            .arg("--no-playlist");
        if settings.download_info {
            cmd.arg("--write-info-json");
        }
        if settings.download_subtitles {
            cmd.arg("--write-subs");
        }
        cmd.arg(url).stdin(Stdio::null()).stdout(Stdio::inherit()).stderr(Stdio::piped());

        info!("yt-dlp 开始下载: {} -> {}", url, output_dir.display());
        // output() 会强制把 stdout 改为管道，这里需要让下载进度直接显示在终端上
        let output = cmd
            .spawn()
            .map_err(|e| AppError::Extractor(format!("无法启动 '{}': {}", self.program, e)))?
            .wait_with_output()
            .await?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("yt-dlp 下载失败 ({}): {}", output.status, stderr.trim());
            Err(classify_failure(&stderr))
        }
    }
}

/// 根据 yt-dlp 的错误输出给出更友好的失败原因
pub fn classify_failure(stderr: &str) -> AppError {
    if stderr.contains("Private video") {
        AppError::ContentUnavailable("私有视频：需要登录才能访问".into())
    } else if stderr.contains("Video unavailable") {
        AppError::ContentUnavailable("视频不可用：可能已被删除或受地区限制".into())
    } else if stderr.contains("Sign in to confirm your age") {
        AppError::ContentUnavailable("年龄限制：需要登录确认年龄".into())
    } else {
        let last_line = stderr.lines().rev().find(|l| !l.trim().is_empty()).unwrap_or("未知错误");
        AppError::Extractor(last_line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_failure() {
        let e = classify_failure("ERROR: [youtube] abc: Private video. Sign in if you've been granted access");
        assert!(matches!(e, AppError::ContentUnavailable(ref m) if m.contains("私有视频")));

        let e = classify_failure("ERROR: [youtube] abc: Video unavailable");
        assert!(matches!(e, AppError::ContentUnavailable(ref m) if m.contains("不可用")));

        let e = classify_failure("ERROR: Sign in to confirm your age. This video may be inappropriate");
        assert!(matches!(e, AppError::ContentUnavailable(ref m) if m.contains("年龄限制")));

        let e = classify_failure("WARNING: x\nERROR: Requested format is not available\n\n");
        assert!(matches!(e, AppError::Extractor(ref m) if m == "ERROR: Requested format is not available"));

        assert!(matches!(classify_failure(""), AppError::Extractor(ref m) if m == "未知错误"));
    }
}
