// tests/youtube_job_test.rs

#![cfg(unix)]

mod common;

use assert_cmd::Command;
use common::write_script;
use predicates::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};
use vidbatch::{
    config::YoutubeSettings,
    downloader::{TargetJob, YoutubeJob},
    error::AppError,
    models::{TargetOutcome, YoutubeTarget},
};

/// 模拟 yt-dlp：`--dump-json` 时输出给定信息，否则按 `-o` 模板写出一个视频文件。
/// 每次调用的参数都追加到同目录的 calls.log。
fn fake_ytdlp(dir: &Path, info_json: &str) -> PathBuf {
    let body = format!(
        r#"echo "$@" >> "$(dirname "$0")/calls.log"
if [ "$1" = "--dump-json" ]; then
  printf '%s\n' '{info}'
  exit 0
fi
tpl=""
prev=""
for a; do
  if [ "$prev" = "-o" ]; then tpl="$a"; fi
  prev="$a"
done
out=$(printf '%s' "$tpl" | sed -e 's/%(title)s/Demo Clip/' -e 's/%(ext)s/mp4/')
echo "[download]  42.0% of 1.00MiB at 512.00KiB/s"
printf video > "$out""#,
        info = info_json
    );
    write_script(dir, "yt-dlp", &body)
}

fn calls(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("calls.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

fn settings(root: &Path, ytdlp: &Path) -> YoutubeSettings {
    YoutubeSettings {
        output_directory: root.join("videos").to_string_lossy().into_owned(),
        ytdlp_path: ytdlp.to_string_lossy().into_owned(),
        ..Default::default()
    }
}

fn target(category: &str) -> YoutubeTarget {
    YoutubeTarget {
        url: "https://www.youtube.com/watch?v=demo".into(),
        description: "演示".into(),
        category: category.into(),
    }
}

#[tokio::test]
async fn test_downloads_into_category_directory() {
    let dir = tempfile::tempdir().unwrap();
    let ytdlp = fake_ytdlp(
        dir.path(),
        r#"{"title":"Demo Clip","uploader":"someone","duration":75,"view_count":42}"#,
    );
    let job = YoutubeJob::new(settings(dir.path(), &ytdlp));

    let outcome = job.process(&target("music")).await.unwrap();
    let expected = dir.path().join("videos").join("music").join("Demo Clip.mp4");
    assert_eq!(outcome, TargetOutcome::Downloaded(expected.clone()));
    assert!(expected.is_file());

    let calls = calls(dir.path());
    assert_eq!(calls.len(), 2);
    assert!(calls[0].starts_with("--dump-json --no-playlist"));
    assert!(calls[1].starts_with("-f best[height<=720]/best -o"));
    assert!(!calls[1].contains("--write-subs"));
}

#[tokio::test]
async fn test_existing_file_is_skipped_without_download() {
    let dir = tempfile::tempdir().unwrap();
    let ytdlp = fake_ytdlp(dir.path(), r#"{"title":"Demo Clip"}"#);
    let out_dir = dir.path().join("videos");
    fs::create_dir_all(&out_dir).unwrap();
    let existing = out_dir.join("demo clip [1080p].webm");
    fs::write(&existing, "old").unwrap();

    let job = YoutubeJob::new(settings(dir.path(), &ytdlp));
    let outcome = job.process(&target("未分类")).await.unwrap();

    assert_eq!(outcome, TargetOutcome::Skipped(existing));
    assert_eq!(calls(dir.path()).len(), 1, "只应查询信息，不应下载");
}

#[tokio::test]
async fn test_premium_only_video_is_reported_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let ytdlp = fake_ytdlp(dir.path(), r#"{"title":"Paid","availability":"premium_only"}"#);
    let job = YoutubeJob::new(settings(dir.path(), &ytdlp));

    let result = job.process(&target("")).await;
    assert!(
        matches!(result, Err(AppError::ContentUnavailable(ref m)) if m == "付费视频"),
        "{:?}",
        result
    );
    assert_eq!(calls(dir.path()).len(), 1);
}

#[tokio::test]
async fn test_failing_ytdlp_is_classified() {
    let dir = tempfile::tempdir().unwrap();
    let ytdlp = write_script(
        dir.path(),
        "yt-dlp",
        "echo 'ERROR: [youtube] demo: Private video. Sign in if you have been granted access' >&2\nexit 1",
    );
    let job = YoutubeJob::new(settings(dir.path(), &ytdlp));

    let result = job.process(&target("music")).await;
    assert!(matches!(result, Err(AppError::ContentUnavailable(ref m)) if m.contains("私有视频")));
}

#[tokio::test]
async fn test_null_title_bypasses_skip_check_and_downloads() {
    let dir = tempfile::tempdir().unwrap();
    let ytdlp = fake_ytdlp(dir.path(), r#"{"title":null,"uploader":null}"#);
    let out_dir = dir.path().join("videos");
    fs::create_dir_all(&out_dir).unwrap();
    fs::write(out_dir.join("Other.mp4"), "old").unwrap();

    let job = YoutubeJob::new(settings(dir.path(), &ytdlp));
    let outcome = job.process(&target("未分类")).await.unwrap();

    assert_eq!(outcome, TargetOutcome::Downloaded(out_dir.clone()));
    assert_eq!(calls(dir.path()).len(), 2);
    assert!(out_dir.join("Demo Clip.mp4").is_file());
}

#[test]
fn test_ytdlp_progress_reaches_console() {
    let dir = tempfile::tempdir().unwrap();
    let ytdlp = fake_ytdlp(dir.path(), r#"{"title":"Demo Clip"}"#);
    let config = serde_json::json!({
        "download_settings": {
            "output_directory": dir.path().join("videos"),
            "ytdlp_path": ytdlp,
        },
        "videos": [{ "url": "https://www.youtube.com/watch?v=demo", "category": "music" }],
    });
    let config_path = dir.path().join("youtube.json");
    fs::write(&config_path, config.to_string()).unwrap();

    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .arg("-y")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[download]  42.0% of 1.00MiB"))
        .stdout(predicate::str::contains("成功: 1 个"));
    assert!(dir.path().join("videos").join("music").join("Demo Clip.mp4").is_file());
}
