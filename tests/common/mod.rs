// tests/common/mod.rs

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};
use vidbatch::{config::Settings, models::DownloadTarget};

/// 写入一个可执行的 shell 脚本，用来替代 ffmpeg / yt-dlp
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// 把最后一个参数（输出路径）写成一个小文件并成功退出
#[cfg(unix)]
pub fn fake_ffmpeg_ok(dir: &Path) -> PathBuf {
    write_script(dir, "ffmpeg-ok", "for last; do :; done\nprintf muxed > \"$last\"\nexit 0")
}

/// 写出半成品输出后以非零状态退出
#[cfg(unix)]
pub fn fake_ffmpeg_fail(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "ffmpeg-fail",
        "for last; do :; done\nprintf partial > \"$last\"\necho 'Invalid data found when processing input' >&2\nexit 1",
    )
}

pub fn test_settings(root: &Path, ffmpeg: &Path) -> Settings {
    Settings {
        output_directory: root.join("out").to_string_lossy().into_owned(),
        temp_directory: root.join("temp").to_string_lossy().into_owned(),
        ffmpeg_path: ffmpeg.to_string_lossy().into_owned(),
        user_agent: "vidbatch-test/1.0".into(),
        delay_secs: 0,
        connect_timeout_secs: 5,
        read_timeout_secs: 15,
    }
}

pub fn target(name: &str, url: String) -> DownloadTarget {
    DownloadTarget {
        name: name.into(),
        url,
        cookie: "SESSDATA=abc".into(),
    }
}

/// 构造一个带标题和内嵌播放信息的页面
pub fn video_page(title: Option<&str>, video_url: &str, audio_url: &str) -> String {
    let title_tag = title
        .map(|t| format!("<title>{}_哔哩哔哩_bilibili</title>", t))
        .unwrap_or_default();
    format!(
        r#"<!DOCTYPE html><html><head>{}</head><body><script>window.__playinfo__={{"code":0,"data":{{"dash":{{"video":[{{"id":80,"baseUrl":"{}","codecs":"avc1.640032"}}],"audio":[{{"id":30280,"baseUrl":"{}"}}]}}}}}}</script></body></html>"#,
        title_tag, video_url, audio_url
    )
}

pub fn files_in(dir: &Path) -> Vec<PathBuf> {
    match fs::read_dir(dir) {
        Ok(entries) => {
            let mut v: Vec<PathBuf> = entries.filter_map(|e| e.ok().map(|e| e.path())).collect();
            v.sort();
            v
        }
        Err(_) => vec![],
    }
}
