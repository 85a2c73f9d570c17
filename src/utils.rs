// src/utils.rs

use crate::constants;
use regex::Regex;
use std::sync::LazyLock;

static ILLEGAL_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*]"#).unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// 页面流程的文件名清理：字母、数字、空格、`_`、`-`、`.` 之外的字符一律替换为 `_`。
pub fn sanitize_filename(title: &str) -> String {
    let name: String = title
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, ' ' | '_' | '-' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    safe_truncate_utf8(&name, constants::MAX_FILENAME_BYTES).to_string()
}

/// yt-dlp 流程的标题清理，与 yt-dlp 输出文件名的处理方式保持一致：
/// 删除非法字符并合并连续空白。
pub fn clean_filename(name: &str) -> String {
    let name = ILLEGAL_CHARS_RE.replace_all(name, "");
    WHITESPACE_RE.replace_all(&name, " ").trim().to_string()
}

fn safe_truncate_utf8(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes { return s; }
    let mut i = max_bytes;
    while i > 0 && !s.is_char_boundary(i) { i -= 1; }
    &s[..i]
}

pub fn truncate_text(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut end_pos = 0;
    for (i, c) in text.char_indices() {
        width += if c.is_ascii() { 1 } else { 2 };
        if width > max_width.saturating_sub(3) {
            end_pos = i;
            break;
        }
    }
    if end_pos == 0 { text.to_string() } else { format!("{}...", &text[..end_pos]) }
}

/// 将秒数格式化为 `H:MM:SS` / `M:SS`
pub fn format_seconds(secs: f64) -> String {
    let total = secs.max(0.0).round() as u64;
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    if h > 0 { format!("{}:{:02}:{:02}", h, m, s) } else { format!("{}:{:02}", m, s) }
}
