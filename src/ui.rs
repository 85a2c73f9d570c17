// src/ui.rs

use crate::constants;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::{
    io::{self, Write},
    sync::LazyLock,
};

pub mod symbols {
    use colored::{ColoredString, Colorize};
    use std::sync::LazyLock;

    pub static OK: LazyLock<ColoredString> = LazyLock::new(|| "[OK]".green());
    pub static ERROR: LazyLock<ColoredString> = LazyLock::new(|| "[X]".red());
    pub static INFO: LazyLock<ColoredString> = LazyLock::new(|| "[i]".cyan());
    pub static WARN: LazyLock<ColoredString> = LazyLock::new(|| "[!]".yellow());
    pub static SKIP: LazyLock<ColoredString> = LazyLock::new(|| "[>>]".cyan());
    pub static CTRL_C: LazyLock<ColoredString> = LazyLock::new(|| "Ctrl+C".yellow());
}

static BYTES_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::with_template(
        "{prefix:>6} [{bar:36.cyan/blue}] {percent:>3}% {bytes}/{total_bytes} ({bytes_per_sec})",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("=> ")
});

pub fn print_header(title: &str) {
    println!("\n{}", "═".repeat(constants::UI_WIDTH));
    println!(" {}", title.cyan().bold());
    println!("{}", "═".repeat(constants::UI_WIDTH));
}

pub fn print_sub_header(title: &str) {
    println!("\n--- {} ---", title.bold());
}

pub fn plain(msg: &str) {
    println!("{}", msg);
}

pub fn info(msg: &str) {
    println!("{} {}", *symbols::INFO, msg);
}

pub fn warn(msg: &str) {
    println!("{} {}", *symbols::WARN, msg.yellow());
}

pub fn success(msg: &str) {
    println!("{} {}", *symbols::OK, msg.green());
}

pub fn error(msg: &str) {
    eprintln!("{} {}", *symbols::ERROR, msg.red());
}

/// 已知总长度时返回字节进度条，否则返回隐藏的进度条（只下载不显示进度）。
pub fn new_bytes_progress_bar(total: Option<u64>, prefix: &str) -> ProgressBar {
    match total {
        Some(len) if len > 0 => {
            let pbar = ProgressBar::new(len);
            pbar.set_style(BYTES_STYLE.clone());
            pbar.set_prefix(prefix.to_string());
            pbar
        }
        _ => ProgressBar::hidden(),
    }
}

pub fn prompt(message: &str, default: Option<&str>) -> io::Result<String> {
    let default_str = default.map_or("".to_string(), |d| format!(" (默认: {})", d));
    print!("\n>>> {}{}: ", message, default_str);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim().to_string();
    if input.is_empty() {
        Ok(default.unwrap_or("").to_string())
    } else {
        Ok(input)
    }
}

/// 在阻塞线程池上执行终端交互。运行时是单线程的，直接读 stdin 会让 Ctrl+C 监听无法被轮询。
pub async fn interact<T, F>(f: F) -> Option<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.ok()
}

pub fn confirm(question: &str, default_yes: bool) -> bool {
    let options = if default_yes { "(Y/n)" } else { "(y/N)" };
    loop {
        match prompt(&format!("{} {}", question, options), None) {
            Ok(choice) => {
                let choice = choice.to_lowercase();
                if choice == "y" {
                    return true;
                }
                if choice == "n" {
                    return false;
                }
                if choice.is_empty() {
                    return default_yes;
                }
                println!("{}", "无效输入，请输入 'y' 或 'n'。".red());
            }
            Err(_) => return false,
        }
    }
}
