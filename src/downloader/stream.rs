// src/downloader/stream.rs

use crate::{client::PageClient, constants, error::*, ui};
use futures::StreamExt;
use log::{debug, info};
use reqwest::header::HeaderMap;
use std::path::Path;
use tokio::{
    fs::File,
    io::{AsyncWriteExt, BufWriter},
};

/// 将响应体流式写入 `path`，返回写入的字节数。
///
/// 服务器给出 Content-Length 时显示字节进度，否则只下载不显示进度。
/// 非 2xx 状态直接作为网络错误返回，此时不会创建目标文件。
pub async fn download_to_file(
    client: &PageClient,
    url: &str,
    headers: HeaderMap,
    path: &Path,
    label: &str,
) -> AppResult<u64> {
    let res = client.get(url, headers).await?;
    let total = res.content_length();
    debug!("开始写入 '{}'，声明长度: {:?}", path.display(), total);

    let pbar = ui::new_bytes_progress_bar(total, label);
    let mut writer = BufWriter::with_capacity(constants::CHUNK_SIZE, File::create(path).await?);
    let mut downloaded: u64 = 0;

    let mut stream = res.bytes_stream();
    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result?;
        writer.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;
        pbar.set_position(downloaded);
    }
    writer.flush().await?;
    pbar.finish_and_clear();

    let shown = dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    info!("'{}' 下载完成，共 {} 字节", shown.display(), downloaded);
    ui::info(&format!("文件已保存到: {}", shown.display()));
    Ok(downloaded)
}
