// src/models/playinfo.rs

//! 页面内嵌的 `__playinfo__` 结构，只保留解析音视频地址所需的字段。

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PlayInfo {
    pub data: PlayData,
}

#[derive(Debug, Deserialize)]
pub struct PlayData {
    pub dash: Dash,
}

#[derive(Debug, Deserialize)]
pub struct Dash {
    pub video: Vec<Representation>,
    pub audio: Vec<Representation>,
}

#[derive(Debug, Deserialize)]
pub struct Representation {
    #[serde(rename = "baseUrl", alias = "base_url")]
    pub base_url: String,
    pub id: Option<u32>,
    pub codecs: Option<String>,
    pub bandwidth: Option<u64>,
}
