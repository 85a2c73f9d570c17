// src/client.rs

use crate::{
    config::Settings,
    constants::bilibili,
    error::*,
    models::DownloadTarget,
};
use log::debug;
use reqwest::{
    Response,
    header::{self, HeaderMap, HeaderValue},
};

/// 页面与音视频流共用的 HTTP 客户端。不做重试，非 2xx 直接作为网络错误返回。
#[derive(Clone)]
pub struct PageClient {
    pub client: reqwest::Client,
    user_agent: String,
}

impl PageClient {
    pub fn new(settings: &Settings) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .connect_timeout(settings.connect_timeout())
            .read_timeout(settings.read_timeout())
            .build()?;
        Ok(Self {
            client,
            user_agent: settings.user_agent.clone(),
        })
    }

    /// 为某个条目构建请求头: Referer、User-Agent、Cookie、Origin。
    pub fn target_headers(&self, target: &DownloadTarget) -> AppResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(header::REFERER, HeaderValue::from_str(&target.url)?);
        headers.insert(header::USER_AGENT, HeaderValue::from_str(&self.user_agent)?);
        if !target.cookie.is_empty() {
            headers.insert(header::COOKIE, HeaderValue::from_str(&target.cookie)?);
        }
        headers.insert(header::ORIGIN, HeaderValue::from_static(bilibili::ORIGIN));
        Ok(headers)
    }

    pub async fn get(&self, url: &str, headers: HeaderMap) -> AppResult<Response> {
        debug!("GET {}", url);
        let res = self.client.get(url).headers(headers).send().await?;
        debug!("响应状态: {}", res.status());
        Ok(res.error_for_status()?)
    }

    pub async fn fetch_text(&self, url: &str, headers: HeaderMap) -> AppResult<String> {
        Ok(self.get(url, headers).await?.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_headers() {
        let client = PageClient::new(&Settings::default()).unwrap();
        let target = DownloadTarget {
            name: "n".into(),
            url: "https://www.bilibili.com/video/BV1xx/".into(),
            cookie: "SESSDATA=abc".into(),
        };
        let headers = client.target_headers(&target).unwrap();
        assert_eq!(headers[header::REFERER], "https://www.bilibili.com/video/BV1xx/");
        assert_eq!(headers[header::COOKIE], "SESSDATA=abc");
        assert_eq!(headers[header::ORIGIN], "https://www.bilibili.com");
        assert_eq!(headers[header::USER_AGENT], bilibili::USER_AGENT);

        let bad = DownloadTarget { cookie: "a\nb".into(), ..target };
        assert!(matches!(client.target_headers(&bad), Err(AppError::InvalidHeader(_))));
    }
}
