// src/models/ytdlp.rs

use serde::{Deserialize, Deserializer};

/// yt-dlp 对缺失的字段有时输出 `null`，按空字符串处理
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `yt-dlp --dump-json` 输出中用到的字段
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoInfo {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    pub uploader: Option<String>,
    pub duration: Option<f64>,
    pub view_count: Option<u64>,
    pub availability: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Public,
    Private,
    PremiumOnly,
    SubscriberOnly,
}

impl VideoInfo {
    pub fn availability(&self) -> Availability {
        match self.availability.as_deref() {
            Some("private") => Availability::Private,
            Some("premium_only") => Availability::PremiumOnly,
            Some("subscriber_only") => Availability::SubscriberOnly,
            _ => Availability::Public,
        }
    }
}

impl Availability {
    /// 受限时返回面向用户的原因
    pub fn restriction(self) -> Option<&'static str> {
        match self {
            Availability::Public => None,
            Availability::Private => Some("私有视频，需要登录才能访问"),
            Availability::PremiumOnly => Some("付费视频"),
            Availability::SubscriberOnly => Some("仅限订阅者的视频"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_parsing() {
        let info: VideoInfo = serde_json::from_str(
            r#"{"title":"t","availability":"premium_only","duration":12.5,"extra":[1,2]}"#,
        )
        .unwrap();
        assert_eq!(info.availability(), Availability::PremiumOnly);
        assert_eq!(info.availability().restriction(), Some("付费视频"));

        let info: VideoInfo = serde_json::from_str(r#"{"title":"t","availability":null}"#).unwrap();
        assert_eq!(info.availability(), Availability::Public);
        assert!(info.availability().restriction().is_none());
    }

    #[test]
    fn test_null_or_missing_title_is_empty() {
        let info: VideoInfo = serde_json::from_str(r#"{"title":null,"uploader":null}"#).unwrap();
        assert_eq!(info.title, "");
        assert!(info.uploader.is_none());

        let info: VideoInfo = serde_json::from_str(r#"{"view_count":3}"#).unwrap();
        assert_eq!(info.title, "");
        assert_eq!(info.view_count, Some(3));
    }
}
