// src/extractor/mod.rs

pub mod bilibili;
pub mod ytdlp;

use log::trace;
use regex::Regex;

/// 按优先级依次尝试各个正则，返回第一个“匹配且能被 `parse` 接受”的结果。
///
/// 每个正则只看第一个匹配的第一个捕获组；`parse` 返回 `None` 时继续尝试下一个。
pub fn first_match<T, F>(text: &str, patterns: &[Regex], mut parse: F) -> Option<T>
where
    F: FnMut(&str) -> Option<T>,
{
    patterns.iter().enumerate().find_map(|(i, re)| {
        let captured = re.captures(text)?.get(1)?.as_str();
        let parsed = parse(captured);
        trace!("模式 #{} 命中，解析{}", i + 1, if parsed.is_some() { "成功" } else { "失败" });
        parsed
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_skips_unparseable_candidates() {
        let patterns = vec![
            Regex::new(r"a=(\w+)").unwrap(),
            Regex::new(r"b=(\d+)").unwrap(),
            Regex::new(r"c=(\d+)").unwrap(),
        ];
        // a 匹配但不是数字，b 不存在，c 成功
        let got = first_match("a=xx c=42 c=7", &patterns, |s| s.parse::<u32>().ok());
        assert_eq!(got, Some(42));

        let none = first_match("nothing here", &patterns, |s| Some(s.to_string()));
        assert_eq!(none, None);
    }
}
