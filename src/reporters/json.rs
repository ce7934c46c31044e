//! JSON reporter
//!
//! Field names and nesting are consumed by external tooling; keep them stable.

use crate::models::{PostDescription, ScanSummary};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    summary: ScanSummary,
    posts: &'a [PostDescription],
}

/// Render results as pretty-printed JSON
pub fn render(posts: &[PostDescription]) -> Result<String> {
    let report = JsonReport {
        summary: ScanSummary::from_posts(posts),
        posts,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{post, test_posts};
    use crate::models::DescriptionStatus;

    #[test]
    fn test_json_schema() {
        let json_str = render(&test_posts()).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["total"], 4);
        assert_eq!(parsed["ok"], 1);
        assert_eq!(parsed["problems"], 3);

        let posts = parsed["posts"].as_array().expect("posts array");
        assert_eq!(posts.len(), 4);
        assert_eq!(posts[1]["filename"], "b.md");
        assert_eq!(posts[1]["title"], "Title of b.md");
        assert_eq!(posts[1]["description"], "Hi");
        assert_eq!(posts[1]["length"], 2);
        assert_eq!(posts[1]["status"], "too_short");
        assert_eq!(posts[1]["issue"], "too short (2 < 80)");
        assert!(posts[2]["issue"].is_null());
    }

    #[test]
    fn test_json_field_order() {
        let json_str = render(&test_posts()).unwrap();
        let keys = ["\"total\"", "\"ok\"", "\"problems\"", "\"posts\""];
        let positions: Vec<_> = keys.iter().map(|k| json_str.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let post_keys = ["\"filename\"", "\"title\"", "\"description\"", "\"length\"", "\"status\"", "\"issue\""];
        let positions: Vec<_> = post_keys.iter().map(|k| json_str.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_json_is_indented_and_unescaped() {
        let posts = vec![post("zh.md", "章節...", DescriptionStatus::Placeholder, Some("placeholder text"))];
        let json_str = render(&posts).unwrap();
        assert!(json_str.contains("\n  \"total\": 1"));
        assert!(json_str.contains("章節..."));
        assert!(!json_str.contains("\\u"));
    }

    #[test]
    fn test_json_empty() {
        let parsed: serde_json::Value = serde_json::from_str(&render(&[]).unwrap()).unwrap();
        assert_eq!(parsed["total"], 0);
        assert_eq!(parsed["ok"], 0);
        assert_eq!(parsed["problems"], 0);
        assert_eq!(parsed["posts"].as_array().unwrap().len(), 0);
    }
}
