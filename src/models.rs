//! Core data models for check-descriptions
//!
//! These models are shared by the scanner, the reporters and the fixer.

use serde::Serialize;

/// Default minimum description length (SEO recommendation)
pub const DEFAULT_MIN_LENGTH: usize = 80;

/// Maximum description length before search engines truncate the snippet
pub const MAX_DESCRIPTION_LENGTH: usize = 160;

/// Title shown for posts without a `title` key
pub const UNTITLED: &str = "(untitled)";

/// Quality status of a post description, in classification priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionStatus {
    Empty,
    Placeholder,
    TooShort,
    TooLong,
    Ok,
}

impl DescriptionStatus {
    /// Non-ok statuses in report order
    pub const PROBLEMS: [DescriptionStatus; 4] = [
        DescriptionStatus::Empty,
        DescriptionStatus::Placeholder,
        DescriptionStatus::TooShort,
        DescriptionStatus::TooLong,
    ];

    pub fn is_ok(&self) -> bool {
        matches!(self, DescriptionStatus::Ok)
    }

    /// Group heading used by the text report
    pub fn label(&self) -> &'static str {
        match self {
            DescriptionStatus::Empty => "Empty",
            DescriptionStatus::Placeholder => "Placeholder",
            DescriptionStatus::TooShort => "Too short",
            DescriptionStatus::TooLong => "Too long",
            DescriptionStatus::Ok => "OK",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DescriptionStatus::Empty => "❌",
            DescriptionStatus::Placeholder => "⚠️",
            DescriptionStatus::TooShort | DescriptionStatus::TooLong => "📏",
            DescriptionStatus::Ok => "✅",
        }
    }
}

impl std::fmt::Display for DescriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DescriptionStatus::Empty => write!(f, "empty"),
            DescriptionStatus::Placeholder => write!(f, "placeholder"),
            DescriptionStatus::TooShort => write!(f, "too_short"),
            DescriptionStatus::TooLong => write!(f, "too_long"),
            DescriptionStatus::Ok => write!(f, "ok"),
        }
    }
}

/// Length window considered ideal for a description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub min_length: usize,
    pub max_length: usize,
}

impl Thresholds {
    /// Thresholds with a custom minimum; the maximum is fixed
    pub fn with_min(min_length: usize) -> Self {
        Self {
            min_length,
            max_length: MAX_DESCRIPTION_LENGTH,
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::with_min(DEFAULT_MIN_LENGTH)
    }
}

/// Description info for one scanned post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDescription {
    pub filename: String,
    pub title: String,
    pub description: String,
    pub length: usize,
    pub status: DescriptionStatus,
    pub issue: Option<String>,
}

/// Totals over a scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub total: usize,
    pub ok: usize,
    pub problems: usize,
}

impl ScanSummary {
    pub fn from_posts(posts: &[PostDescription]) -> Self {
        let ok = posts.iter().filter(|p| p.status.is_ok()).count();
        Self {
            total: posts.len(),
            ok,
            problems: posts.len() - ok,
        }
    }
}

/// Number of characters (not bytes) in `s`
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Truncate to `max` characters, appending `...` when anything was cut
pub fn truncate_chars(s: &str, max: usize) -> String {
    if char_len(s) > max {
        let head: String = s.chars().take(max).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(status: DescriptionStatus) -> PostDescription {
        PostDescription {
            filename: "a.md".into(),
            title: "A".into(),
            description: String::new(),
            length: 0,
            status,
            issue: None,
        }
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&DescriptionStatus::TooShort).unwrap();
        assert_eq!(json, "\"too_short\"");
        assert_eq!(DescriptionStatus::TooLong.to_string(), "too_long");
    }

    #[test]
    fn test_summary_counts() {
        let posts = vec![
            post(DescriptionStatus::Ok),
            post(DescriptionStatus::Empty),
            post(DescriptionStatus::TooLong),
        ];
        let s = ScanSummary::from_posts(&posts);
        assert_eq!(s.total, 3);
        assert_eq!(s.ok, 1);
        assert_eq!(s.problems, 2);
        assert_eq!(ScanSummary::from_posts(&[]), ScanSummary::default());
    }

    #[test]
    fn test_truncate_chars_is_utf8_safe() {
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("abcd", 3), "abc...");
        assert_eq!(truncate_chars("章節章節", 2), "章節...");
        assert_eq!(char_len("章節..."), 5);
    }

    #[test]
    fn test_default_thresholds() {
        let t = Thresholds::default();
        assert_eq!(t.min_length, 80);
        assert_eq!(t.max_length, 160);
        assert_eq!(Thresholds::with_min(50).max_length, 160);
    }
}
