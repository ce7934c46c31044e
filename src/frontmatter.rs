//! Flat front-matter extraction
//!
//! Reads the leading `---` block of a Markdown post as `key: value` lines.
//! This is a line scanner, not a YAML parser: lists, nested maps and
//! multi-line values come through as opaque strings or are ignored.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Front-matter keys and their (trimmed, unquoted) values
pub type FrontMatter = BTreeMap<String, String>;

static FRONT_MATTER_BLOCK: OnceLock<Regex> = OnceLock::new();

fn block_regex() -> &'static Regex {
    // Opening fence, then the shortest block up to the first line starting with `---`
    FRONT_MATTER_BLOCK
        .get_or_init(|| Regex::new(r"(?s)\A---\s*\n(.*?)\n---").expect("valid regex"))
}

/// Extract the front matter of `content`.
///
/// Returns an empty map when the document does not open with a `---` block.
/// Later duplicate keys overwrite earlier ones.
pub fn extract_front_matter(content: &str) -> FrontMatter {
    let mut front_matter = FrontMatter::new();

    let Some(block) = block_regex().captures(content).and_then(|c| c.get(1)) else {
        return front_matter;
    };

    for line in block.as_str().lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        front_matter.insert(key.trim().to_string(), unquote(value.trim()).to_string());
    }

    front_matter
}

/// Strip one layer of matching single or double quotes
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
