//! Output reporters for scan results
//!
//! Supports two output formats:
//! - `text` - Grouped terminal report with a length histogram
//! - `json` - Machine-readable JSON

mod json;
mod text;

use crate::models::{PostDescription, Thresholds};
use anyhow::Result;
use std::path::PathBuf;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Everything the text report needs besides the results themselves
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub thresholds: Thresholds,
    pub posts_dir: PathBuf,
    /// List every post, not only the problems
    pub show_all: bool,
    pub emoji: bool,
}

impl ReportContext {
    /// Pick the emoji or its plain fallback
    pub(crate) fn glyph(&self, emoji: &'static str, plain: &'static str) -> &'static str {
        if self.emoji {
            emoji
        } else {
            plain
        }
    }
}

/// Render scan results in the given format
pub fn report_with_format(
    posts: &[PostDescription],
    ctx: &ReportContext,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(posts, ctx),
        OutputFormat::Json => json::render(posts),
    }
}
