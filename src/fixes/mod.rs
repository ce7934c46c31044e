//! Interactive description fixes
//!
//! Walks the problem posts, asks for a replacement description and rewrites
//! the `description:` line of the post in place. The rewrite is always the
//! double-quoted form `description: "<new>"`.

use crate::models::{char_len, PostDescription};
use anyhow::{Context, Result};
use console::style;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Result of trying to rewrite one post
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    Applied { new_length: usize },
    NotFound,
}

/// Counters for one interactive session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixOutcome {
    pub modified: usize,
    pub skipped: usize,
    pub not_found: usize,
    pub failed: usize,
    /// Session ended with `q` or end of input
    pub stopped_early: bool,
}

/// What the user typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Answer {
    Skip,
    Quit,
    Replace(String),
}

fn parse_answer(line: &str) -> Answer {
    let line = line.trim();
    if line.is_empty() {
        Answer::Skip
    } else if line.eq_ignore_ascii_case("q") {
        Answer::Quit
    } else {
        Answer::Replace(line.to_string())
    }
}

/// Replace the description line in `content`.
///
/// Tries `description: "<old>"` first, then `description: '<old>'`. Every
/// occurrence of the matching form is rewritten. Returns `None` when neither
/// form is present.
pub fn replace_description(content: &str, old: &str, new: &str) -> Option<String> {
    let replacement = format!("description: \"{new}\"");
    [
        format!("description: \"{old}\""),
        format!("description: '{old}'"),
    ]
    .into_iter()
    .find(|pattern| content.contains(pattern.as_str()))
    .map(|pattern| content.replace(&pattern, &replacement))
}

/// Rewrite the description of the post at `path`.
///
/// The file is re-read from disk so earlier edits in the same session are
/// seen. Nothing is written when the old description cannot be located.
pub fn apply_replacement(path: &Path, old: &str, new: &str) -> Result<Replacement> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let Some(updated) = replace_description(&content, old, new) else {
        return Ok(Replacement::NotFound);
    };

    fs::write(path, updated).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(Replacement::Applied {
        new_length: char_len(new),
    })
}

/// Run the interactive fix loop over the non-ok posts.
///
/// Reads one line per problem post from `input`: empty skips, `q` quits,
/// anything else replaces the description. Prompts and results go to
/// `output`.
pub fn run_interactive<R: BufRead, W: Write>(
    posts: &[PostDescription],
    posts_dir: &Path,
    emoji: bool,
    mut input: R,
    mut output: W,
) -> Result<FixOutcome> {
    let glyph = |e: &'static str, plain: &'static str| if emoji { e } else { plain };
    let problems: Vec<&PostDescription> = posts.iter().filter(|p| !p.status.is_ok()).collect();
    let mut outcome = FixOutcome::default();

    if problems.is_empty() {
        writeln!(
            output,
            "{}All descriptions meet the guidelines, nothing to fix!",
            glyph("✅ ", "")
        )?;
        return Ok(outcome);
    }

    writeln!(
        output,
        "\n{}Interactive fix mode - {} posts need attention\n",
        glyph("🔧 ", ""),
        problems.len()
    )?;
    writeln!(
        output,
        "Commands: [Enter] skip | [q] quit | type a new description to replace it\n"
    )?;

    for (i, post) in problems.iter().enumerate() {
        writeln!(
            output,
            "\n[{}/{}] {}",
            i + 1,
            problems.len(),
            style(post.issue.as_deref().unwrap_or_default()).yellow()
        )?;
        writeln!(output, "{}File: {}", glyph("📄 ", ""), post.filename)?;
        writeln!(output, "{}Title: {}", glyph("📝 ", ""), post.title)?;
        writeln!(
            output,
            "{}Current ({} chars): {}",
            glyph("📏 ", ""),
            post.length,
            post.description
        )?;
        write!(output, "\nNew description (Enter to skip, q to quit): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input, stopping fix session");
            outcome.stopped_early = true;
            break;
        }

        let new_description = match parse_answer(&line) {
            Answer::Skip => {
                outcome.skipped += 1;
                continue;
            }
            Answer::Quit => {
                outcome.stopped_early = true;
                break;
            }
            Answer::Replace(text) => text,
        };

        let path = posts_dir.join(&post.filename);
        match apply_replacement(&path, &post.description, &new_description) {
            Ok(Replacement::Applied { new_length }) => {
                writeln!(
                    output,
                    "{}Updated! New length: {} chars",
                    glyph("✅ ", ""),
                    style(new_length).cyan()
                )?;
                outcome.modified += 1;
            }
            Ok(Replacement::NotFound) => {
                warn!("Description line not found in {}", post.filename);
                writeln!(
                    output,
                    "{}Could not locate the original description, please edit {} manually",
                    glyph("⚠️ ", ""),
                    post.filename
                )?;
                outcome.not_found += 1;
            }
            Err(e) => {
                warn!("Failed to update {}: {:#}", post.filename, e);
                writeln!(output, "{}Update failed: {:#}", glyph("❌ ", ""), e)?;
                outcome.failed += 1;
            }
        }
    }

    writeln!(output, "\n{}", "=".repeat(50))?;
    writeln!(
        output,
        "{}Done! Modified {} posts",
        glyph("📊 ", ""),
        outcome.modified
    )?;

    Ok(outcome)
}
