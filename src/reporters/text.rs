//! Text (terminal) reporter

use super::ReportContext;
use crate::models::{truncate_chars, DescriptionStatus, PostDescription, ScanSummary};
use anyhow::Result;
use console::style;
use std::collections::HashMap;
use std::fmt::Write as _;

const RULE_WIDTH: usize = 70;

const TITLE_WIDTH: usize = 50;
const DESCRIPTION_WIDTH: usize = 60;
const LISTING_WIDTH: usize = 70;

/// Length histogram bins: (min, max inclusive, label)
pub const LENGTH_BINS: [(usize, usize, &str); 6] = [
    (0, 0, "empty (0)"),
    (1, 49, "very short (1-49)"),
    (50, 79, "short (50-79)"),
    (80, 120, "ideal (80-120)"),
    (121, 160, "long (121-160)"),
    (161, usize::MAX, "too long (>160)"),
];

/// Count posts per length bin, in bin order, including empty bins
pub fn length_histogram(posts: &[PostDescription]) -> Vec<(&'static str, usize)> {
    LENGTH_BINS
        .iter()
        .map(|&(min, max, label)| {
            let count = posts
                .iter()
                .filter(|p| (min..=max).contains(&p.length))
                .count();
            (label, count)
        })
        .collect()
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Render results as a grouped terminal report
pub fn render(posts: &[PostDescription], ctx: &ReportContext) -> Result<String> {
    let mut out = String::new();
    let summary = ScanSummary::from_posts(posts);

    render_header(&mut out, &summary, ctx)?;
    if summary.problems > 0 {
        render_problems(&mut out, posts, ctx)?;
    }
    if ctx.show_all {
        render_listing(&mut out, posts, ctx)?;
    }
    render_histogram(&mut out, posts, ctx)?;

    Ok(out)
}

fn render_header(out: &mut String, summary: &ScanSummary, ctx: &ReportContext) -> std::fmt::Result {
    let t = ctx.thresholds;
    writeln!(out, "{}", rule())?;
    writeln!(
        out,
        "{}{}",
        ctx.glyph("📊 ", ""),
        style("SEO Description Report").bold()
    )?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "{}Posts directory: {}", ctx.glyph("📁 ", ""), ctx.posts_dir.display())?;
    writeln!(out, "{}Total posts: {}", ctx.glyph("📄 ", ""), summary.total)?;
    writeln!(out, "{}OK: {}", ctx.glyph("✅ ", ""), summary.ok)?;
    writeln!(out, "{}Needs work: {}", ctx.glyph("⚠️  ", ""), summary.problems)?;
    writeln!(
        out,
        "{}Recommended length: {}-{} characters",
        ctx.glyph("📏 ", ""),
        t.min_length,
        t.max_length
    )?;
    writeln!(out, "{}", rule())
}

fn render_problems(out: &mut String, posts: &[PostDescription], ctx: &ReportContext) -> std::fmt::Result {
    let mut by_status: HashMap<DescriptionStatus, Vec<&PostDescription>> = HashMap::new();
    for p in posts {
        by_status.entry(p.status).or_default().push(p);
    }

    writeln!(out, "\n{}Posts to fix:\n", ctx.glyph("🔴 ", ""))?;

    for status in DescriptionStatus::PROBLEMS {
        let Some(group) = by_status.get(&status) else {
            continue;
        };
        writeln!(
            out,
            "\n### {}{} ({} posts)\n",
            ctx.glyph(status.icon(), ""),
            if ctx.emoji { format!(" {}", status.label()) } else { status.label().to_string() },
            group.len()
        )?;

        for p in group {
            writeln!(out, "  {}{}", ctx.glyph("📄 ", ""), p.filename)?;
            writeln!(out, "     Title: {}", truncate_chars(&p.title, TITLE_WIDTH))?;
            writeln!(
                out,
                "     Description ({} chars): {}",
                p.length,
                truncate_chars(&p.description, DESCRIPTION_WIDTH)
            )?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn render_listing(out: &mut String, posts: &[PostDescription], ctx: &ReportContext) -> std::fmt::Result {
    writeln!(out, "\n{}", rule())?;
    writeln!(out, "{}All post descriptions", ctx.glyph("📋 ", ""))?;
    writeln!(out, "{}\n", rule())?;

    for p in posts {
        let marker = if p.status.is_ok() {
            ctx.glyph("✅", "[ok]")
        } else {
            ctx.glyph("⚠️", "[!!]")
        };
        writeln!(out, "{} [{:>3} chars] {}", marker, p.length, p.filename)?;
        writeln!(out, "    {}", truncate_chars(&p.description, LISTING_WIDTH))?;
        writeln!(out)?;
    }
    Ok(())
}

fn render_histogram(out: &mut String, posts: &[PostDescription], ctx: &ReportContext) -> std::fmt::Result {
    writeln!(out, "\n{}", rule())?;
    writeln!(out, "{}Length distribution", ctx.glyph("📊 ", ""))?;
    writeln!(out, "{}", rule())?;

    for (label, count) in length_histogram(posts) {
        if count == 0 {
            continue;
        }
        let bar = "█".repeat(count * 2);
        writeln!(out, "  {label:<20} | {bar} {count}")?;
    }
    Ok(())
}
