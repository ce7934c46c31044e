//! CLI definition and dispatch

use crate::classifier::Classifier;
use crate::config::{load_config, Config};
use crate::fixes;
use crate::models::Thresholds;
use crate::reporters::{report_with_format, OutputFormat, ReportContext};
use crate::scanner::scan_posts;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// SEO description scanner for Markdown blog posts
///
/// Checks the front-matter `description` of every post against SEO length
/// guidelines and placeholder text.
#[derive(Parser, Debug)]
#[command(name = "check-descriptions")]
#[command(
    version,
    about = "Scan blog post front matter for missing, placeholder, too short or too long SEO descriptions",
    after_help = "\
Examples:
  check-descriptions                         Report on ./_posts
  check-descriptions --all                   Also list every post
  check-descriptions --min-length 100        Stricter minimum length
  check-descriptions --json                  JSON output for scripting
  check-descriptions --fix                   Fix descriptions interactively

--json takes precedence over --fix when both are given."
)]
pub struct Cli {
    /// Interactive fix mode: prompt for a new description for each problem post
    #[arg(long)]
    pub fix: bool,

    /// Minimum recommended description length (default: 80)
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Output JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// List every post in the text report
    #[arg(long)]
    pub all: bool,

    /// Posts directory (default: _posts)
    #[arg(long, value_name = "DIR")]
    pub posts_dir: Option<PathBuf>,

    /// Config file (default: ./check-descriptions.toml if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable emoji in output (cleaner for CI logs)
    #[arg(long)]
    pub no_emoji: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

/// What to do with the scan results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Json,
    Fix,
    Report { show_all: bool },
}

impl Cli {
    /// `--json` wins over `--fix`
    pub fn mode(&self) -> Mode {
        if self.json {
            if self.fix {
                debug!("--fix ignored because --json was given");
            }
            Mode::Json
        } else if self.fix {
            Mode::Fix
        } else {
            Mode::Report { show_all: self.all }
        }
    }
}

/// Effective settings after merging flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub posts_dir: PathBuf,
    pub extension: String,
    pub thresholds: Thresholds,
    pub extra_placeholders: Vec<String>,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: Config) -> Self {
        Self {
            posts_dir: cli.posts_dir.clone().unwrap_or(config.posts_dir),
            extension: config.extension,
            thresholds: Thresholds::with_min(
                cli.min_length.unwrap_or(config.thresholds.min_length),
            ),
            extra_placeholders: config.placeholders.extra,
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let config = load_config(cli.config.as_deref(), &cwd)?;
    let settings = Settings::resolve(&cli, config);
    debug!("Settings: {:?}", settings);

    let classifier = Classifier::new(settings.thresholds, settings.extra_placeholders.as_slice())?;
    let posts = scan_posts(&settings.posts_dir, &settings.extension, &classifier)?;
    debug!("Scanned {} posts", posts.len());

    let emoji = !cli.no_emoji;
    let (format, show_all) = match cli.mode() {
        Mode::Fix => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            fixes::run_interactive(&posts, &settings.posts_dir, emoji, stdin.lock(), stdout.lock())?;
            return Ok(());
        }
        Mode::Json => (OutputFormat::Json, false),
        Mode::Report { show_all } => (OutputFormat::Text, show_all),
    };

    let ctx = ReportContext {
        thresholds: settings.thresholds,
        posts_dir: settings.posts_dir,
        show_all,
        emoji,
    };
    let output = report_with_format(&posts, &ctx, format)?;
    writeln!(std::io::stdout().lock(), "{}", output.trim_end())?;

    Ok(())
}
