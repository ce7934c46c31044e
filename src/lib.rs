//! check-descriptions - SEO description scanner for Markdown blog posts
//!
//! Extracts the flat front matter of every post, classifies its
//! `description` by length and placeholder text, and reports or fixes the
//! results.

pub mod classifier;
pub mod cli;
pub mod config;
pub mod fixes;
pub mod frontmatter;
pub mod models;
pub mod reporters;
pub mod scanner;
