//! Description classifier
//!
//! Assigns each description exactly one [`DescriptionStatus`], checked in
//! priority order: empty, placeholder, too short, too long, ok.

use crate::models::{char_len, DescriptionStatus, Thresholds};
use regex::Regex;
use thiserror::Error;

/// Known filler descriptions, each anchored at the start of the text
pub const PLACEHOLDER_PATTERNS: &[&str] = &[
    r"^章節\.{0,3}$",
    r"^\.{3}$",
    r"^\s*$",
    r"^This post is for subscribers",
    r"^問題：.{0,20}$", // "question:" prefix with almost nothing after it
];

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Invalid placeholder pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Outcome of classifying one description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub status: DescriptionStatus,
    /// Display-only diagnostic, `None` for ok descriptions
    pub issue: Option<String>,
}

impl Classification {
    fn new(status: DescriptionStatus, issue: impl Into<String>) -> Self {
        Self {
            status,
            issue: Some(issue.into()),
        }
    }

    fn ok() -> Self {
        Self {
            status: DescriptionStatus::Ok,
            issue: None,
        }
    }
}

/// Compiled placeholder set plus the length window
#[derive(Debug, Clone)]
pub struct Classifier {
    thresholds: Thresholds,
    placeholders: Vec<Regex>,
}

impl Classifier {
    /// Build a classifier from the built-in placeholder patterns followed by `extra`.
    ///
    /// Extra patterns are anchored at the start of the description even when
    /// they do not begin with `^`.
    pub fn new<S: AsRef<str>>(thresholds: Thresholds, extra: &[S]) -> Result<Self, ClassifierError> {
        let builtin = PLACEHOLDER_PATTERNS.iter().map(|p| p.to_string());
        let configured = extra.iter().map(|p| anchor(p.as_ref()));

        let placeholders = builtin
            .chain(configured)
            .map(|pattern| {
                Regex::new(&pattern).map_err(|source| ClassifierError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            thresholds,
            placeholders,
        })
    }

    /// Classifier with only the built-in placeholder patterns
    pub fn with_thresholds(thresholds: Thresholds) -> Self {
        Self::new::<&str>(thresholds, &[]).expect("built-in placeholder patterns are valid")
    }

    /// Classify a description
    pub fn classify(&self, description: &str) -> Classification {
        if description.trim().is_empty() {
            return Classification::new(DescriptionStatus::Empty, "empty");
        }

        if self.placeholders.iter().any(|re| re.is_match(description)) {
            return Classification::new(DescriptionStatus::Placeholder, "placeholder text");
        }

        let length = char_len(description);
        let Thresholds {
            min_length,
            max_length,
        } = self.thresholds;

        if length < min_length {
            Classification::new(
                DescriptionStatus::TooShort,
                format!("too short ({length} < {min_length})"),
            )
        } else if length > max_length {
            Classification::new(
                DescriptionStatus::TooLong,
                format!("too long ({length} > {max_length})"),
            )
        } else {
            Classification::ok()
        }
    }
}

fn anchor(pattern: &str) -> String {
    if pattern.starts_with('^') {
        pattern.to_string()
    } else {
        format!("^(?:{pattern})")
    }
}
