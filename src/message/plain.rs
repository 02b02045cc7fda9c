//! Plain-text fallback parsing for conventional commit messages.

use std::sync::LazyLock;

use regex::Regex;

/// Conventional commit subject: optional `revert: ` prefix, a lowercase
/// type, optional parenthesized scope, optional `!`, then `: description`.
static CONVENTIONAL_SUBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:revert: )?[a-z]+(?:\([^)]*\))?!?: .+").unwrap());

/// Commit-message parts extracted from a plain-text response.
#[derive(Debug, Default, Clone)]
pub struct PlainMessage {
    /// First line matching the conventional subject pattern.
    pub subject: String,
    /// Lines explicitly marked with `- ` or `* `, markers stripped.
    pub bullets: Vec<String>,
    /// Content of the first `BREAKING CHANGE:` line, empty when absent.
    pub breaking_change: String,
    /// Remaining non-empty body lines, available as bullet filler.
    pub filler: Vec<String>,
}

/// Parses raw text as a human-readable commit message.
///
/// Lines are scanned top to bottom; the first one matching the conventional
/// subject pattern becomes the subject and everything after it is the body.
/// Returns `None` when no line matches.
pub fn parse(raw: &str) -> Option<PlainMessage> {
    let mut lines = raw.lines();
    let subject = loop {
        let line = lines.next()?;
        let trimmed = line.trim();
        if CONVENTIONAL_SUBJECT.is_match(trimmed) {
            break trimmed.to_string();
        }
    };

    let mut message = PlainMessage {
        subject,
        ..PlainMessage::default()
    };

    for line in lines {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix("BREAKING CHANGE:") {
            if message.breaking_change.is_empty() {
                message.breaking_change = rest.trim().to_string();
            }
        } else if let Some(rest) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            message.bullets.push(rest.trim().to_string());
        } else if !trimmed.is_empty() {
            message.filler.push(trimmed.to_string());
        }
    }

    Some(message)
}
