//! Commit-message payload and field normalization.

use serde_json::Value;

/// A parsed commit message ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitPayload {
    /// Conventional-commit header line.
    pub subject: String,
    /// Body detail items, no leading markers and no trailing periods.
    pub bullets: Vec<String>,
    /// Breaking-change text, empty when none.
    pub breaking_change: String,
}

impl CommitPayload {
    /// Builds a payload from a decoded JSON object, tolerating missing or
    /// ill-typed fields: a non-array `bullets` or missing `breaking_change`
    /// simply becomes empty.
    ///
    /// Returns `None` when `subject` is empty after trimming; the JSON was
    /// syntactically valid but semantically useless, and the caller routes
    /// the raw text through the plain-text parser instead.
    pub fn from_value(value: &Value) -> Option<Self> {
        let subject = value
            .get("subject")
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim()
            .to_string();
        if subject.is_empty() {
            return None;
        }

        let bullets = value
            .get("bullets")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(coerce_bullet).collect())
            .unwrap_or_default();

        let breaking_change = value
            .get("breaking_change")
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim()
            .to_string();

        Some(Self {
            subject,
            bullets,
            breaking_change,
        })
    }
}

/// Coerces a JSON bullet entry to normalized text. Scalars stringify;
/// composite values and nulls are dropped.
fn coerce_bullet(item: &Value) -> Option<String> {
    let text = match item {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    clean_bullet(&text)
}

/// Trims a bullet and strips trailing periods.
///
/// Returns `None` when nothing remains, so empty entries drop out of the
/// list instead of rendering as bare markers.
pub fn clean_bullet(text: &str) -> Option<String> {
    let cleaned = text.trim().trim_end_matches('.').trim_end();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}
