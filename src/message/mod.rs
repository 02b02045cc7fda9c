//! Commit-message normalization pipeline.
//!
//! Two parsing strategies run in order over the raw model response: strict
//! JSON extraction, then plain-text conventional-subject parsing. The first
//! success wins; when both fail the response is rejected as malformed.

use tracing::debug;

use crate::git::StagedSummary;

pub mod error;
pub mod extract;
pub mod payload;
pub mod plain;
pub mod policy;
pub mod render;
pub mod synthesis;

pub use error::NormalizeError;
pub use payload::CommitPayload;
pub use policy::{VerbosityLevel, VerbosityPolicy};

/// Normalizes raw model responses into finalized commit messages.
///
/// One normalizer handles one response; all inputs are borrowed for the
/// duration of the call and nothing is retained between invocations.
pub struct MessageNormalizer<'a> {
    policy: VerbosityPolicy,
    ticket: Option<&'a str>,
    staged: &'a StagedSummary,
}

impl<'a> MessageNormalizer<'a> {
    /// Creates a normalizer for the given verbosity level, optional ticket,
    /// and staged-change fallback context.
    pub fn new(level: VerbosityLevel, ticket: Option<&'a str>, staged: &'a StagedSummary) -> Self {
        Self {
            policy: level.policy(),
            ticket,
            staged,
        }
    }

    /// Produces the finalized commit message for `raw`.
    ///
    /// The result always ends with exactly one trailing newline.
    pub fn normalize(&self, raw: &str) -> Result<String, NormalizeError> {
        let payload = self.parse(raw)?;
        Ok(render::render(&payload, self.ticket))
    }

    /// Runs the parsing strategies in order and enforces the bullet policy
    /// on whichever one succeeds.
    fn parse(&self, raw: &str) -> Result<CommitPayload, NormalizeError> {
        if let Some(value) = extract::first_json_object(raw) {
            if let Some(payload) = CommitPayload::from_value(&value) {
                debug!("structured JSON payload accepted");
                return Ok(self.enforce_structured(payload));
            }
            debug!("JSON object found but subject was empty, falling back to plain text");
        }

        let message = plain::parse(raw).ok_or(NormalizeError::MalformedResponse)?;
        debug!(subject = %message.subject, "plain-text subject accepted");
        Ok(self.enforce_plain(message))
    }

    /// Applies the bullet policy to a structured payload. Too few bullets
    /// are topped up from the staged-change summary, which guarantees the
    /// count floor on this path.
    fn enforce_structured(&self, mut payload: CommitPayload) -> CommitPayload {
        if self.policy.force_empty {
            payload.bullets.clear();
            return payload;
        }

        payload.bullets.truncate(self.policy.max_bullets);
        if payload.bullets.len() < self.policy.min_bullets {
            synthesis::fill_bullets(&mut payload.bullets, self.staged, &self.policy);
        }
        payload
    }

    /// Applies the bullet policy to a plain-text message. Leftover body
    /// lines fill in for missing bullets; this path never pads with
    /// synthetic text, so too few lines simply yield fewer bullets.
    fn enforce_plain(&self, message: plain::PlainMessage) -> CommitPayload {
        let mut bullets: Vec<String> = if self.policy.force_empty {
            Vec::new()
        } else {
            message
                .bullets
                .iter()
                .filter_map(|b| payload::clean_bullet(b))
                .collect()
        };

        if !self.policy.force_empty {
            bullets.truncate(self.policy.max_bullets);
            if bullets.len() < self.policy.min_bullets {
                for line in &message.filler {
                    if bullets.len() >= self.policy.max_bullets {
                        break;
                    }
                    if let Some(bullet) = payload::clean_bullet(line) {
                        bullets.push(bullet);
                    }
                }
            }
        }

        CommitPayload {
            subject: message.subject,
            bullets,
            breaking_change: message.breaking_change,
        }
    }
}
