//! Normalization-specific error handling.

use thiserror::Error;

/// Errors produced while normalizing a model response.
///
/// Recoverable irregularities (empty subject in an otherwise valid JSON
/// object, too few bullets, ill-typed fields) never surface here; they are
/// absorbed by the fallback chain. Only an unusable response is fatal.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// Response contains neither a decodable JSON object nor a line matching
    /// the conventional commit subject pattern.
    #[error("model response contains no JSON object and no conventional commit subject line")]
    MalformedResponse,
}

// Note: anyhow already has a blanket impl for thiserror::Error types
