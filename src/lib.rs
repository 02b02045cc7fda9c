//! # commit-tidy
//!
//! Turns raw language-model output into a conventional commit message.
//!
//! The model response may wrap its answer in prose or code fences, emit a
//! JSON object, or produce a plain-text commit message; the normalizer
//! extracts whichever form is present and renders a deterministic message
//! honoring the requested verbosity level.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod git;
pub mod message;
pub mod utils;

pub use crate::cli::Cli;

/// The current version of commit-tidy.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
