//! Git operations and repository management.

pub mod repository;
pub mod staged;

pub use repository::GitRepository;
pub use staged::{StagedChange, StagedSummary};
