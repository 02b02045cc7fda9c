//! Bullet synthesis from the staged-change summary.
//!
//! When the model supplies fewer bullets than the verbosity policy requires,
//! git's own file-change summary deterministically fills the gap.

use crate::git::{StagedChange, StagedSummary};

use super::policy::VerbosityPolicy;

/// Filler bullet used when the staged summary cannot supply enough detail.
pub const FALLBACK_BULLET: &str = "Update staged changes";

/// Extends `bullets` with git-derived entries until the policy's count
/// invariant holds: at most `max_bullets`, padded to at least `min_bullets`.
///
/// Candidates are appended in order: one entry per staged change, then the
/// shortstat line with its trailing period stripped, then the literal
/// fallback repeated as needed.
pub fn fill_bullets(bullets: &mut Vec<String>, staged: &StagedSummary, policy: &VerbosityPolicy) {
    for change in &staged.changes {
        bullets.push(describe(change));
    }

    let shortstat = staged.shortstat.trim();
    if !shortstat.is_empty() {
        bullets.push(shortstat.trim_end_matches('.').trim_end().to_string());
    }

    if bullets.is_empty() {
        bullets.push(FALLBACK_BULLET.to_string());
    }

    bullets.truncate(policy.max_bullets);
    while bullets.len() < policy.min_bullets {
        bullets.push(FALLBACK_BULLET.to_string());
    }
    bullets.truncate(policy.max_bullets);
}

/// Renders one staged change as a bullet. The first character of the status
/// code picks the verb; unrecognized codes read as updates.
fn describe(change: &StagedChange) -> String {
    let verb = match change.status.chars().next() {
        Some('A') => "Add",
        Some('D') => "Delete",
        Some('R') => "Rename",
        Some('C') => "Copy",
        _ => "Update",
    };

    if verb == "Rename" {
        if let Some(new_path) = &change.new_path {
            return format!("Rename {} -> {}", change.path, new_path);
        }
    }

    format!("{verb} {}", change.path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::policy::VerbosityLevel;

    fn standard() -> VerbosityPolicy {
        VerbosityLevel::Standard.policy()
    }

    fn detailed() -> VerbosityPolicy {
        VerbosityLevel::Detailed.policy()
    }

    #[test]
    fn pads_sparse_context_to_the_floor() {
        let staged = StagedSummary::from_parts("A\tfoo.txt", "1 file changed, 2 insertions(+)");
        let mut bullets = Vec::new();
        fill_bullets(&mut bullets, &staged, &detailed());
        assert_eq!(
            bullets,
            vec![
                "Add foo.txt",
                "1 file changed, 2 insertions(+)",
                "Update staged changes",
            ]
        );
    }

    #[test]
    fn empty_context_yields_the_literal_fallback() {
        let staged = StagedSummary::default();
        let mut bullets = Vec::new();
        fill_bullets(&mut bullets, &staged, &standard());
        assert_eq!(bullets, vec![FALLBACK_BULLET]);
    }

    #[test]
    fn truncates_to_the_policy_maximum() {
        let listing = "A\ta.rs\nM\tb.rs\nD\tc.rs\nM\td.rs\nA\te.rs\nM\tf.rs";
        let staged = StagedSummary::from_parts(listing, "6 files changed, 10 insertions(+)");
        let mut bullets = Vec::new();
        fill_bullets(&mut bullets, &staged, &standard());
        assert_eq!(bullets, vec!["Add a.rs", "Update b.rs", "Delete c.rs"]);
    }

    #[test]
    fn keeps_existing_bullets_ahead_of_synthesized_ones() {
        let staged = StagedSummary::from_parts("M\tsrc/lib.rs", "");
        let mut bullets = vec!["tighten retry loop".to_string()];
        fill_bullets(&mut bullets, &staged, &detailed());
        assert_eq!(
            bullets,
            vec![
                "tighten retry loop",
                "Update src/lib.rs",
                "Update staged changes",
            ]
        );
    }

    #[test]
    fn renames_show_both_paths() {
        let staged = StagedSummary::from_parts("R100\told_name.rs\tnew_name.rs", "");
        let mut bullets = Vec::new();
        fill_bullets(&mut bullets, &staged, &standard());
        assert_eq!(bullets, vec!["Rename old_name.rs -> new_name.rs"]);
    }

    #[test]
    fn unrecognized_status_codes_read_as_updates() {
        let staged = StagedSummary::from_parts("T\tweird.bin\nX\tstranger.bin", "");
        let mut bullets = Vec::new();
        fill_bullets(&mut bullets, &staged, &standard());
        assert_eq!(bullets, vec!["Update weird.bin", "Update stranger.bin"]);
    }

    #[test]
    fn shortstat_trailing_period_is_stripped() {
        let staged = StagedSummary::from_parts("", "2 files changed.");
        let mut bullets = Vec::new();
        fill_bullets(&mut bullets, &staged, &standard());
        assert_eq!(bullets, vec!["2 files changed"]);
    }
}
