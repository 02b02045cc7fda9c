//! Staged-change summary used for bullet synthesis and `staged view`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::git::GitRepository;

/// One staged file change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagedChange {
    /// Git status code (A=added, M=modified, D=deleted, R=renamed, C=copied)
    pub status: String,
    /// Path to the file relative to repository root
    pub path: String,
    /// Destination path, present for renames and copies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_path: Option<String>,
}

/// Summary of everything staged in the index plus a shortstat line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StagedSummary {
    /// Staged file changes in diff order
    pub changes: Vec<StagedChange>,
    /// Single-line change statistics, empty when nothing is staged
    pub shortstat: String,
}

impl StagedSummary {
    /// Builds the summary by diffing HEAD's tree against the index.
    ///
    /// An unborn HEAD (repository with no commits yet) diffs against the
    /// empty tree, so freshly staged files still show up as additions.
    pub fn from_repository(repo: &GitRepository) -> Result<Self> {
        let repo = repo.repository();

        let head_tree = match repo.head() {
            Ok(head) => Some(head.peel_to_tree().context("Failed to peel HEAD to tree")?),
            Err(_) => None,
        };

        let index = repo.index().context("Failed to read repository index")?;
        let mut diff = repo
            .diff_tree_to_index(head_tree.as_ref(), Some(&index), None)
            .context("Failed to diff HEAD against index")?;

        // Collapse matching add/delete pairs into renames like git does
        diff.find_similar(None)
            .context("Failed to run rename detection on staged diff")?;

        let mut changes = Vec::new();
        diff.foreach(
            &mut |delta, _progress| {
                let status = match delta.status() {
                    git2::Delta::Added => "A",
                    git2::Delta::Deleted => "D",
                    git2::Delta::Modified => "M",
                    git2::Delta::Renamed => "R",
                    git2::Delta::Copied => "C",
                    git2::Delta::Typechange => "T",
                    _ => "?",
                };

                let old_path = delta
                    .old_file()
                    .path()
                    .and_then(|p| p.to_str())
                    .map(str::to_string);
                let new_path = delta
                    .new_file()
                    .path()
                    .and_then(|p| p.to_str())
                    .map(str::to_string);

                match status {
                    "R" | "C" => {
                        if let Some(path) = old_path {
                            changes.push(StagedChange {
                                status: status.to_string(),
                                path,
                                new_path,
                            });
                        }
                    }
                    _ => {
                        if let Some(path) = new_path.or(old_path) {
                            changes.push(StagedChange {
                                status: status.to_string(),
                                path,
                                new_path: None,
                            });
                        }
                    }
                }

                true
            },
            None,
            None,
            None,
        )
        .context("Failed to walk staged diff")?;

        let stats = diff.stats().context("Failed to compute staged diff stats")?;
        let shortstat =
            format_shortstat(stats.files_changed(), stats.insertions(), stats.deletions());

        Ok(Self { changes, shortstat })
    }

    /// Parses a `git diff --cached --name-status` listing.
    ///
    /// Each line carries a status code, a path, and for renames and copies a
    /// destination path, separated by tabs. Lines missing a code or a path
    /// are skipped.
    pub fn parse_name_status(text: &str) -> Vec<StagedChange> {
        text.lines()
            .filter_map(|line| {
                let mut fields = line.split('\t');
                let status = fields.next()?.trim();
                let path = fields.next()?.trim();
                if status.is_empty() || path.is_empty() {
                    return None;
                }
                let new_path = fields
                    .next()
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty());

                Some(StagedChange {
                    status: status.to_string(),
                    path: path.to_string(),
                    new_path,
                })
            })
            .collect()
    }

    /// Builds the summary from caller-supplied listings.
    pub fn from_parts(name_status: &str, shortstat: &str) -> Self {
        Self {
            changes: Self::parse_name_status(name_status),
            shortstat: shortstat.trim().to_string(),
        }
    }
}

/// Formats change statistics the way `git diff --shortstat` does, omitting
/// zero insertion/deletion parts. Empty when no files changed.
fn format_shortstat(files: usize, insertions: usize, deletions: usize) -> String {
    if files == 0 {
        return String::new();
    }

    let mut out = format!("{} file{} changed", files, if files == 1 { "" } else { "s" });
    if insertions > 0 {
        out.push_str(&format!(
            ", {} insertion{}(+)",
            insertions,
            if insertions == 1 { "" } else { "s" }
        ));
    }
    if deletions > 0 {
        out.push_str(&format!(
            ", {} deletion{}(-)",
            deletions,
            if deletions == 1 { "" } else { "s" }
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_name_status_handles_all_shapes() {
        let listing = "A\tfoo.txt\nM\tsrc/lib.rs\nR100\told.rs\tnew.rs\n\nbroken-line\nD\tgone.md";
        let changes = StagedSummary::parse_name_status(listing);

        assert_eq!(changes.len(), 4);
        assert_eq!(changes[0].status, "A");
        assert_eq!(changes[0].path, "foo.txt");
        assert!(changes[0].new_path.is_none());
        assert_eq!(changes[2].status, "R100");
        assert_eq!(changes[2].path, "old.rs");
        assert_eq!(changes[2].new_path.as_deref(), Some("new.rs"));
        assert_eq!(changes[3].status, "D");
    }

    #[test]
    fn from_parts_trims_the_shortstat() {
        let summary = StagedSummary::from_parts("", "  1 file changed  ");
        assert!(summary.changes.is_empty());
        assert_eq!(summary.shortstat, "1 file changed");
    }

    #[test]
    fn shortstat_formatting_matches_git() {
        assert_eq!(format_shortstat(0, 0, 0), "");
        assert_eq!(format_shortstat(1, 0, 0), "1 file changed");
        assert_eq!(
            format_shortstat(1, 2, 0),
            "1 file changed, 2 insertions(+)"
        );
        assert_eq!(
            format_shortstat(3, 1, 4),
            "3 files changed, 1 insertion(+), 4 deletions(-)"
        );
    }
}
