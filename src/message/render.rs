//! Final message assembly.

use super::payload::CommitPayload;

/// Renders the finalized commit message.
///
/// The first line is the subject, ticket-prefixed as `[TICKET] subject` when
/// a ticket is present. Body content, when any exists, follows one blank
/// line: the `BREAKING CHANGE: ` line first, then each bullet as `- text`.
/// The output always ends with exactly one trailing newline and contains no
/// trailing blank lines.
pub fn render(payload: &CommitPayload, ticket: Option<&str>) -> String {
    let mut out = String::new();

    match ticket {
        Some(ticket) => out.push_str(&format!("[{ticket}] {}\n", payload.subject)),
        None => {
            out.push_str(&payload.subject);
            out.push('\n');
        }
    }

    let has_body = !payload.breaking_change.is_empty() || !payload.bullets.is_empty();
    if has_body {
        out.push('\n');
        if !payload.breaking_change.is_empty() {
            out.push_str(&format!("BREAKING CHANGE: {}\n", payload.breaking_change));
        }
        for bullet in &payload.bullets {
            out.push_str(&format!("- {bullet}\n"));
        }
    }

    out
}
