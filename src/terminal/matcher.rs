//! Bounded depth-first search over live process trees

use futures_util::future::{BoxFuture, FutureExt};
use tracing::{debug, warn};

use super::{TargetPattern, TerminalSession};
use crate::process::{ProcessEnumerator, SystemProcessEnumerator};

/// Deepest level of descendants inspected below a terminal's root pid.
/// Also bounds recursion on cyclic or runaway trees.
pub const MAX_DEPTH: u32 = 3;

pub struct TerminalMatcher<E = SystemProcessEnumerator> {
    enumerator: E,
}

impl<E> TerminalMatcher<E>
where
    E: ProcessEnumerator + Sync,
{
    pub fn new(enumerator: E) -> Self {
        Self { enumerator }
    }

    pub fn enumerator(&self) -> &E {
        &self.enumerator
    }

    /// Return the first session, in the given order, with a descendant
    /// process matching any of `patterns`.
    ///
    /// Sessions without a resolved root pid are skipped without touching the
    /// process table. Later sessions are not examined once one matches.
    pub async fn find_matching_terminal<'s, S>(
        &self,
        sessions: &'s [S],
        patterns: &[TargetPattern],
    ) -> Option<&'s S>
    where
        S: TerminalSession + Sync,
    {
        if patterns.is_empty() {
            return None;
        }

        for (index, session) in sessions.iter().enumerate() {
            let Some(root_pid) = session.root_pid().await else {
                debug!(index, "Skipping terminal without a root pid");
                continue;
            };

            if self.tree_has_match(root_pid, patterns, 1).await {
                debug!(index, root_pid, "Found terminal running a target application");
                return Some(session);
            }
        }

        None
    }

    /// Whether any descendant of `pid`, from `depth` down to [`MAX_DEPTH`],
    /// matches a pattern.
    ///
    /// All children at one level are checked before descending, but each
    /// branch is explored to the depth cap before its next sibling is
    /// enumerated.
    fn tree_has_match<'a>(
        &'a self,
        pid: u32,
        patterns: &'a [TargetPattern],
        depth: u32,
    ) -> BoxFuture<'a, bool> {
        async move {
            if depth > MAX_DEPTH {
                return false;
            }

            let children = self.enumerator.child_processes(pid).await;

            for child in &children {
                if let Some(pattern) = patterns.iter().find(|p| p.is_match(&child.command_line)) {
                    debug!(
                        pid = child.pid,
                        depth,
                        pattern = pattern.name(),
                        command_line = %child.command_line,
                        "Matched process"
                    );
                    return true;
                }
            }

            for child in &children {
                if self.tree_has_match(child.pid, patterns, depth + 1).await {
                    return true;
                }
            }

            false
        }
        .boxed()
    }

    /// Type `text` into `session` without submitting it, then focus it.
    /// Returns false instead of failing so callers can fall back.
    pub async fn deliver<S>(&self, session: &S, text: &str) -> bool
    where
        S: TerminalSession,
    {
        if let Err(err) = session.send_text(text, false).await {
            warn!(error = %err, "Failed to send text to terminal");
            return false;
        }

        if let Err(err) = session.show().await {
            warn!(error = %err, "Failed to show terminal");
            return false;
        }

        true
    }
}
