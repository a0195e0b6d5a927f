use std::sync::Arc;

/// Immutable full copy of the buffer's lines at one point in time.
///
/// The lines sit behind an `Arc<[String]>`, so cloning a snapshot (which
/// the history stacks do on every undo/redo) shares the allocation
/// instead of copying every line. No holder can mutate the shared lines,
/// which is what makes the sharing safe: restoring one snapshot can never
/// be corrupted by edits recorded after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    lines: Arc<[String]>,
}

impl Snapshot {
    pub fn from_lines(lines: &[String]) -> Self {
        Self {
            lines: lines.into(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Snapshot {
    /// The empty-buffer snapshot that seeds a fresh history.
    fn default() -> Self {
        Self {
            lines: Arc::from(Vec::new()),
        }
    }
}
