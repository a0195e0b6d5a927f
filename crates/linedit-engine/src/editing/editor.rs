use std::path::Path;

use crate::editing::{
    Buffer, Clipboard, EditError, History, Snapshot, DEFAULT_UNDO_STREAK_LIMIT,
};
use crate::io::{self, IoError};
use crate::search::{self, Match};

/// What loading a file does to the lines already in the buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadMode {
    /// Discard the current buffer and take the file's lines. The default.
    #[default]
    Replace,
    /// Keep the current buffer and append the file's lines after it.
    Append,
}

/// One editing session: buffer, history and clipboard behind the public
/// operations.
///
/// The editor enforces the session-wide discipline the components cannot
/// enforce alone: every successful mutation records a snapshot (which
/// also discards any redoable future), failed operations record nothing,
/// and cut/copy route removed or selected text through the clipboard.
/// A shell drives exactly one `Editor` by `&mut`; there is no shared or
/// global session state.
#[derive(Debug, Default)]
pub struct Editor {
    buffer: Buffer,
    history: History,
    clipboard: Clipboard,
}

impl Editor {
    /// Fresh session: empty buffer, history seeded with the empty
    /// snapshot, default undo streak limit.
    pub fn new() -> Self {
        Self::with_undo_streak_limit(DEFAULT_UNDO_STREAK_LIMIT)
    }

    pub fn with_undo_streak_limit(limit: usize) -> Self {
        Self {
            buffer: Buffer::new(),
            history: History::new(Snapshot::default(), limit),
            clipboard: Clipboard::new(),
        }
    }

    // --- read access ---

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    pub fn lines(&self) -> &[String] {
        self.buffer.lines()
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    // --- mutations ---

    pub fn append_text(&mut self, text: &str) {
        self.buffer.append_text(text);
        self.record();
    }

    pub fn add_empty_line(&mut self) {
        self.buffer.add_empty_line();
        self.record();
    }

    pub fn insert_at(
        &mut self,
        line: usize,
        position: usize,
        text: &str,
    ) -> Result<(), EditError> {
        self.buffer.insert_at(line, position, text)?;
        self.record();
        Ok(())
    }

    pub fn replace_at(
        &mut self,
        line: usize,
        position: usize,
        text: &str,
    ) -> Result<(), EditError> {
        self.buffer.replace_at(line, position, text)?;
        self.record();
        Ok(())
    }

    /// Delete `length` characters at `position`, capturing the removed
    /// substring into the clipboard and returning it.
    pub fn delete_range(
        &mut self,
        line: usize,
        position: usize,
        length: usize,
    ) -> Result<String, EditError> {
        let removed = self.buffer.delete_range(line, position, length)?;
        self.clipboard.set(removed.clone());
        self.record();
        Ok(removed)
    }

    /// Same operation as [`Editor::delete_range`] under its
    /// clipboard-centric name.
    pub fn cut(&mut self, line: usize, position: usize, length: usize) -> Result<String, EditError> {
        self.delete_range(line, position, length)
    }

    /// Store the selected substring in the clipboard without mutating the
    /// buffer. Bounds rules are identical to deletion. Records no history
    /// because nothing changed.
    pub fn copy(&mut self, line: usize, position: usize, length: usize) -> Result<(), EditError> {
        let text = self.buffer.line(line)?;
        if position >= text.len() {
            return Err(EditError::InvalidPosition {
                index: line,
                position,
                line_len: text.len(),
            });
        }
        let Some(end) = position.checked_add(length).filter(|&end| end <= text.len()) else {
            return Err(EditError::InvalidLength {
                position,
                length,
                line_len: text.len(),
            });
        };
        let selected = text[position..end].to_string();
        self.clipboard.set(selected);
        Ok(())
    }

    /// Insert the clipboard contents at the given spot. Repeatable: the
    /// clipboard is not consumed.
    pub fn paste(&mut self, line: usize, position: usize) -> Result<(), EditError> {
        let text = self.clipboard.get().to_string();
        self.buffer.insert_at(line, position, &text)?;
        self.record();
        Ok(())
    }

    /// Step back one recorded state. `false` when history declined
    /// (nothing to undo, or the consecutive-undo limit was hit) - a
    /// silent no-op, not an error.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.buffer.restore(&snapshot);
                true
            }
            None => false,
        }
    }

    /// Step forward one undone state. `false` when there is nothing to
    /// redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.buffer.restore(&snapshot);
                true
            }
            None => false,
        }
    }

    // --- persistence ---

    /// Write the buffer to `path`, one record per line. Not a mutation;
    /// records no history.
    pub fn save(&self, path: &Path) -> Result<(), IoError> {
        io::write_lines(path, self.buffer.lines())
    }

    /// Load `path` into the buffer, returning how many lines were read.
    /// One history record for the whole load, however many lines arrive.
    pub fn load(&mut self, path: &Path, mode: LoadMode) -> Result<usize, IoError> {
        let lines = io::read_lines(path)?;
        let read = lines.len();
        if mode == LoadMode::Replace {
            self.buffer.clear();
        }
        for line in lines {
            self.buffer.push_line(line);
        }
        self.record();
        Ok(read)
    }

    // --- search ---

    /// First occurrence of `pattern` in every line, in line order.
    pub fn find(&self, pattern: &str) -> Vec<Match> {
        search::find_in_lines(self.buffer.lines(), pattern)
    }

    fn record(&mut self) {
        self.history.record(self.buffer.snapshot());
    }
}
