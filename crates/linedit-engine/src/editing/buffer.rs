use crate::editing::Snapshot;

/// Validation failures shared by every positional buffer operation.
///
/// All variants are recoverable: the operation aborts before mutating
/// anything, so the buffer is exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("Invalid line index {index}: buffer has {line_count} line(s)")]
    InvalidLineIndex { index: usize, line_count: usize },
    #[error("Invalid position {position} in line {index} of length {line_len}")]
    InvalidPosition {
        index: usize,
        position: usize,
        line_len: usize,
    },
    #[error("Invalid length {length}: range starting at {position} exceeds line of length {line_len}")]
    InvalidLength {
        position: usize,
        length: usize,
        line_len: usize,
    },
}

/// Ordered sequence of text lines, addressed 1-based by callers.
///
/// The buffer is the single owner of the live text. It knows nothing of
/// history or the clipboard; it only mutates lines and hands out
/// [`Snapshot`]s for whoever wants to remember a state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<String>,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Read access to one line (1-based index).
    pub fn line(&self, index: usize) -> Result<&str, EditError> {
        let slot = self.check_line_index(index)?;
        Ok(&self.lines[slot])
    }

    /// Append `text` onto the end of the last line, or create the first
    /// line if the buffer is empty.
    ///
    /// Concatenating onto the last line (rather than always starting a
    /// new one) is the product behavior; use [`Buffer::add_empty_line`]
    /// first to start a fresh line.
    pub fn append_text(&mut self, text: &str) {
        match self.lines.last_mut() {
            Some(last) => last.push_str(text),
            None => self.lines.push(text.to_string()),
        }
    }

    /// Append a new empty line to the end of the buffer.
    pub fn add_empty_line(&mut self) {
        self.lines.push(String::new());
    }

    /// Remove `length` characters starting at 0-based `position` from the
    /// given line, returning the removed substring.
    ///
    /// Errors: `InvalidLineIndex` if `index` is outside `[1, line_count]`,
    /// `InvalidPosition` if `position` is not strictly inside the line,
    /// `InvalidLength` if the range runs past the end of the line.
    pub fn delete_range(
        &mut self,
        index: usize,
        position: usize,
        length: usize,
    ) -> Result<String, EditError> {
        let slot = self.check_line_index(index)?;
        let line = &mut self.lines[slot];

        if position >= line.len() {
            return Err(EditError::InvalidPosition {
                index,
                position,
                line_len: line.len(),
            });
        }
        // checked_add: a huge length must report InvalidLength, not wrap
        let Some(end) = position.checked_add(length).filter(|&end| end <= line.len()) else {
            return Err(EditError::InvalidLength {
                position,
                length,
                line_len: line.len(),
            });
        };

        Ok(line.drain(position..end).collect())
    }

    /// Insert `text` at 0-based `position` in the given line.
    ///
    /// Unlike deletion, `position == line.len()` is valid here: it means
    /// insertion at the end of the line.
    pub fn insert_at(&mut self, index: usize, position: usize, text: &str) -> Result<(), EditError> {
        let slot = self.check_line_index(index)?;
        let line = &mut self.lines[slot];

        if position > line.len() {
            return Err(EditError::InvalidPosition {
                index,
                position,
                line_len: line.len(),
            });
        }

        line.insert_str(position, text);
        Ok(())
    }

    /// Overwrite variant of [`Buffer::insert_at`]: erases up to
    /// `text.len()` characters starting at `position`, then inserts
    /// `text` there. A tail shorter than `text` is not an error - the
    /// erase is clamped to the end of the line.
    pub fn replace_at(
        &mut self,
        index: usize,
        position: usize,
        text: &str,
    ) -> Result<(), EditError> {
        let slot = self.check_line_index(index)?;
        let line = &mut self.lines[slot];

        if position > line.len() {
            return Err(EditError::InvalidPosition {
                index,
                position,
                line_len: line.len(),
            });
        }

        let erase_end = (position + text.len()).min(line.len());
        line.replace_range(position..erase_end, text);
        Ok(())
    }

    /// Immutable full copy of the current lines.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_lines(&self.lines)
    }

    /// Replace all lines with the snapshot's contents.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.lines.clear();
        self.lines.extend(snapshot.lines().iter().cloned());
    }

    /// Discard all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Append a pre-built line, bypassing the append-to-last-line policy.
    /// Used when loading records from a file.
    pub fn push_line(&mut self, line: String) {
        self.lines.push(line);
    }

    fn check_line_index(&self, index: usize) -> Result<usize, EditError> {
        if index < 1 || index > self.lines.len() {
            return Err(EditError::InvalidLineIndex {
                index,
                line_count: self.lines.len(),
            });
        }
        Ok(index - 1)
    }
}
