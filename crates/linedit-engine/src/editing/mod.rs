/*!
 * # Editing Core Module
 *
 * The mutation model of the editor lives here, split into four pieces:
 *
 * ### 1. Single Source of Truth: the line `Buffer`
 * - All text is held as an ordered `Vec<String>` of lines
 * - Callers address lines 1-based; storage is 0-based
 * - Every mutating primitive validates (line, position, length) before
 *   touching anything, so a failed call leaves the buffer untouched
 *
 * ### 2. Snapshot-Based History
 * - Each successful mutation records an immutable [`Snapshot`] of the
 *   whole buffer onto the past stack and discards the future stack
 * - Undo/redo move between snapshots without creating new ones
 * - Consecutive undos are bounded (default 3); any other action resets
 *   the streak
 *
 * ### 3. Single-Slot `Clipboard`
 * - Cut and copy overwrite the slot; paste reads it without clearing,
 *   so the same text can be pasted repeatedly
 *
 * ### 4. The `Editor` Facade
 * - Owns Buffer + History + Clipboard for one session and enforces the
 *   mutate-then-record discipline on every public operation
 * - Passed by `&mut` into whatever shell drives it - there is no global
 *   session state
 *
 * ## Usage Pattern
 *
 * ```rust
 * use linedit_engine::editing::Editor;
 *
 * let mut editor = Editor::new();
 * editor.append_text("hello world");
 * let removed = editor.delete_range(1, 5, 6).unwrap();
 * assert_eq!(removed, " world");
 * assert!(editor.undo());
 * assert_eq!(editor.lines(), ["hello world"]);
 * ```
 */

pub mod buffer;
pub mod clipboard;
pub mod editor;
pub mod history;
pub mod snapshot;

// Public API re-exports
pub use buffer::{Buffer, EditError};
pub use clipboard::Clipboard;
pub use editor::{Editor, LoadMode};
pub use history::{History, DEFAULT_UNDO_STREAK_LIMIT};
pub use snapshot::Snapshot;
