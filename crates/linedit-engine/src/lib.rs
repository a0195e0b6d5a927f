pub mod editing;
pub mod io;
pub mod search;

// Re-export key types for easier usage
pub use editing::{
    Buffer, Clipboard, EditError, Editor, History, LoadMode, Snapshot, DEFAULT_UNDO_STREAK_LIMIT,
};
pub use io::IoError;
pub use search::{find_in_lines, Match};
