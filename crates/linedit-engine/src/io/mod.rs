use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the buffer to `path`, one `\n`-terminated record per line.
/// Truncates or creates the target file.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), IoError> {
    let mut contents = String::new();
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }
    fs::write(path, contents).map_err(IoError::Io)
}

/// Read `path` as an ordered sequence of lines.
///
/// Splits on `\n`, stripping a preceding `\r` so CRLF files load cleanly;
/// writing always uses `\n`. A missing trailing newline still yields the
/// final record.
pub fn read_lines(path: &Path) -> Result<Vec<String>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let contents = fs::read_to_string(path).map_err(IoError::Io)?;
    Ok(contents.lines().map(|line| line.to_string()).collect())
}
