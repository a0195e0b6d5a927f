/// One substring hit: 1-based line, 0-based character offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub line: usize,
    pub position: usize,
}

/// Locate the first occurrence of `pattern` in every line, reported in
/// line order. Case-sensitive exact matching; at most one hit per line.
/// An empty pattern (or no occurrence anywhere) yields no matches.
pub fn find_in_lines(lines: &[String], pattern: &str) -> Vec<Match> {
    if pattern.is_empty() {
        return Vec::new();
    }

    lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| {
            line.find(pattern).map(|position| Match {
                line: i + 1,
                position,
            })
        })
        .collect()
}
