/// Single-slot holder of the most recently cut or copied substring.
///
/// Every cut/copy overwrites the slot. Paste reads without clearing, so
/// the same text can be pasted any number of times.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Clipboard {
    contents: Option<String>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, text: String) {
        self.contents = Some(text);
    }

    /// Currently stored text; empty string if nothing was ever cut or
    /// copied.
    pub fn get(&self) -> &str {
        self.contents.as_deref().unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.contents.as_deref().is_none_or(str::is_empty)
    }
}
