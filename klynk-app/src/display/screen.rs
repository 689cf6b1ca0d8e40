//! Text screen buffer

use core::fmt;

use heapless::{String, Vec};

/// Maximum bytes per line
pub const SCREEN_COLS: usize = 96;

/// Maximum lines per screen
pub const SCREEN_ROWS: usize = 48;

/// One line of text
pub type Line = String<SCREEN_COLS>;

/// A fixed-capacity screen of text lines
///
/// Lines longer than [`SCREEN_COLS`] bytes are cut at a character
/// boundary; lines past [`SCREEN_ROWS`] are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    lines: Vec<Line, SCREEN_ROWS>,
}

impl Screen {
    /// Create a new empty screen
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Clear the screen
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Append a line. Returns false if the screen is full.
    pub fn push_line(&mut self, text: &str) -> bool {
        let mut line = Line::new();
        // Cannot fail: truncated to capacity
        let _ = line.push_str(truncate(text, SCREEN_COLS));
        self.lines.push(line).is_ok()
    }

    /// Append an empty line
    pub fn blank(&mut self) -> bool {
        self.push_line("")
    }

    /// Get a line of text
    pub fn get_line(&self, row: usize) -> &str {
        self.lines.get(row).map(|line| line.as_str()).unwrap_or("")
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over lines
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.as_str())
    }

    /// Check if any line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().any(|line| line.contains(needle))
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Longest prefix of `text` that fits in `max` bytes
fn truncate(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
