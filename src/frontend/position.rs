//! Source positions attached to tokens and errors.

use std::fmt::{Display, Formatter, Result};

/// Relative position of a `Token` in the source code. Columns are 1-based and
/// `end_column` is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub start_column: u32,
    pub end_column: u32,
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.start_column == self.end_column {
            write!(f, "{}:{}", self.line, self.start_column)
        } else {
            write!(f, "{}:{}-{}", self.line, self.start_column, self.end_column)
        }
    }
}

impl Position {
    pub fn new(line: u32, start_column: u32, end_column: u32) -> Self {
        Self {
            line,
            start_column,
            end_column,
        }
    }

    /// Start a new token right after the previous one.
    pub fn begin_token(&mut self) {
        self.start_column = self.end_column + 1;
    }

    pub fn next_column(&mut self) {
        self.end_column += 1;
    }

    pub fn next_line(&mut self) {
        self.line += 1;
        self.end_column = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Position::new(1, 3, 3).to_string(), "1:3");
        assert_eq!(Position::new(2, 1, 5).to_string(), "2:1-5");
    }

    #[test]
    fn test_line_break_resets_column() {
        let mut pos = Position::new(1, 1, 0);
        pos.next_column();
        pos.next_column();
        pos.next_line();
        pos.next_column();
        pos.begin_token();
        assert_eq!(pos, Position::new(2, 2, 1));
    }
}
