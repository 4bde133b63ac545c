//! Character cursor with line/column bookkeeping
//!
//! The cursor owns the source as a `Vec<char>` so that offsets and columns are
//! counted in characters. Every consumed character goes through
//! [`Cursor::advance`], which is the only place line and column change.
//! Speculative matches take a [`Checkpoint`] and hand it back to
//! [`Cursor::restore`] when they fail.

use super::token::{SourceLocation, Span};

/// Saved cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    position: usize,
    line: usize,
    column: usize,
}

pub struct Cursor {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Cursor {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Peek at current character without consuming
    pub fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    pub fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Consume one character, updating line and column.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Consume characters while `pred` holds. Returns how many were consumed.
    pub fn advance_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
        let start = self.position;
        while self.peek().is_some_and(&mut pred) {
            self.advance();
        }
        self.position - start
    }

    /// Returns true if the input at the cursor begins with `s`.
    pub fn starts_with(&self, s: &str) -> bool {
        let rest = &self.input[self.position..];
        let mut count = 0;
        for expected in s.chars() {
            match rest.get(count) {
                Some(&ch) if ch == expected => count += 1,
                _ => return false,
            }
        }
        true
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Length of the source in characters.
    pub fn source_len(&self) -> usize {
        self.input.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    /// Span from `start` to the cursor.
    pub fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.position)
    }

    /// Source text between `start` and the cursor.
    pub fn slice_from(&self, start: usize) -> String {
        self.input[start..self.position].iter().collect()
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Rewind to a checkpoint taken earlier on this cursor.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.position = checkpoint.position;
        self.line = checkpoint.line;
        self.column = checkpoint.column;
    }
}
