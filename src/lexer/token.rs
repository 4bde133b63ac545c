//! Token types produced by the scanner

use std::fmt;

/// Line and column of a character in the source text, both 1-based.
///
/// Columns count characters, not bytes, from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Half-open range of character offsets into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    StringLiteral,
    CharLiteral,
    Operator,
    Delimiter,
    Comment,
    EndOfInput,
    Unknown,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 10] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::StringLiteral,
        TokenKind::CharLiteral,
        TokenKind::Operator,
        TokenKind::Delimiter,
        TokenKind::Comment,
        TokenKind::EndOfInput,
        TokenKind::Unknown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::CharLiteral => "CharLiteral",
            TokenKind::Operator => "Operator",
            TokenKind::Delimiter => "Delimiter",
            TokenKind::Comment => "Comment",
            TokenKind::EndOfInput => "EndOfInput",
            TokenKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme with its position in the source.
///
/// For string and char literals `text` holds the content between the quotes;
/// the quotes themselves are covered by `span` but not by `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    location: SourceLocation,
    span: Span,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        text: impl Into<String>,
        location: SourceLocation,
        span: Span,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
            span,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The matched lexeme.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }

    /// Character offsets of the full source extent of this token.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}') at {}", self.kind, self.text, self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        let tok = Token::new(
            TokenKind::Keyword,
            "int",
            SourceLocation::new(2, 5),
            Span::new(10, 13),
        );
        assert_eq!(tok.to_string(), "Keyword('int') at 2:5");
    }

    #[test]
    fn test_eof_display_has_empty_text() {
        let tok = Token::new(
            TokenKind::EndOfInput,
            "",
            SourceLocation::new(1, 1),
            Span::new(0, 0),
        );
        assert!(tok.is_eof());
        assert_eq!(tok.to_string(), "EndOfInput('') at 1:1");
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(3, 6);
        assert_eq!(span.len(), 3);
        assert!(!span.contains(2));
        assert!(span.contains(3));
        assert!(span.contains(5));
        assert!(!span.contains(6));
        assert!(Span::new(4, 4).is_empty());
    }

    #[test]
    fn test_location_ordering() {
        assert!(SourceLocation::new(1, 9) < SourceLocation::new(2, 1));
        assert!(SourceLocation::new(3, 2) < SourceLocation::new(3, 4));
    }
}
