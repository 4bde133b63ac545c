//! Scanner for C source code
//!
//! Converts raw source text into a flat [`Token`] stream. The scanner never
//! fails: unterminated literals and comments are closed at end of input,
//! malformed exponents are rolled back, and any character it cannot classify
//! becomes a one-character [`TokenKind::Unknown`] token.

use super::cursor::Cursor;
use super::tables;
use super::token::{Token, TokenKind};
use tracing::{debug, trace};

/// Scanner configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Emit [`TokenKind::Comment`] tokens instead of discarding comments.
    pub keep_comments: bool,
}

impl ScanOptions {
    pub fn new(keep_comments: bool) -> Self {
        Self { keep_comments }
    }
}

/// Single-use scanner over one source buffer.
pub struct Scanner {
    cursor: Cursor,
    options: ScanOptions,
    finished: bool,
}

impl Scanner {
    pub fn new(source: &str, keep_comments: bool) -> Self {
        Self::with_options(source, ScanOptions::new(keep_comments))
    }

    pub fn with_options(source: &str, options: ScanOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            options,
            finished: false,
        }
    }

    /// Scan the entire input. The last token is always [`TokenKind::EndOfInput`].
    #[tracing::instrument(level = "debug", skip_all, fields(
        chars = self.cursor.source_len(),
        keep_comments = self.options.keep_comments,
    ))]
    pub fn scan(self) -> Vec<Token> {
        let tokens: Vec<Token> = self.tokens().collect();
        debug!(count = tokens.len(), "scan complete");
        tokens
    }

    /// Lazily yield the same tokens [`Scanner::scan`] would return.
    pub fn tokens(self) -> Tokens {
        Tokens { scanner: self }
    }

    /// Produce the next token, skipping whitespace and filtered comments.
    ///
    /// Returns `None` only after the end-of-input token has been handed out.
    fn next_token(&mut self) -> Option<Token> {
        loop {
            let Some(ch) = self.cursor.peek() else {
                if self.finished {
                    return None;
                }
                self.finished = true;
                return Some(self.end_of_input());
            };

            if ch.is_whitespace() {
                self.cursor.advance_while(char::is_whitespace);
                continue;
            }

            if self.cursor.starts_with("//") {
                match self.line_comment() {
                    Some(token) => return Some(token),
                    None => continue,
                }
            }

            if self.cursor.starts_with("/*") {
                match self.block_comment() {
                    Some(token) => return Some(token),
                    None => continue,
                }
            }

            let token = if ch.is_alphabetic() || ch == '_' {
                self.identifier_or_keyword()
            } else if ch.is_ascii_digit()
                || (ch == '.' && self.cursor.peek_ahead(1).is_some_and(|c| c.is_ascii_digit()))
            {
                self.number_literal()
            } else if ch == '"' {
                self.quoted_literal('"', TokenKind::StringLiteral)
            } else if ch == '\'' {
                self.quoted_literal('\'', TokenKind::CharLiteral)
            } else if tables::is_delimiter(ch) {
                self.single_char(TokenKind::Delimiter)
            } else if let Some(op) = self.match_operator() {
                op
            } else {
                trace!(?ch, location = %self.cursor.current_location(), "unknown character");
                self.single_char(TokenKind::Unknown)
            };

            return Some(token);
        }
    }

    fn end_of_input(&self) -> Token {
        let start = self.cursor.position();
        Token::new(
            TokenKind::EndOfInput,
            "",
            self.cursor.current_location(),
            self.cursor.span_from(start),
        )
    }

    /// `//` up to, not including, the next newline.
    fn line_comment(&mut self) -> Option<Token> {
        let start = self.cursor.position();
        let loc = self.cursor.current_location();
        self.cursor.advance_while(|c| c != '\n');

        self.options.keep_comments.then(|| {
            Token::new(
                TokenKind::Comment,
                self.cursor.slice_from(start),
                loc,
                self.cursor.span_from(start),
            )
        })
    }

    /// `/*` through the matching `*/`, or to end of input if unterminated.
    fn block_comment(&mut self) -> Option<Token> {
        let start = self.cursor.position();
        let loc = self.cursor.current_location();
        self.cursor.advance(); // skip '/'
        self.cursor.advance(); // skip '*'

        loop {
            if self.cursor.is_at_end() {
                trace!(location = %loc, "unterminated block comment closed at end of input");
                break;
            }
            if self.cursor.starts_with("*/") {
                self.cursor.advance();
                self.cursor.advance();
                break;
            }
            self.cursor.advance();
        }

        self.options.keep_comments.then(|| {
            Token::new(
                TokenKind::Comment,
                self.cursor.slice_from(start),
                loc,
                self.cursor.span_from(start),
            )
        })
    }

    fn identifier_or_keyword(&mut self) -> Token {
        let start = self.cursor.position();
        let loc = self.cursor.current_location();
        self.cursor.advance_while(|c| c.is_alphanumeric() || c == '_');

        let text = self.cursor.slice_from(start);
        let kind = if tables::is_keyword(&text) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Token::new(kind, text, loc, self.cursor.span_from(start))
    }

    /// Integer part, optional fraction, optional exponent.
    ///
    /// Accepts `123`, `123.`, `.456`, `1.5`, `1e10`, `1.2E-3`, `.5e+2`. An `e`/`E`
    /// without at least one exponent digit is not part of the literal and is
    /// left for the next token.
    fn number_literal(&mut self) -> Token {
        let start = self.cursor.position();
        let loc = self.cursor.current_location();

        let int_digits = self.cursor.advance_while(|c| c.is_ascii_digit());

        if self.cursor.peek() == Some('.') {
            let digit_follows = self.cursor.peek_ahead(1).is_some_and(|c| c.is_ascii_digit());
            if int_digits > 0 || digit_follows {
                self.cursor.advance();
                self.cursor.advance_while(|c| c.is_ascii_digit());
            }
        }

        if matches!(self.cursor.peek(), Some('e' | 'E')) {
            self.exponent();
        }

        Token::new(
            TokenKind::Number,
            self.cursor.slice_from(start),
            loc,
            self.cursor.span_from(start),
        )
    }

    /// Consume an exponent, or restore the cursor if it has no digits.
    fn exponent(&mut self) -> bool {
        let saved = self.cursor.checkpoint();
        self.cursor.advance(); // skip 'e' / 'E'
        if matches!(self.cursor.peek(), Some('+' | '-')) {
            self.cursor.advance();
        }

        if self.cursor.advance_while(|c| c.is_ascii_digit()) > 0 {
            return true;
        }

        trace!(location = %self.cursor.current_location(), "exponent without digits rolled back");
        self.cursor.restore(saved);
        false
    }

    /// String or char literal. The token text excludes the quotes; escapes are
    /// kept verbatim as the backslash and the character after it.
    fn quoted_literal(&mut self, quote: char, kind: TokenKind) -> Token {
        let start = self.cursor.position();
        let loc = self.cursor.current_location();
        self.cursor.advance(); // opening quote

        let mut content = String::new();
        let mut closed = false;

        while let Some(ch) = self.cursor.advance() {
            if ch == quote {
                closed = true;
                break;
            }
            content.push(ch);
            if ch == '\\' {
                if let Some(escaped) = self.cursor.advance() {
                    content.push(escaped);
                }
            }
        }

        if !closed {
            trace!(%kind, location = %loc, "unterminated literal closed at end of input");
        }

        Token::new(kind, content, loc, self.cursor.span_from(start))
    }

    fn single_char(&mut self, kind: TokenKind) -> Token {
        let start = self.cursor.position();
        let loc = self.cursor.current_location();
        let text = self.cursor.advance().map(String::from).unwrap_or_default();
        Token::new(kind, text, loc, self.cursor.span_from(start))
    }

    /// Longest operator spelling at the cursor, if any.
    fn match_operator(&mut self) -> Option<Token> {
        let op = tables::operators_longest_first()
            .iter()
            .find(|op| self.cursor.starts_with(op))?;

        let start = self.cursor.position();
        let loc = self.cursor.current_location();
        for _ in op.chars() {
            self.cursor.advance();
        }
        Some(Token::new(
            TokenKind::Operator,
            *op,
            loc,
            self.cursor.span_from(start),
        ))
    }
}

/// Lazy token stream returned by [`Scanner::tokens`].
pub struct Tokens {
    scanner: Scanner,
}

impl Iterator for Tokens {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.scanner.next_token()
    }
}

impl std::iter::FusedIterator for Tokens {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::SourceLocation;
    use pretty_assertions::assert_eq;

    fn kinds_and_text(source: &str, keep_comments: bool) -> Vec<(TokenKind, String)> {
        Scanner::new(source, keep_comments)
            .scan()
            .into_iter()
            .map(|t| (t.kind(), t.text().to_string()))
            .collect()
    }

    fn tok(kind: TokenKind, text: &str) -> (TokenKind, String) {
        (kind, text.to_string())
    }

    #[test]
    fn test_simple_tokens() {
        use TokenKind::*;
        assert_eq!(
            kinds_and_text("int main() { return 0; }", false),
            vec![
                tok(Keyword, "int"),
                tok(Keyword, "main"),
                tok(Delimiter, "("),
                tok(Delimiter, ")"),
                tok(Delimiter, "{"),
                tok(Keyword, "return"),
                tok(Number, "0"),
                tok(Delimiter, ";"),
                tok(Delimiter, "}"),
                tok(EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_operators_maximal_munch() {
        use TokenKind::*;
        assert_eq!(
            kinds_and_text("++ -- += -= == != && || <<>>", false),
            vec![
                tok(Operator, "++"),
                tok(Operator, "--"),
                tok(Operator, "+="),
                tok(Operator, "-="),
                tok(Operator, "=="),
                tok(Operator, "!="),
                tok(Operator, "&&"),
                tok(Operator, "||"),
                tok(Operator, "<<"),
                tok(Operator, ">>"),
                tok(EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_operator_pairs_split_greedily() {
        use TokenKind::*;
        // "+++" is "++" then "+", "<<=" has no three-character spelling
        assert_eq!(
            kinds_and_text("+++ <<=", false),
            vec![
                tok(Operator, "++"),
                tok(Operator, "+"),
                tok(Operator, "<<"),
                tok(Operator, "="),
                tok(EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_comments_discarded() {
        use TokenKind::*;
        assert_eq!(
            kinds_and_text("x; // comment\ny; /* block\ncomment */ z", false),
            vec![
                tok(Identifier, "x"),
                tok(Delimiter, ";"),
                tok(Identifier, "y"),
                tok(Delimiter, ";"),
                tok(Identifier, "z"),
                tok(EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_comments_kept() {
        let tokens = Scanner::new("a // line\n/* two\nlines */ b", true).scan();
        assert_eq!(tokens[1].kind(), TokenKind::Comment);
        assert_eq!(tokens[1].text(), "// line");
        assert_eq!(tokens[1].location(), SourceLocation::new(1, 3));
        assert_eq!(tokens[2].kind(), TokenKind::Comment);
        assert_eq!(tokens[2].text(), "/* two\nlines */");
        assert_eq!(tokens[2].location(), SourceLocation::new(2, 1));
        assert_eq!(tokens[3].text(), "b");
        assert_eq!(tokens[3].location(), SourceLocation::new(3, 10));
    }

    #[test]
    fn test_unterminated_block_comment() {
        let tokens = Scanner::new("x /* never closed\n", true).scan();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].text(), "/* never closed\n");
        assert!(tokens[2].is_eof());
        assert_eq!(tokens[2].location(), SourceLocation::new(2, 1));

        let dropped = Scanner::new("x /* never closed", false).scan();
        assert_eq!(dropped.len(), 2);
    }

    #[test]
    fn test_block_comment_star_slash_overlap() {
        // "/*/" does not close the comment it opens
        let tokens = Scanner::new("/*/ x */y", true).scan();
        assert_eq!(tokens[0].text(), "/*/ x */");
        assert_eq!(tokens[1].text(), "y");
    }

    #[test]
    fn test_numbers() {
        use TokenKind::*;
        assert_eq!(
            kinds_and_text("123 123. .456 1.5 1e10 1.2E-3 .5e+2", false),
            vec![
                tok(Number, "123"),
                tok(Number, "123."),
                tok(Number, ".456"),
                tok(Number, "1.5"),
                tok(Number, "1e10"),
                tok(Number, "1.2E-3"),
                tok(Number, ".5e+2"),
                tok(EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_exponent_rollback() {
        use TokenKind::*;
        assert_eq!(
            kinds_and_text("1e", false),
            vec![tok(Number, "1"), tok(Identifier, "e"), tok(EndOfInput, "")]
        );
        assert_eq!(
            kinds_and_text("2E+x", false),
            vec![
                tok(Number, "2"),
                tok(Identifier, "E"),
                tok(Operator, "+"),
                tok(Identifier, "x"),
                tok(EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_exponent_rollback_restores_column() {
        let tokens = Scanner::new("1e-", false).scan();
        assert_eq!(tokens[1].text(), "e");
        assert_eq!(tokens[1].location(), SourceLocation::new(1, 2));
        assert_eq!(tokens[2].text(), "-");
        assert_eq!(tokens[2].location(), SourceLocation::new(1, 3));
    }

    #[test]
    fn test_exponent_in_isolation() {
        let mut scanner = Scanner::new("e+", false);
        assert!(!scanner.exponent());
        assert_eq!(scanner.cursor.position(), 0);
        assert_eq!(scanner.cursor.current_location(), SourceLocation::new(1, 1));

        let mut scanner = Scanner::new("E-12;", false);
        assert!(scanner.exponent());
        assert_eq!(scanner.cursor.position(), 4);
        assert_eq!(scanner.cursor.peek(), Some(';'));
    }

    #[test]
    fn test_lone_dot_is_unknown() {
        use TokenKind::*;
        assert_eq!(
            kinds_and_text("a.b", false),
            vec![
                tok(Identifier, "a"),
                tok(Unknown, "."),
                tok(Identifier, "b"),
                tok(EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_string_escapes_kept_verbatim() {
        let tokens = Scanner::new(r#""a\"b" "\n\\""#, false).scan();
        assert_eq!(tokens[0].kind(), TokenKind::StringLiteral);
        assert_eq!(tokens[0].text(), r#"a\"b"#);
        assert_eq!(tokens[1].text(), r"\n\\");
        assert!(tokens[2].is_eof());
    }

    #[test]
    fn test_char_literals() {
        use TokenKind::*;
        assert_eq!(
            kinds_and_text(r"'a' '\'' '\0'", false),
            vec![
                tok(CharLiteral, "a"),
                tok(CharLiteral, r"\'"),
                tok(CharLiteral, r"\0"),
                tok(EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let tokens = Scanner::new("\"abc", false).scan();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind(), TokenKind::StringLiteral);
        assert_eq!(tokens[0].text(), "abc");
    }

    #[test]
    fn test_trailing_backslash_in_literal() {
        let tokens = Scanner::new("'\\", false).scan();
        assert_eq!(tokens[0].kind(), TokenKind::CharLiteral);
        assert_eq!(tokens[0].text(), "\\");
        assert!(tokens[1].is_eof());
    }

    #[test]
    fn test_newline_in_string_advances_line() {
        let tokens = Scanner::new("\"a\nb\" c", false).scan();
        assert_eq!(tokens[0].text(), "a\nb");
        assert_eq!(tokens[1].location(), SourceLocation::new(2, 4));
    }

    #[test]
    fn test_escaped_newline_in_string_advances_line() {
        let tokens = Scanner::new("\"a\\\nb\" c", false).scan();
        assert_eq!(tokens[0].text(), "a\\\nb");
        assert_eq!(tokens[1].location(), SourceLocation::new(2, 4));
    }

    #[test]
    fn test_unknown_characters() {
        use TokenKind::*;
        assert_eq!(
            kinds_and_text("@ # $", false),
            vec![
                tok(Unknown, "@"),
                tok(Unknown, "#"),
                tok(Unknown, "$"),
                tok(EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_keyword_vs_identifier() {
        use TokenKind::*;
        assert_eq!(
            kinds_and_text("int inta _x x1 While", false),
            vec![
                tok(Keyword, "int"),
                tok(Identifier, "inta"),
                tok(Identifier, "_x"),
                tok(Identifier, "x1"),
                tok(Identifier, "While"),
                tok(EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_positions() {
        let tokens = Scanner::new("int x;\n  x += 1;", false).scan();
        let locs: Vec<_> = tokens.iter().map(|t| (t.line(), t.column())).collect();
        assert_eq!(
            locs,
            vec![(1, 1), (1, 5), (1, 6), (2, 3), (2, 5), (2, 8), (2, 9), (2, 10)]
        );
    }

    #[test]
    fn test_empty_input() {
        let tokens = Scanner::new("", false).scan();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert_eq!(tokens[0].text(), "");
        assert_eq!(tokens[0].location(), SourceLocation::new(1, 1));
    }

    #[test]
    fn test_tokens_iterator_is_fused() {
        let mut tokens = Scanner::new("x", false).tokens();
        assert_eq!(tokens.next().map(|t| t.kind()), Some(TokenKind::Identifier));
        assert_eq!(tokens.next().map(|t| t.kind()), Some(TokenKind::EndOfInput));
        assert!(tokens.next().is_none());
        assert!(tokens.next().is_none());
    }
}
