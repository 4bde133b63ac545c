//! # Introduction
//!
//! cscan splits C source text into classified tokens (keywords, identifiers,
//! numeric/string/char literals, operators, delimiters, comments), each
//! annotated with its line, column and character span. The token stream is
//! meant to feed a parser; no syntax checking happens here.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Scanner → Tokens → (listing | TUI explorer)
//! ```
//!
//! 1. [`lexer`]: the scanner, its token types and the static C tables.
//! 2. [`ui`]: ratatui-based token explorer used by the `cscan` binary; not
//!    part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use cscan::{Scanner, TokenKind};
//!
//! let tokens = Scanner::new("x += 1;", false).scan();
//! assert_eq!(tokens[1].kind(), TokenKind::Operator);
//! assert_eq!(tokens[1].text(), "+=");
//! assert!(tokens.last().unwrap().is_eof());
//! ```

pub mod lexer;
pub mod ui;

pub use lexer::{ScanOptions, Scanner, SourceLocation, Span, Token, TokenKind};
