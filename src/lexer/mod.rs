//! C source scanner
//!
//! This module turns C source text into a classified token stream:
//! - [`tables`]: keyword, operator and delimiter tables
//! - [`token`]: token, kind, location and span definitions
//! - [`cursor`]: character cursor with line/column tracking and checkpoints
//! - [`scanner`]: the dispatch loop that produces tokens
//!
//! # Scope
//!
//! The scanner classifies and segments; it does not validate C syntax.
//! Preprocessor directives, wide/UTF literal prefixes and digit separators
//! are not recognized. Malformed input never produces an error: see
//! [`scanner`] for the recovery rules.

pub mod cursor;
pub mod scanner;
pub mod tables;
pub mod token;

pub use scanner::{ScanOptions, Scanner, Tokens};
pub use token::{SourceLocation, Span, Token, TokenKind};
