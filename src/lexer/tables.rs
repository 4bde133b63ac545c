//! Static lexical tables for C
//!
//! Keyword spellings, operator spellings and delimiter characters. The tables
//! are built once on first use and never mutated, so every [`Scanner`] shares
//! the same instances.
//!
//! [`Scanner`]: super::scanner::Scanner

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// Reserved words. `main` is treated as reserved alongside the C keywords.
pub const KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "_Bool", "_Complex", "_Imaginary", "main",
];

/// Operator spellings, in no particular order.
pub const OPERATORS: &[&str] = &[
    // Compound assignment
    "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=",
    // Shift
    "<<", ">>",
    // Increment/decrement
    "++", "--",
    // Relational
    "==", "!=", "<=", ">=",
    // Logical
    "&&", "||",
    // Single character
    "+", "-", "*", "/", "%", "=", "!", "<", ">", "&", "|", "^", "~",
];

/// Single-character punctuation that is never part of a longer token.
pub const DELIMITERS: &[char] = &[';', ',', '(', ')', '{', '}', '[', ']'];

static KEYWORD_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

static OPERATOR_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| OPERATORS.iter().copied().collect());

static OPERATORS_BY_LENGTH: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut sorted = OPERATORS.to_vec();
    // Stable sort keeps table order among spellings of equal length
    sorted.sort_by_key(|op| std::cmp::Reverse(op.chars().count()));
    sorted
});

/// Returns true if `text` is a reserved word (case-sensitive).
pub fn is_keyword(text: &str) -> bool {
    KEYWORD_SET.contains(text)
}

/// Returns true if `text` is exactly one operator spelling.
pub fn is_operator(text: &str) -> bool {
    OPERATOR_SET.contains(text)
}

pub fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(&ch)
}

/// Operator spellings ordered longest first, for maximal-munch matching.
pub fn operators_longest_first() -> &'static [&'static str] {
    &OPERATORS_BY_LENGTH
}
