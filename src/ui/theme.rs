use crate::lexer::TokenKind;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub operator: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub selected_token_bg: Color,
    pub identifier: Color,
    pub char_literal: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    string: Color::Rgb(166, 227, 161),         // Green for strings
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    operator: Color::Rgb(148, 226, 213),       // Teal for operators
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    selected_token_bg: Color::Rgb(88, 91, 112),
    identifier: Color::Rgb(205, 214, 244),
    char_literal: Color::Rgb(245, 194, 231), // Pink for char literals
};

/// Foreground style for a token kind.
pub fn kind_style(kind: TokenKind) -> Style {
    let style = Style::default();
    match kind {
        TokenKind::Keyword => style.fg(DEFAULT_THEME.keyword).add_modifier(Modifier::BOLD),
        TokenKind::Identifier => style.fg(DEFAULT_THEME.identifier),
        TokenKind::Number => style.fg(DEFAULT_THEME.number),
        TokenKind::StringLiteral => style.fg(DEFAULT_THEME.string),
        TokenKind::CharLiteral => style.fg(DEFAULT_THEME.char_literal),
        TokenKind::Operator => style.fg(DEFAULT_THEME.operator),
        TokenKind::Delimiter => style.fg(DEFAULT_THEME.primary),
        TokenKind::Comment => style.fg(DEFAULT_THEME.comment).add_modifier(Modifier::ITALIC),
        TokenKind::EndOfInput => style.fg(DEFAULT_THEME.comment),
        TokenKind::Unknown => style
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::UNDERLINED),
    }
}

/// Border style shared by every pane.
pub fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
