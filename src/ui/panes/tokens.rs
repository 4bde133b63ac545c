//! Token list pane

use crate::lexer::Token;
use crate::ui::theme::{border_style, kind_style, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// One list row: position, kind, and the lexeme with control characters escaped.
pub fn token_row(token: &Token) -> Line<'static> {
    let location = format!("{:>4}:{:<4}", token.line(), token.column());
    let kind = format!("{:<14}", token.kind().name());
    let text: String = token.text().escape_debug().collect();

    Line::from(vec![
        Span::styled(location, Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(kind, kind_style(token.kind())),
        Span::styled(text, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

/// Render the token list pane
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    is_focused: bool,
    list_state: &mut ListState,
) {
    let block = Block::default()
        .title(format!(" Tokens ({}) ", tokens.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let items: Vec<ListItem> = tokens.iter().map(|t| ListItem::new(token_row(t))).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, list_state);
}
