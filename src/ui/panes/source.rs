//! Source pane rendering with token-driven highlighting
//!
//! Colors come from the scanner's own output: every character is painted with
//! the style of the token whose span covers it. Characters covered by no token
//! (whitespace and discarded comments) are drawn dimmed.

use crate::lexer::Token;
use crate::ui::theme::{border_style, kind_style, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Per-character lookup from source offset to line and owning token.
pub struct SourceIndex {
    chars: Vec<char>,
    line_starts: Vec<usize>,
    owners: Vec<Option<usize>>,
}

impl SourceIndex {
    pub fn new(source: &str, tokens: &[Token]) -> Self {
        let chars: Vec<char> = source.chars().collect();

        let mut line_starts = vec![0];
        line_starts.extend(
            chars
                .iter()
                .enumerate()
                .filter(|(_, c)| **c == '\n')
                .map(|(i, _)| i + 1),
        );

        let mut owners = vec![None; chars.len()];
        for (idx, token) in tokens.iter().enumerate() {
            let span = token.span();
            for owner in &mut owners[span.start..span.end] {
                *owner = Some(idx);
            }
        }

        Self {
            chars,
            line_starts,
            owners,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Character range of a 0-based line, excluding its newline.
    fn line_range(&self, line_idx: usize) -> (usize, usize) {
        let start = self.line_starts[line_idx];
        let end = self
            .line_starts
            .get(line_idx + 1)
            .map(|next| next - 1)
            .unwrap_or(self.chars.len());
        (start, end)
    }

    /// Token covering the given character offset, if any.
    pub fn owner_of(&self, offset: usize) -> Option<usize> {
        self.owners.get(offset).copied().flatten()
    }

    /// Styled spans for one line. Consecutive characters owned by the same
    /// token share a span.
    pub fn highlight_line(
        &self,
        line_idx: usize,
        tokens: &[Token],
        selected: usize,
    ) -> Line<'static> {
        let (start, end) = self.line_range(line_idx);
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_owner = None;

        for offset in start..end {
            let owner = self.owner_of(offset);
            if owner != run_owner && !run.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut run),
                    owner_style(run_owner, tokens, selected),
                ));
            }
            run_owner = owner;
            run.push(display_char(self.chars[offset]));
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, owner_style(run_owner, tokens, selected)));
        }

        Line::from(spans)
    }
}

fn display_char(c: char) -> char {
    if c.is_control() {
        ' '
    } else {
        c
    }
}

fn owner_style(owner: Option<usize>, tokens: &[Token], selected: usize) -> Style {
    match owner {
        Some(idx) => {
            let style = kind_style(tokens[idx].kind());
            if idx == selected {
                style
                    .bg(DEFAULT_THEME.selected_token_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                style
            }
        }
        None => Style::default().fg(DEFAULT_THEME.comment),
    }
}

/// Scroll state for the source pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
    /// Bring the selected token's line into view on the next render
    pub follow: bool,
}

/// Offset that keeps `line_idx` inside a window of `height` rows.
pub fn follow_offset(offset: usize, line_idx: usize, height: usize) -> usize {
    if line_idx < offset {
        line_idx
    } else if line_idx >= offset + height {
        line_idx + 1 - height
    } else {
        offset
    }
}

/// Render the source pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    index: &SourceIndex,
    tokens: &[Token],
    selected: usize,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let block = Block::default()
        .title(" Source ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let total_lines = index.line_count();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1
    let current_line = tokens.get(selected).map(|t| t.line()).unwrap_or(1);

    if scroll_state.follow {
        scroll_state.offset = follow_offset(
            scroll_state.offset,
            current_line.saturating_sub(1),
            visible_height,
        );
        scroll_state.follow = false;
    }
    scroll_state.offset = scroll_state
        .offset
        .min(total_lines.saturating_sub(visible_height));

    let visible_lines: Vec<Line> = (scroll_state.offset..total_lines)
        .take(visible_height)
        .map(|idx| {
            let line_num = idx + 1;
            let is_current = line_num == current_line;
            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut content_line = index.highlight_line(idx, tokens, selected);
            if is_current {
                for span in &mut content_line.spans {
                    if span.style.bg.is_none() {
                        span.style = span.style.bg(DEFAULT_THEME.current_line_bg);
                    }
                }
            }

            let mut final_spans = vec![Span::styled(format!("{:4} ", line_num), num_style)];
            final_spans.extend(content_line.spans);
            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Scanner;

    fn span_texts(line: &Line) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_index_lines() {
        let source = "int x;\n\nx = 1;";
        let tokens = Scanner::new(source, false).scan();
        let index = SourceIndex::new(source, &tokens);
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_range(0), (0, 6));
        assert_eq!(index.line_range(1), (7, 7));
        assert_eq!(index.line_range(2), (8, 14));
    }

    #[test]
    fn test_owners_follow_spans() {
        let source = "a \"s\"";
        let tokens = Scanner::new(source, false).scan();
        let index = SourceIndex::new(source, &tokens);
        assert_eq!(index.owner_of(0), Some(0));
        assert_eq!(index.owner_of(1), None);
        // Quotes belong to the literal token
        assert_eq!(index.owner_of(2), Some(1));
        assert_eq!(index.owner_of(4), Some(1));
        assert_eq!(index.owner_of(5), None);
    }

    #[test]
    fn test_highlight_groups_runs_by_token() {
        let source = "x+=10;";
        let tokens = Scanner::new(source, false).scan();
        let index = SourceIndex::new(source, &tokens);
        let line = index.highlight_line(0, &tokens, 1);
        assert_eq!(span_texts(&line), vec!["x", "+=", "10", ";"]);
        assert_eq!(line.spans[1].style.bg, Some(DEFAULT_THEME.selected_token_bg));
        assert_eq!(line.spans[0].style.bg, None);
    }

    #[test]
    fn test_highlight_discarded_comment_is_one_run() {
        let source = "x // note";
        let tokens = Scanner::new(source, false).scan();
        let index = SourceIndex::new(source, &tokens);
        let line = index.highlight_line(0, &tokens, 0);
        assert_eq!(span_texts(&line), vec!["x", " // note"]);
    }

    #[test]
    fn test_follow_offset() {
        assert_eq!(follow_offset(0, 3, 10), 0);
        assert_eq!(follow_offset(0, 12, 10), 3);
        assert_eq!(follow_offset(5, 2, 10), 2);
        assert_eq!(follow_offset(5, 14, 10), 5);
    }
}
