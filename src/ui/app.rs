//! Main TUI application state and logic

use crate::lexer::{ScanOptions, Scanner, Token, TokenKind};
use crate::ui::panes::{SourceIndex, SourceScrollState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    widgets::ListState,
    Frame, Terminal,
};
use rustc_hash::FxHashMap;
use std::io;
use std::time::Duration;

/// Rows moved by PageUp/PageDown
const PAGE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
}

impl FocusedPane {
    pub fn toggle(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Source,
        }
    }
}

/// The main application state
pub struct App {
    /// The source text being explored
    pub source_code: String,

    pub options: ScanOptions,

    /// Output of the last scan
    pub tokens: Vec<Token>,

    index: SourceIndex,

    /// Index into `tokens` of the selected token
    pub selected: usize,

    pub focused_pane: FocusedPane,

    pub source_scroll: SourceScrollState,
    pub token_list: ListState,

    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app and scan `source_code` with `options`
    pub fn new(source_code: String, options: ScanOptions) -> Self {
        let tokens = Scanner::with_options(&source_code, options).scan();
        let index = SourceIndex::new(&source_code, &tokens);
        let mut app = App {
            source_code,
            options,
            tokens,
            index,
            selected: 0,
            focused_pane: FocusedPane::Tokens,
            source_scroll: SourceScrollState::default(),
            token_list: ListState::default(),
            should_quit: false,
            status_message: String::new(),
        };
        app.status_message = app.summary();
        app.select(0);
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Per-kind token counts, most frequent first.
    pub fn kind_counts(&self) -> Vec<(TokenKind, usize)> {
        let mut counts: FxHashMap<TokenKind, usize> = FxHashMap::default();
        for token in &self.tokens {
            *counts.entry(token.kind()).or_default() += 1;
        }

        let mut counts: Vec<_> = TokenKind::ALL
            .iter()
            .filter_map(|kind| counts.get(kind).map(|n| (*kind, *n)))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    /// Short description of the last scan for the status bar
    pub fn summary(&self) -> String {
        let parts: Vec<String> = self
            .kind_counts()
            .iter()
            .filter(|(kind, _)| *kind != TokenKind::EndOfInput)
            .map(|(kind, n)| format!("{} {}", n, kind))
            .collect();
        if parts.is_empty() {
            "Empty input".to_string()
        } else {
            parts.join(", ")
        }
    }

    /// Select a token, clamped to the valid range.
    pub fn select(&mut self, idx: usize) {
        self.selected = idx.min(self.tokens.len().saturating_sub(1));
        self.token_list.select(Some(self.selected));
        self.source_scroll.follow = true;
    }

    /// Scan again with the current options, keeping the selection near the
    /// same source position.
    pub fn rescan(&mut self) {
        let anchor = self
            .tokens
            .get(self.selected)
            .map(|t| t.span().start)
            .unwrap_or(0);

        self.tokens = Scanner::with_options(&self.source_code, self.options).scan();
        self.index = SourceIndex::new(&self.source_code, &self.tokens);

        let idx = self
            .tokens
            .iter()
            .position(|t| t.span().start >= anchor)
            .unwrap_or(self.tokens.len().saturating_sub(1));
        self.select(idx);
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        super::panes::render_source_pane(
            frame,
            columns[0],
            &self.index,
            &self.tokens,
            self.selected,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_tokens_pane(
            frame,
            columns[1],
            &self.tokens,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.token_list,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.selected,
            &self.tokens,
            self.options.keep_comments,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.toggle();
            }
            KeyCode::Char('c') => {
                self.options.keep_comments = !self.options.keep_comments;
                self.rescan();
                self.status_message = format!(
                    "Comments {}: {}",
                    if self.options.keep_comments { "kept" } else { "discarded" },
                    self.summary()
                );
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Tokens => self.select(self.selected.saturating_sub(1)),
                FocusedPane::Source => {
                    self.source_scroll.offset = self.source_scroll.offset.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Tokens => self.select(self.selected + 1),
                FocusedPane::Source => {
                    self.source_scroll.offset = self.source_scroll.offset.saturating_add(1);
                }
            },
            KeyCode::PageUp => self.select(self.selected.saturating_sub(PAGE)),
            KeyCode::PageDown => self.select(self.selected + PAGE),
            KeyCode::Home => self.select(0),
            KeyCode::End => self.select(usize::MAX),
            _ => {}
        }
    }
}
