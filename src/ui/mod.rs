//! Terminal token explorer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, rescanning
//! - **[`panes`]**: render functions for each visible pane (source, token list,
//!   status bar)
//! - **[`theme`]**: centralized color palette and per-kind token styles
//!
//! The entry point for consumers is [`App`]: construct it with the source text
//! and [`ScanOptions`] and call [`App::run`] to start the event loop.
//!
//! [`ScanOptions`]: crate::lexer::ScanOptions
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
