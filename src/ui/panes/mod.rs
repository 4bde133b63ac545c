//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source text with every token colored by kind and the
//!   selected token emphasised
//! - [`tokens`]: Scrollable token list
//! - [`status`]: Status bar with the selected token and keybindings
//!
//! Each pane module exports a primary `render_*` function plus any state it
//! keeps between frames.

pub mod source;
pub mod status;
pub mod tokens;

pub use source::{render_source_pane, SourceIndex, SourceScrollState};
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;
