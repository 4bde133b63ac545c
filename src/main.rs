// cscan: C source scanner with a terminal token explorer

mod error;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cscan::ui::App;
use cscan::{ScanOptions, Scanner};
use error::{CscanError, Result};

/// Scanned when no input file is given.
const DEMO_SOURCE: &str = r#"
int main() {
    int z = 5;
    float x = 3.14;
    float y = .5e-1;
    // single line comment
    /* multi
       line comment */
    x += y * 2;
    if (x >= 1.0 && x != 0) x++; //another comment
    return 0;
}
"#;

/// Split C source into classified tokens and explore them
#[derive(Parser, Debug)]
#[command(name = "cscan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Split C source into classified tokens", long_about = None)]
struct Cli {
    /// C source file (default: a built-in demo program)
    file: Option<PathBuf>,

    /// Emit comment tokens instead of discarding comments
    #[arg(short, long, env = "CSCAN_KEEP_COMMENTS")]
    keep_comments: bool,

    /// Print the token listing instead of opening the explorer
    #[arg(short, long)]
    print: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let source = match &cli.file {
        Some(path) => fs::read_to_string(path).map_err(|source| CscanError::ReadInput {
            path: path.clone(),
            source,
        })?,
        None => DEMO_SOURCE.to_string(),
    };
    let options = ScanOptions::new(cli.keep_comments);

    if cli.print {
        print_tokens(&source, options)
    } else {
        explore(source, options)
    }
}

/// Install the stderr log subscriber.
fn init_logging(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| CscanError::Logging(e.to_string()))
}

/// One line per token, in `Kind('text') at line:column` form.
fn print_tokens(source: &str, options: ScanOptions) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for token in Scanner::with_options(source, options).tokens() {
        writeln!(out, "{}", token)?;
    }
    out.flush()?;
    Ok(())
}

fn explore(source: String, options: ScanOptions) -> Result<()> {
    let mut app = App::new(source, options);
    info!(tokens = app.tokens.len(), "starting explorer");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(CscanError::from)
}
