//! # Stockroom Terminal Library
//!
//! The interactive inventory manager. The binary in `main.rs` only calls
//! [`run`]; everything else lives here so it can be driven from tests.
//!
//! ## Module Organization
//! ```text
//! stockroom_terminal/
//! ├── lib.rs          ◄─── You are here (startup & shutdown)
//! ├── config.rs       ◄─── AppConfig (data file, threshold, currency)
//! ├── session.rs      ◄─── Session context + menu loop
//! ├── menu.rs         ◄─── Menu entries and choice parsing
//! ├── report.rs       ◄─── Fixed-width product lines
//! ├── terminal.rs     ◄─── Prompt/re-prompt over any reader/writer
//! └── error.rs        ◄─── AppError
//! ```
//!
//! ## Crate Layering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stockroom-terminal (this crate)   prompts, reports, config, signals    │
//! │            │                                                            │
//! │            ├──────────────► stockroom-store   JSON data file            │
//! │            │                      │                                     │
//! │            ▼                      ▼                                     │
//! │  stockroom-core                   Inventory, Product, Money, ItemCode   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod menu;
pub mod report;
pub mod session;
pub mod terminal;

use std::io;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use error::{AppError, AppResult};
use session::Session;
use terminal::Terminal;

/// Printed when the session ends without Save & Exit.
pub const INTERRUPTED_NOTICE: &str = "Application interrupted. Exiting without saving.";

/// Runs the interactive session on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging (stderr, RUST_LOG, default "warn")               │
/// │  2. Install Ctrl-C handler (exit without saving)                        │
/// │  3. Build the fixed AppConfig                                           │
/// │  4. Load data file, print banner                                        │
/// │  5. Menu loop until Save & Exit or end of input                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    init_tracing();
    install_interrupt_handler();

    let config = AppConfig::default();
    info!(data_file = %config.data_file.display(), "Starting Stockroom");

    let stdin = io::stdin();
    // stdout stays unlocked so the Ctrl-C handler can still print.
    let mut term = Terminal::new(stdin.lock(), io::stdout());

    let outcome = Session::start(config, &mut term).and_then(|mut session| session.run(&mut term));

    match outcome {
        Err(AppError::Interrupted) => {
            info!("Input closed before save");
            term.say(format_args!("\n\n{INTERRUPTED_NOTICE}"))
        }
        other => other,
    }
}

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so they never mix with the menu on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=info` - Show load/save and add/update events
/// - `RUST_LOG=stockroom_store=debug` - Show data file details only
/// - Default: WARN level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Ctrl-C leaves immediately; unsaved changes are discarded.
fn install_interrupt_handler() {
    let installed = ctrlc::set_handler(|| {
        println!("\n\n{INTERRUPTED_NOTICE}");
        std::process::exit(0);
    });

    if let Err(err) = installed {
        warn!(error = %err, "Could not install Ctrl-C handler");
    }
}
