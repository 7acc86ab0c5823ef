//! Binary entry point: load the collection from `data.json` in the working
//! directory and run the menu loop on stdin/stdout until the user exits.
use std::io::{self, IsTerminal};

use anyhow::Context;
use book_collection_manager::{App, BookCollection, Config, Console};
use tracing::Level;

/// Returning a `Result` lets a failed save end the process with the error
/// chain printed instead of silently losing the change.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .with_target(false)
        .init();

    let config = Config::default();
    let collection = BookCollection::open(&config).context("failed to load book collection")?;

    let stdout = io::stdout();
    let console = Console::new(io::stdin().lock(), stdout.lock()).with_style(stdout.is_terminal());
    let mut app = App::new(collection, console);
    app.run()
}
