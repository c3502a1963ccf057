//! Bouquet Builder - Main entry point
//!
//! Parses the command line, sets up logging and either runs the interactive
//! wizard or one of the headless catalog/order commands.

use anyhow::Context;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::File;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use bouquetui::app::{App, terminal};
use bouquetui::catalog::Catalog;
use bouquetui::cli::{Cli, Commands};
use bouquetui::config_file;
use bouquetui::error::BouquetError;
use bouquetui::summary::derive_summary;
use bouquetui::wizard::WizardSession;

/// Where log output goes
enum LogTarget<'a> {
    /// Headless commands log to stderr
    Stderr,
    /// The TUI owns the terminal; log to a file or not at all
    FileOnly(Option<&'a Path>),
}

/// Initialize tracing. `RUST_LOG` overrides the default `info` level.
fn init_logger(target: LogTarget<'_>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogTarget::FileOnly(Some(path)) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        LogTarget::FileOnly(None) => {}
    }
    Ok(())
}

/// Main application entry point
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    let target = match cli.command {
        None | Some(Commands::Build { .. }) => LogTarget::FileOnly(cli.log_file.as_deref()),
        Some(_) => match cli.log_file.as_deref() {
            Some(path) => LogTarget::FileOnly(Some(path)),
            None => LogTarget::Stderr,
        },
    };
    init_logger(target)?;
    info!("Bouquet Builder starting up");
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::ValidateCatalog { path }) => {
            info!("Validating catalog file: {:?}", path);
            match Catalog::load_from_file(&path).and_then(|c| c.validate()) {
                Ok(()) => {
                    info!("Catalog validation successful");
                    println!("✓ Catalog file is valid: {}", path.display());
                }
                Err(e) => {
                    error!("Catalog validation failed: {:#}", e);
                    eprintln!("✗ Catalog validation failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Catalog) => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        Some(Commands::Summarize { order }) => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            if let Err(e) = summarize_order(catalog, &order) {
                error!("Failed to summarize order: {:#}", e);
                eprintln!("✗ Failed to summarize order: {:#}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Build { save_order }) => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            run_tui(catalog, save_order)?;
        }
        None => {
            info!("No command specified, launching the wizard");
            let catalog = load_catalog(cli.catalog.as_deref())?;
            run_tui(catalog, None)?;
        }
    }

    Ok(())
}

/// Load and validate the catalog, or fall back to the built-in one
fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    let Some(path) = path else {
        debug!("Using built-in catalog");
        return Ok(Catalog::default());
    };

    info!("Loading catalog from: {:?}", path);
    let catalog = Catalog::load_from_file(path)?;
    catalog.validate()?;
    Ok(catalog)
}

/// Replay a saved order against the catalog and print its summary
fn summarize_order(catalog: Catalog, order: &Path) -> anyhow::Result<()> {
    let selection = config_file::load_order(order)?;
    let session = WizardSession::from_selection(catalog, &selection)
        .with_context(|| format!("Order does not match the catalog: {}", order.display()))?;
    println!("{}", derive_summary(session.selection()));
    Ok(())
}

/// Run the interactive wizard
fn run_tui(catalog: Catalog, save_order: Option<PathBuf>) -> anyhow::Result<()> {
    debug!("Initializing terminal for TUI mode");

    terminal::enter()?;

    let mut app = App::new(catalog, save_order.clone());
    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(|e| BouquetError::terminal(format!("Failed to create terminal: {}", e)))
        .and_then(|mut terminal| app.run(&mut terminal));

    // Cleanup terminal (always attempt cleanup, even if app failed)
    terminal::leave();

    result?;

    let state = app.state();
    if state.confirmed {
        println!("Order confirmed.\n");
        println!("{}", derive_summary(state.session.selection()));
        if let Some(path) = save_order {
            println!("\nSaved to {}", path.display());
        }
    }
    Ok(())
}
