//! Terminal setup and teardown around the TUI

use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::{self, stdout};
use tracing::warn;

use crate::error::{BouquetError, Result};

/// Switch to raw mode and the alternate screen.
///
/// If the alternate screen cannot be entered, raw mode is switched back off
/// before the error is returned.
pub fn enter() -> Result<()> {
    enter_with(
        enable_raw_mode,
        || crossterm::execute!(stdout(), EnterAlternateScreen),
        disable_raw_mode,
    )
}

/// Undo [`enter`]. Failures are ignored so teardown always runs to the end.
pub fn leave() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen);
}

fn enter_with(
    raw_on: impl FnOnce() -> io::Result<()>,
    alt_screen: impl FnOnce() -> io::Result<()>,
    raw_off: impl FnOnce() -> io::Result<()>,
) -> Result<()> {
    raw_on().map_err(|e| BouquetError::terminal(format!("Failed to enable raw mode: {e}")))?;

    if let Err(e) = alt_screen() {
        if let Err(restore) = raw_off() {
            warn!(error = %restore, "could not disable raw mode");
        }
        return Err(BouquetError::terminal(format!(
            "Failed to enter alternate screen: {e}"
        )));
    }
    Ok(())
}
