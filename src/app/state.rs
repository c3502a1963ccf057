//! Application state definitions
//!
//! Contains the wizard session plus the purely presentational state the TUI
//! keeps around it: list cursors, the status line and overlay flags.

use crate::catalog::{AdornKind, Catalog, PaperType};
use crate::selection::Adornment;
use crate::wizard::{WizardSession, WizardStep};

/// Severity of the status line message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// Feedback shown under the current screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// The wizard session being driven
    pub session: WizardSession,
    /// Cursor row on the Flowers screen
    pub flower_cursor: usize,
    /// Cursor row on the Paper screen
    pub paper_cursor: usize,
    /// Cursor row on the Adornments screen
    pub adorn_cursor: usize,
    /// Status message for user feedback
    pub status: Option<StatusMessage>,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Set once the order was confirmed on the Summary step
    pub confirmed: bool,
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            session: WizardSession::new(catalog),
            flower_cursor: 0,
            paper_cursor: 0,
            adorn_cursor: 0,
            status: None,
            help_visible: false,
            confirmed: false,
            should_quit: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.session.current_step()
    }

    /// Flower under the cursor
    pub fn cursor_flower(&self) -> Option<&str> {
        self.session
            .catalog()
            .flowers
            .get(self.flower_cursor)
            .map(String::as_str)
    }

    /// Paper under the cursor
    pub fn cursor_paper(&self) -> Option<&PaperType> {
        self.session.catalog().papers.get(self.paper_cursor)
    }

    /// Adornment kind under the cursor
    pub fn cursor_adorn_kind(&self) -> Option<AdornKind> {
        AdornKind::all().get(self.adorn_cursor).copied()
    }

    /// Number of rows on the current step's list
    pub fn list_len(&self) -> usize {
        let catalog = self.session.catalog();
        match self.step() {
            WizardStep::Flowers => catalog.flowers.len(),
            WizardStep::Paper => catalog.papers.len(),
            WizardStep::Adornments => AdornKind::all().len(),
            WizardStep::Intro | WizardStep::Summary => 0,
        }
    }

    /// Mutable cursor for the current step's list
    pub fn cursor_mut(&mut self) -> Option<&mut usize> {
        match self.step() {
            WizardStep::Flowers => Some(&mut self.flower_cursor),
            WizardStep::Paper => Some(&mut self.paper_cursor),
            WizardStep::Adornments => Some(&mut self.adorn_cursor),
            WizardStep::Intro | WizardStep::Summary => None,
        }
    }

    /// True when typed characters go into the plush name or card message.
    ///
    /// That is the case on the Adornments step when the cursor sits on the
    /// active adornment and that adornment takes text.
    pub fn is_editing_text(&self) -> bool {
        if self.step() != WizardStep::Adornments {
            return false;
        }
        let active = self.session.selection().adornment().map(Adornment::kind);
        match self.cursor_adorn_kind() {
            Some(kind) => kind.requires_text() && active == Some(kind),
            None => false,
        }
    }

    pub fn reset_cursors(&mut self) {
        self.flower_cursor = 0;
        self.paper_cursor = 0;
        self.adorn_cursor = 0;
    }
}
