//! Application module
//!
//! Contains the main application logic and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, StatusMessage)
//! - `terminal` - Raw mode and alternate screen setup/teardown
//! - Main module - App struct and event loop

mod state;
pub mod terminal;

pub use state::{AppState, StatusLevel, StatusMessage};

use crate::catalog::{AdornKind, Catalog, MAX_FLOWERS};
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config_file;
use crate::error::Result;
use crate::input::{InputResult, edit_text, max_len_for};
use crate::selection::{Adornment, FlowerToggle, SelectionError};
use crate::ui::UiRenderer;
use crate::wizard::WizardStep;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, error, info};

/// How long the event loop waits for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    keybinding_context: KeybindingContext,
    /// Where to write the order when it is confirmed
    save_order_path: Option<PathBuf>,
}

impl App {
    /// Create a new application instance
    pub fn new(catalog: Catalog, save_order_path: Option<PathBuf>) -> Self {
        info!("Creating new App instance");
        Self {
            state: AppState::new(catalog),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            save_order_path,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    /// Run the event loop until the user quits or confirms
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.state.should_quit {
            terminal.draw(|f| {
                self.ui_renderer
                    .render(f, &self.state, &self.keybinding_context)
            })?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
        }

        info!(confirmed = self.state.confirmed, "wizard finished");
        Ok(())
    }

    /// Handle a single key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let step = self.state.step();

        if self.state.help_visible {
            // Any key closes help; quitting still works
            if self.keybinding_context.resolve(step, &key) == Some(KeyAction::Quit) {
                self.state.should_quit = true;
            }
            self.state.help_visible = false;
            return;
        }

        if self.state.is_editing_text() && self.edit_adornment_text(&key) {
            return;
        }

        if let Some(action) = self.keybinding_context.resolve(step, &key) {
            debug!(?action, %step, "key action");
            self.apply(action);
        }
    }

    /// Apply a resolved action to the state
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::NavigateUp => self.move_cursor(false),
            KeyAction::NavigateDown => self.move_cursor(true),
            KeyAction::CyclePrevious => self.cycle(false),
            KeyAction::CycleNext => self.cycle(true),
            KeyAction::Toggle => self.toggle(),
            KeyAction::Next => self.next(),
            KeyAction::Back => {
                self.state.session.retreat();
                self.state.status = None;
            }
            KeyAction::Confirm => self.confirm(),
            KeyAction::StartOver => {
                self.state.session.reset();
                self.state.reset_cursors();
                self.state.status = Some(StatusMessage::info("Started over"));
            }
            KeyAction::Help => self.state.help_visible = !self.state.help_visible,
            KeyAction::Quit => self.state.should_quit = true,
        }
    }

    /// Feed `key` to the plush name / card message. Returns true if consumed.
    fn edit_adornment_text(&mut self, key: &KeyEvent) -> bool {
        let Some(kind) = self.state.cursor_adorn_kind() else {
            return false;
        };
        let Some(max_len) = max_len_for(kind) else {
            return false;
        };
        let current = self
            .state
            .session
            .selection()
            .adornment()
            .and_then(Adornment::text)
            .unwrap_or_default()
            .to_string();

        match edit_text(&current, key, max_len) {
            InputResult::Updated(value) => {
                match kind {
                    AdornKind::Card => self.state.session.set_card_text(value),
                    _ => self.state.session.set_plush_name(value),
                }
                self.state.status = None;
                true
            }
            InputResult::Unchanged => true,
            InputResult::NotHandled => false,
        }
    }

    fn move_cursor(&mut self, down: bool) {
        let len = self.state.list_len();
        let Some(cursor) = self.state.cursor_mut() else {
            return;
        };
        if down {
            if *cursor + 1 < len {
                *cursor += 1;
            }
        } else {
            *cursor = cursor.saturating_sub(1);
        }
    }

    fn toggle(&mut self) {
        match self.state.step() {
            WizardStep::Flowers => {
                let Some(name) = self.state.cursor_flower().map(str::to_string) else {
                    return;
                };
                match self.state.session.toggle_flower(&name) {
                    Ok(outcome) => {
                        let count = self.state.session.selection().flowers().len();
                        let verb = match outcome {
                            FlowerToggle::Added => "Added",
                            FlowerToggle::Removed => "Removed",
                        };
                        let text = format!("{verb} {name} ({count}/{MAX_FLOWERS})");
                        self.state.status = Some(StatusMessage::info(text));
                    }
                    Err(e) => self.report_error(&e),
                }
            }
            WizardStep::Paper => {
                let Some(name) = self.state.cursor_paper().map(|p| p.name.clone()) else {
                    return;
                };
                let result = self.state.session.choose_paper_type(&name);
                self.report(result);
            }
            WizardStep::Adornments => {
                if let Some(kind) = self.state.cursor_adorn_kind() {
                    self.state.session.select_adornment(kind);
                    self.state.status = None;
                }
            }
            WizardStep::Intro | WizardStep::Summary => {}
        }
    }

    /// Cycle paper colors, ribbon colors or leaf styles
    fn cycle(&mut self, forward: bool) {
        match self.state.step() {
            WizardStep::Paper => self.cycle_paper_color(forward),
            WizardStep::Adornments => match self.state.cursor_adorn_kind() {
                Some(AdornKind::Ribbons) => self.cycle_ribbon_color(forward),
                Some(AdornKind::NaturalFoliage) => self.cycle_leaf_style(forward),
                Some(kind) => {
                    let hint = if self.state.is_editing_text() {
                        format!("Type to edit the {}", kind.to_string().to_lowercase())
                    } else {
                        format!("Press Space to add a {}", kind.to_string().to_lowercase())
                    };
                    self.state.status = Some(StatusMessage::info(hint));
                }
                None => {}
            },
            _ => {}
        }
    }

    fn cycle_paper_color(&mut self, forward: bool) {
        let Some(paper) = self.state.cursor_paper().map(|p| p.name.clone()) else {
            return;
        };
        let session = &self.state.session;

        // First press on another paper just chooses it with its default color
        if session.selection().paper().kind.as_deref() != Some(paper.as_str()) {
            let result = self.state.session.choose_paper_type(&paper);
            self.report(result);
            return;
        }

        let catalog = session.catalog();
        let current = session
            .selection()
            .paper()
            .color
            .as_ref()
            .and_then(|c| catalog.color_index(c));
        let Some(next) = cycle_index(current, catalog.palette.len(), forward) else {
            return;
        };
        let color = catalog.palette[next].clone();

        let result = self.state.session.choose_paper_color(&color);
        self.report(result);
    }

    fn cycle_ribbon_color(&mut self, forward: bool) {
        let session = &self.state.session;
        let catalog = session.catalog();
        let current = match session.selection().adornment() {
            Some(Adornment::Ribbons(Some(color))) => catalog.color_index(color),
            _ => None,
        };
        let Some(next) = cycle_index(current, catalog.palette.len(), forward) else {
            return;
        };
        let color = catalog.palette[next].clone();

        let result = self.state.session.set_ribbon_color(&color);
        self.report(result);
    }

    fn cycle_leaf_style(&mut self, forward: bool) {
        let session = &self.state.session;
        let catalog = session.catalog();
        let current = match session.selection().adornment() {
            Some(Adornment::NaturalFoliage(Some(leaf))) => {
                catalog.leaf_styles.iter().position(|l| l == leaf)
            }
            _ => None,
        };
        let Some(next) = cycle_index(current, catalog.leaf_styles.len(), forward) else {
            return;
        };
        let leaf = catalog.leaf_styles[next].clone();

        let result = self.state.session.set_leaf_style(&leaf);
        self.report(result);
    }

    fn next(&mut self) {
        match self.state.session.advance() {
            Ok(_) => self.state.status = None,
            Err(e) => self.state.status = Some(StatusMessage::error(e.to_string())),
        }
    }

    fn confirm(&mut self) {
        if self.state.step() != WizardStep::Summary {
            return;
        }

        if let Some(path) = &self.save_order_path {
            if let Err(e) = config_file::save_order(self.state.session.selection(), path) {
                error!("Failed to save order: {:#}", e);
                self.state.status = Some(StatusMessage::error(format!("Could not save order: {e}")));
                return;
            }
        }

        info!("order confirmed");
        self.state.confirmed = true;
        self.state.should_quit = true;
    }

    fn report<T>(&mut self, result: std::result::Result<T, SelectionError>) {
        match result {
            Ok(_) => self.state.status = None,
            Err(e) => self.report_error(&e),
        }
    }

    fn report_error(&mut self, err: &SelectionError) {
        self.state.status = Some(StatusMessage::error(capitalize(&err.to_string())));
    }
}

/// Next index when cycling through `len` options; None for an empty list
fn cycle_index(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let next = match (current, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
    };
    Some(next)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
