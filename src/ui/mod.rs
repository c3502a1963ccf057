//! User interface rendering module
//!
//! - `header` - Banner, step progress, status line and navigation bar
//! - `screens` - One screen per wizard step

mod header;
pub mod screens;

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::wizard::WizardStep;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

pub use header::HeaderRenderer;

/// UI renderer for the application
///
/// Entry point for drawing a frame. Delegates the step content to
/// [`screens`] and the chrome to [`header`].
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI for the current state
    pub fn render(&self, f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Banner + progress
                Constraint::Min(5),    // Step content
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        let step = state.step();
        self.header.render_header(f, chunks[0], step);

        match step {
            WizardStep::Intro => screens::render_intro_screen(f, chunks[1]),
            WizardStep::Flowers => screens::render_flowers_screen(f, chunks[1], state),
            WizardStep::Paper => screens::render_paper_screen(f, chunks[1], state),
            WizardStep::Adornments => screens::render_adornments_screen(f, chunks[1], state),
            WizardStep::Summary => screens::render_summary_screen(f, chunks[1], state),
        }

        header::render_status_line(f, state, chunks[2]);
        header::render_nav_bar(f, state, keybinding_ctx, chunks[3]);

        // Help overlay goes on top of everything
        if state.help_visible {
            HelpOverlay::new(step, keybinding_ctx).render(f, f.area());
        }
    }
}
