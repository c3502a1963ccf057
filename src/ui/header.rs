//! Header and common widget rendering
//!
//! This module contains the banner, the step progress line, the status
//! line and the navigation bar shared by every screen.

use crate::app::{AppState, StatusLevel};
use crate::components::keybindings::KeybindingContext;
use crate::theme::{Colors, Styles};
use crate::wizard::WizardStep;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Header renderer containing the banner
pub struct HeaderRenderer {
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Render the banner and the step progress line under it
    pub fn render_header(&self, f: &mut Frame, area: Rect, step: WizardStep) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut lines = self.header_lines.clone();
        lines.push(progress_line(step));

        let header = Paragraph::new(lines)
            .block(Block::default().borders(Borders::BOTTOM))
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    fn create_header() -> Vec<Line<'static>> {
        vec![Line::from(vec![
            Span::styled("❀ ", Style::default().fg(Colors::PRIMARY)),
            Span::styled("Bouquet Builder", Styles::title()),
            Span::styled(" ❀", Style::default().fg(Colors::PRIMARY)),
        ])]
    }
}

/// "Step n of 5: Title" followed by one dot per step
fn progress_line(step: WizardStep) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!(
            "Step {} of {}: {}  ",
            step.step_number(),
            WizardStep::TOTAL_STEPS,
            step.title()
        ),
        Styles::hint(),
    )];

    for other in WizardStep::all_steps() {
        let style = if *other <= step {
            Style::default().fg(Colors::PRIMARY)
        } else {
            Styles::muted()
        };
        spans.push(Span::styled("● ", style));
    }

    Line::from(spans)
}

/// Render the status line
pub fn render_status_line(f: &mut Frame, state: &AppState, area: Rect) {
    let Some(status) = &state.status else {
        return;
    };

    let style = match status.level {
        StatusLevel::Info => Style::default().fg(Colors::WARNING),
        StatusLevel::Error => Styles::error(),
    };
    let line = Paragraph::new(Span::styled(status.text.clone(), style)).alignment(Alignment::Center);
    f.render_widget(line, area);
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let mut spans = Vec::new();
    for (i, item) in keybinding_ctx.get_nav_items(state.step()).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Styles::muted()));
        }
        spans.push(Span::styled(item.key_display, Style::default().fg(Colors::PRIMARY)));
        spans.push(Span::styled(format!(" {}", item.action_label), Styles::hint()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
