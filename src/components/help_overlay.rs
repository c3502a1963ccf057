//! Help overlay component
//!
//! Displays the keys of the current step in a centered floating window.

use super::keybindings::KeybindingContext;
use crate::theme::{Colors, Styles};
use crate::wizard::WizardStep;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    pub fn new(step: WizardStep, keybinding_ctx: &KeybindingContext) -> Self {
        Self {
            content: Self::build_content(step, keybinding_ctx),
        }
    }

    fn build_content(step: WizardStep, keybinding_ctx: &KeybindingContext) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("  {}  ", step.title()),
                Style::default()
                    .fg(Colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (key, description) in keybinding_ctx.get_help_content(step) {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<8}"), Style::default().fg(Colors::PRIMARY)),
                Span::styled(description, Styles::text()),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Press any key to close",
            Styles::muted(),
        )));
        lines
    }

    /// Number of rows the window needs, borders included
    pub fn height(&self) -> u16 {
        self.content.len() as u16 + 2
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let popup = centered_rect(50, self.height(), area);
        f.render_widget(Clear, popup);

        let widget = Paragraph::new(self.content.clone()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .border_style(Style::default().fg(Colors::PRIMARY)),
        );
        f.render_widget(widget, popup);
    }
}

/// Rect of at most `width` x `height` centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
