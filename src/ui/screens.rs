//! Wizard screens
//!
//! One render function per step. Each screen reads the session through
//! [`AppState`] and never mutates it.

use crate::app::AppState;
use crate::catalog::{AdornKind, MAX_FLOWERS, PaletteColor};
use crate::selection::Adornment;
use crate::summary::SummaryView;
use crate::theme::{Colors, Styles};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

/// Marker for a chosen row
const CHECKED: &str = "[x] ";
const UNCHECKED: &str = "[ ] ";

fn screen_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(Style::default().fg(Colors::PRIMARY))
}

fn row_style(is_chosen: bool) -> Style {
    if is_chosen {
        Styles::chosen()
    } else {
        Styles::text()
    }
}

fn swatch_spans(color: &PaletteColor) -> Vec<Span<'static>> {
    vec![
        Span::styled("   ", Styles::swatch(color)),
        Span::styled(format!(" {} ({})", color.name, color.hex), Styles::hint()),
    ]
}

pub fn render_intro_screen(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Build your bouquet", Styles::title())),
        Line::from(""),
        Line::from(Span::styled(
            format!("Pick up to {MAX_FLOWERS} flowers, choose a wrapping paper and its color,"),
            Styles::text(),
        )),
        Line::from(Span::styled(
            "then finish it with an optional adornment.",
            Styles::text(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press Enter to start.", Styles::hint())),
    ];

    let widget = Paragraph::new(lines)
        .block(screen_block("Welcome"))
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}

pub fn render_flowers_screen(f: &mut Frame, area: Rect, state: &AppState) {
    let selection = state.session.selection();
    let count = selection.flowers().len();

    let block = screen_block("Flowers");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Counter
            Constraint::Min(1),    // Flower list
        ])
        .split(inner);

    let counter = Line::from(vec![
        Span::styled("Selected: ", Styles::hint()),
        Span::styled(
            format!("{count}/{MAX_FLOWERS}"),
            if count == MAX_FLOWERS {
                Style::default().fg(Colors::WARNING).add_modifier(Modifier::BOLD)
            } else {
                Styles::chosen()
            },
        ),
    ]);
    f.render_widget(Paragraph::new(counter), chunks[0]);

    let items: Vec<ListItem> = state
        .session
        .catalog()
        .flowers
        .iter()
        .map(|flower| {
            let chosen = selection.is_flower_selected(flower);
            let marker = if chosen { CHECKED } else { UNCHECKED };
            ListItem::new(format!("{marker}{flower}")).style(row_style(chosen))
        })
        .collect();

    render_cursor_list(f, chunks[1], items, state.flower_cursor);
}

pub fn render_paper_screen(f: &mut Frame, area: Rect, state: &AppState) {
    let paper = state.session.selection().paper();

    let block = screen_block("Paper");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Paper list
            Constraint::Length(2), // Color
        ])
        .split(inner);

    let items: Vec<ListItem> = state
        .session
        .catalog()
        .papers
        .iter()
        .map(|option| {
            let chosen = paper.kind.as_deref() == Some(option.name.as_str());
            let marker = if chosen { "(•) " } else { "( ) " };
            let mut spans = vec![Span::raw(format!("{marker}{}", option.name))];
            if !option.colorable {
                spans.push(Span::styled("  natural color only", Styles::muted()));
            }
            ListItem::new(Line::from(spans)).style(row_style(chosen))
        })
        .collect();

    render_cursor_list(f, chunks[0], items, state.paper_cursor);

    let mut color_line = vec![Span::styled("Color: ", Styles::hint())];
    match &paper.color {
        Some(color) => color_line.extend(swatch_spans(color)),
        None => color_line.push(Span::styled("none", Styles::muted())),
    }
    f.render_widget(
        Paragraph::new(vec![Line::from(""), Line::from(color_line)]),
        chunks[1],
    );
}

pub fn render_adornments_screen(f: &mut Frame, area: Rect, state: &AppState) {
    let active = state.session.selection().adornment();
    let editing = state.is_editing_text();
    let kinds = AdornKind::all();

    let block = screen_block("Adornments");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                  // Hint
            Constraint::Length(kinds.len() as u16), // Adornment list
            Constraint::Min(0),                     // Typed text and warnings
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled("Choose at most one adornment.", Styles::hint())),
        chunks[0],
    );

    let items: Vec<ListItem> = kinds
        .into_iter()
        .map(|kind| {
            let current = active.filter(|a| a.kind() == kind);
            let marker = if current.is_some() { "(•) " } else { "( ) " };
            let mut spans = vec![Span::raw(format!("{marker}{kind}"))];
            if let Some(adornment) = current.filter(|a| a.text().is_none()) {
                spans.push(Span::raw("  "));
                spans.extend(adornment_detail(adornment, false));
            }
            ListItem::new(Line::from(spans)).style(row_style(current.is_some()))
        })
        .collect();

    render_cursor_list(f, chunks[1], items, state.adorn_cursor);

    // Free text can run long, so it wraps below the list
    let mut lines = Vec::new();
    if let Some(adornment) = active.filter(|a| a.text().is_some()) {
        lines.push(Line::from(""));
        lines.push(Line::from(adornment_detail(adornment, editing)));
        if adornment.is_missing_text() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Type the requested text to continue.",
                Style::default().fg(Colors::WARNING),
            )));
        }
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[2]);
}

/// List scrolled so the row at `cursor` is always drawn
fn render_cursor_list(f: &mut Frame, area: Rect, items: Vec<ListItem>, cursor: usize) {
    let list = List::new(items).highlight_style(Styles::cursor());
    let mut list_state = ListState::default();
    list_state.select(Some(cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn adornment_detail(adornment: &Adornment, editing: bool) -> Vec<Span<'static>> {
    match adornment {
        Adornment::Ribbons(Some(color)) => swatch_spans(color),
        Adornment::Ribbons(None) => vec![Span::styled("←/→ pick a color", Styles::muted())],
        Adornment::NaturalFoliage(Some(leaf)) => vec![Span::styled(leaf.clone(), Styles::hint())],
        Adornment::NaturalFoliage(None) => {
            vec![Span::styled("←/→ pick a leaf style", Styles::muted())]
        }
        Adornment::SmallPlushToy(text) | Adornment::Card(text) => {
            let label = if matches!(adornment, Adornment::Card(_)) {
                "Message: "
            } else {
                "Name: "
            };
            let mut spans = vec![
                Span::styled(label, Styles::hint()),
                Span::styled(format!("\"{text}\""), Styles::text()),
            ];
            if editing {
                spans.push(Span::styled("_", Style::default().fg(Colors::PRIMARY)));
            }
            spans
        }
    }
}

pub fn render_summary_screen(f: &mut Frame, area: Rect, state: &AppState) {
    let summary = state.session.summary();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Summary lines, wrapping as the card grows
            Constraint::Length(5), // Preview
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(summary_lines(&summary))
            .block(screen_block("Summary"))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(preview_lines(&summary))
            .block(screen_block("Preview"))
            .wrap(Wrap { trim: true }),
        chunks[1],
    );
}

fn summary_lines(summary: &SummaryView) -> Vec<Line<'static>> {
    let mut paper = vec![
        Span::styled("Paper: ", Styles::hint()),
        Span::styled(summary.paper_line.clone(), Styles::text()),
    ];
    if let Some(color) = &summary.paper_swatch {
        paper.push(Span::raw(" "));
        paper.push(Span::styled("   ", Styles::swatch(color)));
    }

    vec![
        Line::from(vec![
            Span::styled("Flowers: ", Styles::hint()),
            Span::styled(summary.flowers_line.clone(), Styles::text()),
        ]),
        Line::from(paper),
        Line::from(vec![
            Span::styled("Adornment: ", Styles::hint()),
            Span::styled(summary.adornment_line.clone(), Styles::text()),
        ]),
        Line::from(""),
    ]
}

fn preview_lines(summary: &SummaryView) -> Vec<Line<'static>> {
    let preview = &summary.preview;
    let mut chips = Vec::new();
    for flower in &preview.chips {
        chips.push(Span::styled(
            format!(" {flower} "),
            Style::default().fg(Color::Black).bg(Colors::PRIMARY),
        ));
        chips.push(Span::raw(" "));
    }
    if chips.is_empty() {
        chips.push(Span::styled("No flowers yet", Styles::muted()));
    }

    let mut paper = vec![Span::styled(
        format!("wrapped in {}", preview.paper_label),
        Styles::hint(),
    )];
    if let Some(color) = &preview.swatch {
        paper.push(Span::raw(" "));
        paper.push(Span::styled("   ", Styles::swatch(color)));
    }

    vec![Line::from(chips), Line::from(""), Line::from(paper)]
}
