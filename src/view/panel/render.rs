//! Settings panel renderer.
//!
//! Draws the toggle affordance and, while open, the sidebar form: one row
//! of option chips per settings field plus Reset/Apply buttons. Every
//! interactive region is recorded in a `PanelLayout` for hit-testing.

use super::layout::{FieldRow, PanelLayout};
use super::state::PanelState;
use crate::params::{SettingsField, StyleOption};
use crate::view::surface::parse_color;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const PANEL_BG: Color = Color::Rgb(24, 24, 28);
const PANEL_FG: Color = Color::Gray;
const LABEL_FG: Color = Color::DarkGray;
const SELECTED_BG: Color = Color::Rgb(64, 64, 76);

const RESET_LABEL: &str = "[ Reset ]";
const APPLY_LABEL: &str = "[ Apply ]";

/// Render the panel chrome for one frame and return its hit-test layout.
pub fn render_panel(
    frame: &mut Frame,
    area: Rect,
    state: &PanelState,
    panel_width: u16,
) -> PanelLayout {
    let mut layout = PanelLayout::default();

    if state.is_open() {
        let panel_area = Rect::new(area.x, area.y, panel_width.min(area.width), area.height);
        layout.panel_area = Some(panel_area);
        render_form(frame, panel_area, state, &mut layout);
    }
    layout.toggle_area = render_toggle(frame, area, state.is_open(), layout.panel_area);

    layout
}

/// Draw the arrow button that opens and closes the panel.
///
/// Closed it sits in the top-left corner; open it rides the panel's right
/// edge, like a handle on the sidebar.
fn render_toggle(frame: &mut Frame, area: Rect, open: bool, panel_area: Option<Rect>) -> Rect {
    if area.width < 6 || area.height < 3 {
        return Rect::default();
    }

    let x = panel_area
        .map_or(area.x, |p| p.right())
        .min(area.right().saturating_sub(5));
    let toggle = Rect::new(x, area.y, 5, 3);

    frame.render_widget(Clear, toggle);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(PANEL_BG));
    let inner = block.inner(toggle);
    frame.render_widget(block, toggle);

    let arrow = if open { "❮" } else { "❯" };
    frame.render_widget(
        Paragraph::new(Line::styled(arrow, Style::default().fg(PANEL_FG)).centered()),
        inner,
    );

    toggle
}

fn render_form(frame: &mut Frame, panel_area: Rect, state: &PanelState, layout: &mut PanelLayout) {
    frame.render_widget(Clear, panel_area);
    let block = Block::default()
        .title(" Appearance ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(PANEL_BG).fg(PANEL_FG));
    let inner = block.inner(panel_area);
    frame.render_widget(block, panel_area);
    if inner.width < 10 || inner.height < 5 {
        return;
    }

    let draft = state.draft();
    let mut y = inner.y + 1;
    // Keep the last two rows for the footer buttons
    let max_y = inner.bottom().saturating_sub(2);

    for (row_index, field) in SettingsField::ALL.into_iter().enumerate() {
        if y >= max_y {
            break;
        }
        let focused = row_index == state.selected_field;
        let label_style = if focused {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(LABEL_FG)
        };
        let marker = if focused { "› " } else { "  " };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(marker, label_style),
                Span::styled(field.label(), label_style),
            ])),
            Rect::new(inner.x, y, inner.width, 1),
        );
        y += 1;

        let selected = field.get(&draft);
        let mut row = FieldRow {
            field,
            options: Vec::new(),
        };
        let mut x = inner.x + 2;
        for option in field.options() {
            if y >= max_y {
                break;
            }
            let width = chip_width(option);
            if x + width > inner.right().saturating_sub(1) && x > inner.x + 2 {
                x = inner.x + 2;
                y += 1;
                if y >= max_y {
                    break;
                }
            }
            let rect = Rect::new(x, y, width.min(inner.right().saturating_sub(x)), 1);
            render_chip(frame, rect, option, *option == selected);
            row.options.push(rect);
            x = rect.right() + 1;
        }
        layout.rows.push(row);
        y += 2;
    }

    let footer_y = inner.bottom().saturating_sub(1);
    let reset_rect = Rect::new(inner.x + 1, footer_y, RESET_LABEL.width() as u16, 1);
    frame.render_widget(
        Paragraph::new(Line::styled(RESET_LABEL, Style::default().fg(PANEL_FG))),
        reset_rect,
    );
    layout.reset_area = Some(reset_rect);

    let apply_width = APPLY_LABEL.width() as u16;
    let apply_rect = Rect::new(
        inner.right().saturating_sub(apply_width + 1),
        footer_y,
        apply_width,
        1,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(
            APPLY_LABEL,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        apply_rect,
    );
    layout.apply_area = Some(apply_rect);
}

fn chip_width(option: &StyleOption) -> u16 {
    let mut width = option.name.width() + 2;
    if option.swatch.is_some() {
        width += 2;
    }
    width as u16
}

fn render_chip(frame: &mut Frame, rect: Rect, option: &StyleOption, selected: bool) {
    let base = if selected {
        Style::default()
            .bg(SELECTED_BG)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(PANEL_FG)
    };

    let mut spans = vec![Span::styled(" ", base)];
    if let Some(swatch) = option.swatch {
        spans.push(Span::styled(swatch, base.fg(parse_color(option.value))));
        spans.push(Span::styled(" ", base));
    }
    spans.push(Span::styled(option.name, base));
    spans.push(Span::styled(" ", base));

    frame.render_widget(Paragraph::new(Line::from(spans)).style(base), rect);
}
