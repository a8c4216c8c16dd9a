//! Calculation display: live calculation, collapsed calculation, entry field

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Everything the display pane shows
#[derive(Debug, Clone, Copy)]
pub struct DisplayRenderData<'a> {
    pub calculation: &'a str,
    pub collapsed_calculation: &'a str,
    pub entry: &'a str,
    pub is_error: bool,
}

/// Render the display pane
pub fn render_display_pane(frame: &mut Frame, area: Rect, data: DisplayRenderData<'_>) {
    let block = Block::default()
        .title(" Calculation ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let collapsed = if data.collapsed_calculation.is_empty() {
        String::new()
    } else {
        format!("= {}", data.collapsed_calculation)
    };

    let entry_style = if data.is_error {
        Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.number)
            .add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(
            data.calculation.to_string(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::from(Span::styled(
            collapsed,
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Line::from(""),
        Line::from(Span::styled(data.entry.to_string(), entry_style)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Right);
    frame.render_widget(paragraph, area);
}
