//! Keypad rendering

use crate::engine::OperationKind;
use crate::ui::keymap::Button;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button layout, top to bottom
pub const KEYPAD_ROWS: [[Button; 4]; 6] = [
    [
        Button::OpenContext,
        Button::CloseContext,
        Button::ClearEntry,
        Button::Clear,
    ],
    [
        Button::Digit('7'),
        Button::Digit('8'),
        Button::Digit('9'),
        Button::Operation(OperationKind::Divide),
    ],
    [
        Button::Digit('4'),
        Button::Digit('5'),
        Button::Digit('6'),
        Button::Operation(OperationKind::Multiply),
    ],
    [
        Button::Digit('1'),
        Button::Digit('2'),
        Button::Digit('3'),
        Button::Operation(OperationKind::Subtract),
    ],
    [
        Button::Digit('0'),
        Button::Dot,
        Button::Operation(OperationKind::Power),
        Button::Operation(OperationKind::Add),
    ],
    [
        Button::Delete,
        Button::Evaluate,
        Button::Evaluate,
        Button::Evaluate,
    ],
];

/// Render the keypad, highlighting `pressed`
pub fn render_keypad_pane(frame: &mut Frame, area: Rect, pressed: Option<Button>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, KEYPAD_ROWS.len() as u32); KEYPAD_ROWS.len()])
        .split(area);

    for (row, row_area) in KEYPAD_ROWS.iter().zip(rows.iter()) {
        // Adjacent duplicates form one wide button
        let mut spans: Vec<(Button, u32)> = Vec::new();
        for button in row {
            match spans.last_mut() {
                Some((last, width)) if last == button => *width += 1,
                _ => spans.push((*button, 1)),
            }
        }

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                spans
                    .iter()
                    .map(|(_, width)| Constraint::Ratio(*width, row.len() as u32))
                    .collect::<Vec<_>>(),
            )
            .split(*row_area);

        for ((button, _), cell) in spans.iter().zip(cells.iter()) {
            render_button(frame, *cell, *button, pressed == Some(*button));
        }
    }
}

fn render_button(frame: &mut Frame, area: Rect, button: Button, is_pressed: bool) {
    let border_style = if is_pressed {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let label_style = match button {
        Button::Digit(_) | Button::Dot => Style::default().fg(DEFAULT_THEME.fg),
        Button::Operation(_) | Button::OpenContext | Button::CloseContext => {
            Style::default().fg(DEFAULT_THEME.operator)
        }
        Button::Evaluate => Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD),
        Button::Delete | Button::ClearEntry | Button::Clear => {
            Style::default().fg(DEFAULT_THEME.secondary)
        }
    };

    let paragraph = Paragraph::new(button.label())
        .style(label_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(paragraph, area);
}
