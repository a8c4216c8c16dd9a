//! Main TUI application state and logic

use crate::engine::Engine;
use crate::ui::entry::Entry;
use crate::ui::keymap::{Button, KeyMap};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// The main application state
pub struct App {
    /// The calculation engine
    pub engine: Engine,

    /// The number field
    pub entry: Entry,

    /// Keyboard bindings
    pub keymap: KeyMap,

    /// Calculation string shown above the entry
    pub calculation: String,

    /// Calculation with every computable part reduced to its value
    pub collapsed_calculation: String,

    /// Most recent button, highlighted on the keypad
    pub last_button: Option<Button>,

    /// Whether the entry currently shows an error
    pub is_error: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Event poll interval
    pub tick_rate: Duration,
}

impl App {
    pub fn new(tick_rate: Duration) -> Self {
        App {
            engine: Engine::new(),
            entry: Entry::new(),
            keymap: KeyMap::new(),
            calculation: String::new(),
            collapsed_calculation: String::new(),
            last_button: None,
            is_error: false,
            should_quit: false,
            status_message: String::from("Ready!"),
            tick_rate,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(self.tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Display on top, keypad below, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_display_pane(
            frame,
            chunks[0],
            super::panes::DisplayRenderData {
                calculation: &self.calculation,
                collapsed_calculation: &self.collapsed_calculation,
                entry: self.entry.text(),
                is_error: self.is_error,
            },
        );

        super::panes::render_keypad_pane(frame, chunks[1], self.last_button);

        super::panes::render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            self.is_error,
            self.engine.depth(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            code => {
                if let Some(button) = self.keymap.lookup(code) {
                    self.press(button);
                }
            }
        }
    }

    /// Press a calculator button
    pub fn press(&mut self, button: Button) {
        tracing::debug!(?button, entry = self.entry.text(), "button pressed");
        self.last_button = Some(button);

        match button {
            Button::Digit(c) => self.edit_entry(|entry| entry.digit(c)),
            Button::Dot => self.edit_entry(|entry| entry.digit('.')),
            Button::Delete => self.edit_entry(Entry::delete_last),
            Button::ClearEntry => self.edit_entry(Entry::clear),
            Button::Clear => {
                self.apply(|engine, number| {
                    engine.evaluate(number);
                });
                self.entry.clear();
                self.is_error = false;
                self.status_message = String::from("Cleared");
            }
            Button::OpenContext => self.apply(|engine, _| {
                engine.open_context();
            }),
            Button::CloseContext => self.apply(|engine, number| {
                engine.close_context(number);
            }),
            Button::Operation(kind) => self.apply(|engine, number| {
                engine.push(number, kind);
            }),
            Button::Evaluate => self.apply(|engine, number| {
                engine.evaluate(number);
            }),
        }
    }

    /// Run one engine operation with the entry's number, then refresh the display
    fn apply(&mut self, operation: impl FnOnce(&mut Engine, f64)) {
        operation(&mut self.engine, self.entry.number());

        self.calculation = self.engine.get_calculation_string(false);
        self.collapsed_calculation = self.engine.get_calculation_string(true);

        let result = self.engine.get_partial_result();
        self.is_error = result.is_error();
        self.entry.show(result.to_string());

        self.status_message = if self.is_error {
            String::from("Press any key to start over")
        } else {
            String::from("Ready!")
        };
    }

    /// Change the entry and preview the calculation with the typed number
    fn edit_entry(&mut self, edit: impl FnOnce(&mut Entry)) {
        edit(&mut self.entry);
        self.is_error = false;

        let number = self.entry.number();
        self.calculation = self.engine.preview_calculation_string(number, false);
        self.collapsed_calculation = self.engine.preview_calculation_string(number, true);
        self.status_message = String::from("Typing...");
    }
}
