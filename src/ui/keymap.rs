//! Calculator buttons and the keyboard bindings that press them

use crate::engine::OperationKind;
use crossterm::event::KeyCode;
use rustc_hash::FxHashMap;

/// A calculator button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Digit(char),
    Dot,
    Delete,
    ClearEntry,
    Clear,
    OpenContext,
    CloseContext,
    /// Binary operator
    Operation(OperationKind),
    Evaluate,
}

impl Button {
    /// Text printed on the keypad
    pub fn label(self) -> String {
        match self {
            Button::Digit(c) => c.to_string(),
            Button::Dot => String::from("."),
            Button::Delete => String::from("←"),
            Button::ClearEntry => String::from("CE"),
            Button::Clear => String::from("C"),
            Button::OpenContext => String::from("("),
            Button::CloseContext => String::from(")"),
            Button::Operation(kind) => kind.symbol().to_string(),
            Button::Evaluate => String::from("="),
        }
    }
}

/// Keyboard-to-button mapping
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: FxHashMap<KeyCode, Button>,
}

impl KeyMap {
    /// Default bindings: digits, `.`/`,`, operator symbols, parentheses,
    /// Enter/`=` to evaluate, Backspace, Delete (clear entry) and Esc (clear)
    pub fn new() -> Self {
        let mut keymap = KeyMap {
            bindings: FxHashMap::default(),
        };

        for c in '0'..='9' {
            keymap.bind(KeyCode::Char(c), Button::Digit(c));
        }
        keymap.bind(KeyCode::Char('.'), Button::Dot);
        keymap.bind(KeyCode::Char(','), Button::Dot);

        for kind in OperationKind::BINARY {
            for c in kind.symbol().chars() {
                keymap.bind(KeyCode::Char(c), Button::Operation(kind));
            }
        }

        keymap.bind(KeyCode::Char('('), Button::OpenContext);
        keymap.bind(KeyCode::Char(')'), Button::CloseContext);
        keymap.bind(KeyCode::Char('='), Button::Evaluate);
        keymap.bind(KeyCode::Enter, Button::Evaluate);
        keymap.bind(KeyCode::Backspace, Button::Delete);
        keymap.bind(KeyCode::Delete, Button::ClearEntry);
        keymap.bind(KeyCode::Esc, Button::Clear);

        keymap
    }

    /// Bind a key, replacing any previous binding
    pub fn bind(&mut self, code: KeyCode, button: Button) {
        self.bindings.insert(code, button);
    }

    pub fn lookup(&self, code: KeyCode) -> Option<Button> {
        self.bindings.get(&code).copied()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}
