//! The calculator's number entry field

/// Text being typed, plus whether the next keystroke replaces it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    text: String,

    /// Set after a result is shown so typing starts a fresh number
    clear_on_input: bool,
}

impl Entry {
    pub fn new() -> Self {
        Entry {
            text: String::from("0"),
            clear_on_input: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// True while the user is typing a number rather than looking at a result
    pub fn is_editing(&self) -> bool {
        !self.clear_on_input
    }

    /// Type a digit or the decimal point
    pub fn digit(&mut self, c: char) {
        if c == '.' && self.text.contains('.') && !self.clear_on_input {
            return;
        }
        if (self.text == "0" && c != '.') || self.clear_on_input {
            self.text.clear();
        }
        self.clear_on_input = false;
        self.text.push(c);
    }

    /// Remove the last character, falling back to `0`
    pub fn delete_last(&mut self) {
        self.text.pop();
        if self.text.is_empty() {
            self.text.push('0');
        }
    }

    pub fn clear(&mut self) {
        self.text = String::from("0");
    }

    /// Show a result; the next digit starts a new number
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.clear_on_input = true;
    }

    /// Numeric value passed to the engine. Error text and unparsable input read as 0.
    pub fn number(&self) -> f64 {
        if self.text.to_ascii_lowercase().contains("error") {
            return 0.0;
        }
        self.text.parse().unwrap_or(0.0)
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::new()
    }
}
