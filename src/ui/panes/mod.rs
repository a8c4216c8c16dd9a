//! TUI pane rendering modules
//!
//! - [`display`]: calculation strings and the entry field
//! - [`keypad`]: the button grid, highlighting the last pressed button
//! - [`status`]: status bar with keybindings and error indicator
//!
//! Each module exports a stateless `render_*` function.

pub mod display;
pub mod keypad;
pub mod status;

pub use display::{render_display_pane, DisplayRenderData};
pub use keypad::{render_keypad_pane, KEYPAD_ROWS};
pub use status::render_status_bar;
