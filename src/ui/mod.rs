//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is a thin adapter over the [`Engine`]: it owns the number entry
//! field, maps keys to buttons, and renders whatever the engine reports.
//!
//! - **[`app`]**: application state, keyboard event loop, button dispatch
//! - **[`entry`]**: the number entry field
//! - **[`keymap`]**: buttons and their keyboard bindings
//! - **[`panes`]**: stateless render functions (display, keypad, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it and call
//! [`App::run`] to start the event loop.
//!
//! [`Engine`]: crate::engine::Engine
//! [`App::run`]: app::App::run

pub mod app;
pub mod entry;
pub mod keymap;
pub mod panes;
pub mod theme;

pub use app::App;
pub use entry::Entry;
pub use keymap::{Button, KeyMap};
