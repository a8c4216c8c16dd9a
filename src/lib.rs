//! # Introduction
//!
//! Tally is a terminal calculator. Its core is an incremental expression
//! engine: every key press is a single event, and the engine keeps the
//! calculation in operator-precedence order without ever re-parsing the
//! expression as text.
//!
//! ## Event pipeline
//!
//! ```text
//! Key → Button → Engine operation → OperationNode tree → calculation string + partial result → TUI
//! ```
//!
//! 1. [`engine`]: operation nodes, the stack-of-stacks [`engine::Engine`],
//!    sticky validation errors and number formatting.
//! 2. [`ui`]: ratatui-based TUI: number entry, key bindings and panes; not
//!    part of the stable library API.
//!
//! ## Supported operations
//!
//! `+`, `-` (precedence 1), `*`, `/` (2), `^` (3) and nested parentheses.
//! Division by zero and powers without a real result put the calculator
//! into an error state that clears on the next key press.

pub mod engine;
pub mod ui;
