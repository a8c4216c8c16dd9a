//! Calculation engine
//!
//! Turns a stream of discrete events (operator press, open/close parenthesis,
//! evaluate) into a precedence-ordered result and a readable calculation
//! string, one event at a time.
//!
//! - [`operation`]: operation kinds and their dispatch table
//! - [`node`]: memoizing operation nodes
//! - [`stack`]: the stack-of-stacks [`Engine`]
//! - [`errors`]: sticky validation errors
//! - [`format`]: number rendering

pub mod errors;
pub mod format;
pub mod node;
pub mod operation;
pub mod stack;

pub use errors::ValidationError;
pub use node::{NodeState, Operand, OperationNode};
pub use operation::{OperationKind, OperationSpec};
pub use stack::{Engine, PartialResult};
