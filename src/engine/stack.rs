//! Stack-of-stacks expression engine
//!
//! The [`Engine`] receives one event at a time and keeps the calculation in
//! precedence order without ever parsing a complete expression:
//!
//! - each open parenthesis owns a **level**, an ordered stack of
//!   [`OperationNode`]s whose top is waiting for its next operand
//! - a closed parenthesis becomes a single-input context node parked in the
//!   closed-context slot until the next event consumes it
//! - collapsing folds saturated nodes into the node beneath them as
//!   long as precedence allows
//!
//! Validation failures set the engine error state. The next public operation
//! resets the engine before handling its own input.

use super::errors::ValidationError;
use super::format::format_number;
use super::node::{NodeState, Operand, OperationNode};
use super::operation::OperationKind;
use std::fmt;

/// One nesting depth of parentheses
pub type Level = Vec<OperationNode>;

/// The reading shown in the calculator's number field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartialResult {
    Value(f64),
    Error(ValidationError),
}

impl PartialResult {
    /// Numeric reading; errors read as NaN
    pub fn value(self) -> f64 {
        match self {
            PartialResult::Value(v) => v,
            PartialResult::Error(_) => f64::NAN,
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, PartialResult::Error(_))
    }
}

impl Default for PartialResult {
    fn default() -> Self {
        PartialResult::Value(0.0)
    }
}

impl fmt::Display for PartialResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartialResult::Value(v) => write!(f, "{}", format_number(*v)),
            PartialResult::Error(reason) => write!(f, "Error: {}", reason),
        }
    }
}

/// The incremental expression engine
#[derive(Debug, Clone)]
pub struct Engine {
    /// Bottom is the outermost level; never empty
    levels: Vec<Level>,

    /// Context node produced by the last `)`, awaiting consumption
    closed_context: Option<OperationNode>,

    /// Latest computable value, read-and-cleared by the adapter
    partial_result: PartialResult,

    /// Set when a node fails validation during collapse
    error: Option<ValidationError>,
}

impl Engine {
    pub fn new() -> Self {
        Engine {
            levels: vec![Level::new()],
            closed_context: None,
            partial_result: PartialResult::default(),
            error: None,
        }
    }

    /// Discard the calculation in progress. The partial result survives.
    pub fn reset(&mut self) {
        self.levels.clear();
        self.levels.push(Level::new());
        self.closed_context = None;
        self.error = None;
    }

    /// Number of open levels, including the outermost one
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    pub fn has_closed_context(&self) -> bool {
        self.closed_context.is_some()
    }

    /// Push a number followed by an operator
    pub fn push(&mut self, number: f64, kind: OperationKind) -> &mut Self {
        self.recover();
        tracing::debug!(number, ?kind, depth = self.levels.len(), "push");

        let mut input = self.take_input(number);
        self.record(input.numeric());

        let precedence = kind.precedence();
        let wraps_top = self
            .current_level()
            .last()
            .is_some_and(|top| precedence <= top.precedence());

        if !wraps_top {
            self.current_level_mut()
                .push(OperationNode::new(kind).with_input(input));
            self.collapse(precedence);
            return self;
        }

        if let Some(top) = self.current_level_mut().last_mut() {
            top.add_input(input);
        }
        self.collapse(precedence);
        self.wrap_top(kind);
        self
    }

    /// Open a parenthesis. Ignored when there is nowhere to attach it.
    pub fn open_context(&mut self) -> &mut Self {
        self.recover();

        if self.closed_context.is_some() {
            tracing::debug!("open_context ignored: closed context pending");
            return self;
        }
        if self
            .current_level_mut()
            .last_mut()
            .is_some_and(|top| top.is_saturated())
        {
            tracing::debug!("open_context ignored: top node saturated");
            return self;
        }

        self.levels.push(Level::new());
        tracing::debug!(depth = self.levels.len(), "open_context");
        self
    }

    /// Close the innermost parenthesis. Ignored when none is open.
    pub fn close_context(&mut self, number: f64) -> &mut Self {
        self.recover();
        self.close_level(number);
        self
    }

    /// Finish the calculation, closing any open parentheses first
    pub fn evaluate(&mut self, number: f64) -> &mut Self {
        self.recover();
        tracing::debug!(number, depth = self.levels.len(), "evaluate");

        while self.levels.len() > 1 && self.error.is_none() {
            self.close_level(number);
        }

        if self.error.is_none() {
            let mut input = self.take_input(number);
            self.record(input.numeric());

            if let Some(top) = self.current_level_mut().last_mut() {
                top.add_input(input);
            }
            self.collapse(0);
        }

        self.reset();
        self
    }

    /// Return the partial result and clear it to zero
    pub fn get_partial_result(&mut self) -> PartialResult {
        std::mem::take(&mut self.partial_result)
    }

    /// Pretty string for the calculation so far.
    ///
    /// Unclosed parentheses are shown with their opening `(` only. With
    /// `collapsed`, every node that can already be computed shows its value.
    pub fn get_calculation_string(&mut self, collapsed: bool) -> String {
        let seed = match self.closed_context.as_mut() {
            Some(context) => context.display_string("", collapsed),
            None => String::new(),
        };
        self.fold_levels(seed, collapsed)
    }

    /// Calculation string as if `entry` had been typed as the next operand.
    ///
    /// The collapsed form evaluates a copy of the engine, so the real
    /// calculation is left untouched.
    pub fn preview_calculation_string(&mut self, entry: f64, collapsed: bool) -> String {
        if collapsed {
            let mut scratch = self.clone();
            return scratch.evaluate(entry).get_partial_result().to_string();
        }

        // a failed calculation is discarded by the next event
        if self.error.is_some() {
            return format_number(entry);
        }

        let seed = match self.closed_context.as_mut() {
            Some(context) => context.display_string("", false),
            None => format_number(entry),
        };
        self.fold_levels(seed, false)
    }

    /// Fold saturated nodes into their parents while precedence allows
    fn collapse(&mut self, precedence: u8) {
        loop {
            let level = self.current_level_mut();
            let Some(mut current) = level.pop() else {
                return;
            };

            if !current.is_saturated() {
                level.push(current);
                return;
            }

            match current.resolve() {
                NodeState::Value(v) => {
                    tracing::trace!(kind = ?current.kind(), value = v, "collapsed node");
                    self.record(Some(v));
                }
                NodeState::Failed(reason) => {
                    self.current_level_mut().push(current);
                    self.fail(reason);
                    return;
                }
                NodeState::Pending => {
                    self.current_level_mut().push(current);
                    return;
                }
            }

            let level = self.current_level_mut();
            let absorbs = level
                .last()
                .is_some_and(|previous| previous.precedence() >= precedence);
            if !absorbs {
                level.push(current);
                return;
            }
            if let Some(previous) = level.last_mut() {
                previous.add_input(current);
            }
        }
    }

    /// Feed the top node into a new node of `kind` and put that in its place
    fn wrap_top(&mut self, kind: OperationKind) {
        let level = self.current_level_mut();
        if let Some(last) = level.pop() {
            level.push(OperationNode::new(kind).with_input(last));
        }
        self.collapse(kind.precedence());
    }

    fn close_level(&mut self, number: f64) {
        if self.levels.len() <= 1 {
            tracing::debug!("close_context ignored: no open context");
            return;
        }

        let input = self.take_input(number);
        let inner = if self.current_level().is_empty() {
            input
        } else {
            if let Some(top) = self.current_level_mut().last_mut() {
                top.add_input(input);
            }
            self.collapse(0);
            match self.current_level_mut().pop() {
                Some(node) => Operand::node(node),
                None => return,
            }
        };
        self.levels.pop();

        let mut context = OperationNode::new(OperationKind::Context).with_input(inner);
        let value = context.numeric_value();
        self.record(value);
        self.closed_context = Some(context);
        tracing::debug!(depth = self.levels.len(), ?value, "close_context");
    }

    /// The pending closed context if any, otherwise the typed number
    fn take_input(&mut self, number: f64) -> Operand {
        match self.closed_context.take() {
            Some(context) => Operand::node(context),
            None => Operand::Number(number),
        }
    }

    /// Update the partial result unless an error is being shown
    fn record(&mut self, value: Option<f64>) {
        if self.error.is_none() {
            self.partial_result = PartialResult::Value(value.unwrap_or(f64::NAN));
        }
    }

    fn fail(&mut self, reason: ValidationError) {
        tracing::warn!(%reason, "calculation failed");
        self.error = Some(reason);
        self.partial_result = PartialResult::Error(reason);
    }

    /// Discard a failed calculation before handling new input
    fn recover(&mut self) {
        if self.error.is_some() {
            tracing::debug!("resetting after error");
            self.reset();
        }
    }

    fn fold_levels(&mut self, seed: String, collapsed: bool) -> String {
        let mut result = seed;
        for (depth, level) in self.levels.iter_mut().enumerate().rev() {
            for node in level.iter_mut().rev() {
                result = node.display_string(&result, collapsed);
            }
            if depth > 0 {
                result.insert(0, '(');
            }
        }
        result
    }

    fn current_level(&self) -> &Level {
        &self.levels[self.levels.len() - 1]
    }

    fn current_level_mut(&mut self) -> &mut Level {
        let index = self.levels.len() - 1;
        &mut self.levels[index]
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
