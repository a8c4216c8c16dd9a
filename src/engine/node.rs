//! Operation nodes: one arithmetic unit with memoized value and display string
//!
//! A node moves through `Building -> Saturated -> Evaluated | Failed`:
//!
//! - **Building**: fewer inputs than the kind's arity
//! - **Saturated**: all inputs present and numeric, not yet executed
//! - **Evaluated**: value and display string cached ([`NodeState::Value`])
//! - **Failed**: sticky validation error ([`NodeState::Failed`])
//!
//! Inputs are either literal numbers or child nodes owned exclusively by
//! their parent. Filled slots are never replaced, and a resolved state is
//! never recomputed.

use super::errors::ValidationError;
use super::format::format_number;
use super::operation::OperationKind;

/// One input slot of a node
#[derive(Debug, Clone)]
pub enum Operand {
    Number(f64),
    Node(Box<OperationNode>),
}

impl Operand {
    pub fn node(node: OperationNode) -> Self {
        Operand::Node(Box::new(node))
    }

    /// Numeric value of this operand, evaluating a child node if needed
    pub fn numeric(&mut self) -> Option<f64> {
        match self {
            Operand::Number(n) => Some(*n),
            Operand::Node(node) => node.numeric_value(),
        }
    }

    fn display_string(&mut self, trailing: &str, collapsed: bool) -> String {
        match self {
            Operand::Number(n) => format_number(*n),
            Operand::Node(node) => node.display_string(trailing, collapsed),
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Number(value)
    }
}

impl From<OperationNode> for Operand {
    fn from(node: OperationNode) -> Self {
        Operand::node(node)
    }
}

/// Result state of a node
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeState {
    Pending,
    Value(f64),
    Failed(ValidationError),
}

impl NodeState {
    pub fn value(self) -> Option<f64> {
        match self {
            NodeState::Value(v) => Some(v),
            _ => None,
        }
    }
}

/// A single arithmetic unit
#[derive(Debug, Clone)]
pub struct OperationNode {
    kind: OperationKind,
    inputs: Vec<Operand>,
    state: NodeState,
    /// Calculation string captured at execution time
    display: Option<String>,
}

impl OperationNode {
    pub fn new(kind: OperationKind) -> Self {
        OperationNode {
            kind,
            inputs: Vec::with_capacity(kind.arity()),
            state: NodeState::Pending,
            display: None,
        }
    }

    /// Builder form of [`OperationNode::add_input`]
    pub fn with_input(mut self, input: impl Into<Operand>) -> Self {
        self.add_input(input);
        self
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn precedence(&self) -> u8 {
        self.kind.precedence()
    }

    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Current state without triggering execution
    pub fn state(&self) -> NodeState {
        self.state
    }

    /// Append an input unless every slot is already filled
    pub fn add_input(&mut self, input: impl Into<Operand>) -> &mut Self {
        // A NaN input leaves the node unsaturated but still occupies its slot
        if self.inputs.len() < self.kind.arity() {
            self.inputs.push(input.into());
        }
        self
    }

    /// True iff all `arity` inputs are present and each reads as a non-NaN number
    pub fn is_saturated(&mut self) -> bool {
        self.inputs.len() == self.kind.arity()
            && self
                .inputs
                .iter_mut()
                .all(|input| input.numeric().is_some_and(|n| !n.is_nan()))
    }

    /// Validate and compute. No-op once resolved or while inputs are missing.
    pub fn execute(&mut self) {
        if self.state != NodeState::Pending || !self.is_saturated() {
            return;
        }

        let values: Vec<f64> = self
            .inputs
            .iter_mut()
            .map(|input| input.numeric().unwrap_or(f64::NAN))
            .collect();

        if let Some(reason) = self.kind.validate(&values) {
            self.state = NodeState::Failed(reason);
            return;
        }

        self.display = Some(self.display_string("", false));
        self.state = NodeState::Value(self.kind.apply(&values));
    }

    /// Execute if still pending and report the resulting state
    pub fn resolve(&mut self) -> NodeState {
        if self.state == NodeState::Pending {
            self.execute();
        }
        self.state
    }

    /// The node's value, if it can be computed
    pub fn numeric_value(&mut self) -> Option<f64> {
        self.resolve().value()
    }

    /// Pretty calculation string.
    ///
    /// With `collapsed`, an evaluated node renders as its value. Otherwise the
    /// inputs are rendered recursively and `trailing` fills the next empty
    /// operand slot, which is how live previews show the number being typed.
    pub fn display_string(&mut self, trailing: &str, collapsed: bool) -> String {
        if collapsed {
            self.execute();
            if let NodeState::Value(v) = self.state {
                return format_number(v);
            }
        }

        let single_input = self.kind.arity() == 1;
        let mut parts: Vec<String> = self
            .inputs
            .iter_mut()
            .map(|input| {
                let text = input.display_string(trailing, collapsed);
                if single_input {
                    strip_outer_parens(&text).to_string()
                } else {
                    text
                }
            })
            .collect();
        parts.push(trailing.to_string());

        self.kind.render(&parts)
    }

    /// The calculation string as captured when the node executed
    pub fn string_value(&mut self) -> String {
        if self.display.is_none() {
            self.execute();
        }
        match &self.display {
            Some(display) => display.clone(),
            None => self.display_string("", false),
        }
    }
}

/// Remove one pair of parentheses enclosing the whole text
fn strip_outer_parens(text: &str) -> &str {
    let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) else {
        return text;
    };

    // "(1 + 2) * (3 + 4)" is not enclosed by a single pair
    let mut depth = 0usize;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return text;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    inner
}
