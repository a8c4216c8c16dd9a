//! Operation kinds and their static dispatch table
//!
//! Every [`OperationKind`] maps to exactly one [`OperationSpec`] holding its
//! precedence, arity, arithmetic, validation, and rendering. Nodes store only
//! the kind and look everything else up here.

use super::errors::ValidationError;

/// The closed set of operations the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    /// Single-input pass-through wrapping one parenthesized sub-expression
    Context,
}

/// Static description of an operation
pub struct OperationSpec {
    pub kind: OperationKind,
    /// Symbol shown on buttons and in calculation strings
    pub symbol: &'static str,
    /// Higher binds tighter
    pub precedence: u8,
    pub arity: usize,
    pub apply: fn(&[f64]) -> f64,
    pub validate: Option<fn(&[f64]) -> Option<ValidationError>>,
    /// Receives the rendered inputs followed by the trailing operand placeholder
    pub render: fn(&[String]) -> String,
}

static ADD: OperationSpec = OperationSpec {
    kind: OperationKind::Add,
    symbol: "+",
    precedence: 1,
    arity: 2,
    apply: apply_add,
    validate: None,
    render: render_add,
};

static SUBTRACT: OperationSpec = OperationSpec {
    kind: OperationKind::Subtract,
    symbol: "-",
    precedence: 1,
    arity: 2,
    apply: apply_subtract,
    validate: None,
    render: render_subtract,
};

static MULTIPLY: OperationSpec = OperationSpec {
    kind: OperationKind::Multiply,
    symbol: "*",
    precedence: 2,
    arity: 2,
    apply: apply_multiply,
    validate: None,
    render: render_multiply,
};

static DIVIDE: OperationSpec = OperationSpec {
    kind: OperationKind::Divide,
    symbol: "/",
    precedence: 2,
    arity: 2,
    apply: apply_divide,
    validate: Some(validate_divide),
    render: render_divide,
};

static POWER: OperationSpec = OperationSpec {
    kind: OperationKind::Power,
    symbol: "^",
    precedence: 3,
    arity: 2,
    apply: apply_power,
    validate: Some(validate_power),
    render: render_power,
};

static CONTEXT: OperationSpec = OperationSpec {
    kind: OperationKind::Context,
    symbol: "()",
    precedence: 5,
    arity: 1,
    apply: apply_identity,
    validate: None,
    render: render_context,
};

impl OperationKind {
    /// Kinds that can be pushed from an operator button, in keypad order
    pub const BINARY: [OperationKind; 5] = [
        OperationKind::Add,
        OperationKind::Subtract,
        OperationKind::Multiply,
        OperationKind::Divide,
        OperationKind::Power,
    ];

    /// Look up the dispatch table entry for this kind
    pub fn spec(self) -> &'static OperationSpec {
        match self {
            OperationKind::Add => &ADD,
            OperationKind::Subtract => &SUBTRACT,
            OperationKind::Multiply => &MULTIPLY,
            OperationKind::Divide => &DIVIDE,
            OperationKind::Power => &POWER,
            OperationKind::Context => &CONTEXT,
        }
    }

    pub fn precedence(self) -> u8 {
        self.spec().precedence
    }

    pub fn arity(self) -> usize {
        self.spec().arity
    }

    pub fn symbol(self) -> &'static str {
        self.spec().symbol
    }

    pub fn is_binary(self) -> bool {
        self.arity() == 2
    }

    /// Compute the result for a full set of numeric inputs
    pub fn apply(self, inputs: &[f64]) -> f64 {
        (self.spec().apply)(inputs)
    }

    /// Check numeric inputs, returning the rejection reason if any
    pub fn validate(self, inputs: &[f64]) -> Option<ValidationError> {
        self.spec().validate.and_then(|validate| validate(inputs))
    }

    /// Combine rendered inputs (plus trailing placeholder) into a display string
    pub fn render(self, parts: &[String]) -> String {
        (self.spec().render)(parts)
    }
}

fn input(inputs: &[f64], index: usize) -> f64 {
    inputs.get(index).copied().unwrap_or(f64::NAN)
}

fn apply_add(inputs: &[f64]) -> f64 {
    input(inputs, 0) + input(inputs, 1)
}

fn apply_subtract(inputs: &[f64]) -> f64 {
    input(inputs, 0) - input(inputs, 1)
}

fn apply_multiply(inputs: &[f64]) -> f64 {
    input(inputs, 0) * input(inputs, 1)
}

fn apply_divide(inputs: &[f64]) -> f64 {
    input(inputs, 0) / input(inputs, 1)
}

fn apply_power(inputs: &[f64]) -> f64 {
    input(inputs, 0).powf(input(inputs, 1))
}

fn apply_identity(inputs: &[f64]) -> f64 {
    input(inputs, 0)
}

fn validate_divide(inputs: &[f64]) -> Option<ValidationError> {
    (input(inputs, 1) == 0.0).then_some(ValidationError::DivisionByZero)
}

fn validate_power(inputs: &[f64]) -> Option<ValidationError> {
    let (base, exponent) = (input(inputs, 0), input(inputs, 1));
    // powf gives 1 for (+-1)^(+-inf); there is no real limit there
    let undefined = exponent.is_infinite() && base.abs() == 1.0;
    (undefined || apply_power(inputs).is_nan()).then_some(ValidationError::ComplexNumber)
}

fn part(parts: &[String], index: usize) -> &str {
    parts.get(index).map_or("", String::as_str)
}

fn infix(parts: &[String], symbol: &str) -> String {
    format!("{} {} {}", part(parts, 0), symbol, part(parts, 1))
}

fn render_add(parts: &[String]) -> String {
    infix(parts, ADD.symbol)
}

fn render_subtract(parts: &[String]) -> String {
    infix(parts, SUBTRACT.symbol)
}

fn render_multiply(parts: &[String]) -> String {
    infix(parts, MULTIPLY.symbol)
}

fn render_divide(parts: &[String]) -> String {
    infix(parts, DIVIDE.symbol)
}

fn render_power(parts: &[String]) -> String {
    infix(parts, POWER.symbol)
}

fn render_context(parts: &[String]) -> String {
    format!("({})", part(parts, 0))
}
