// Integration tests for the calculation engine

use tally::engine::{Engine, OperationKind, PartialResult, ValidationError};

fn result(engine: &mut Engine) -> f64 {
    engine.get_partial_result().value()
}

#[test]
fn test_binary_operations() {
    let cases = [
        (OperationKind::Add, 7.0, 2.0, 9.0),
        (OperationKind::Subtract, 7.0, 2.0, 5.0),
        (OperationKind::Multiply, 7.0, 2.0, 14.0),
        (OperationKind::Divide, 7.0, 2.0, 3.5),
        (OperationKind::Power, 7.0, 2.0, 49.0),
    ];

    let mut engine = Engine::new();
    for (kind, a, b, expected) in cases {
        engine.push(a, kind).evaluate(b);
        assert_eq!(result(&mut engine), expected, "{:?}", kind);
    }
}

#[test]
fn test_multiplication_binds_tighter() {
    let mut engine = Engine::new();

    // 2 + 3 * 4 =
    engine
        .push(2.0, OperationKind::Add)
        .push(3.0, OperationKind::Multiply)
        .evaluate(4.0);
    assert_eq!(result(&mut engine), 14.0);

    // 2 * 3 + 4 =
    engine
        .push(2.0, OperationKind::Multiply)
        .push(3.0, OperationKind::Add)
        .evaluate(4.0);
    assert_eq!(result(&mut engine), 10.0);
}

#[test]
fn test_equal_precedence_is_left_associative() {
    let mut engine = Engine::new();

    // 10 - 4 - 3 =
    engine
        .push(10.0, OperationKind::Subtract)
        .push(4.0, OperationKind::Subtract)
        .evaluate(3.0);
    assert_eq!(result(&mut engine), 3.0);

    // 2 ^ 3 ^ 2 =
    engine
        .push(2.0, OperationKind::Power)
        .push(3.0, OperationKind::Power)
        .evaluate(2.0);
    assert_eq!(result(&mut engine), 64.0);
}

#[test]
fn test_mixed_precedence_chain() {
    let mut engine = Engine::new();

    // 1 + 2 * 3 ^ 2 - 4 / 2 =
    engine
        .push(1.0, OperationKind::Add)
        .push(2.0, OperationKind::Multiply)
        .push(3.0, OperationKind::Power)
        .push(2.0, OperationKind::Subtract)
        .push(4.0, OperationKind::Divide)
        .evaluate(2.0);
    assert_eq!(result(&mut engine), 17.0);
}

#[test]
fn test_parentheses_override_precedence() {
    let mut engine = Engine::new();

    // ( 2 + 3 ) * 4 =
    engine
        .open_context()
        .push(2.0, OperationKind::Add)
        .close_context(3.0)
        .push(0.0, OperationKind::Multiply);

    assert_eq!(engine.get_calculation_string(false), "(2 + 3) * ");
    assert_eq!(engine.get_calculation_string(true), "5 * ");
    assert_eq!(
        engine.preview_calculation_string(4.0, false),
        "(2 + 3) * 4"
    );

    engine.evaluate(4.0);
    assert_eq!(result(&mut engine), 20.0);
}

#[test]
fn test_closed_context_replaces_typed_number() {
    let mut engine = Engine::new();

    engine.open_context().push(1.0, OperationKind::Add).close_context(1.0);
    assert_eq!(result(&mut engine), 2.0);

    // The 99 typed after ")" is discarded in favor of the closed value
    engine.push(99.0, OperationKind::Multiply).evaluate(5.0);
    assert_eq!(result(&mut engine), 10.0);
}

#[test]
fn test_nested_parentheses() {
    let mut engine = Engine::new();

    // ( ( 1 + 2 ) * 3 ) =
    engine
        .open_context()
        .open_context()
        .push(1.0, OperationKind::Add)
        .close_context(2.0)
        .push(0.0, OperationKind::Multiply)
        .close_context(3.0);

    assert_eq!(engine.depth(), 1);
    assert_eq!(engine.get_calculation_string(false), "((1 + 2) * 3)");
    assert_eq!(engine.get_calculation_string(true), "9");

    engine.evaluate(0.0);
    assert_eq!(result(&mut engine), 9.0);
}

#[test]
fn test_double_parentheses_render_once() {
    let mut engine = Engine::new();

    // ( ( 1 + 2 ) )
    engine
        .open_context()
        .open_context()
        .push(1.0, OperationKind::Add)
        .close_context(2.0)
        .close_context(0.0);

    assert_eq!(engine.get_calculation_string(false), "(1 + 2)");
}

#[test]
fn test_unclosed_parentheses_preview() {
    let mut engine = Engine::new();

    engine
        .push(2.0, OperationKind::Multiply)
        .open_context()
        .push(3.0, OperationKind::Add);

    assert_eq!(engine.depth(), 2);
    assert_eq!(engine.get_calculation_string(false), "2 * (3 + ");
    assert_eq!(engine.preview_calculation_string(4.0, false), "2 * (3 + 4");
    assert_eq!(engine.preview_calculation_string(4.0, true), "14");

    // Previews never touch the real calculation
    assert_eq!(engine.depth(), 2);
}

#[test]
fn test_evaluate_closes_open_parentheses() {
    let mut engine = Engine::new();

    // 2 * ( 3 + 4 =
    engine
        .push(2.0, OperationKind::Multiply)
        .open_context()
        .push(3.0, OperationKind::Add)
        .evaluate(4.0);

    assert_eq!(result(&mut engine), 14.0);
    assert_eq!(engine.depth(), 1);
}

#[test]
fn test_evaluate_feeds_closed_parentheses_to_outer_operation() {
    let mut engine = Engine::new();

    // 1 + ( 2 + 3 =
    engine
        .push(1.0, OperationKind::Add)
        .open_context()
        .push(2.0, OperationKind::Add)
        .evaluate(3.0);

    assert_eq!(result(&mut engine), 6.0);
}

#[test]
fn test_stray_close_is_ignored() {
    let mut with_stray = Engine::new();
    with_stray
        .close_context(8.0)
        .push(2.0, OperationKind::Add)
        .close_context(5.0)
        .push(3.0, OperationKind::Multiply)
        .evaluate(4.0);

    let mut without = Engine::new();
    without
        .push(2.0, OperationKind::Add)
        .push(3.0, OperationKind::Multiply)
        .evaluate(4.0);

    assert_eq!(result(&mut with_stray), result(&mut without));
}

#[test]
fn test_stray_close_keeps_state() {
    let mut engine = Engine::new();
    engine.push(2.0, OperationKind::Add);
    engine.get_partial_result();

    engine.close_context(5.0);
    assert_eq!(engine.get_calculation_string(false), "2 + ");
    assert_eq!(engine.get_partial_result(), PartialResult::Value(0.0));
    assert!(!engine.has_closed_context());
}

#[test]
fn test_division_by_zero_recovers() {
    let mut engine = Engine::new();

    // 5 / 0 =
    engine.push(5.0, OperationKind::Divide).evaluate(0.0);
    let reading = engine.get_partial_result();
    assert_eq!(reading, PartialResult::Error(ValidationError::DivisionByZero));
    assert_eq!(reading.to_string(), "Error: division by 0");

    // 3 + 4 =
    engine.push(3.0, OperationKind::Add).evaluate(4.0);
    assert_eq!(result(&mut engine), 7.0);
}

#[test]
fn test_error_mid_expression_resets_on_next_event() {
    let mut engine = Engine::new();

    // 5 / 0 +
    engine
        .push(5.0, OperationKind::Divide)
        .push(0.0, OperationKind::Add);
    assert_eq!(engine.error(), Some(ValidationError::DivisionByZero));
    assert!(engine.get_partial_result().is_error());

    // The failed calculation is discarded, not continued
    engine.push(3.0, OperationKind::Add).evaluate(4.0);
    assert_eq!(result(&mut engine), 7.0);
}

#[test]
fn test_complex_power_is_an_error() {
    let mut engine = Engine::new();

    // -8 ^ 0.5 =
    engine.push(-8.0, OperationKind::Power).evaluate(0.5);
    let reading = engine.get_partial_result();
    assert_eq!(reading, PartialResult::Error(ValidationError::ComplexNumber));
    assert_eq!(reading.to_string(), "Error: complex number");

    engine.push(3.0, OperationKind::Add).evaluate(4.0);
    assert_eq!(result(&mut engine), 7.0);
}

#[test]
fn test_error_inside_parentheses() {
    let mut engine = Engine::new();

    // ( 1 / 0 )
    engine
        .open_context()
        .push(1.0, OperationKind::Divide)
        .close_context(0.0);
    assert_eq!(
        engine.get_partial_result(),
        PartialResult::Error(ValidationError::DivisionByZero)
    );

    // Next event starts over with a single level
    engine.push(0.0, OperationKind::Add).evaluate(2.0);
    assert_eq!(result(&mut engine), 2.0);
    assert_eq!(engine.depth(), 1);
}

#[test]
fn test_collapsed_string_keeps_failed_expression() {
    let mut engine = Engine::new();

    // ( 1 / 0 )
    engine
        .open_context()
        .push(1.0, OperationKind::Divide)
        .close_context(0.0);

    assert!(engine.error().is_some());
    assert_eq!(engine.get_calculation_string(false), "(1 / 0)");
    assert_eq!(engine.get_calculation_string(true), "(1 / 0)");
}

#[test]
fn test_error_while_evaluating_open_parentheses() {
    let mut engine = Engine::new();

    // ( 1 / 0 =
    engine
        .open_context()
        .push(1.0, OperationKind::Divide)
        .evaluate(0.0);

    assert!(engine.get_partial_result().is_error());
    assert_eq!(engine.depth(), 1);
    assert_eq!(engine.error(), None);
}

#[test]
fn test_live_preview_of_typed_operand() {
    let mut engine = Engine::new();

    // 2 + 3 (3 still in the entry field)
    engine.push(2.0, OperationKind::Add);
    assert_eq!(engine.get_calculation_string(false), "2 + ");
    assert_eq!(engine.preview_calculation_string(3.0, false), "2 + 3");
    assert_eq!(engine.preview_calculation_string(3.0, true), "5");
}

#[test]
fn test_collapsed_string_reduces_computable_nodes() {
    let mut engine = Engine::new();

    // 2 * 3 + 4 *
    engine
        .push(2.0, OperationKind::Multiply)
        .push(3.0, OperationKind::Add)
        .push(4.0, OperationKind::Multiply);

    assert_eq!(engine.get_calculation_string(false), "2 * 3 + 4 * ");
    assert_eq!(engine.get_calculation_string(true), "6 + 4 * ");
}

#[test]
fn test_partial_result_is_read_and_clear() {
    let mut engine = Engine::new();
    engine.push(6.0, OperationKind::Multiply).evaluate(7.0);

    assert_eq!(engine.get_partial_result(), PartialResult::Value(42.0));
    assert_eq!(engine.get_partial_result(), PartialResult::Value(0.0));
}

#[test]
fn test_evaluate_without_operator() {
    let mut engine = Engine::new();
    engine.evaluate(12.5);
    assert_eq!(result(&mut engine), 12.5);
    assert_eq!(engine.get_calculation_string(false), "");
}

#[test]
fn test_evaluate_resets_state() {
    let mut engine = Engine::new();
    engine
        .open_context()
        .push(1.0, OperationKind::Add)
        .close_context(2.0);
    assert!(engine.has_closed_context());

    engine.evaluate(0.0);
    assert!(!engine.has_closed_context());
    assert_eq!(engine.depth(), 1);
    assert_eq!(engine.get_calculation_string(false), "");
    assert_eq!(result(&mut engine), 3.0);
}

#[test]
fn test_explicit_reset_keeps_partial_result() {
    let mut engine = Engine::new();
    engine.push(4.0, OperationKind::Add).open_context();

    engine.reset();
    assert_eq!(engine.depth(), 1);
    assert_eq!(engine.get_calculation_string(false), "");
    assert_eq!(result(&mut engine), 4.0);
}
