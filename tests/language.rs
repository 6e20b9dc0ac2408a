use deskcalc::{
    error::{CalcError, RuntimeError},
    interpreter::{
        evaluator::Context,
        render::{indented::render_indented, tree::render_ascii_tree},
    },
    run_line,
};

fn eval_in(src: &str, context: &mut Context) -> f64 {
    match run_line(src, context) {
        Ok(result) => result.value,
        Err(e) => panic!("Line failed: {e}"),
    }
}

fn eval_one(src: &str) -> f64 {
    let mut context = Context::new();
    eval_in(src, &mut context)
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(eval_one("2+3*4"), 14.0);
    assert_eq!(eval_one("(2+3)*4"), 20.0);
    assert_eq!(eval_one("2-3-4"), -5.0);
    assert_eq!(eval_one("24/4/2"), 3.0);
    assert_eq!(eval_one("2*3+4*5"), 26.0);
}

#[test]
fn implicit_multiplication() {
    assert_eq!(eval_one("2 3"), 6.0);
    assert_eq!(eval_one("2(3+4)"), 14.0);
    assert_eq!(eval_one("(1+1)(2+2)"), 8.0);
    assert_eq!(eval_one("2 3 4"), 24.0);
    assert_eq!(eval_one("1 + 2 3"), 7.0);

    let mut context = Context::new();
    eval_in("x = 2; y = 3", &mut context);
    assert_eq!(eval_in("x y", &mut context), 6.0);
    assert_eq!(eval_in("x(1+1)", &mut context), 4.0);
}

#[test]
fn unary_signs() {
    assert_eq!(eval_one("-3+5"), 2.0);
    assert_eq!(eval_one("+7"), 7.0);
    assert_eq!(eval_one("--3"), 3.0);
    assert_eq!(eval_one("2*-3"), -6.0);
    assert_eq!(eval_one("-(2+3)"), -5.0);
}

#[test]
fn assignments_persist_across_lines() {
    let mut context = Context::new();
    assert_eq!(eval_in("x = 5", &mut context), 5.0);
    assert_eq!(eval_in("x + 1", &mut context), 6.0);
    assert_eq!(context.snapshot(), "{x=5}");
}

#[test]
fn statement_lists_yield_the_last_value() {
    let mut context = Context::new();
    assert_eq!(eval_in("x=5;x+1", &mut context), 6.0);
    assert_eq!(context.get("x"), Some(5.0));

    assert_eq!(eval_one("a = 1; b = 2; a + b"), 3.0);
}

#[test]
fn earlier_statements_stay_committed_past_a_later_failure() {
    let mut context = Context::new();
    let result = run_line("x = 5; )", &mut context);
    assert!(matches!(result, Err(CalcError::Parse(_))));
    assert_eq!(context.get("x"), Some(5.0));
}

#[test]
fn unknown_variables_fail_by_name() {
    let mut context = Context::new();
    match run_line("y", &mut context) {
        Err(CalcError::Runtime(RuntimeError::UnknownVariable { name })) => {
            assert_eq!(name, "y");
        },
        other => panic!("Expected an unknown-variable error, got {other:?}"),
    }
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_eq!(eval_one("1/0"), f64::INFINITY);
    assert_eq!(eval_one("-1/0"), f64::NEG_INFINITY);
    assert!(eval_one("0/0").is_nan());
}

#[test]
fn snapshots_keep_first_assignment_order() {
    let mut context = Context::new();
    eval_in("x = 2", &mut context);
    eval_in("y = 7.5", &mut context);
    eval_in("x = 4", &mut context);
    assert_eq!(context.snapshot(), "{x=4, y=7.5}");
}

#[test]
fn decorated_leaves_render_their_literal_values() {
    let mut context = Context::new();
    let result = run_line("2+3*4", &mut context).unwrap();
    let rendered = render_indented(&result.ast);
    assert!(rendered.contains("Number(2) : val=2"));
    assert!(rendered.contains("Number(3) : val=3"));
    assert!(rendered.contains("Number(4) : val=4"));
    assert!(rendered.starts_with("BinaryOp(+) : val=14\n"));
}

#[test]
fn rendering_is_idempotent() {
    let mut context = Context::new();
    let result = run_line("x = 2(3+4)", &mut context).unwrap();

    let first = render_indented(&result.ast);
    assert_eq!(first, render_indented(&result.ast));

    let tree = render_ascii_tree(&result.ast);
    assert_eq!(tree, render_ascii_tree(&result.ast));
}

#[test]
fn lexical_errors_are_fatal_for_the_line() {
    let mut context = Context::new();
    let result = run_line("x = 5 @ 3", &mut context);
    assert!(matches!(result, Err(CalcError::Lex(_))));
    // The failure happened before anything was parsed or evaluated.
    assert_eq!(context.get("x"), None);
}
