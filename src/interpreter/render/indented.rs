use std::fmt::Write;

use crate::{
    ast::Expr,
    interpreter::render::{children, label},
};

/// Renders a decorated tree as an indented listing.
///
/// One line per node in pre-order (a node before its children), children
/// indented two spaces deeper than their parent. Each line shows the node's
/// label and its decoration as `label : val=<value>`; a node that has not
/// been evaluated shows `val=?`. The tree is not mutated, so re-rendering
/// the same tree yields identical output.
///
/// # Examples
/// ```
/// use deskcalc::{interpreter::{evaluator::Context, render::indented::render_indented}, run_line};
///
/// let mut context = Context::new();
/// let result = run_line("1 + 2", &mut context).unwrap();
/// assert_eq!(render_indented(&result.ast),
///            "BinaryOp(+) : val=3\n  Number(1) : val=1\n  Number(2) : val=2\n");
/// ```
#[must_use]
pub fn render_indented(expr: &Expr) -> String {
    let mut out = String::new();
    write_node(expr, 0, &mut out);
    out
}

fn write_node(expr: &Expr, depth: usize, out: &mut String) {
    let value = expr.value().map_or_else(|| "?".to_string(), |v| v.to_string());
    let _ = writeln!(out, "{:depth$}{} : val={}", "", label(expr), value);
    for child in children(expr) {
        write_node(child, depth + 2, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOperator;

    #[test]
    fn undecorated_nodes_render_a_placeholder() {
        let expr = Expr::binary(BinaryOperator::Add, Expr::number(1.0), Expr::number(2.0));
        assert_eq!(render_indented(&expr),
                   "BinaryOp(+) : val=?\n  Number(1) : val=?\n  Number(2) : val=?\n");
    }

    #[test]
    fn assignments_indent_their_expression() {
        let expr = Expr::assignment("x", Expr::number(5.0));
        assert_eq!(render_indented(&expr),
                   "Assignment(x) : val=?\n  Number(5) : val=?\n");
    }
}
