/// Indented listing of a decorated tree, one node per line with its value.
pub mod indented;
/// ASCII tree built from box-drawing connectors, labels only.
pub mod tree;

use crate::ast::Expr;

/// One-line label for a node: variant name plus its payload.
pub(crate) fn label(expr: &Expr) -> String {
    match expr {
        Expr::Number { literal, .. } => format!("Number({literal})"),
        Expr::Variable { name, .. } => format!("Variable({name})"),
        Expr::Assignment { name, .. } => format!("Assignment({name})"),
        Expr::BinaryOp { op, .. } => format!("BinaryOp({op})"),
    }
}

/// Child nodes of `expr` in evaluation order; leaves have none.
pub(crate) fn children(expr: &Expr) -> Vec<&Expr> {
    match expr {
        Expr::Number { .. } | Expr::Variable { .. } => Vec::new(),
        Expr::Assignment { expr, .. } => vec![expr],
        Expr::BinaryOp { left, right, .. } => vec![left, right],
    }
}
