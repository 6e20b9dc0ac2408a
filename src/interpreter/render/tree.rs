use crate::{
    ast::Expr,
    interpreter::render::{children, label},
};

/// Renders a tree with ASCII box-drawing connectors.
///
/// The root and every last child at a level hang off a `└── ` corner,
/// earlier siblings off a `├── ` branch, and continuation columns are drawn
/// with `│`. Labels show the variant and its payload only — decorations are
/// not rendered here; use the indented renderer for those. Lines are joined
/// with `\n` without a trailing newline.
///
/// # Examples
/// ```
/// use deskcalc::{interpreter::{evaluator::Context, render::tree::render_ascii_tree}, run_line};
///
/// let mut context = Context::new();
/// let result = run_line("x = 5", &mut context).unwrap();
/// assert_eq!(render_ascii_tree(&result.ast),
///            "└── Assignment(x)\n    └── Number(5)");
/// ```
#[must_use]
pub fn render_ascii_tree(expr: &Expr) -> String {
    let mut lines = Vec::new();
    write_node(expr, "", true, &mut lines);
    lines.join("\n")
}

fn write_node(expr: &Expr, prefix: &str, is_last: bool, lines: &mut Vec<String>) {
    let connector = if is_last { "└── " } else { "├── " };
    lines.push(format!("{prefix}{connector}{}", label(expr)));

    let nodes = children(expr);
    if nodes.is_empty() {
        return;
    }

    let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
    for (index, child) in nodes.iter().enumerate() {
        write_node(child, &child_prefix, index + 1 == nodes.len(), lines);
    }
}
