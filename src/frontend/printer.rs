//! Indented text rendering of an AST.

use super::ast::AstNode;

const INDENT: &str = "  ";

/// Render the tree depth first, primary child before secondary child, one
/// `[label]` line per node indented by its depth.
pub fn render_tree(root: &AstNode) -> Vec<String> {
    let mut lines = Vec::new();
    render_node(root, 0, &mut lines);
    lines
}

fn render_node(node: &AstNode, depth: usize, lines: &mut Vec<String>) {
    lines.push(format!("{}[{}]", INDENT.repeat(depth), node.label()));
    for child in node.children() {
        render_node(child, depth + 1, lines);
    }
}
