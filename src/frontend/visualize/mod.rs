//! Renders an AST as a Graphviz DOT graph, handy for looking at larger trees.

use super::ast::AstNode;
use super::visualize::graph::{Graph, Node};

pub mod graph;

pub struct Visualizer {
    /// Counter used for giving each node a unique name.
    node_counter: u32,
    /// Graph that will be filled.
    pub graph: Graph,
}

impl Visualizer {
    const NODE_NAME_PREFIX: &'static str = "node";

    pub fn new(graph_name: &str, is_directed: bool) -> Self {
        Self {
            node_counter: 1,
            graph: Graph::new(graph_name, is_directed),
        }
    }

    /// Adds `ast` and all of its descendants to the graph. Returns the name of
    /// the graph node created for `ast`.
    pub fn visualize_ast(&mut self, ast: &AstNode) -> String {
        let shape = match ast {
            AstNode::Class { .. } => Some("doubleoctagon"),
            AstNode::Body(_) => Some("box"),
            AstNode::Member { .. } => Some("ellipse"),
            AstNode::Type(_) | AstNode::Ident(_) => Some("plaintext"),
        };
        let name = self.add_node(ast.label(), shape);
        for child in ast.children() {
            let child_name = self.visualize_ast(child);
            self.graph.add_edge(&name, &child_name);
        }
        name
    }

    fn add_node(&mut self, label: &str, shape: Option<&'static str>) -> String {
        let name = format!("{}{}", Visualizer::NODE_NAME_PREFIX, self.node_counter);
        self.node_counter += 1;
        self.graph.add_node(Node::new(&name, label, shape));
        name
    }
}
