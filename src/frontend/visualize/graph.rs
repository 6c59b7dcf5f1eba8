//! Minimal model of a Graphviz graph which renders itself in the DOT language.

use std::fmt::{self, Display};

pub struct Graph {
    name: String,
    pub is_directed: bool,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(name: &str, is_directed: bool) -> Self {
        Graph {
            name: name.to_string(),
            is_directed,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Connect two nodes. The edge style follows the graph's directedness.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.edges.push(Edge {
            from: from.to_string(),
            to: to.to_string(),
            is_directed: self.is_directed,
        });
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let graph_type = if self.is_directed { "digraph" } else { "graph" };
        writeln!(f, "{} {} {{", graph_type, &self.name)?;
        for node in self.nodes.iter() {
            writeln!(f, "\t{}", node)?;
        }
        for edge in self.edges.iter() {
            writeln!(f, "\t{}", edge)?;
        }
        write!(f, "}}")
    }
}

pub struct Node {
    id: String,
    label: String,
    shape: Option<&'static str>,
}

impl Node {
    pub fn new(id: &str, label: &str, shape: Option<&'static str>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            shape,
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} [ label=\"{}\"", self.id, escape(&self.label))?;
        if let Some(shape) = self.shape {
            write!(f, ", shape={}", shape)?;
        }
        write!(f, " ];")
    }
}

struct Edge {
    from: String,
    to: String,
    is_directed: bool,
}

impl Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let op = if self.is_directed { "->" } else { "--" };
        write!(f, "{} {} {};", self.from, op, self.to)
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
