//! Abstract syntax tree datastructures.
//! In here are all datastructures needed for creating the AST in the parser.
//!
//! Every node owns its children, so dropping the root frees the whole tree.

use std::fmt;

use super::printer;

/// Access modifier of a member declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

/// The builtin field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeName {
    Int,
    Float,
    String,
}

impl TypeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeName::Int => "int",
            TypeName::Float => "float",
            TypeName::String => "string",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Basic nodes of which the AST consists.
///     - Class is the root and holds the class body as its only child
///     - Body owns the member declarations in source order
///     - Member holds the type as primary and the member name as secondary child
///     - Type and Ident are always leave nodes
pub enum AstNode {
    Class { name: String, body: Box<AstNode> },
    Body(Vec<AstNode>),
    Member {
        visibility: Visibility,
        typ: Box<AstNode>,
        ident: Box<AstNode>,
    },
    Type(TypeName),
    Ident(String),
}

impl AstNode {
    /// The fixed tag naming the kind of construct.
    pub fn kind(&self) -> &'static str {
        match self {
            AstNode::Class { .. } => "ClassDeclaration",
            AstNode::Body(_) => "ClassBody",
            AstNode::Member { .. } => "MemberDeclaration",
            AstNode::Type(_) => "Type",
            AstNode::Ident(_) => "Identifier",
        }
    }

    /// Printed label of the node. Members are labelled with their visibility
    /// keyword rather than their kind.
    pub fn label(&self) -> &str {
        match self {
            AstNode::Class { name, .. } => name.as_str(),
            AstNode::Body(_) => "ClassBody",
            AstNode::Member { visibility, .. } => visibility.as_str(),
            AstNode::Type(t) => t.as_str(),
            AstNode::Ident(name) => name.as_str(),
        }
    }

    pub fn primary(&self) -> Option<&AstNode> {
        match self {
            AstNode::Class { body, .. } => Some(&**body),
            AstNode::Body(members) => members.first(),
            AstNode::Member { typ, .. } => Some(&**typ),
            AstNode::Type(_) | AstNode::Ident(_) => None,
        }
    }

    pub fn secondary(&self) -> Option<&AstNode> {
        match self {
            AstNode::Member { ident, .. } => Some(&**ident),
            _ => None,
        }
    }

    /// Children in traversal order: primary before secondary, members of a
    /// body in declaration order.
    pub fn children(&self) -> Vec<&AstNode> {
        match self {
            AstNode::Body(members) => members.iter().collect(),
            _ => self.primary().into_iter().chain(self.secondary()).collect(),
        }
    }

    /// Member declarations of a class or class body, empty for any other node.
    pub fn members(&self) -> &[AstNode] {
        match self {
            AstNode::Class { body, .. } => body.members(),
            AstNode::Body(members) => members,
            _ => &[],
        }
    }
}

impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in printer::render_tree(self) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(visibility: Visibility, typ: TypeName, name: &str) -> AstNode {
        AstNode::Member {
            visibility,
            typ: Box::new(AstNode::Type(typ)),
            ident: Box::new(AstNode::Ident(name.to_string())),
        }
    }

    #[test]
    fn test_labels_and_kinds() {
        let m = member(Visibility::Private, TypeName::String, "name");
        assert_eq!(m.label(), "private");
        assert_eq!(m.kind(), "MemberDeclaration");
        assert_eq!(m.primary().map(AstNode::label), Some("string"));
        assert_eq!(m.secondary().map(AstNode::label), Some("name"));
        assert_eq!(m.secondary().map(AstNode::kind), Some("Identifier"));
    }

    #[test]
    fn test_children_order() {
        let class = AstNode::Class {
            name: "B".to_string(),
            body: Box::new(AstNode::Body(vec![
                member(Visibility::Public, TypeName::Int, "x"),
                member(Visibility::Private, TypeName::Float, "y"),
            ])),
        };
        let body = class.primary().unwrap();
        assert_eq!(body.label(), "ClassBody");
        let names: Vec<_> = body
            .children()
            .into_iter()
            .filter_map(AstNode::secondary)
            .map(AstNode::label)
            .collect();
        assert_eq!(names, vec!["x", "y"]);
        assert_eq!(class.members().len(), 2);
        assert!(AstNode::Ident("x".to_string()).children().is_empty());
    }
}
