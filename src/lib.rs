pub mod error;
pub mod frontend;

use error::ArgoError;
use frontend::{ast::AstNode, lexer::Lexer, parser::Parser};

/// Parse `src` as exactly one class declaration.
///
/// ```rust
/// let ast = argo::parse_class_declaration("class A { public int x; }").unwrap();
/// assert_eq!(ast.label(), "A");
/// ```
pub fn parse_class_declaration(src: &str) -> Result<AstNode, ArgoError> {
    Parser::new(Lexer::new(src)).parse()
}
