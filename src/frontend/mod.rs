//! The frontend module contains everything that is concerned with tokenizing and parsing the input string.
//!
//! # Lexer
//! The lexer hands out one token per call to `next_token`, advancing its cursor
//! through the source. Tokens are defined in the token module.
//! ### Example
//! ```rust
//! use argo::frontend::lexer::Lexer;
//! let tokens_or_err = Lexer::new("class A { }").tokenize();
//! ```
//!
//! # Parser
//! The parser owns a lexer and pulls tokens from it lazily while descending through
//! the grammar, producing the AST of a single class declaration.
//! ### Example
//! ```rust
//! use argo::frontend::{lexer::Lexer, parser::Parser};
//! let ast_or_err = Parser::new(Lexer::new("class A { public int x; }")).parse();
//! ```
//!
//! # Printing
//! `printer::render_tree` renders the AST as indented lines and the `visualize`
//! module turns it into a Graphviz DOT graph.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod position;
pub mod printer;
pub mod token;
pub mod visualize;
