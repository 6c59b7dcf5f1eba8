//! Recursive descent parser implementation.
//!
//! Grammar:
//! ```text
//! Class     := 'class' IDENTIFIER '{' ClassBody '}'
//! ClassBody := Member*
//! Member    := ('public' | 'private') Type IDENTIFIER ';'
//! Type      := 'int' | 'float' | 'string'
//! ```
//! Every production is LL(1). Tokens are pulled from the lexer on demand and a
//! single buffered lookahead token is shared by all productions.

use log::{debug, trace};

use super::{
    ast::{AstNode, TypeName, Visibility},
    lexer::Lexer,
    token::{Token, Type},
};
use crate::{
    error::ArgoError::{self, SyntaxError},
    T,
};

/// The `Parser` struct is repsonsible for turning the tokens of a `Lexer` into
/// the AST of a single class declaration.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Token that has been peeked at but not consumed yet.
    peeked: Option<Token<'a>>,
}

/// Represents the result of most parser functions where either a AstNode is returned or
/// a parse error occured and Err is returned.
type ParserResult = Result<AstNode, ArgoError>;

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            peeked: None,
        }
    }

    //-------
    // HELPER
    //-------

    /// Returns the next token without consuming it.
    fn peek(&mut self) -> Result<&Token<'a>, ArgoError> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };
        let token: &Token<'a> = self.peeked.insert(token);
        Ok(token)
    }

    /// Consumes the next token, preferring the buffered lookahead.
    fn next(&mut self) -> Result<Token<'a>, ArgoError> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.lexer.next_token(),
        }
    }

    /// Tries consuming the next token. If the type matches the expected type the token
    /// is returned otherwise a syntax error is returned.
    fn consume(&mut self, expected: Type) -> Result<Token<'a>, ArgoError> {
        let token = self.next()?;
        if token.typ == expected {
            Ok(token)
        } else {
            Err(self.token_parse_err(&token, &expected.to_string()))
        }
    }

    /// Create a syntax error describing what was expected instead of `token`.
    fn token_parse_err(&self, token: &Token<'a>, expected: &str) -> ArgoError {
        let found = match token.typ {
            T![ident] => format!("identifier '{}'", token.lexeme),
            Type::IntLiteral | Type::FloatLiteral => format!("{} '{}'", token.typ, token.lexeme),
            _ => token.typ.to_string(),
        };
        debug!("Parser: Expected {} but found {} at {}", expected, found, token.pos);
        SyntaxError {
            pos: token.pos,
            expected: expected.to_string(),
            found,
        }
    }

    //--------
    // PARSING
    //--------

    /// Parse the whole input as exactly one class declaration.
    pub fn parse(&mut self) -> ParserResult {
        let class = self.parse_class()?;
        self.consume(T![eof])?;
        Ok(class)
    }

    pub fn parse_class(&mut self) -> ParserResult {
        self.consume(T![class])?;
        let name_token = self.next()?;
        if name_token.typ != T![ident] {
            return Err(self.token_parse_err(&name_token, "class name (identifier)"));
        }
        trace!("Parser: class {} at {}", name_token.lexeme, name_token.pos);
        self.consume(T!['{'])?;
        let body = self.parse_class_body()?;
        self.consume(T!['}'])?;
        Ok(AstNode::Class {
            name: name_token.lexeme.to_string(),
            body: Box::new(body),
        })
    }

    /// Parses members until a '}' is seen. The '}' itself is left for `parse_class`.
    fn parse_class_body(&mut self) -> ParserResult {
        let mut members = Vec::new();
        loop {
            let next = self.peek()?.typ;
            match next {
                typ if typ.is_visibility() => members.push(self.parse_member()?),
                T!['}'] => return Ok(AstNode::Body(members)),
                _ => {
                    let token = self.next()?;
                    return Err(self.token_parse_err(&token, "'public', 'private' or '}'"));
                }
            }
        }
    }

    fn parse_member(&mut self) -> ParserResult {
        let token = self.next()?;
        let visibility = match token.typ {
            T![public] => Visibility::Public,
            T![private] => Visibility::Private,
            _ => return Err(self.token_parse_err(&token, "'public' or 'private'")),
        };
        trace!("Parser: {} member at {}", visibility.as_str(), token.pos);
        let typ = self.parse_type()?;
        let ident = self.parse_identifier()?;
        self.consume(T![;])?;
        Ok(AstNode::Member {
            visibility,
            typ: Box::new(typ),
            ident: Box::new(ident),
        })
    }

    fn parse_type(&mut self) -> ParserResult {
        let token = self.next()?;
        let typ = match token.typ {
            T![int] => TypeName::Int,
            T![float] => TypeName::Float,
            T![string] => TypeName::String,
            _ => {
                return Err(self.token_parse_err(&token, "type keyword (int, float or string)"))
            }
        };
        Ok(AstNode::Type(typ))
    }

    fn parse_identifier(&mut self) -> ParserResult {
        let token = self.next()?;
        if token.typ == T![ident] {
            Ok(AstNode::Ident(token.lexeme.to_string()))
        } else {
            Err(self.token_parse_err(&token, "identifier"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::position::Position;

    fn parse(input: &str) -> ParserResult {
        Parser::new(Lexer::new(input)).parse()
    }

    fn syntax_err(input: &str) -> (String, String) {
        match parse(input) {
            Err(SyntaxError {
                expected, found, ..
            }) => (expected, found),
            other => panic!("expected a syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_single_member() {
        let ast = parse("class A { public int x; }").unwrap();
        assert_eq!(ast.label(), "A");
        assert_eq!(ast.kind(), "ClassDeclaration");
        let members = ast.members();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].label(), "public");
        assert_eq!(members[0].primary().unwrap().label(), "int");
        assert_eq!(members[0].secondary().unwrap().label(), "x");
    }

    #[test]
    fn test_members_keep_declaration_order() {
        let ast = parse("class C { private string a; public float b; public int c; }").unwrap();
        let names: Vec<_> = ast
            .members()
            .iter()
            .map(|m| m.secondary().unwrap().label().to_string())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        let types: Vec<_> = ast
            .members()
            .iter()
            .map(|m| m.primary().unwrap().label().to_string())
            .collect();
        assert_eq!(types, vec!["string", "float", "int"]);
    }

    #[test]
    fn test_visibility_consumed_once() {
        let ast = parse("class V { public int x; private int y; }").unwrap();
        assert_eq!(ast.members()[1].label(), "private");
        assert_eq!(ast.members()[1].secondary().unwrap().label(), "y");
    }

    #[test]
    fn test_empty_class() {
        let ast = parse("class Empty { }").unwrap();
        assert_eq!(ast.label(), "Empty");
        assert_eq!(ast.primary(), Some(&AstNode::Body(vec![])));
        assert!(ast.members().is_empty());
    }

    #[test]
    fn test_truncated_input() {
        assert_eq!(
            syntax_err("class A { public int x;"),
            ("'public', 'private' or '}'".to_string(), "end of input".to_string())
        );
        assert_eq!(
            syntax_err("class A { public int x }"),
            ("';'".to_string(), "'}'".to_string())
        );
        assert_eq!(
            syntax_err("class A { public x; }"),
            (
                "type keyword (int, float or string)".to_string(),
                "identifier 'x'".to_string()
            )
        );
        assert_eq!(
            syntax_err("class"),
            ("class name (identifier)".to_string(), "end of input".to_string())
        );
        assert_eq!(syntax_err("").1, "end of input");
    }

    #[test]
    fn test_unexpected_tokens() {
        assert_eq!(
            syntax_err("class A { int x; }"),
            ("'public', 'private' or '}'".to_string(), "'int'".to_string())
        );
        assert_eq!(
            syntax_err("class A { public int class; }"),
            ("identifier".to_string(), "'class'".to_string())
        );
        assert_eq!(
            syntax_err("class A { public int 42; }"),
            ("identifier".to_string(), "integer literal '42'".to_string())
        );
        assert_eq!(
            syntax_err("class A ( )"),
            ("'{'".to_string(), "'('".to_string())
        );
        assert_eq!(
            syntax_err("klass A { }").1,
            "identifier 'klass'".to_string()
        );
    }

    #[test]
    fn test_trailing_input_is_rejected() {
        let err = parse("class A { public int x; };").unwrap_err();
        assert_eq!(
            err,
            SyntaxError {
                pos: Position::new(1, 26, 26),
                expected: "end of input".to_string(),
                found: "';'".to_string(),
            }
        );
        assert!(parse("class A { } class B { }").is_err());
    }

    #[test]
    fn test_lexical_error_aborts_parse() {
        // The colon after the access modifier is not part of the language.
        let err = parse("class A { public: int x; };").unwrap_err();
        assert_eq!(
            err,
            ArgoError::LexicalError {
                pos: Position::new(1, 17, 17),
                msg: "Invalid character ':'.".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_is_repeatable() {
        let src = "class B { public int x; private float y; }";
        assert_eq!(parse(src).unwrap(), parse(src).unwrap());
    }
}
