use phf::phf_map;
use std::fmt;

use super::position::Position;

/// Shorthand for token types, e.g. `T![class]` or `T!['{']`.
#[macro_export]
macro_rules! T {
    [class] => { $crate::frontend::token::Type::Class };
    [public] => { $crate::frontend::token::Type::Public };
    [private] => { $crate::frontend::token::Type::Private };
    [int] => { $crate::frontend::token::Type::IntType };
    [float] => { $crate::frontend::token::Type::FloatType };
    [string] => { $crate::frontend::token::Type::StringType };
    [ident] => { $crate::frontend::token::Type::Identifier };
    ['('] => { $crate::frontend::token::Type::LeftParenthese };
    [')'] => { $crate::frontend::token::Type::RightParenthese };
    ['{'] => { $crate::frontend::token::Type::LeftBrace };
    ['}'] => { $crate::frontend::token::Type::RightBrace };
    [;] => { $crate::frontend::token::Type::Semicolon };
    [eof] => { $crate::frontend::token::Type::Eof };
}

/// A single lexical unit. Tokens borrow their lexeme from the source and are
/// handed to the parser one at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub typ: Type,
    pub pos: Position,
    pub lexeme: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(typ: Type, pos: Position, lexeme: &'a str) -> Self {
        Self { typ, pos, lexeme }
    }

    pub fn get_keyword(key: &str) -> Option<Type> {
        KEYWORDS.get(key).copied()
    }
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.typ {
            Type::Eof => write!(f, "<{:?} @ {}>", self.typ, self.pos),
            _ => write!(f, "<{:?}: {} @ {}>", self.typ, self.lexeme, self.pos),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Type {
    Identifier,
    // Keywords
    Class,
    Public,
    Private,
    IntType,
    FloatType,
    StringType,
    // Literals
    IntLiteral,
    FloatLiteral,

    LeftParenthese,
    RightParenthese,
    LeftBrace,
    RightBrace,
    Semicolon,

    Eof,
}

impl Type {
    pub fn is_visibility(&self) -> bool {
        matches!(self, T![public] | T![private])
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Type::Identifier => "identifier",
            Type::Class => "'class'",
            Type::Public => "'public'",
            Type::Private => "'private'",
            Type::IntType => "'int'",
            Type::FloatType => "'float'",
            Type::StringType => "'string'",
            Type::IntLiteral => "integer literal",
            Type::FloatLiteral => "float literal",
            Type::LeftParenthese => "'('",
            Type::RightParenthese => "')'",
            Type::LeftBrace => "'{'",
            Type::RightBrace => "'}'",
            Type::Semicolon => "';'",
            Type::Eof => "end of input",
        };
        write!(f, "{}", repr)
    }
}

static KEYWORDS: phf::Map<&'static str, Type> = phf_map! {
    "class" => Type::Class,
    "public" => Type::Public,
    "private" => Type::Private,
    "int" => Type::IntType,
    "float" => Type::FloatType,
    "string" => Type::StringType
};
