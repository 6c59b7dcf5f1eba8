//! The lexer is responsible for turning the source code into tokens for the parser.
//!
//! Unlike a classic scanner it does not produce the whole token stream up front:
//! every call to `next_token` skips leading whitespace and scans exactly one token,
//! advancing the cursor past it. The parser pulls tokens lazily this way.
//!
//! Recognized are identifiers and the keywords `class`, `public`, `private`, `int`,
//! `float` and `string`, integer and float literals and the punctuation `( ) { } ;`.
//! Any other character is a lexical error.
//!
//! Example:
//! ```rust
//! use argo::frontend::lexer::Lexer;
//! let mut lx = Lexer::new("class A { }");
//! let token_or_err = lx.next_token();
//! ```

use std::{collections::VecDeque, iter::Peekable, str::Chars};

use log::trace;

use super::{
    position::Position,
    token::{Token, Type},
};
use crate::error::ArgoError::{self, LexicalError};
use crate::T;

/// Longest identifier, keyword or literal the lexer accepts by default (in bytes).
pub const MAX_LEXEME_LEN: usize = 99;

/// The lexer struct is responsible for the tokeniziation of the source code.
pub struct Lexer<'a> {
    /// Contains the source code. Used for 'cutting' out lexemes for the tokens.
    source: &'a str,
    /// Peekable iterator over all remaining characters of the source string.
    chars: Peekable<Chars<'a>>,
    /// Line and columns of the token currently being scanned.
    token_pos: Position,
    /// Byte offset where the current token starts.
    start_idx: usize,
    /// Byte offset of the cursor.
    current_idx: usize,
    max_lexeme_len: usize,
}

/// The lexer either returns a token or an error which will be propagated to
/// the user informing about an error.
type LexerResult<'a> = Result<Token<'a>, ArgoError>;

impl<'a> Lexer<'a> {
    /// Create a new instance of `Lexer`
    pub fn new(source: &'a str) -> Self {
        Self::with_max_lexeme_len(source, MAX_LEXEME_LEN)
    }

    pub fn with_max_lexeme_len(source: &'a str, max_lexeme_len: usize) -> Self {
        Self {
            source,
            chars: source.chars().peekable(),
            token_pos: Position::new(1, 1, 0),
            start_idx: 0,
            current_idx: 0,
            max_lexeme_len,
        }
    }

    /// Scan the next token. Once the input is exhausted every call returns `Eof`.
    pub fn next_token(&mut self) -> LexerResult<'a> {
        self.advance_while(&|c| c.is_whitespace());
        self.start_idx = self.current_idx;
        self.token_pos.begin_token();

        let token = match self.advance() {
            None => {
                let column = self.token_pos.start_column;
                Token::new(
                    T![eof],
                    Position::new(self.token_pos.line, column, column),
                    "",
                )
            }
            Some('(') => self.new_token(T!['(']),
            Some(')') => self.new_token(T![')']),
            Some('{') => self.new_token(T!['{']),
            Some('}') => self.new_token(T!['}']),
            Some(';') => self.new_token(T![;]),
            Some(c) if c.is_alphabetic() || c == '_' => self.keyword()?,
            Some(c) if c.is_ascii_digit() => self.number()?,
            Some(c) => {
                return Err(LexicalError {
                    pos: self.token_pos,
                    msg: format!("Invalid character '{}'.", c.escape_default()),
                })
            }
        };
        trace!("Lexer: {}", token);
        Ok(token)
    }

    /// Drain the lexer into a queue of tokens, the last one being `Eof`.
    pub fn tokenize(&mut self) -> Result<VecDeque<Token<'a>>, ArgoError> {
        let mut tokens = VecDeque::new();
        loop {
            let token = self.next_token()?;
            let at_end = token.typ == T![eof];
            tokens.push_back(token);
            if at_end {
                return Ok(tokens);
            }
        }
    }

    //-------
    // HELPER
    //-------

    /// Extracts a substring from the source string starting at `start_idx` and ending at `current_idx`.
    fn get_substr_from_current_range(&self) -> &'a str {
        &self.source[self.start_idx..self.current_idx]
    }

    /// Convenience function for creating new `Token`s easily.
    fn new_token(&self, typ: Type) -> Token<'a> {
        Token::new(typ, self.token_pos, self.get_substr_from_current_range())
    }

    /// Consume the current iterator and return the char it pointed at.
    /// If the iterator reached the end `None` will be returned.
    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.current_idx += c.len_utf8();
        if c == '\n' {
            self.token_pos.next_line();
        } else {
            self.token_pos.next_column();
        }
        Some(c)
    }

    /// Consumes characters while a given predicate is fullfilled.
    ///
    /// ## Example
    /// advance_while(&mut self, &|c| c.is_alphabetic());
    fn advance_while(&mut self, predicate: &dyn Fn(&char) -> bool) {
        while let Some(c) = self.chars.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// True if the cursor sits on a '.' directly followed by a digit.
    fn at_fraction(&self) -> bool {
        let mut rest = self.source[self.current_idx..].chars();
        rest.next() == Some('.') && rest.next().map_or(false, |c| c.is_ascii_digit())
    }

    fn check_length(&self, lexeme: &str) -> Result<(), ArgoError> {
        if lexeme.len() > self.max_lexeme_len {
            return Err(LexicalError {
                pos: self.token_pos,
                msg: format!(
                    "Lexeme of {} bytes exceeds the maximum length of {}.",
                    lexeme.len(),
                    self.max_lexeme_len
                ),
            });
        }
        Ok(())
    }

    //---------
    // Literals
    //---------

    /// Tokenize an integer or float literal. A '.' only belongs to the literal
    /// when a digit follows it.
    fn number(&mut self) -> LexerResult<'a> {
        self.advance_while(&|c| c.is_ascii_digit());
        let typ = if self.at_fraction() {
            self.advance();
            self.advance_while(&|c| c.is_ascii_digit());
            Type::FloatLiteral
        } else {
            Type::IntLiteral
        };
        self.check_length(self.get_substr_from_current_range())?;
        Ok(self.new_token(typ))
    }

    //----------------------
    // Identifier & keywords
    //----------------------

    /// Checks whether the following character stream is a known keyword. If not it has to be an identifier.
    fn keyword(&mut self) -> LexerResult<'a> {
        self.advance_while(&|c| c.is_alphanumeric() || c == &'_');
        let substr = self.get_substr_from_current_range();
        self.check_length(substr)?;
        let typ = Token::get_keyword(substr).unwrap_or(T![ident]);
        Ok(self.new_token(typ))
    }
}
