//! Recursive-descent parser over the token list.
//!
//! Grammar is split the way the syntax is:
//! - `items`: statements, imports/exports, declarations
//! - `members`: bodies of interfaces, classes and object types
//! - `types`: type expressions

mod cursor;
mod items;
mod members;
mod types;

use flower_ir::{EntityName, FileId, Ident, NodeId, PropertyName, Span, Stmt, StringLit};

use crate::lexer::unquote;
use crate::{ParseError, Token, TokenKind};
use cursor::Cursor;

pub struct Parser<'src> {
    cursor: Cursor<'src>,
    file: FileId,
    next_node: u32,
}

impl<'src> Parser<'src> {
    pub fn new(file: FileId, source: &'src str, tokens: Vec<Token>) -> Self {
        Parser {
            cursor: Cursor::new(source, tokens),
            file,
            next_node: 0,
        }
    }

    /// Parse every top-level statement.
    pub fn parse_source(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.parse_statements(false)
    }

    fn fresh_node(&mut self) -> NodeId {
        let id = NodeId::new(self.file, self.next_node);
        self.next_node += 1;
        id
    }

    /// Consume a word token as a name.
    fn ident(&mut self) -> Result<Ident, ParseError> {
        if !self.cursor.check(TokenKind::Word) {
            return Err(self.cursor.unexpected("identifier"));
        }
        let name = self.cursor.text_nth(0);
        let span = self.cursor.current_span();
        self.cursor.advance();
        Ok(Ident {
            name: name.into(),
            span,
            id: self.fresh_node(),
        })
    }

    /// `A`, `A.B`, `A.B.C`, ...
    fn entity_name(&mut self) -> Result<EntityName, ParseError> {
        let mut name = EntityName::Ident(self.ident()?);
        while self.cursor.check(TokenKind::Dot) && self.cursor.peek_nth(1) == Some(TokenKind::Word)
        {
            self.cursor.advance();
            let right = self.ident()?;
            name = EntityName::Qualified(Box::new(name), right);
        }
        Ok(name)
    }

    fn string_lit(&mut self) -> Result<StringLit, ParseError> {
        if !self.cursor.check(TokenKind::String) {
            return Err(self.cursor.unexpected("string literal"));
        }
        let value = unquote(self.cursor.text_nth(0));
        let span = self.cursor.current_span();
        self.cursor.advance();
        Ok(StringLit {
            value: value.into(),
            span,
        })
    }

    /// Property keys: words, quoted strings, or numbers.
    fn property_name(&mut self) -> Result<PropertyName, ParseError> {
        let span = self.cursor.current_span();
        let text = match self.cursor.peek() {
            Some(TokenKind::Word | TokenKind::Number) => self.cursor.text_nth(0).to_string(),
            Some(TokenKind::String) => unquote(self.cursor.text_nth(0)),
            _ => return Err(self.cursor.unexpected("property name")),
        };
        self.cursor.advance();
        Ok(PropertyName {
            text: text.into(),
            span,
        })
    }

    /// Optional statement terminator.
    fn eat_semi(&mut self) {
        self.cursor.eat(TokenKind::Semi);
    }

    fn span_from(&self, start: Span) -> Span {
        start.merge(self.cursor.previous_span())
    }
}
