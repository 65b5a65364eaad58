//! Type expressions.
//!
//! Precedence, loosest first: function types, unions, intersections,
//! type operators (`keyof`, `readonly`, `unique`), then postfix `[]` and
//! indexed access on a primary type.

use flower_ir::{KeywordType, LiteralType, TypeKind, TypeNode, TypeOperator, TypeReference};

use super::Parser;
use crate::lexer::unquote;
use crate::stack::ensure_sufficient_stack;
use crate::{ParseError, TokenKind};

impl Parser<'_> {
    pub(super) fn parse_type(&mut self) -> Result<TypeNode, ParseError> {
        ensure_sufficient_stack(|| {
            if self.at_function_type() {
                let start = self.cursor.current_span();
                let signature = self.signature(TokenKind::Arrow)?;
                return Ok(TypeNode::new(
                    TypeKind::Function(Box::new(signature)),
                    self.span_from(start),
                ));
            }
            self.union_type()
        })
    }

    /// Tell `(a: T) => U` apart from a parenthesized type.
    fn at_function_type(&self) -> bool {
        match self.cursor.peek() {
            Some(TokenKind::Lt) => true,
            Some(TokenKind::LParen) => match self.cursor.peek_nth(1) {
                Some(TokenKind::RParen | TokenKind::Ellipsis) => true,
                Some(TokenKind::Word) => match self.cursor.peek_nth(2) {
                    Some(TokenKind::Colon | TokenKind::Comma | TokenKind::Question) => true,
                    Some(TokenKind::RParen) => self.cursor.peek_nth(3) == Some(TokenKind::Arrow),
                    _ => false,
                },
                _ => false,
            },
            _ => false,
        }
    }

    fn union_type(&mut self) -> Result<TypeNode, ParseError> {
        let start = self.cursor.current_span();
        self.cursor.eat(TokenKind::Pipe);
        let first = self.intersection_type()?;
        if !self.cursor.check(TokenKind::Pipe) {
            return Ok(first);
        }
        let mut types = vec![first];
        while self.cursor.eat(TokenKind::Pipe) {
            types.push(self.intersection_type()?);
        }
        Ok(TypeNode::new(TypeKind::Union(types), self.span_from(start)))
    }

    fn intersection_type(&mut self) -> Result<TypeNode, ParseError> {
        let start = self.cursor.current_span();
        self.cursor.eat(TokenKind::Amp);
        let first = self.operator_type()?;
        if !self.cursor.check(TokenKind::Amp) {
            return Ok(first);
        }
        let mut types = vec![first];
        while self.cursor.eat(TokenKind::Amp) {
            types.push(self.operator_type()?);
        }
        Ok(TypeNode::new(
            TypeKind::Intersection(types),
            self.span_from(start),
        ))
    }

    fn operator_type(&mut self) -> Result<TypeNode, ParseError> {
        let operator = match self.cursor.text_nth(0) {
            "keyof" => Some(TypeOperator::Keyof),
            "readonly" => Some(TypeOperator::Readonly),
            "unique" => Some(TypeOperator::Unique),
            _ => None,
        };
        let applies = self.cursor.check(TokenKind::Word)
            && matches!(
                self.cursor.peek_nth(1),
                Some(
                    TokenKind::Word
                        | TokenKind::LParen
                        | TokenKind::LBrace
                        | TokenKind::LBracket
                        | TokenKind::String
                        | TokenKind::Number
                )
            );
        match operator {
            Some(operator) if applies => {
                let start = self.cursor.current_span();
                self.cursor.advance();
                let operand = ensure_sufficient_stack(|| self.operator_type())?;
                Ok(TypeNode::new(
                    TypeKind::Operator(operator, Box::new(operand)),
                    self.span_from(start),
                ))
            }
            _ => self.postfix_type(),
        }
    }

    fn postfix_type(&mut self) -> Result<TypeNode, ParseError> {
        let start = self.cursor.current_span();
        let mut ty = self.primary_type()?;
        while self.cursor.check(TokenKind::LBracket) {
            self.cursor.advance();
            if self.cursor.eat(TokenKind::RBracket) {
                ty = TypeNode::new(TypeKind::Array(Box::new(ty)), self.span_from(start));
            } else {
                let index = self.parse_type()?;
                self.cursor.expect(TokenKind::RBracket)?;
                ty = TypeNode::new(
                    TypeKind::IndexedAccess(Box::new(ty), Box::new(index)),
                    self.span_from(start),
                );
            }
        }
        Ok(ty)
    }

    fn primary_type(&mut self) -> Result<TypeNode, ParseError> {
        let start = self.cursor.current_span();
        let kind = match self.cursor.peek() {
            Some(TokenKind::LParen) => {
                self.cursor.advance();
                let inner = self.parse_type()?;
                self.cursor.expect(TokenKind::RParen)?;
                return Ok(inner);
            }
            Some(TokenKind::LBrace) => {
                self.cursor.advance();
                let members = self.members()?;
                self.cursor.expect(TokenKind::RBrace)?;
                TypeKind::Object(members)
            }
            Some(TokenKind::LBracket) => {
                self.cursor.advance();
                let mut elements = Vec::new();
                while !self.cursor.check(TokenKind::RBracket) {
                    elements.push(self.parse_type()?);
                    if !self.cursor.eat(TokenKind::Comma) {
                        break;
                    }
                }
                self.cursor.expect(TokenKind::RBracket)?;
                TypeKind::Tuple(elements)
            }
            Some(TokenKind::String | TokenKind::Number | TokenKind::Minus) => {
                TypeKind::Literal(self.literal()?)
            }
            Some(TokenKind::Word) => match self.cursor.text_nth(0) {
                "true" | "false" => TypeKind::Literal(self.literal()?),
                "typeof" => {
                    self.cursor.advance();
                    TypeKind::Query(self.entity_name()?)
                }
                text => match KeywordType::from_name(text) {
                    Some(keyword) if self.cursor.peek_nth(1) != Some(TokenKind::Dot) => {
                        self.cursor.advance();
                        TypeKind::Keyword(keyword)
                    }
                    _ => TypeKind::Reference(self.type_reference()?),
                },
            },
            _ => return Err(self.cursor.unexpected("type")),
        };
        Ok(TypeNode::new(kind, self.span_from(start)))
    }

    /// `A.B<T, U>`
    pub(super) fn type_reference(&mut self) -> Result<TypeReference, ParseError> {
        let start = self.cursor.current_span();
        let name = self.entity_name()?;
        let type_args = if self.cursor.eat(TokenKind::Lt) {
            let mut args = Vec::new();
            while !self.cursor.check(TokenKind::Gt) {
                args.push(self.parse_type()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
            self.cursor.expect(TokenKind::Gt)?;
            Some(args)
        } else {
            None
        };
        Ok(TypeReference {
            name,
            type_args,
            span: self.span_from(start),
        })
    }

    /// String, number, negative number, or boolean literal.
    pub(super) fn literal(&mut self) -> Result<LiteralType, ParseError> {
        let literal = match self.cursor.peek() {
            Some(TokenKind::String) => LiteralType::String(unquote(self.cursor.text_nth(0)).into()),
            Some(TokenKind::Number) => LiteralType::Number(self.cursor.text_nth(0).into()),
            Some(TokenKind::Minus) if self.cursor.peek_nth(1) == Some(TokenKind::Number) => {
                self.cursor.advance();
                LiteralType::Number(format!("-{}", self.cursor.text_nth(0)).into())
            }
            Some(TokenKind::Word) if self.cursor.check_word("true") => LiteralType::Boolean(true),
            Some(TokenKind::Word) if self.cursor.check_word("false") => LiteralType::Boolean(false),
            _ => return Err(self.cursor.unexpected("literal")),
        };
        self.cursor.advance();
        Ok(literal)
    }
}
