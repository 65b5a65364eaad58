//! Members of interfaces, classes and object types, plus call signatures.

use flower_ir::{
    IndexSignature, KeywordType, Member, MethodSignature, Param, PropertySignature, Signature,
    TypeKind, TypeNode,
};

use super::Parser;
use crate::{ParseError, TokenKind};

const MEMBER_MODIFIERS: &[&str] = &[
    "readonly",
    "static",
    "public",
    "private",
    "protected",
    "abstract",
    "declare",
    "get",
    "set",
];

const PARAM_MODIFIERS: &[&str] = &["public", "private", "protected", "readonly"];

impl Parser<'_> {
    /// `{ members }`
    pub(super) fn member_block(&mut self) -> Result<Vec<Member>, ParseError> {
        self.cursor.expect(TokenKind::LBrace)?;
        let members = self.members()?;
        self.cursor.expect(TokenKind::RBrace)?;
        Ok(members)
    }

    /// Members up to (not including) the closing `}`.
    pub(super) fn members(&mut self) -> Result<Vec<Member>, ParseError> {
        let mut members = Vec::new();
        loop {
            while self.cursor.eat(TokenKind::Semi) || self.cursor.eat(TokenKind::Comma) {}
            if self.cursor.is_at_end() || self.cursor.check(TokenKind::RBrace) {
                break;
            }
            members.push(self.member()?);
        }
        Ok(members)
    }

    fn member(&mut self) -> Result<Member, ParseError> {
        let mut readonly = false;
        while self.cursor.check(TokenKind::Word)
            && MEMBER_MODIFIERS.contains(&self.cursor.text_nth(0))
            && matches!(
                self.cursor.peek_nth(1),
                Some(TokenKind::Word | TokenKind::String | TokenKind::Number | TokenKind::LBracket)
            )
        {
            readonly |= self.cursor.check_word("readonly");
            self.cursor.advance();
        }

        if self.cursor.check(TokenKind::LBracket) {
            return self.index_signature(readonly).map(Member::Index);
        }
        if self.cursor.check(TokenKind::LParen) || self.cursor.check(TokenKind::Lt) {
            return self.signature(TokenKind::Colon).map(Member::Call);
        }
        if self.cursor.check_word("new")
            && matches!(self.cursor.peek_nth(1), Some(TokenKind::LParen | TokenKind::Lt))
        {
            self.cursor.advance();
            return self.signature(TokenKind::Colon).map(Member::Construct);
        }

        let name = self.property_name()?;
        let optional = self.cursor.eat(TokenKind::Question);
        if self.cursor.check(TokenKind::LParen) || self.cursor.check(TokenKind::Lt) {
            let signature = self.signature(TokenKind::Colon)?;
            return Ok(Member::Method(MethodSignature {
                name,
                optional,
                signature,
            }));
        }

        let ty = if self.cursor.eat(TokenKind::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };
        Ok(Member::Property(PropertySignature {
            name,
            optional,
            readonly,
            ty,
        }))
    }

    /// `[key: K]: V`
    fn index_signature(&mut self, readonly: bool) -> Result<IndexSignature, ParseError> {
        let is_index = self.cursor.peek_nth(1) == Some(TokenKind::Word)
            && self.cursor.peek_nth(2) == Some(TokenKind::Colon);
        if !is_index {
            return Err(ParseError::new(
                "computed property names are not supported",
                self.cursor.current_span(),
            ));
        }
        self.cursor.expect(TokenKind::LBracket)?;
        let parameter = self.cursor.text_nth(0).into();
        self.cursor.advance();
        self.cursor.expect(TokenKind::Colon)?;
        let key = self.parse_type()?;
        self.cursor.expect(TokenKind::RBracket)?;
        self.cursor.expect(TokenKind::Colon)?;
        let value = self.parse_type()?;
        Ok(IndexSignature {
            parameter,
            key,
            value,
            readonly,
        })
    }

    /// `<T>(params)` followed by the return type.
    ///
    /// With `TokenKind::Arrow` the return type is mandatory (function
    /// types); with `TokenKind::Colon` it is an optional annotation.
    pub(super) fn signature(&mut self, return_token: TokenKind) -> Result<Signature, ParseError> {
        let type_params = self.type_params()?;
        self.cursor.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        while !self.cursor.check(TokenKind::RParen) {
            params.push(self.param()?);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(TokenKind::RParen)?;

        let return_type = if return_token == TokenKind::Arrow {
            self.cursor.expect(TokenKind::Arrow)?;
            Some(self.return_type()?)
        } else if self.cursor.eat(return_token) {
            Some(self.return_type()?)
        } else {
            None
        };

        Ok(Signature {
            type_params,
            params,
            return_type,
        })
    }

    /// A return type, where a type predicate (`x is T`, `asserts x is T`)
    /// reads as `boolean`.
    fn return_type(&mut self) -> Result<TypeNode, ParseError> {
        let start = self.cursor.current_span();
        let skip = if self.cursor.check_word("asserts") && self.cursor.check_word_nth(2, "is") {
            Some(3)
        } else if self.cursor.check(TokenKind::Word) && self.cursor.check_word_nth(1, "is") {
            Some(2)
        } else {
            None
        };
        let Some(skip) = skip else {
            return self.parse_type();
        };
        for _ in 0..skip {
            self.cursor.advance();
        }
        self.parse_type()?;
        Ok(TypeNode::new(
            TypeKind::Keyword(KeywordType::Boolean),
            self.span_from(start),
        ))
    }

    fn param(&mut self) -> Result<Param, ParseError> {
        if self.cursor.check(TokenKind::Word)
            && PARAM_MODIFIERS.contains(&self.cursor.text_nth(0))
            && self.cursor.peek_nth(1) == Some(TokenKind::Word)
        {
            self.cursor.advance();
        }
        let rest = self.cursor.eat(TokenKind::Ellipsis);
        if !self.cursor.check(TokenKind::Word) {
            if matches!(
                self.cursor.peek(),
                Some(TokenKind::LBrace | TokenKind::LBracket)
            ) {
                return Err(ParseError::new(
                    "destructuring parameters are not supported",
                    self.cursor.current_span(),
                ));
            }
            return Err(self.cursor.unexpected("parameter name"));
        }
        let name = self.cursor.text_nth(0).into();
        self.cursor.advance();
        let optional = self.cursor.eat(TokenKind::Question);
        let ty = if self.cursor.eat(TokenKind::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };
        Ok(Param {
            name,
            rest,
            optional,
            ty,
        })
    }
}
