//! Token cursor for navigating the token stream.

use flower_ir::Span;

use crate::{ParseError, Token, TokenKind};

/// Position-tracking view over the token list.
///
/// Running past the end is not an error here; `peek` just returns `None`
/// and the grammar decides what "end of input" means in context.
pub struct Cursor<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Cursor {
            source,
            tokens,
            pos: 0,
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<TokenKind> {
        self.peek_nth(0)
    }

    /// Look `n` tokens past the current one.
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + n).map(|t| t.kind)
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek() == Some(kind)
    }

    /// Text of the token `n` positions ahead, or `""` past the end.
    pub fn text_nth(&self, n: usize) -> &'src str {
        self.tokens
            .get(self.pos + n)
            .and_then(|t| self.source.get(t.span.to_range()))
            .unwrap_or_default()
    }

    /// Is the current token the word `word`?
    pub fn check_word(&self, word: &str) -> bool {
        self.check_word_nth(0, word)
    }

    pub fn check_word_nth(&self, n: usize, word: &str) -> bool {
        self.peek_nth(n) == Some(TokenKind::Word) && self.text_nth(n) == word
    }

    /// Span of the current token; past the end, an empty span at EOF.
    pub fn current_span(&self) -> Span {
        match self.tokens.get(self.pos) {
            Some(token) => token.span,
            None => {
                let end = self.tokens.last().map_or(0, |t| t.span.end);
                Span::new(end, end)
            }
        }
    }

    /// Span of the most recently consumed token.
    pub fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(Span::DUMMY, |t| t.span)
    }

    /// Consume the current token, returning it.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn eat_word(&mut self, word: &str) -> bool {
        if self.check_word(word) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, kind: TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            let span = self.current_span();
            self.pos += 1;
            Ok(span)
        } else {
            Err(self.unexpected(kind.describe()))
        }
    }

    pub fn expect_word(&mut self, word: &str) -> Result<Span, ParseError> {
        if self.check_word(word) {
            let span = self.current_span();
            self.pos += 1;
            Ok(span)
        } else {
            Err(self.unexpected(&format!("`{word}`")))
        }
    }

    /// "expected X, found Y" at the current token.
    pub fn unexpected(&self, expected: &str) -> ParseError {
        let found = if self.is_at_end() {
            "end of file".to_string()
        } else {
            format!("`{}`", self.text_nth(0))
        };
        ParseError::new(format!("expected {expected}, found {found}"), self.current_span())
    }
}
