//! Tokenizer for declaration files.
//!
//! Words are never classified here: `type`, `declare`, `string` and friends
//! are all contextual in type-definition syntax, so the parser decides by
//! looking at the text.

use flower_ir::Span;
use logos::{FilterResult, Lexer, Logos};

use crate::ParseError;

#[derive(Logos, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(error = LexError)]
pub enum TokenKind {
    /// Never produced: the callback either skips the comment or fails.
    #[token("/*", block_comment)]
    BlockComment,

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Word,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)*'")]
    String,
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token(",")]
    Comma,
    #[token(";")]
    Semi,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("...")]
    Ellipsis,
    #[token("?")]
    Question,
    #[token("=")]
    Eq,
    #[token("=>")]
    Arrow,
    #[token("|")]
    Pipe,
    #[token("&")]
    Amp,
    #[token("*")]
    Star,
    #[token("-")]
    Minus,
}

impl TokenKind {
    /// How the token is described in "expected ..." messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::BlockComment => "comment",
            TokenKind::Word => "identifier",
            TokenKind::String => "string literal",
            TokenKind::Number => "number literal",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::Comma => "`,`",
            TokenKind::Semi => "`;`",
            TokenKind::Colon => "`:`",
            TokenKind::Dot => "`.`",
            TokenKind::Ellipsis => "`...`",
            TokenKind::Question => "`?`",
            TokenKind::Eq => "`=`",
            TokenKind::Arrow => "`=>`",
            TokenKind::Pipe => "`|`",
            TokenKind::Amp => "`&`",
            TokenKind::Star => "`*`",
            TokenKind::Minus => "`-`",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LexError {
    #[default]
    UnexpectedCharacter,
    UnterminatedComment,
}

/// Consume everything up to and including the closing `*/`.
fn block_comment(lex: &mut Lexer<'_, TokenKind>) -> FilterResult<(), LexError> {
    if let Some(end) = lex.remainder().find("*/") {
        lex.bump(end + 2);
        FilterResult::Skip
    } else {
        lex.bump(lex.remainder().len());
        FilterResult::Error(LexError::UnterminatedComment)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Tokenize a whole file.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::try_from_range(lexer.span())
            .map_err(|e| ParseError::new(e.to_string(), Span::DUMMY))?;
        match result {
            Ok(kind) => tokens.push(Token { kind, span }),
            Err(LexError::UnexpectedCharacter) => {
                return Err(ParseError::new(
                    format!("unexpected character `{}`", lexer.slice()),
                    span,
                ));
            }
            Err(LexError::UnterminatedComment) => {
                return Err(ParseError::new("unterminated comment", span));
            }
        }
    }

    Ok(tokens)
}

/// Decode the contents of a quoted string token.
pub fn unquote(raw: &str) -> String {
    let inner = raw
        .get(1..raw.len().saturating_sub(1))
        .unwrap_or_default();
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

#[cfg(test)]
mod tests;
