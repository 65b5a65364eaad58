use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    match tokenize(source) {
        Ok(tokens) => tokens.into_iter().map(|t| t.kind).collect(),
        Err(e) => panic!("tokenize failed: {e}"),
    }
}

#[test]
fn words_and_punctuation() {
    assert_eq!(
        kinds("import { Component as C } from 'react';"),
        vec![
            TokenKind::Word,
            TokenKind::LBrace,
            TokenKind::Word,
            TokenKind::Word,
            TokenKind::Word,
            TokenKind::RBrace,
            TokenKind::Word,
            TokenKind::String,
            TokenKind::Semi,
        ]
    );
}

#[test]
fn comments_are_skipped() {
    let source = "// line\n/* block\n * more */ type /** doc */ X = 1;";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Word,
            TokenKind::Word,
            TokenKind::Eq,
            TokenKind::Number,
            TokenKind::Semi,
        ]
    );
}

#[test]
fn doc_comment_stars_do_not_end_early() {
    let source = "/**\n * @see {@link Foo} **bold** */ declare /***/ const /* a*b */ x: number;";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Word,
            TokenKind::Word,
            TokenKind::Word,
            TokenKind::Colon,
            TokenKind::Word,
            TokenKind::Semi,
        ]
    );
}

#[test]
fn lone_star_is_not_a_comment() {
    assert_eq!(kinds("a * b").get(1), Some(&TokenKind::Star));
}

#[test]
fn unterminated_comment_is_an_error() {
    let source = "type A = 1; /* never closed";
    match tokenize(source) {
        Ok(tokens) => panic!("expected an error, got {tokens:?}"),
        Err(e) => {
            assert_eq!(e.message, "unterminated comment");
            assert_eq!(e.span, Span::new(12, 28));
        }
    }
}

#[test]
fn arrow_and_ellipsis_are_single_tokens() {
    assert_eq!(
        kinds("(...a) => b"),
        vec![
            TokenKind::LParen,
            TokenKind::Ellipsis,
            TokenKind::Word,
            TokenKind::RParen,
            TokenKind::Arrow,
            TokenKind::Word,
        ]
    );
}

#[test]
fn dollar_identifiers() {
    assert_eq!(kinds("$ReadOnly React$Node"), vec![TokenKind::Word, TokenKind::Word]);
}

#[test]
fn spans_cover_token_text() {
    let source = "type Foo";
    let tokens = tokenize(source).unwrap_or_default();
    assert_eq!(tokens.len(), 2);
    assert_eq!(&source[tokens[1].span.to_range()], "Foo");
}

#[test]
fn bad_character_is_an_error() {
    let err = tokenize("type # = 1").err();
    assert_eq!(err.map(|e| e.span), Some(Span::new(5, 6)));
}

#[test]
fn unquote_handles_escapes() {
    assert_eq!(unquote(r#""a\"b""#), "a\"b");
    assert_eq!(unquote(r"'it\'s'"), "it's");
    assert_eq!(unquote("'😀'"), "😀");
    assert_eq!(unquote(r#""line\n""#), "line\n");
}
