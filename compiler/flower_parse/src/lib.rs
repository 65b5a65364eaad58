//! Declaration-file front end.
//!
//! Turns the text of a `.d.ts`-style file into a [`flower_ir::SourceFile`].
//! Only the syntax that carries type-level names is accepted; anything
//! outside that subset is a [`ParseError`] rather than a silent skip.

mod error;
mod lexer;
mod parser;
mod stack;

use std::path::Path;

use flower_ir::{FileId, SourceFile};

pub use error::ParseError;
pub use lexer::{tokenize, LexError, Token, TokenKind};

/// Parse one file.
///
/// `file` becomes the owner of every [`flower_ir::NodeId`] handed out while
/// parsing, so ids are unique across a program as long as each file gets a
/// distinct `FileId`.
#[tracing::instrument(level = "debug", skip_all, fields(file = %path.display()))]
pub fn parse_file(file: FileId, path: &Path, source: &str) -> Result<SourceFile, ParseError> {
    let tokens = lexer::tokenize(source)?;
    let mut parser = parser::Parser::new(file, source, tokens);
    let statements = parser.parse_source()?;
    tracing::debug!(statements = statements.len(), "parsed file");
    Ok(SourceFile {
        id: file,
        path: path.to_path_buf(),
        statements,
    })
}
