use std::path::PathBuf;

use flower_parse::ParseError;

/// Failure to assemble a program from its inputs.
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("module `{specifier}` is registered more than once")]
    DuplicateModule { specifier: String },
}
