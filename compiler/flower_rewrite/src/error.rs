use crate::flow::{FlowName, FlowType, Marker, MarkerKind};

/// Why a macro could not produce a replacement.
///
/// Never fatal: the converter renders either variant as a marker in the
/// output and carries on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RewriteError {
    /// The input is wrong (for example, the wrong number of type
    /// arguments).
    #[error("{message}")]
    Error { message: String },

    /// The input is fine but this shape is not handled yet.
    #[error("unimplemented: {what}")]
    Unimplemented { what: String },
}

impl RewriteError {
    pub fn error(message: impl Into<String>) -> Self {
        RewriteError::Error {
            message: message.into(),
        }
    }

    pub fn unimplemented(what: impl Into<String>) -> Self {
        RewriteError::Unimplemented { what: what.into() }
    }

    /// Wrong number of type arguments.
    pub fn arity(expected: &str, found: usize) -> Self {
        RewriteError::error(format!("expected {expected} arguments, got {found}"))
    }

    /// The marker node standing in for the failed reference.
    pub fn to_marker(&self, macro_name: &str) -> FlowType {
        let marker = match self {
            RewriteError::Error { message } => Marker {
                kind: MarkerKind::Error,
                description: format!("{macro_name}: {message}"),
            },
            RewriteError::Unimplemented { what } => Marker {
                kind: MarkerKind::Unimplemented,
                description: what.clone(),
            },
        };
        FlowType::Marker(marker)
    }
}

/// A successful macro expansion: the base name to emit and its type
/// arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MacroOutput {
    pub id: FlowName,
    pub type_args: Option<Vec<FlowType>>,
}

impl MacroOutput {
    pub fn new(id: FlowName, type_args: Vec<FlowType>) -> Self {
        MacroOutput {
            id,
            type_args: Some(type_args),
        }
    }

    pub fn into_type(self) -> FlowType {
        FlowType::Generic {
            name: self.id,
            args: self.type_args,
        }
    }
}

pub type MacroResult = Result<MacroOutput, RewriteError>;
