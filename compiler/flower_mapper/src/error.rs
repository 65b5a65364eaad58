/// Failures that stop a mapper build.
///
/// Everything else (missing symbols, unsupported declaration shapes) is
/// reported as a diagnostic and the build carries on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapperError {
    #[error("invalid mapper configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A type/value rename and another rule apply to the same symbol, under
    /// [`ConflictPolicy::Reject`](crate::ConflictPolicy::Reject).
    #[error("conflicting rewrite rules for `{name}`: rename to `{rename}` and {existing}")]
    ConflictingRules {
        name: String,
        rename: String,
        existing: String,
    },
}
