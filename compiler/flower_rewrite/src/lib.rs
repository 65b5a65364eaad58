//! Rewrite rules for translating TypeScript type names to Flow.
//!
//! A [`RewriteRule`] says what happens to one type name: replace it with a
//! fixed Flow name, rename it, substitute an import from a helper module,
//! or rebuild the whole reference with a macro. Rules are grouped into
//! [`NamespaceRewrite`] trees, and the trees into a [`RewriteRegistry`]
//! keyed by where the names come from.
//!
//! Macros produce [`FlowType`] output and call back into a [`Converter`]
//! for their type arguments. A failed macro returns a [`RewriteError`],
//! which the caller renders as a marker and never treats as fatal.
//!
//! The builtin catalogs are available through [`builtin_registry`].

mod catalog;
mod converter;
mod error;
pub mod flow;
mod namespace;
mod registry;
mod rule;

#[cfg(test)]
mod test_support;

pub use catalog::SUBST_PREFIX;
pub use converter::{convert_structure, flow_name, Converter, PlainConverter};
pub use error::{MacroOutput, MacroResult, RewriteError};
pub use flow::{
    FlowName, FlowType, FunctionParam, FunctionType, Marker, MarkerKind, ObjectIndexer,
    ObjectProperty, ObjectType, PropertyKey,
};
pub use namespace::NamespaceRewrite;
pub use registry::{builtin_registry, RewriteRegistry};
pub use rule::{ConvertFn, RewriteRule, RuleKind, TypeReferenceMacro};
