//! The builtin rule catalogs.
//!
//! - `default_library`: names in the implicit standard library
//! - `react`, `react_native`: names imported from those modules
//! - `global`: names injected by `declare global` blocks

mod default_library;
mod global;
mod react;
mod react_native;

pub(crate) use default_library::rewrites as default_library_rewrites;
pub(crate) use global::rewrites as global_rewrites;
pub(crate) use react::rewrites as react_rewrites;
pub(crate) use react_native::rewrites as react_native_rewrites;

/// Prefix for every name bound by a substitute import, so it cannot
/// collide with user code.
pub const SUBST_PREFIX: &str = "$tsflower_subst$";

/// A substitute bound locally as `$tsflower_subst$<local>` and imported
/// as `imported` from `module`.
fn import_substitute(local: &str, imported: &str, module: &str) -> crate::RewriteRule {
    crate::RewriteRule::substitute(format!("{SUBST_PREFIX}{local}"), module, imported)
}
