//! The rule registry: every library-level rule, grouped by where the
//! rewritten names come from.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::catalog;
use crate::NamespaceRewrite;

/// Rules for the default library, for global augmentations, and per
/// imported module specifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RewriteRegistry {
    default_library: NamespaceRewrite,
    global: NamespaceRewrite,
    libraries: FxHashMap<String, NamespaceRewrite>,
}

impl RewriteRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The builtin catalogs: default library, global augmentations,
    /// `react` and `react-native`.
    pub fn builtin() -> Self {
        RewriteRegistry::new()
            .with_default_library(catalog::default_library_rewrites())
            .with_global(catalog::global_rewrites())
            .with_library("react", catalog::react_rewrites())
            .with_library("react-native", catalog::react_native_rewrites())
    }

    #[must_use]
    pub fn with_default_library(mut self, rewrites: NamespaceRewrite) -> Self {
        self.default_library.merge(rewrites);
        self
    }

    #[must_use]
    pub fn with_global(mut self, rewrites: NamespaceRewrite) -> Self {
        self.global.merge(rewrites);
        self
    }

    /// Add rules for names imported from `module`, merging with any
    /// already registered for it.
    #[must_use]
    pub fn with_library(mut self, module: impl Into<String>, rewrites: NamespaceRewrite) -> Self {
        self.libraries
            .entry(module.into())
            .or_default()
            .merge(rewrites);
        self
    }

    pub fn default_library(&self) -> &NamespaceRewrite {
        &self.default_library
    }

    pub fn global(&self) -> &NamespaceRewrite {
        &self.global
    }

    pub fn library(&self, module: &str) -> Option<&NamespaceRewrite> {
        self.libraries.get(module)
    }

    /// Module specifiers with rules, sorted.
    pub fn libraries(&self) -> Vec<&str> {
        let mut modules: Vec<&str> = self.libraries.keys().map(String::as_str).collect();
        modules.sort_unstable();
        modules
    }
}

static GLOBAL_REGISTRY: OnceLock<RewriteRegistry> = OnceLock::new();

/// The builtin registry, built on first use.
pub fn builtin_registry() -> &'static RewriteRegistry {
    GLOBAL_REGISTRY.get_or_init(RewriteRegistry::builtin)
}

#[cfg(test)]
mod tests;
