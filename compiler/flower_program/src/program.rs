use std::path::Path;

use flower_ir::{Declaration, FileId, Ident, ProgramModel, SourceFile, SymbolFlags, SymbolId};

use crate::binder::Bindings;

/// A parsed and bound set of declaration files.
pub struct Program {
    files: Vec<SourceFile>,
    default_library: Vec<bool>,
    bindings: Bindings,
}

impl Program {
    pub(crate) fn new(files: Vec<SourceFile>, default_library: Vec<bool>, bindings: Bindings) -> Self {
        Program {
            files,
            default_library,
            bindings,
        }
    }

    /// The file added under `path`.
    pub fn file_id(&self, path: impl AsRef<Path>) -> Option<FileId> {
        let path = path.as_ref();
        self.files.iter().find(|f| f.path == path).map(|f| f.id)
    }

    /// The module symbol registered under `specifier`.
    pub fn module(&self, specifier: &str) -> Option<SymbolId> {
        self.bindings.modules.get(specifier).copied()
    }

    /// A name bound in the global scope.
    pub fn global(&self, name: &str) -> Option<SymbolId> {
        self.bindings.globals.get(name).copied()
    }

    /// A namespace member or module export.
    pub fn member(&self, container: SymbolId, name: &str) -> Option<SymbolId> {
        self.bindings
            .symbols
            .get(container)?
            .members
            .get(name)
            .copied()
    }

    /// Export `name` of the module registered under `specifier`.
    pub fn export(&self, specifier: &str, name: &str) -> Option<SymbolId> {
        self.member(self.module(specifier)?, name)
    }

    /// Follow alias links to the end of the chain.
    pub fn resolve_alias(&self, symbol: SymbolId) -> SymbolId {
        self.bindings.symbols.resolve_alias(symbol)
    }

    pub fn symbol_count(&self) -> usize {
        self.bindings.symbols.len()
    }
}

impl ProgramModel for Program {
    fn source_files(&self) -> &[SourceFile] {
        &self.files
    }

    fn is_default_library(&self, file: FileId) -> bool {
        self.default_library.get(file.index()).copied().unwrap_or(false)
    }

    fn symbol_at(&self, name: &Ident) -> Option<SymbolId> {
        self.bindings.resolutions.get(&name.id).copied()
    }

    fn symbol_name(&self, symbol: SymbolId) -> &str {
        self.bindings.symbols.get(symbol).map_or("", |s| &*s.name)
    }

    fn symbol_flags(&self, symbol: SymbolId) -> SymbolFlags {
        self.bindings
            .symbols
            .get(symbol)
            .map_or(SymbolFlags::empty(), |s| s.flags)
    }

    fn declarations(&self, symbol: SymbolId) -> &[Declaration] {
        self.bindings
            .symbols
            .get(symbol)
            .map_or(&[][..], |s| s.declarations.as_slice())
    }

    fn immediate_aliased_symbol(&self, symbol: SymbolId) -> Option<SymbolId> {
        self.bindings.symbols.get(symbol)?.alias_target
    }
}

#[cfg(test)]
mod tests;
