//! Index handles for files, AST name nodes and symbols.
//!
//! All three are dense 32-bit indices. A `SymbolId` is only meaningful
//! against the program model that produced it: nothing keyed by one should
//! outlive a single mapping run.

use std::fmt;

/// Index of a source file within a program.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct FileId(u32);

impl FileId {
    /// Create an index from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position in a file-ordered slice.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileId({})", self.0)
    }
}

/// Identity of one name occurrence in the AST.
///
/// Assigned by the parser in source order; unique across a program because
/// it carries the owning file.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId {
    file: FileId,
    local: u32,
}

impl NodeId {
    #[inline]
    pub const fn new(file: FileId, local: u32) -> Self {
        NodeId { file, local }
    }

    #[inline]
    pub const fn file(self) -> FileId {
        self.file
    }

    #[inline]
    pub const fn local(self) -> u32 {
        self.local
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}:{})", self.file.0, self.local)
    }
}

/// Canonical identity of a declared name.
///
/// Two occurrences denote the same symbol iff the program model resolves
/// them to the same `SymbolId`. Used purely as a map key.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct SymbolId(u32);

impl SymbolId {
    /// Create an index from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position in a symbol arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
