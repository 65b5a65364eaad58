//! Symbol arena.

use std::ops::{Index, IndexMut};

use flower_ir::{Declaration, SymbolFlags, SymbolId};
use rustc_hash::FxHashMap;

/// Name to symbol, for one scope or one member/export table.
pub(crate) type NameTable = FxHashMap<Box<str>, SymbolId>;

pub(crate) struct SymbolData {
    pub name: Box<str>,
    pub flags: SymbolFlags,
    pub declarations: Vec<Declaration>,
    /// Namespace members, or a module's exports.
    pub members: NameTable,
    /// For aliases: the symbol the alias names, once linked.
    pub alias_target: Option<SymbolId>,
}

#[derive(Default)]
pub(crate) struct SymbolArena {
    symbols: Vec<SymbolData>,
}

impl SymbolArena {
    pub fn alloc(
        &mut self,
        name: Box<str>,
        flags: SymbolFlags,
        declaration: Declaration,
    ) -> SymbolId {
        let id = SymbolId::from_raw(u32::try_from(self.symbols.len()).unwrap_or(u32::MAX));
        self.symbols.push(SymbolData {
            name,
            flags,
            declarations: vec![declaration],
            members: NameTable::default(),
            alias_target: None,
        });
        id
    }

    pub fn get(&self, id: SymbolId) -> Option<&SymbolData> {
        self.symbols.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Follow alias links to the symbol at the end of the chain.
    ///
    /// Unlinked aliases (module not in the program) resolve to themselves.
    /// Cycles stop after a fixed number of hops.
    pub fn resolve_alias(&self, mut id: SymbolId) -> SymbolId {
        const MAX_HOPS: usize = 64;
        for _ in 0..MAX_HOPS {
            match self.get(id).and_then(|s| s.alias_target) {
                Some(target) => id = target,
                None => break,
            }
        }
        id
    }
}

impl Index<SymbolId> for SymbolArena {
    type Output = SymbolData;

    fn index(&self, id: SymbolId) -> &SymbolData {
        &self.symbols[id.index()]
    }
}

impl IndexMut<SymbolId> for SymbolArena {
    fn index_mut(&mut self, id: SymbolId) -> &mut SymbolData {
        &mut self.symbols[id.index()]
    }
}
