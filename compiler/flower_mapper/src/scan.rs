//! The scan phases that populate a [`SymbolTable`](crate::SymbolTable).
//!
//! Each phase reads what earlier phases assigned, so they run strictly in
//! order.

pub(crate) mod default_library;
pub(crate) mod global_augmentations;
pub(crate) mod import_renames;
pub(crate) mod user_files;
