//! Program model for tsflower.
//!
//! Parses a set of declaration files and binds them into a symbol arena,
//! producing a [`Program`] that implements [`flower_ir::ProgramModel`].
//!
//! # Binding model
//!
//! - Default-library files and files without any import or export bind
//!   their top-level declarations into the global scope.
//! - Every other file is an external module with its own locals and an
//!   export table. Modules are addressed by specifier: either the one given
//!   to [`ProgramBuilder::add_module`], or `./<stem>` for
//!   [`ProgramBuilder::add_file`].
//! - Declarations of one name in one scope merge into a single symbol.
//! - Imports and `export { .. } from` create alias symbols that point at
//!   the export they name (when the module is part of the program).

mod binder;
mod builder;
mod error;
mod program;
mod symbols;

pub use builder::ProgramBuilder;
pub use error::ProgramError;
pub use program::Program;
