//! The rewrite-decision engine.
//!
//! Given a symbol-resolved program and the files to translate, decide for
//! every type-level name whether it passes through, is renamed, is
//! substituted by an import from a helper module, or is rebuilt by a
//! macro. The decisions are collected in a [`SymbolTable`] before any
//! output is produced; a converter then queries the table once per name it
//! emits.
//!
//! # Pipeline Position
//!
//! ```text
//! Parse → Bind → **Map** → Convert → Print
//! ```
//!
//! # Phases
//!
//! 1. **Global augmentations**: interfaces in `declare global` blocks that
//!    the global rules name
//! 2. **Standard library**: top-level type aliases and interfaces of the
//!    default library
//! 3. **User files**: type/value renames, and library rules attached to
//!    import aliases in the target files
//! 4. **Import renames**: renames carried through import and re-export
//!    chains to every alias in the target files
//!
//! Conditions that leave a name unclassified are reported as
//! [`Diagnostic`](flower_diagnostic::Diagnostic)s in the
//! [`MapperOutput`]; they never stop the build.
//!
//! # Example
//!
//! ```
//! use flower_mapper::build;
//! use flower_program::ProgramBuilder;
//!
//! let program = ProgramBuilder::new()
//!     .add_file("a.d.ts", "export type Foo = number; export declare const Foo: number;")
//!     .build()
//!     .unwrap_or_else(|e| panic!("{e}"));
//! let output = build(&program, &["a.d.ts"]).unwrap_or_else(|e| panic!("{e}"));
//! assert_eq!(output.table.rename_count(), 1);
//! ```

mod build;
mod config;
mod convert;
mod error;
mod scan;
mod table;

#[cfg(test)]
mod test_support;

use std::sync::Once;

pub use build::{build, build_with_config, build_with_registry, MapperOutput};
pub use config::{ConflictPolicy, MapperConfig};
pub use convert::TableConverter;
pub use error::MapperError;
pub use table::SymbolTable;

static LOGGING: Once = Once::new();

/// Route the crate's `tracing` events to stderr, filtered by `RUST_LOG`
/// (for instance `RUST_LOG=flower_mapper=debug,flower_program=trace`).
///
/// Without `RUST_LOG` nothing is installed. Later calls are no-ops, and an
/// already-installed global subscriber is left in place.
pub fn init_tracing() {
    LOGGING.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .without_time();
        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init();
        if installed.is_ok() {
            tracing::debug!("mapper tracing enabled");
        }
    });
}
