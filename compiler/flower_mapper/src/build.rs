//! Build entry points and the state shared by the scan phases.

use std::path::Path;

use flower_diagnostic::{Diagnostic, DiagnosticCode, DiagnosticQueue};
use flower_ir::{FileId, ProgramModel, Span, SymbolId};
use flower_rewrite::{builtin_registry, RewriteRegistry};
use rustc_hash::FxHashSet;

use crate::{scan, MapperConfig, MapperError, SymbolTable};

/// A finished table and everything reported while building it.
#[derive(Debug)]
pub struct MapperOutput<'r> {
    pub table: SymbolTable<'r>,
    /// Ordered by location, then code.
    pub diagnostics: Vec<Diagnostic>,
}

/// Classify every type name in `targets` using the builtin rules.
///
/// `targets` are paths as the program knows them; other files in the
/// program are consulted for classification but not rewritten.
pub fn build<P, T>(program: &P, targets: &[T]) -> Result<MapperOutput<'static>, MapperError>
where
    P: ProgramModel + ?Sized,
    T: AsRef<Path>,
{
    build_with_registry(program, targets, builtin_registry(), &MapperConfig::default())
}

pub fn build_with_config<P, T>(
    program: &P,
    targets: &[T],
    config: &MapperConfig,
) -> Result<MapperOutput<'static>, MapperError>
where
    P: ProgramModel + ?Sized,
    T: AsRef<Path>,
{
    build_with_registry(program, targets, builtin_registry(), config)
}

/// Run the four scan phases in order:
///
/// 1. global augmentations, in every file
/// 2. top-level declarations of the standard library
/// 3. declarations and references in the target files
/// 4. rename propagation through imports and re-exports in the target
///    files, when phases 1-3 renamed anything
#[tracing::instrument(level = "debug", skip_all, fields(targets = targets.len()))]
pub fn build_with_registry<'r, P, T>(
    program: &P,
    targets: &[T],
    registry: &'r RewriteRegistry,
    config: &MapperConfig,
) -> Result<MapperOutput<'r>, MapperError>
where
    P: ProgramModel + ?Sized,
    T: AsRef<Path>,
{
    config.validate()?;

    let mut builder = Builder::new(program, registry, config);
    let targets = builder.target_files(targets);

    scan::global_augmentations::run(&mut builder);
    scan::default_library::run(&mut builder);
    scan::user_files::run(&mut builder, &targets)?;
    if builder.had_renames {
        scan::import_renames::run(&mut builder, &targets);
    } else {
        tracing::debug!("no renames, skipping import propagation");
    }

    let Builder {
        table,
        mut diagnostics,
        ..
    } = builder;
    tracing::debug!(
        rules = table.len(),
        renames = table.rename_count(),
        diagnostics = diagnostics.len(),
        "symbol table built"
    );
    Ok(MapperOutput {
        table,
        diagnostics: diagnostics.flush(),
    })
}

/// Mutable state while the table is under construction.
pub(crate) struct Builder<'a, 'r, P: ?Sized> {
    pub(crate) program: &'a P,
    pub(crate) registry: &'r RewriteRegistry,
    pub(crate) config: &'a MapperConfig,
    pub(crate) table: SymbolTable<'r>,
    pub(crate) diagnostics: DiagnosticQueue,
    /// Symbols already classified by the user-file scan.
    pub(crate) seen: FxHashSet<SymbolId>,
    pub(crate) had_renames: bool,
}

impl<'a, 'r, P: ProgramModel + ?Sized> Builder<'a, 'r, P> {
    fn new(program: &'a P, registry: &'r RewriteRegistry, config: &'a MapperConfig) -> Self {
        Builder {
            program,
            registry,
            config,
            table: SymbolTable::new(),
            diagnostics: DiagnosticQueue::new(),
            seen: FxHashSet::default(),
            had_renames: false,
        }
    }

    /// Look up each target, dropping (with a warning) those that are not in
    /// the program or belong to the standard library.
    fn target_files<T: AsRef<Path>>(&mut self, targets: &[T]) -> Vec<FileId> {
        let mut files = Vec::with_capacity(targets.len());
        for target in targets {
            let path = target.as_ref();
            let Some(file) = self
                .program
                .source_files()
                .iter()
                .find(|file| file.path == path)
            else {
                self.report(
                    Diagnostic::warning(DiagnosticCode::W1006)
                        .with_message(format!("target is not part of the program: {}", path.display())),
                );
                continue;
            };
            if self.program.is_default_library(file.id) {
                self.report(
                    Diagnostic::warning(DiagnosticCode::W1001)
                        .with_message("attempted to target default library")
                        .with_location(&file.path, Span::DUMMY),
                );
                continue;
            }
            if !files.contains(&file.id) {
                files.push(file.id);
            }
        }
        files
    }

    /// Path of `file`, for diagnostic locations.
    pub(crate) fn path(&self, file: FileId) -> &'a Path {
        self.program
            .source_file(file)
            .map_or(Path::new(""), |file| file.path.as_path())
    }

    /// Record an advisory diagnostic and log it.
    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_warning() {
            tracing::warn!(code = %diagnostic.code, "{}", diagnostic.message);
        } else {
            tracing::debug!(code = %diagnostic.code, "{}", diagnostic.message);
        }
        self.diagnostics.add(diagnostic);
    }
}
