//! Program assembly.

use std::path::{Path, PathBuf};

use flower_ir::FileId;
use flower_parse::parse_file;
use rustc_hash::FxHashSet;

use crate::binder::{self, FileMeta};
use crate::{Program, ProgramError};

struct Input {
    path: PathBuf,
    source: String,
    meta: FileMeta,
}

/// Collects declaration files, then parses and binds them in one go.
///
/// File ids follow the order files are added.
///
/// ```
/// use flower_program::ProgramBuilder;
///
/// let program = ProgramBuilder::new()
///     .add_default_library("lib.d.ts", "interface Array<T> {}")
///     .add_module("react", "react.d.ts", "export class Component<P, S> {}")
///     .add_file("app.d.ts", "import { Component } from 'react';")
///     .build();
/// assert!(program.is_ok());
/// ```
#[derive(Default)]
pub struct ProgramBuilder {
    inputs: Vec<Input>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A file of the implicit standard library; binds into the global scope.
    #[must_use]
    pub fn add_default_library(self, path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        self.push(path.into(), source.into(), None, true)
    }

    /// A file importable as `specifier`.
    #[must_use]
    pub fn add_module(
        self,
        specifier: &str,
        path: impl Into<PathBuf>,
        source: impl Into<String>,
    ) -> Self {
        self.push(path.into(), source.into(), Some(specifier.into()), false)
    }

    /// A file importable as `./<stem>`, where the stem drops `.d.ts`,
    /// `.ts` or `.tsx`.
    #[must_use]
    pub fn add_file(self, path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        let path = path.into();
        let specifier = relative_specifier(&path);
        self.push(path, source.into(), specifier, false)
    }

    fn push(
        mut self,
        path: PathBuf,
        source: String,
        specifier: Option<Box<str>>,
        default_library: bool,
    ) -> Self {
        self.inputs.push(Input {
            path,
            source,
            meta: FileMeta {
                specifier,
                default_library,
            },
        });
        self
    }

    #[tracing::instrument(level = "debug", skip_all, fields(files = self.inputs.len()))]
    pub fn build(self) -> Result<Program, ProgramError> {
        let mut specifiers = FxHashSet::default();
        for input in &self.inputs {
            if let Some(specifier) = &input.meta.specifier {
                if !specifiers.insert(specifier.clone()) {
                    return Err(ProgramError::DuplicateModule {
                        specifier: specifier.to_string(),
                    });
                }
            }
        }

        let mut files = Vec::with_capacity(self.inputs.len());
        let mut metas = Vec::with_capacity(self.inputs.len());
        for (index, input) in self.inputs.into_iter().enumerate() {
            let id = FileId::from_raw(u32::try_from(index).unwrap_or(u32::MAX));
            let file = parse_file(id, &input.path, &input.source).map_err(|source| {
                ProgramError::Parse {
                    path: input.path.clone(),
                    source,
                }
            })?;
            files.push(file);
            metas.push(input.meta);
        }

        let bindings = binder::bind(&files, &metas);
        let default_library = metas.iter().map(|meta| meta.default_library).collect();
        Ok(Program::new(files, default_library, bindings))
    }
}

fn relative_specifier(path: &Path) -> Option<Box<str>> {
    let name = path.file_name()?.to_str()?;
    let stem = [".d.ts", ".tsx", ".ts"]
        .iter()
        .find_map(|ext| name.strip_suffix(ext))
        .unwrap_or(name);
    Some(format!("./{stem}").into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn specifier_drops_declaration_extension() {
        assert_eq!(
            relative_specifier(Path::new("src/types.d.ts")).as_deref(),
            Some("./types")
        );
        assert_eq!(
            relative_specifier(Path::new("view.tsx")).as_deref(),
            Some("./view")
        );
        assert_eq!(
            relative_specifier(Path::new("plain")).as_deref(),
            Some("./plain")
        );
    }

    #[test]
    fn duplicate_modules_are_rejected() {
        let result = ProgramBuilder::new()
            .add_module("m", "a.d.ts", "export type A = 1;")
            .add_module("m", "b.d.ts", "export type B = 2;")
            .build();
        assert!(matches!(
            result,
            Err(ProgramError::DuplicateModule { specifier }) if specifier == "m"
        ));
    }

    #[test]
    fn parse_errors_name_the_file() {
        let result = ProgramBuilder::new()
            .add_file("broken.d.ts", "type = ;")
            .build();
        let Err(err) = result else {
            panic!("expected a parse error");
        };
        assert!(err.to_string().starts_with("failed to parse broken.d.ts:"));
    }
}
