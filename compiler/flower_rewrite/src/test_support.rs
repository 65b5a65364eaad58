//! Helpers shared by unit tests.

use std::path::Path;

use flower_ir::{EntityName, FileId, StmtKind, TypeNode, TypeReference};

/// Parse `type X = <source>;` and return the aliased type.
pub(crate) fn parse_type(source: &str) -> TypeNode {
    let text = format!("type X = {source};");
    let file = match flower_parse::parse_file(FileId::from_raw(0), Path::new("t.d.ts"), &text) {
        Ok(file) => file,
        Err(e) => panic!("parse failed: {e}"),
    };
    match file.statements.into_iter().next().map(|s| s.kind) {
        Some(StmtKind::TypeAlias(decl)) => decl.ty,
        other => panic!("expected a type alias, got {other:?}"),
    }
}

/// Parse a type reference such as `Omit<A, 'b'>`.
pub(crate) fn parse_reference(source: &str) -> TypeReference {
    match parse_type(source).kind {
        flower_ir::TypeKind::Reference(reference) => reference,
        other => panic!("expected a reference, got {other:?}"),
    }
}

/// Run a macro function on the reference written in `source`.
pub(crate) fn expand(
    convert: crate::ConvertFn,
    source: &str,
) -> crate::MacroResult {
    let reference = parse_reference(source);
    let name: &EntityName = &reference.name;
    convert(
        &mut crate::PlainConverter,
        name,
        reference.type_args.as_deref(),
    )
}
