use super::*;
use pretty_assertions::assert_eq;

fn ident(name: &str, local: u32, start: u32) -> Ident {
    let len = u32::try_from(name.len()).unwrap_or(u32::MAX);
    Ident {
        name: name.into(),
        span: Span::new(start, start + len),
        id: NodeId::new(FileId::from_raw(0), local),
    }
}

fn qualified(names: &[&str]) -> EntityName {
    let mut offset = 0;
    let mut local = 0;
    let mut entity: Option<EntityName> = None;
    for name in names {
        let next = ident(name, local, offset);
        offset += u32::try_from(name.len()).unwrap_or(0) + 1;
        local += 1;
        entity = Some(match entity {
            None => EntityName::Ident(next),
            Some(left) => EntityName::Qualified(Box::new(left), next),
        });
    }
    entity.unwrap_or_else(|| EntityName::Ident(ident("", 0, 0)))
}

#[test]
fn entity_name_segments() {
    let name = qualified(&["a", "b", "C"]);
    assert_eq!(name.leftmost().as_str(), "a");
    assert_eq!(name.rightmost().as_str(), "C");
    let segments: Vec<&str> = name.segments().iter().map(|s| s.as_str()).collect();
    assert_eq!(segments, vec!["a", "b", "C"]);
    assert_eq!(name.qualifier().map(ToString::to_string), Some("a.b".to_string()));
    assert_eq!(name.to_string(), "a.b.C");
    assert_eq!(name.span(), Span::new(0, 5));
}

#[test]
fn unqualified_entity_name_has_no_qualifier() {
    let name = qualified(&["Foo"]);
    assert!(name.qualifier().is_none());
    assert_eq!(name.leftmost(), name.rightmost());
}

#[test]
fn import_specifier_imported_name() {
    let plain = ImportSpecifier {
        property_name: None,
        name: ident("Component", 0, 0),
        type_only: false,
    };
    assert_eq!(plain.imported_name(), "Component");

    let renamed = ImportSpecifier {
        property_name: Some(ident("Component", 1, 0)),
        name: ident("Component2", 2, 13),
        type_only: false,
    };
    assert_eq!(renamed.imported_name(), "Component");
    assert_eq!(renamed.name.as_str(), "Component2");
}

#[test]
fn keyword_round_trip() {
    for keyword in [KeywordType::Any, KeywordType::Never, KeywordType::Object] {
        assert_eq!(KeywordType::from_name(keyword.as_str()), Some(keyword));
    }
    assert_eq!(KeywordType::from_name("Number"), None);
}

#[test]
fn module_detection() {
    let script = SourceFile {
        id: FileId::from_raw(0),
        path: "lib.d.ts".into(),
        statements: vec![Stmt {
            kind: StmtKind::Variable(VariableDecl {
                kind: VariableKind::Var,
                name: ident("x", 0, 4),
                ty: None,
                initializer: None,
            }),
            modifiers: Modifiers::DECLARE,
            span: Span::new(0, 6),
        }],
    };
    assert!(!script.is_module());

    let mut module = script.clone();
    module.statements[0].modifiers |= Modifiers::EXPORT;
    assert!(module.is_module());
}
