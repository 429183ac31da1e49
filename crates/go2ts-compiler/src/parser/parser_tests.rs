use indoc::indoc;

use super::ast::{DeclBody, TypeExprKind, TypeShape, ValueKind};
use super::parse;
use crate::diagnostics::ErrorKind;

#[test]
fn collects_package_and_grouped_types() {
    let file = parse(indoc! {r#"
    package fetch

    type (
        Status string
        Kind   *int

        SimpleRequest struct {
            UserID string `json:"userID"`
        }
    )
    "#})
    .unwrap();

    assert_eq!(file.package.as_deref(), Some("fetch"));
    let names: Vec<_> = file.types.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["Status", "Kind", "SimpleRequest"]);
    let structs = file
        .types
        .iter()
        .filter(|d| matches!(d.body, DeclBody::Struct(_)))
        .count();
    assert_eq!(structs, 1);
}

#[test]
fn lowers_alias_forms() {
    let file = parse(indoc! {r#"
    package p

    type A string
    type B = A
    type C *int
    type D []string
    type E [4]int
    type F (int)
    "#})
    .unwrap();

    let bodies: Vec<_> = file
        .types
        .iter()
        .map(|d| match &d.body {
            DeclBody::Alias(expr) => expr.to_string(),
            DeclBody::Struct(_) => panic!("unexpected struct"),
        })
        .collect();
    assert_eq!(bodies, ["string", "A", "*int", "[]string", "[...]int", "int"]);
}

#[test]
fn lowers_struct_fields_in_order() {
    let file = parse(indoc! {r#"
    package p

    import "time"

    type Req struct {
        ID    string     `json:"id"`
        Age   *int       `json:"age"`
        Tags  []string   `json:"tags"`
        At    time.Time  `json:"at"`
        Plain string
    }
    "#})
    .unwrap();

    let decl = &file.types[0];
    let DeclBody::Struct(fields) = &decl.body else {
        panic!("expected struct");
    };
    let summary: Vec<_> = fields
        .iter()
        .map(|f| (f.label(), f.ty.to_string(), f.tag.as_ref().map(|t| t.value.clone())))
        .collect();
    assert_eq!(
        summary,
        [
            ("ID".to_string(), "string".to_string(), Some(r#"json:"id""#.to_string())),
            ("Age".to_string(), "*int".to_string(), Some(r#"json:"age""#.to_string())),
            ("Tags".to_string(), "[]string".to_string(), Some(r#"json:"tags""#.to_string())),
            ("At".to_string(), "time.Time".to_string(), Some(r#"json:"at""#.to_string())),
            ("Plain".to_string(), "string".to_string(), None),
        ]
    );
}

#[test]
fn qualified_type_keeps_package() {
    let file = parse(indoc! {r#"
    package p

    type Req struct {
        ID uuid.UUID `json:"id"`
    }
    "#})
    .unwrap();

    let DeclBody::Struct(fields) = &file.types[0].body else {
        panic!("expected struct");
    };
    assert_eq!(
        fields[0].ty.kind,
        TypeExprKind::Qualified {
            package: "uuid".to_string(),
            name: "UUID".to_string(),
        }
    );
}

#[test]
fn multiple_names_share_one_declaration() {
    let file = parse(indoc! {r#"
    package p

    type Point struct {
        X, Y int `json:"coord"`
    }
    "#})
    .unwrap();

    let DeclBody::Struct(fields) = &file.types[0].body else {
        panic!("expected struct");
    };
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].names, ["X", "Y"]);
    assert_eq!(fields[0].label(), "X, Y");
}

#[test]
fn embedded_fields_have_no_names() {
    let file = parse(indoc! {r#"
    package p

    type Child struct {
        Base     `json:"base"`
        *Other   `json:"other"`
        time.Time `json:"at"`
    }
    "#})
    .unwrap();

    let DeclBody::Struct(fields) = &file.types[0].body else {
        panic!("expected struct");
    };
    let types: Vec<_> = fields.iter().map(|f| f.ty.to_string()).collect();
    assert_eq!(types, ["Base", "*Other", "time.Time"]);
    assert!(fields.iter().all(|f| f.is_embedded()));
}

#[test]
fn interpreted_tag_is_unescaped() {
    let file = parse(indoc! {r#"
    package p

    type Req struct {
        ID string "json:\"id\""
    }
    "#})
    .unwrap();

    let DeclBody::Struct(fields) = &file.types[0].body else {
        panic!("expected struct");
    };
    assert_eq!(fields[0].tag.as_ref().unwrap().value, r#"json:"id""#);
}

#[test]
fn interpreted_tag_decodes_byte_escapes() {
    let file = parse(indoc! {r#"
    package p

    type Req struct {
        ID string "json:\"\x41b\""
    }
    "#})
    .unwrap();

    let DeclBody::Struct(fields) = &file.types[0].body else {
        panic!("expected struct");
    };
    assert_eq!(fields[0].tag.as_ref().unwrap().value, r#"json:"Ab""#);
}

#[test]
fn raw_tag_keeps_backslashes() {
    let file = parse(indoc! {r#"
    package p

    type Req struct {
        ID string `json:"\x41b"`
    }
    "#})
    .unwrap();

    let DeclBody::Struct(fields) = &file.types[0].body else {
        panic!("expected struct");
    };
    assert_eq!(fields[0].tag.as_ref().unwrap().value, r#"json:"\x41b""#);
}

#[test]
fn unsupported_shapes_are_kept() {
    let file = parse(indoc! {r#"
    package p

    type Req struct {
        M map[string]int   `json:"m"`
        C chan int         `json:"c"`
        F func()           `json:"f"`
        I interface{}      `json:"i"`
        S struct{}         `json:"s"`
        G List[int]        `json:"g"`
    }
    "#})
    .unwrap();

    let DeclBody::Struct(fields) = &file.types[0].body else {
        panic!("expected struct");
    };
    let shapes: Vec<_> = fields
        .iter()
        .map(|f| match &f.ty.kind {
            TypeExprKind::Unsupported(shape) => shape.clone(),
            other => panic!("expected unsupported shape, got {other:?}"),
        })
        .collect();
    assert_eq!(
        shapes,
        [
            TypeShape::Map,
            TypeShape::Channel,
            TypeShape::Function,
            TypeShape::Interface,
            TypeShape::Struct,
            TypeShape::Generic,
        ]
    );
}

#[test]
fn generic_declaration_is_flagged() {
    let file = parse(indoc! {r#"
    package p

    type Page[T any] struct {
        Items []T `json:"items"`
    }
    "#})
    .unwrap();

    assert!(file.types[0].generic);
}

#[test]
fn collects_value_declarations() {
    let file = parse(indoc! {r#"
    package p

    const Limit = 10

    var (
        Count int
        a, b  = 1, 2
    )

    func Handler() {}
    "#})
    .unwrap();

    let values: Vec<_> = file
        .values
        .iter()
        .map(|v| (v.name.as_str(), v.kind))
        .collect();
    assert_eq!(
        values,
        [
            ("Limit", ValueKind::Const),
            ("Count", ValueKind::Var),
            ("a", ValueKind::Var),
            ("b", ValueKind::Var),
            ("Handler", ValueKind::Func),
        ]
    );
}

#[test]
fn syntax_error_is_reported() {
    let error = parse("package p\n\ntype Req struct {\n\tID string `json:\"id\"`\n").unwrap_err();
    assert_eq!(error.kind, ErrorKind::Syntax);
}

#[test]
fn local_types_are_ignored() {
    let file = parse(indoc! {r#"
    package p

    func f() {
        type Local struct {
            A string `json:"a"`
        }
    }
    "#})
    .unwrap();

    assert!(file.types.is_empty());
}
