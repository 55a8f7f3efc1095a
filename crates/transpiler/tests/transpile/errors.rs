use super::helpers::*;
use filter_syntax::{Constant, ExprBuilder, Filter, Type};
use transpiler::{ErrorCategory, TranspileError, transpile};

#[test]
fn test_unknown_ident_type() {
    let decls = declarations();
    let err = transpile_with(&decls, |b| b.eq(b.ident("ghost"), b.string("boo"))).unwrap_err();

    assert!(err.to_string().contains("unknown type of ident expr"));
    assert_eq!(err.category(), ErrorCategory::UnknownType);
}

#[test]
fn test_bare_unknown_ident() {
    let decls = declarations();
    let err = transpile_with(&decls, |b| b.ident("ghost")).unwrap_err();
    assert_eq!(err.to_string(), "unknown type of ident expr 1");
}

#[test]
fn test_comparison_arity() {
    let decls = declarations();
    let err = transpile_with(&decls, |b| b.call("=", vec![b.ident("foo")])).unwrap_err();

    assert_eq!(
        err,
        TranspileError::Arity {
            function: "=".into(),
            count: 1
        }
    );
    assert_eq!(err.to_string(), "unexpected number of arguments to `=`: 1");
    assert_eq!(err.category(), ErrorCategory::Arity);
}

#[test]
fn test_logical_and_membership_arity() {
    let decls = declarations();
    let err = transpile_with(&decls, |b| {
        b.call("AND", vec![b.string("a"), b.string("b"), b.string("c")])
    })
    .unwrap_err();
    assert_eq!(err.to_string(), "unexpected number of arguments to `AND`: 3");

    let err = transpile_with(&decls, |b| b.call(":", vec![b.ident("labels")])).unwrap_err();
    assert!(matches!(err, TranspileError::Arity { count: 1, .. }));
}

#[test]
fn test_unary_arity() {
    let decls = declarations();
    let err = transpile_with(&decls, |b| b.call("NOT", vec![])).unwrap_err();
    assert_eq!(err.to_string(), "unexpected number of arguments to `NOT`: 0");

    let err = transpile_with(&decls, |b| {
        b.call("timestamp", vec![b.string("a"), b.string("b")])
    })
    .unwrap_err();
    assert_eq!(err.to_string(), "unexpected number of arguments to `timestamp`: 2");
}

#[test]
fn test_timestamp_requires_string_const() {
    let decls = declarations();
    let err = transpile_with(&decls, |b| {
        b.eq(b.ident("start"), b.call("timestamp", vec![b.int(1700000000)]))
    })
    .unwrap_err();

    assert_eq!(err, TranspileError::MalformedTimestamp("timestamp".into()));
    assert_eq!(err.category(), ErrorCategory::MalformedConst);

    let err = transpile_with(&decls, |b| {
        b.eq(b.ident("start"), b.call("timestamp", vec![b.ident("stop")]))
    })
    .unwrap_err();
    assert_eq!(err.to_string(), "expected constant string arg to timestamp");
}

#[test]
fn test_select_is_rejected() {
    let decls = declarations();
    let err = transpile_with(&decls, |b| {
        b.eq(b.select(b.ident("foo"), "bar"), b.string("x"))
    })
    .unwrap_err();

    assert_eq!(err, TranspileError::UnsupportedSelect);
    assert_eq!(err.category(), ErrorCategory::Unsupported);
}

#[test]
fn test_unsupported_constants() {
    let decls = declarations();
    let err = transpile_with(&decls, |b| {
        b.eq(b.ident("foo"), b.constant(Constant::Bytes(b"raw".to_vec())))
    })
    .unwrap_err();
    assert_eq!(err.to_string(), "unsupported const expr: b\"raw\"");

    let err = transpile_with(&decls, |b| b.eq(b.ident("foo"), b.constant(Constant::Null)))
        .unwrap_err();
    assert_eq!(err, TranspileError::UnsupportedConst("null".into()));
}

#[test]
fn test_error_in_right_branch_discards_left_fragment() {
    let decls = declarations();
    let err = transpile_with(&decls, |b| {
        b.and(
            b.eq(b.ident("foo"), b.string("x")),
            b.not(b.eq(b.ident("foo"), b.string("y"))),
        )
    })
    .unwrap_err();
    assert_eq!(err, TranspileError::UnsupportedNot);
}

#[test]
fn test_type_table_from_another_tree_is_not_consulted() {
    let decls = declarations();
    let b = ExprBuilder::new(&decls);
    let expr = b.eq(b.typed_ident("foo", Type::string()), b.string("x"));
    let mut checked = b.finish(expr);
    checked.type_map = Default::default();

    let err = transpile(&Filter::new(checked), decls.enums()).unwrap_err();
    assert_eq!(err, TranspileError::UnknownCallType(3));
}
