use super::helpers::*;
use filter_syntax::{Function, Type};

fn stage(field: &str, op: &str, value: &str) -> String {
    format!(r#"|> filter(fn: (r) => r["{field}"] {op} "{value}")"#)
}

#[test]
fn test_every_comparator_emits_filter_stage() {
    let decls = declarations();
    let cases = [
        (Function::Equals, "=="),
        (Function::NotEquals, "!="),
        (Function::LessThan, "<"),
        (Function::LessEquals, "<="),
        (Function::GreaterThan, ">"),
        (Function::GreaterEquals, ">="),
    ];

    for (function, symbol) in cases {
        let out = transpile_with(&decls, |b| {
            b.function(function, vec![b.ident("pipeline_id"), b.string("p1")])
        })
        .unwrap();
        assert_eq!(out, stage("pipeline_id", symbol, "p1"), "{function}");
    }
}

#[test]
fn test_camel_case_field_is_snake_cased() {
    let decls = declarations();
    let out = transpile_with(&decls, |b| {
        b.eq(b.typed_ident("pipelineReleaseId", Type::string()), b.string("r1"))
    })
    .unwrap();
    assert_eq!(out, stage("pipeline_release_id", "==", "r1"));
}

#[test]
fn test_numeric_values_are_quoted() {
    let decls = declarations();
    let out = transpile_with(&decls, |b| {
        b.gt(b.typed_ident("count", Type::int64()), b.double(2.5))
    })
    .unwrap();
    assert_eq!(out, stage("count", ">", "2.5"));

    let out = transpile_with(&decls, |b| {
        b.le(b.typed_ident("enabled", Type::bool()), b.boolean(false))
    })
    .unwrap();
    assert_eq!(out, stage("enabled", "<=", "false"));
}

#[test]
fn test_timestamp_field_emits_anchor_for_any_comparator() {
    let decls = declarations();

    for function in [
        Function::Equals,
        Function::NotEquals,
        Function::LessThan,
        Function::LessEquals,
        Function::GreaterThan,
        Function::GreaterEquals,
    ] {
        let out = transpile_with(&decls, |b| {
            b.function(
                function,
                vec![b.ident("start"), b.timestamp("2024-01-01T00:00:00Z")],
            )
        })
        .unwrap();
        assert_eq!(out, "start@2024-01-01T00:00:00Z", "{function}");
    }
}

#[test]
fn test_enum_typed_field_with_string_value() {
    let decls = declarations();
    let out = transpile_with(&decls, |b| b.eq(b.ident("status"), b.string("OWNER_TYPE_USER")))
        .unwrap();
    assert_eq!(out, r#"|> filter(fn: (r) => r["status"] == "OWNER_TYPE_USER")"#);
}

#[test]
fn test_enum_value_identifier_is_substituted() {
    let decls = declarations();
    let out = transpile_with(&decls, |b| {
        b.ne(b.ident("status"), b.ident("OWNER_TYPE_ORGANIZATION"))
    })
    .unwrap();
    assert_eq!(out, stage("status", "!=", "OWNER_TYPE_ORGANIZATION"));
}

#[test]
fn test_unknown_enum_value_falls_back_to_snake_case() {
    let decls = declarations();
    let out = transpile_with(&decls, |b| {
        b.eq(
            b.ident("status"),
            b.typed_ident("OWNER_TYPE_ROBOT", Type::message("OwnerType")),
        )
    })
    .unwrap();
    assert_eq!(out, stage("status", "==", "owner_type_robot"));
}

#[test]
fn test_camel_case_timestamp_field_anchor_is_snake_cased() {
    let decls = declarations();
    let out = transpile_with(&decls, |b| {
        b.ge(
            b.typed_ident("startTime", Type::timestamp()),
            b.timestamp("2024-01-01T00:00:00Z"),
        )
    })
    .unwrap();
    assert_eq!(out, "start_time@2024-01-01T00:00:00Z");
}

#[test]
fn test_large_double_uses_exponent_form() {
    let decls = declarations();
    let out = transpile_with(&decls, |b| {
        b.gt(b.typed_ident("bytes", Type::int64()), b.double(1e21))
    })
    .unwrap();
    assert_eq!(out, stage("bytes", ">", "1e+21"));

    let out = transpile_with(&decls, |b| {
        b.lt(b.typed_ident("quota", Type::int64()), b.double(f64::INFINITY))
    })
    .unwrap();
    assert_eq!(out, stage("quota", "<", "+Inf"));
}
