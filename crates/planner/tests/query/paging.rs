use chrono::{Duration, TimeZone, Utc};
use filter_syntax::{Declarations, EnumRegistry, ExprBuilder, Filter, Type};
use planner::{PageToken, QueryConfig, RecordQuery};

#[test]
fn test_next_page_starts_after_last_record() {
    let last = Utc.with_ymd_and_hms(2024, 5, 10, 8, 30, 0).unwrap() + Duration::milliseconds(250);
    let token = PageToken::new(last, "owner-1").encode();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

    let rendered = RecordQuery::new(QueryConfig::default(), "m", "trigger_time")
        .page_token(&token)
        .build_at(&Filter::empty(), &EnumRegistry::new(), now)
        .unwrap();

    assert!(
        rendered
            .query
            .contains("range(start: 2024-05-10T08:30:00.250000001Z, stop: 2024-06-01T00:00:00Z)")
    );
}

#[test]
fn test_page_token_overrides_start_bound_from_filter() {
    let decls = Declarations::new()
        .with_ident("start", Type::timestamp())
        .unwrap()
        .with_ident("stop", Type::timestamp())
        .unwrap();
    let b = ExprBuilder::new(&decls);
    let expr = b.and(
        b.ge(b.ident("start"), b.timestamp("2024-01-01T00:00:00Z")),
        b.lt(b.ident("stop"), b.timestamp("2024-05-01T00:00:00Z")),
    );
    let filter = b.finish_filter(expr);
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let query = RecordQuery::new(QueryConfig::default(), "m", "trigger_time");

    let first = query.build_at(&filter, decls.enums(), now).unwrap();
    let last = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let second = query
        .clone()
        .page_token(&PageToken::new(last, "owner-1").encode())
        .build_at(&filter, decls.enums(), now)
        .unwrap();

    assert!(first.query.contains("range(start: 2024-01-01T00:00:00Z, stop: 2024-05-01T00:00:00Z)"));
    assert!(
        second
            .query
            .contains("range(start: 2024-03-01T12:00:00.000000001Z, stop: 2024-05-01T00:00:00Z)")
    );
    assert_ne!(first.query, second.query);
}

#[test]
fn test_empty_page_token_is_ignored() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

    let rendered = RecordQuery::new(QueryConfig::default(), "m", "trigger_time")
        .page_token("")
        .build_at(&Filter::empty(), &EnumRegistry::new(), now)
        .unwrap();

    assert!(rendered.query.contains("range(start: 0001-01-01T00:00:00Z,"));
}

#[test]
fn test_page_size_bounds() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    for (requested, expected) in [(0, 10), (1, 1), (100, 100), (101, 100)] {
        let rendered = RecordQuery::new(QueryConfig::default(), "m", "trigger_time")
            .page_size(requested)
            .build_at(&Filter::empty(), &EnumRegistry::new(), now)
            .unwrap();
        assert_eq!(rendered.page_size, expected);
    }
}
