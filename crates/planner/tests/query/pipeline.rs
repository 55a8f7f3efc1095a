use chrono::{TimeZone, Utc};
use filter_syntax::{Declarations, EnumDescriptor, ExprBuilder, Type};
use planner::{QueryConfig, RecordQuery};
use std::io::Write;
use transpiler::hijack_const_value;

fn declarations() -> Declarations {
    Declarations::new()
        .with_ident("start", Type::timestamp())
        .unwrap()
        .with_ident("stop", Type::timestamp())
        .unwrap()
        .with_ident("pipeline_id", Type::string())
        .unwrap()
        .with_enum_ident(
            "status",
            EnumDescriptor::new("Status")
                .with_value("STATUS_UNSPECIFIED")
                .with_value("STATUS_COMPLETED")
                .with_value("STATUS_ERRORED"),
        )
        .unwrap()
}

#[test]
fn test_hijacked_filter_in_record_query() {
    let decls = declarations();
    let b = ExprBuilder::new(&decls);
    let expr = b.and(
        b.and(
            b.ge(b.ident("start"), b.timestamp("2024-01-01T00:00:00Z")),
            b.lt(b.ident("stop"), b.timestamp("2024-02-01T00:00:00Z")),
        ),
        b.and(
            b.eq(b.ident("pipeline_id"), b.string("my-pipeline")),
            b.eq(b.ident("status"), b.ident("STATUS_COMPLETED")),
        ),
    );
    let mut filter = b.finish_filter(expr);

    let checked = filter.checked_expr.as_mut().unwrap();
    let installed = hijack_const_value(&mut checked.expr, "pipeline_id", "pipeline_uid", "uid-1");
    assert_eq!(installed.as_deref(), Some("uid-1"));

    let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let rendered = RecordQuery::new(QueryConfig::default(), "pipeline.trigger.v1", "trigger_time")
        .owner("owner-1")
        .build_at(&filter, decls.enums(), now)
        .unwrap();

    let expected_base = [
        "from(bucket: \"instance\")",
        "  |> range(start: 2024-01-01T00:00:00Z, stop: 2024-02-01T00:00:00Z)",
        "  |> filter(fn: (r) => r[\"_measurement\"] == \"pipeline.trigger.v1\")",
        "  |> pivot(rowKey: [\"_time\"], columnKey: [\"_field\"], valueColumn: \"_value\")",
        "  |> filter(fn: (r) => r[\"owner_uid\"] == \"owner-1\")",
        "  |> filter(fn: (r) => r[\"pipeline_uid\"] == \"uid-1\")\
         |> filter(fn: (r) => r[\"status\"] == \"STATUS_COMPLETED\")",
    ]
    .join("\n");

    assert_eq!(
        rendered.query,
        format!(
            "{expected_base}\n  |> group()\n  |> sort(columns: [\"trigger_time\"])\n  |> limit(n: 10)"
        )
    );
    assert_eq!(
        rendered.total_query,
        format!("{expected_base}\n  |> group()\n  |> count(column: \"trigger_time\")")
    );
}

#[test]
fn test_config_file_drives_rendering() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "bucket": "metrics", "default_page_size": 25, "time_column": "ts" }}"#
    )
    .unwrap();
    let config = QueryConfig::from_file(file.path()).unwrap();

    let rendered = RecordQuery::new(config, "model.trigger.v1", "trigger_time")
        .build(&filter_syntax::Filter::empty(), &filter_syntax::EnumRegistry::new())
        .unwrap();

    assert!(rendered.query.starts_with("from(bucket: \"metrics\")"));
    assert!(rendered.query.contains("pivot(rowKey: [\"ts\"]"));
    assert!(rendered.query.ends_with("|> limit(n: 25)"));
    assert_eq!(rendered.page_size, 25);
}
