//! Windowed trigger counts for charts.
//!
//! `aggregateWindow` lays its windows out from the Unix epoch, not from the
//! range start, so daily windows are shifted by the start's time of day.

use crate::{
    config::QueryConfig,
    error::{PlanError, Result},
    range::RangeBounds,
    record::{START_OF_TIME, format_time},
};
use chrono::{DateTime, Duration, Timelike, Utc};
use filter_syntax::{EnumLookup, Filter};
use tracing::debug;

const DEFAULT_WINDOW_MINUTES: i64 = 60;
const MIN_WINDOW_MINUTES: i64 = 1;

/// Offset from midnight UTC of the day containing `start`.
pub fn aggregation_window_offset(start: DateTime<Utc>) -> Duration {
    Duration::seconds(i64::from(start.num_seconds_from_midnight()))
        + Duration::nanoseconds(i64::from(start.nanosecond()))
}

/// Builder for a windowed count over one measurement.
#[derive(Debug, Clone)]
pub struct ChartQuery {
    config: QueryConfig,
    measurement: String,
    count_column: String,
    group_key: Option<String>,
    owner_uid: Option<String>,
    window: Duration,
}

impl ChartQuery {
    pub fn new(config: QueryConfig, measurement: &str, count_column: &str) -> Self {
        ChartQuery {
            config,
            measurement: measurement.to_string(),
            count_column: count_column.to_string(),
            group_key: None,
            owner_uid: None,
            window: Duration::minutes(DEFAULT_WINDOW_MINUTES),
        }
    }

    /// One series per distinct value of `key`.
    pub fn group_by(mut self, key: &str) -> Self {
        self.group_key = Some(key.to_string());
        self
    }

    pub fn owner(mut self, owner_uid: &str) -> Self {
        self.owner_uid = Some(owner_uid.to_string());
        self
    }

    /// Windows shorter than a minute fall back to one hour.
    pub fn window(mut self, window: Duration) -> Self {
        self.window = if window < Duration::minutes(MIN_WINDOW_MINUTES) {
            Duration::minutes(DEFAULT_WINDOW_MINUTES)
        } else {
            window
        };
        self
    }

    pub fn build(&self, filter: &Filter, enums: &dyn EnumLookup) -> Result<String> {
        self.build_at(filter, enums, Utc::now())
    }

    pub fn build_at(
        &self,
        filter: &Filter,
        enums: &dyn EnumLookup,
        now: DateTime<Utc>,
    ) -> Result<String> {
        let fragment = transpiler::transpile(filter, enums)?;
        let bounds = RangeBounds::split(&fragment, START_OF_TIME, &format_time(now));

        let start = DateTime::parse_from_rfc3339(&bounds.start)
            .map_err(|e| PlanError::InvalidRangeStart {
                value: bounds.start.clone(),
                reason: e.to_string(),
            })?
            .with_timezone(&Utc);
        let offset = aggregation_window_offset(start);
        debug!(
            "Chart window {} with offset {} for measurement '{}'",
            flux_duration(self.window),
            flux_duration(offset),
            self.measurement
        );

        let mut lines = vec![
            format!("from(bucket: \"{}\")", self.config.bucket),
            format!("  |> range(start: {}, stop: {})", bounds.start, bounds.stop),
            format!(
                "  |> filter(fn: (r) => r[\"_measurement\"] == \"{}\")",
                self.measurement
            ),
            format!(
                "  |> pivot(rowKey: [\"{}\"], columnKey: [\"_field\"], valueColumn: \"_value\")",
                self.config.time_column
            ),
        ];
        if let Some(owner) = &self.owner_uid {
            lines.push(format!("  |> filter(fn: (r) => r[\"owner_uid\"] == \"{owner}\")"));
        }
        if !bounds.filters.is_empty() {
            lines.push(format!("  {}", bounds.filters));
        }
        lines.push(match &self.group_key {
            Some(key) => format!("  |> group(columns: [\"{key}\"])"),
            None => "  |> group()".to_string(),
        });
        lines.push(format!("  |> sort(columns: [\"{}\"])", self.count_column));
        lines.push(format!(
            "  |> aggregateWindow(every: {}, column: \"{}\", fn: count, createEmpty: false, offset: {})",
            flux_duration(self.window),
            self.count_column,
            flux_duration(offset)
        ));

        Ok(lines.join("\n"))
    }
}

/// Flux duration literal, e.g. `1h30m` or `250ms`.
fn flux_duration(duration: Duration) -> String {
    const UNITS: [(&str, i128); 6] = [
        ("h", 3_600_000_000_000),
        ("m", 60_000_000_000),
        ("s", 1_000_000_000),
        ("ms", 1_000_000),
        ("us", 1_000),
        ("ns", 1),
    ];

    let mut rest =
        duration.num_seconds() as i128 * 1_000_000_000 + duration.subsec_nanos() as i128;
    if rest <= 0 {
        return "0s".to_string();
    }

    let mut out = String::new();
    for (unit, nanos) in UNITS {
        let count = rest / nanos;
        if count > 0 {
            out.push_str(&format!("{count}{unit}"));
            rest -= count * nanos;
        }
    }
    out
}
