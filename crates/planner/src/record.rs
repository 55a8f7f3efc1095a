use crate::{config::QueryConfig, error::Result, range::RangeBounds, token::PageToken};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use filter_syntax::{EnumLookup, Filter};
use tracing::debug;

/// Range start used when neither the filter nor a page token narrows it.
pub const START_OF_TIME: &str = "0001-01-01T00:00:00Z";

/// A page of records plus the query counting every matching record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedQuery {
    pub query: String,
    pub total_query: String,
    pub page_size: usize,
}

/// Builder for the paged record query over one measurement.
#[derive(Debug, Clone)]
pub struct RecordQuery {
    config: QueryConfig,
    measurement: String,
    sort_key: String,
    owner_uid: Option<String>,
    page_size: usize,
    page_token: Option<String>,
}

impl RecordQuery {
    pub fn new(config: QueryConfig, measurement: &str, sort_key: &str) -> Self {
        RecordQuery {
            config,
            measurement: measurement.to_string(),
            sort_key: sort_key.to_string(),
            owner_uid: None,
            page_size: 0,
            page_token: None,
        }
    }

    /// Restricts records to those owned by `owner_uid`.
    pub fn owner(mut self, owner_uid: &str) -> Self {
        self.owner_uid = Some(owner_uid.to_string());
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// An empty token is the same as no token.
    pub fn page_token(mut self, token: &str) -> Self {
        self.page_token = (!token.is_empty()).then(|| token.to_string());
        self
    }

    pub fn build(&self, filter: &Filter, enums: &dyn EnumLookup) -> Result<RenderedQuery> {
        self.build_at(filter, enums, Utc::now())
    }

    /// Renders both queries with `now` as the default range stop.
    pub fn build_at(
        &self,
        filter: &Filter,
        enums: &dyn EnumLookup,
        now: DateTime<Utc>,
    ) -> Result<RenderedQuery> {
        let page_size = self.config.page_size(self.page_size);

        let fragment = transpiler::transpile(filter, enums)?;
        let mut bounds = RangeBounds::split(&fragment, START_OF_TIME, &format_time(now));

        // the cursor wins over any start bound in the filter
        if let Some(token) = &self.page_token {
            let token = PageToken::decode(token)?;
            bounds.start = format_time(token.time + Duration::nanoseconds(1));
        }
        debug!(
            "Query range is {} to {} for measurement '{}'",
            bounds.start, bounds.stop, self.measurement
        );

        let base = self.render_base(&bounds);
        let query = format!(
            "{base}\n  |> group()\n  |> sort(columns: [\"{}\"])\n  |> limit(n: {page_size})",
            self.sort_key
        );
        let total_query = format!(
            "{base}\n  |> group()\n  |> count(column: \"{}\")",
            self.sort_key
        );

        Ok(RenderedQuery {
            query,
            total_query,
            page_size,
        })
    }

    fn render_base(&self, bounds: &RangeBounds) -> String {
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

        lines.join("\n")
    }
}

pub(crate) fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
