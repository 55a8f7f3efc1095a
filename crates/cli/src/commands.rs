use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Transpile a checked filter to a Flux fragment
    Transpile {
        #[arg(long, help = "Filter file path (JSON with `filter` and `enums`)")]
        filter: String,
    },
    /// Print the string value an identifier is compared against
    Extract {
        #[arg(long, help = "Filter file path")]
        filter: String,

        #[arg(long, help = "Snake-cased identifier to look for")]
        ident: String,
    },
    /// Rename an identifier and overwrite the value it is compared against
    Hijack {
        #[arg(long, help = "Filter file path")]
        filter: String,

        #[arg(long, help = "Snake-cased identifier to replace")]
        ident: String,

        #[arg(long, help = "New identifier name")]
        replace_ident: String,

        #[arg(long, help = "New string value")]
        value: String,

        #[arg(
            long,
            help = "Transpile the rewritten filter instead of printing it as JSON"
        )]
        transpile: bool,
    },
    /// Render the paged record query and its total-count query
    Query {
        #[arg(long, help = "Filter file path")]
        filter: String,

        #[arg(long, help = "Measurement to read records from")]
        measurement: String,

        #[arg(long, help = "Column the records are sorted by")]
        sort_key: String,

        #[arg(long, help = "Query config file path (JSON)")]
        config: Option<String>,

        #[arg(long, help = "Bucket name, overrides the config file")]
        bucket: Option<String>,

        #[arg(long, default_value_t = 0, help = "Records per page, 0 for the default")]
        page_size: usize,

        #[arg(long, help = "Token returned with the previous page")]
        page_token: Option<String>,

        #[arg(long, help = "Only return records of this owner")]
        owner: Option<String>,
    },
    /// Render a windowed trigger-count query for charts
    Chart {
        #[arg(long, help = "Filter file path")]
        filter: String,

        #[arg(long, help = "Measurement to read records from")]
        measurement: String,

        #[arg(long, help = "Column counted in each window")]
        count_column: String,

        #[arg(long, help = "Query config file path (JSON)")]
        config: Option<String>,

        #[arg(long, help = "Column producing one series per value")]
        group_by: Option<String>,

        #[arg(long, default_value_t = 60, help = "Window size in minutes")]
        window_minutes: i64,

        #[arg(long, help = "Only count records of this owner")]
        owner: Option<String>,
    },
    /// Print a sample filter file
    Demo,
}
