use crate::{error::CliError, input::FilterBundle};
use clap::Parser;
use commands::Commands;
use planner::{ChartQuery, QueryConfig, RecordQuery};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod input;
mod output;

#[derive(Parser)]
#[command(
    name = "fluxfilter",
    version = "0.1.0",
    about = "Transpile checked filter expressions to Flux"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Logs go to stderr, stdout only carries the output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Transpile { filter } => {
            let bundle = FilterBundle::from_file(&filter)?;
            let fragment = transpiler::transpile(&bundle.filter, &bundle.enums)?;
            println!("{fragment}");
        }
        Commands::Extract { filter, ident } => {
            let bundle = FilterBundle::from_file(&filter)?;
            let value = bundle
                .filter
                .checked_expr
                .as_ref()
                .and_then(|checked| transpiler::extract_const_value(&checked.expr, &ident))
                .ok_or(CliError::IdentNotFound(ident))?;
            println!("{value}");
        }
        Commands::Hijack {
            filter,
            ident,
            replace_ident,
            value,
            transpile,
        } => {
            let mut bundle = FilterBundle::from_file(&filter)?;
            let installed = bundle
                .filter
                .checked_expr
                .as_mut()
                .and_then(|checked| {
                    transpiler::hijack_const_value(&mut checked.expr, &ident, &replace_ident, &value)
                })
                .ok_or_else(|| CliError::IdentNotFound(ident.clone()))?;
            info!(
                "Replaced '{}' with '{}' = \"{}\"",
                ident, replace_ident, installed
            );

            if transpile {
                let fragment = transpiler::transpile(&bundle.filter, &bundle.enums)?;
                println!("{fragment}");
            } else {
                output::print_json(&bundle)?;
            }
        }
        Commands::Query {
            filter,
            measurement,
            sort_key,
            config,
            bucket,
            page_size,
            page_token,
            owner,
        } => {
            let mut query_config = match config {
                Some(path) => QueryConfig::from_file(path)?,
                None => QueryConfig::default(),
            };
            if let Some(bucket) = bucket {
                query_config.bucket = bucket;
            }

            let bundle = FilterBundle::from_file(&filter)?;
            let mut query = RecordQuery::new(query_config, &measurement, &sort_key)
                .page_size(page_size);
            if let Some(token) = page_token {
                query = query.page_token(&token);
            }
            if let Some(owner) = owner {
                query = query.owner(&owner);
            }

            let rendered = query.build(&bundle.filter, &bundle.enums)?;
            output::print_queries(&rendered);
        }
        Commands::Chart {
            filter,
            measurement,
            count_column,
            config,
            group_by,
            window_minutes,
            owner,
        } => {
            let query_config = match config {
                Some(path) => QueryConfig::from_file(path)?,
                None => QueryConfig::default(),
            };

            let bundle = FilterBundle::from_file(&filter)?;
            let mut query = ChartQuery::new(query_config, &measurement, &count_column)
                .window(chrono::Duration::minutes(window_minutes));
            if let Some(key) = group_by {
                query = query.group_by(&key);
            }
            if let Some(owner) = owner {
                query = query.owner(&owner);
            }

            println!("{}", query.build(&bundle.filter, &bundle.enums)?);
        }
        Commands::Demo => {
            output::print_json(&FilterBundle::demo()?)?;
        }
    }

    Ok(())
}
