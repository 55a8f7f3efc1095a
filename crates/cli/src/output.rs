use crate::error::CliError;
use planner::RenderedQuery;
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value).map_err(CliError::JsonSerialize)?;
    println!("{json}");
    Ok(())
}

pub fn print_queries(rendered: &RenderedQuery) {
    println!("// records (page size {})", rendered.page_size);
    println!("{}", rendered.query);
    println!();
    println!("// total");
    println!("{}", rendered.total_query);
}
