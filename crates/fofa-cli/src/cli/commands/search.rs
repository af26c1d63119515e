//! `fofa search` - Search FOFA's asset database.

use anyhow::Result;
use colored::Colorize;
use fofa::{Field, FieldMapping, FofaError, Record, SearchResults};
use std::io::Write;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::debug;

use super::Context;
use crate::cli::args::SearchArgs;
use crate::output::OutputFormat;

/// Widest title shown in the pretty table
const TITLE_WIDTH: usize = 40;

pub async fn execute(ctx: Context, args: SearchArgs) -> Result<()> {
    let client = ctx.client()?;
    let mapping = FieldMapping::parse(&args.fields);
    debug!(fields = %mapping, page = args.page, "searching");

    let request = client
        .search()
        .query(&args.query)
        .fields(mapping.clone())
        .page(args.page);

    if args.raw {
        let body = request.raw().await?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&body)?;
        writeln!(stdout)?;
        return Ok(());
    }

    let results = match request.send().await {
        Ok(results) => results,
        Err(FofaError::NoData) => {
            println!("{}", format!("No results for {}", args.query).dimmed());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let columns = display_columns(&mapping);

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&results)?);
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.write_record(columns.iter().map(Field::as_str))?;
            for record in &results.records {
                writer.write_record(row(record, &columns))?;
            }
            writer.flush()?;
        }
        OutputFormat::Pretty => {
            print_search_pretty(&results, &columns, &args);
        }
    }

    Ok(())
}

/// Requested fields that map onto record attributes, in request order
fn display_columns(mapping: &FieldMapping) -> Vec<Field> {
    mapping
        .fields()
        .iter()
        .filter(|f| f.is_known())
        .cloned()
        .collect()
}

fn row<'r>(record: &'r Record, columns: &[Field]) -> Vec<&'r str> {
    columns
        .iter()
        .map(|f| record.get(f).unwrap_or_default())
        .collect()
}

fn print_search_pretty(results: &SearchResults, columns: &[Field], args: &SearchArgs) {
    // Header
    println!("{} {}", "Total Results:".bold(), results.size.to_string().cyan());
    println!("{} {}", "Query:".bold(), args.query.dimmed());
    println!();

    if columns.is_empty() {
        println!(
            "{}",
            "None of the requested fields have a column here; use --raw to see them".dimmed()
        );
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(|f| f.as_str().to_uppercase()));
    for record in &results.records {
        builder.push_record(row(record, columns).into_iter().zip(columns).map(|(value, field)| {
            if *field == Field::Title {
                value.chars().take(TITLE_WIDTH).collect()
            } else {
                value.to_string()
            }
        }));
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    println!("{table}");

    // Tips
    println!();
    if let Some(tip) = page_tip(args.page, results.size, results.len()) {
        println!("{}", tip.dimmed());
    }
}

/// Hint at the next page when the service reports more matches than shown
fn page_tip(page: u32, size: u64, shown: usize) -> Option<String> {
    let shown = u64::try_from(shown).unwrap_or(u64::MAX);
    if shown == 0 || size <= shown {
        return None;
    }
    Some(format!(
        "Tip: Use --page {} to see more results (page {} of {})",
        page.saturating_add(1),
        page,
        size.div_ceil(shown)
    ))
}
