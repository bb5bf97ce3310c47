use bingoduel_core::{Card, CellPosition, CellValue, Line, MarkedCells};
use bingoduel_matcher::{
    LineCompletion, LookupTable, check_completed_lines, generate_lines, generate_lookup_table,
    generate_position_map, is_line_complete,
};
use serde::Serialize;

use super::print_indented;
use crate::error::CliError;

#[derive(Debug, clap::Args)]
pub(crate) struct LinesArgs {
    /// The card: 25 numbers, rows separated by `/` or newlines.
    #[arg(long, value_name = "CARD")]
    card: Card,

    /// Marked values, separated by commas or whitespace.
    #[arg(long, value_name = "IDS", default_value = "")]
    marks: String,

    /// Another card to map this card's cells onto.
    #[arg(long, value_name = "CARD")]
    against: Option<Card>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct LineReport {
    line: String,
    values: [CellValue; 5],
    complete: bool,
}

#[derive(Debug, Serialize)]
struct LinesReport {
    lines: Vec<LineReport>,
    completed_lines: usize,
    letters: String,
    off_card: Vec<CellValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lookup: Option<Vec<Option<CellPosition>>>,
}

pub(crate) fn run(args: &LinesArgs) -> Result<(), CliError> {
    let positions = generate_position_map(&args.card)?;
    let marked = parse_marks(&args.marks)?;
    let off_card: Vec<CellValue> = marked
        .to_sorted_vec()
        .into_iter()
        .filter(|value| !positions.contains(*value))
        .collect();
    if !off_card.is_empty() {
        log::warn!("{} marked values are not on the card", off_card.len());
    }

    let mut lines = Vec::with_capacity(Line::ALL.len());
    for (line, values) in Line::ALL.into_iter().zip(generate_lines(&args.card)) {
        lines.push(LineReport {
            line: line.to_string(),
            values,
            complete: is_line_complete(&values, &marked)?,
        });
    }
    let completion = check_completed_lines(&args.card, &marked);
    let lookup = args
        .against
        .as_ref()
        .map(|other| generate_lookup_table(&args.card, other))
        .transpose()?;

    if args.json {
        let report = LinesReport {
            lines,
            completed_lines: completion.completed_lines(),
            letters: completion.word(),
            off_card,
            lookup: lookup.map(|table| table.entries().map(|(_, target)| target).collect()),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&lines, &completion, &off_card, lookup.as_ref());
    }
    Ok(())
}

fn parse_marks(text: &str) -> Result<MarkedCells, CliError> {
    let ids = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty());
    Ok(MarkedCells::try_from_ids(ids)?)
}

fn print_report(
    lines: &[LineReport],
    completion: &LineCompletion,
    off_card: &[CellValue],
    lookup: Option<&LookupTable>,
) {
    println!("Lines:");
    for report in lines {
        let values = report.values.map(|v| format!("{v:>2}")).join(" ");
        let flag = if report.complete { "complete" } else { "-" };
        println!("  {:<13} {values}  {flag}", report.line);
    }
    println!();
    println!("Completed:");
    println!("  lines: {}", completion.completed_lines());
    println!("  letters: {}", completion.word());
    if !off_card.is_empty() {
        let values = off_card.iter().map(ToString::to_string).collect::<Vec<_>>();
        println!("  not on card: {}", values.join(", "));
    }

    if let Some(lookup) = lookup {
        println!();
        println!("Lookup ({} shared):", lookup.shared_count());
        print_indented(&lookup.to_string());
    }
}
