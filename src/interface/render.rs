use std::fmt::Write as _;
use std::io;

use crate::cli::OutputFormat;
use crate::error::{Result, TrackerError};
use crate::models::{FoodEntry, FoodField};
use crate::state::TrackerSession;

const EDIT_MARKER: &str = "*";

/// Format the ledger as an aligned text table with a totals row.
///
/// The row being edited is marked with `*`.
pub fn format_table(session: &TrackerSession) -> String {
    let entries = session.entries();
    if entries.is_empty() {
        return "No foods recorded yet.\n".to_string();
    }

    let name_width = entries
        .iter()
        .map(|e| e.name.chars().count())
        .chain([FoodField::Name.label().len(), "Total".len()])
        .max()
        .unwrap_or(10);
    let widths: Vec<usize> = FoodField::NUMERIC.iter().map(|f| f.label().len()).collect();

    let mut out = String::new();

    let _ = write!(out, "{:>4}  {:<width$}", "#", FoodField::Name.label(), width = name_width);
    for field in FoodField::NUMERIC {
        let _ = write!(out, "  {}", field.label());
    }
    out.push('\n');

    let rule_len = 6 + name_width + widths.iter().map(|w| w + 2).sum::<usize>();
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');

    for (i, entry) in entries.iter().enumerate() {
        let marker = if session.active_index() == Some(i) { EDIT_MARKER } else { " " };
        let _ = write!(out, "{}{:>3}  {:<width$}", marker, i + 1, entry.name, width = name_width);
        push_amounts(&mut out, entry, &widths);
        out.push('\n');
    }

    out.push_str(&"-".repeat(rule_len));
    out.push('\n');

    let totals = session.totals();
    let _ = write!(out, "{:>4}  {:<width$}", "", "Total", width = name_width);
    for (value, width) in [totals.calories, totals.protein, totals.carbohydrate, totals.fat]
        .into_iter()
        .zip(&widths)
    {
        let _ = write!(out, "  {:>width$}", value, width = *width);
    }
    out.push('\n');

    if let Some(index) = session.active_index() {
        let _ = writeln!(out, "{} editing row {}", EDIT_MARKER, index + 1);
    }

    out
}

fn push_amounts(out: &mut String, entry: &FoodEntry, widths: &[usize]) {
    for (field, width) in FoodField::NUMERIC.into_iter().zip(widths) {
        let _ = write!(out, "  {:>width$}", entry.amount(field).unwrap_or_default(), width = *width);
    }
}

/// Write entries as CSV with a header row.
pub fn write_csv<W: io::Write>(writer: W, entries: &[FoodEntry]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for entry in entries {
        csv_writer.serialize(entry)?;
    }
    if entries.is_empty() {
        csv_writer.write_record(FoodField::ALL.iter().map(|f| f.key()))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render the session in the requested format.
pub fn render_session(session: &TrackerSession, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(session)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&session.snapshot())?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            write_csv(&mut buf, session.entries())?;
            String::from_utf8(buf)
                .map_err(|e| TrackerError::InvalidInput(format!("CSV output is not UTF-8: {}", e)))
        }
    }
}

/// Print the session to stdout.
pub fn display_session(session: &TrackerSession, format: OutputFormat) -> Result<()> {
    print!("{}", render_session(session, format)?);
    Ok(())
}
