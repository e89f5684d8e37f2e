//! Table output formatting

use serde_json::{Map, Value};
use tabled::builder::Builder;
use tabled::settings::{Alignment, Modify, Style, object::Rows};

use crate::flatten::cell_text;

/// Render flattened records as a table.
///
/// Columns come from the first record, matching the CSV sink's
/// header-fixing behavior.
pub fn format_table(records: &[Map<String, Value>]) -> String {
    let Some(first) = records.first() else {
        return "No results found.".to_string();
    };
    let header: Vec<String> = first.keys().cloned().collect();

    let mut builder = Builder::default();
    builder.push_record(header.iter().cloned());
    for record in records {
        builder.push_record(header.iter().map(|column| cell_text(record.get(column))));
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}
