//! CSV output with a header fixed from the first record

use std::io::Write;

use csv::Writer;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::flatten::cell_text;

/// CSV sink that locks its header to the first record's columns.
///
/// The header row is written exactly once, when the first record arrives.
/// Columns missing from a later record render as empty cells; columns that
/// only appear in later records are dropped.
pub struct CsvSink<W: Write> {
    writer: Writer<W>,
    header: Option<Vec<String>>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: Writer::from_writer(inner),
            header: None,
        }
    }

    /// Write one flattened record as a row
    pub fn write_record(&mut self, record: &Map<String, Value>) -> Result<()> {
        let first = self.header.is_none();
        let header = self
            .header
            .get_or_insert_with(|| record.keys().cloned().collect());

        if first {
            self.writer.write_record(header.iter())?;
        }

        let row: Vec<String> = header
            .iter()
            .map(|column| cell_text(record.get(column)))
            .collect();
        self.writer.write_record(&row)?;

        Ok(())
    }

    /// Flush buffered rows to the underlying writer
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn render(records: &[Map<String, Value>]) -> String {
        let mut sink = CsvSink::new(Vec::new());
        for rec in records {
            sink.write_record(rec).unwrap();
        }
        sink.writer.flush().unwrap();
        String::from_utf8(sink.writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_header_comes_from_first_record() {
        let a = record(json!({"id": 1, "owner.login": "x"}));
        let b = record(json!({"id": 2, "owner.login": "y", "topics": "[\"a\",\"b\"]"}));

        let out = render(&[a, b]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines, vec!["id,owner.login", "1,x", "2,y"]);
    }

    #[test]
    fn test_missing_column_renders_empty() {
        let a = record(json!({"id": 1, "description": "full"}));
        let b = record(json!({"id": 2}));

        let out = render(&[a, b]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines, vec!["id,description", "1,full", "2,"]);
    }

    #[test]
    fn test_header_order_follows_record_key_order() {
        let a = record(json!({"z": 1, "a": 2, "m": 3}));

        let out = render(&[a]);

        assert!(out.starts_with("z,a,m\n"));
    }

    #[test]
    fn test_no_records_writes_nothing() {
        let out = render(&[]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let a = record(json!({"description": "one, two", "id": 5}));

        let out = render(&[a]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[1], "\"one, two\",5");
    }

    #[test]
    fn test_null_cells_render_empty() {
        let a = record(json!({"id": 1, "homepageUrl": null}));

        let out = render(&[a]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[1], "1,");
    }
}
