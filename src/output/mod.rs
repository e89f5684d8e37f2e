//! Output sinks for exported records
//!
//! All three formats share the same header semantics: the column set is
//! fixed by the first successfully flattened record.

pub mod csv;
pub mod json;
pub mod table;

pub use csv::CsvSink;
