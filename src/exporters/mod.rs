// src/exporters/mod.rs

pub mod csv;

pub use csv::{CsvExporter, ExportError};
