// src/exporters/csv.rs
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use thiserror::Error;

pub const CSV_HEADER: &str = "senha";

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Nothing to export. Generate passwords first.")]
    NothingToExport,
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Single-column CSV writer: a `senha` header, then one password per row.
pub struct CsvExporter {
    line_ending: &'static str,
}

impl CsvExporter {
    pub fn new() -> Self {
        Self {
            line_ending: LINE_ENDING,
        }
    }

    pub fn with_line_ending(line_ending: &'static str) -> Self {
        Self { line_ending }
    }

    pub fn write<W: Write>(&self, mut out: W, passwords: &[String]) -> Result<usize> {
        write!(out, "{}{}", CSV_HEADER, self.line_ending)?;
        // Alphabet is alphanumeric, so rows never need quoting
        for password in passwords {
            write!(out, "{}{}", password, self.line_ending)?;
        }
        out.flush()?;
        Ok(passwords.len())
    }

    pub fn export(&self, path: &Path, passwords: &[String]) -> Result<usize> {
        if passwords.is_empty() {
            return Err(ExportError::NothingToExport);
        }

        let file = File::create(path)?;
        let count = self.write(BufWriter::new(file), passwords)?;
        info!("Exported {} passwords to {}", count, path.display());
        Ok(count)
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}
