// src/utils/format.rs
use chrono::{DateTime, Local};

// One-line header shown above a rendered batch
pub fn summary_line(count: usize, length: usize) -> String {
    format!("Generated: {} passwords (length = {}).", count, length)
}

// Default file name for a CSV export
pub fn suggested_export_filename(now: DateTime<Local>) -> String {
    format!("passwords_{}.csv", now.format("%Y%m%d_%H%M%S"))
}
