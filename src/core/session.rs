// src/core/session.rs
use std::path::{Path, PathBuf};

use crate::utils::summary_line;

/// Shell state between menu actions. The generator core never sees this.
#[derive(Debug, Default, Clone)]
pub struct Session {
    current_results: Vec<String>,
    last_export_path: Option<PathBuf>,
    last_length: Option<usize>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &[String] {
        &self.current_results
    }

    pub fn has_results(&self) -> bool {
        !self.current_results.is_empty()
    }

    pub fn last_length(&self) -> Option<usize> {
        self.last_length
    }

    pub fn last_export_path(&self) -> Option<&Path> {
        self.last_export_path.as_deref()
    }

    /// Replace the results; a previous export no longer matches them.
    pub fn set_results(&mut self, results: Vec<String>, length: usize) {
        self.current_results = results;
        self.last_length = Some(length);
        self.last_export_path = None;
    }

    pub fn record_export(&mut self, path: PathBuf) {
        self.last_export_path = Some(path);
    }

    pub fn clear(&mut self) {
        self.current_results.clear();
        self.last_length = None;
        self.last_export_path = None;
    }

    /// Summary header followed by one password per line.
    pub fn rendered(&self) -> String {
        match self.last_length {
            Some(length) if self.has_results() => {
                let mut out = summary_line(self.current_results.len(), length);
                out.push('\n');
                for password in &self.current_results {
                    out.push('\n');
                    out.push_str(password);
                }
                out
            }
            _ => String::new(),
        }
    }

    pub fn copy_last(&self) -> Option<String> {
        last_password(&self.rendered()).map(str::to_string)
    }

    pub fn copy_all(&self) -> Option<String> {
        if self.has_results() {
            Some(self.current_results.join("\n"))
        } else {
            None
        }
    }
}

/// Last line of rendered output, skipping a trailing summary line.
pub fn last_password(rendered: &str) -> Option<&str> {
    let lines: Vec<&str> = rendered.trim().lines().collect();
    let last = *lines.last()?;
    if last.starts_with("Generated:") && lines.len() > 1 {
        Some(lines[lines.len() - 2])
    } else {
        Some(last)
    }
}
