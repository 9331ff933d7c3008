// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;

use crate::models::{BatchPolicy, GenerationPolicy};

// Configuration for the generator shell
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_count: usize,
    pub default_length: usize,
    pub default_unique: bool,
    pub default_require_all: bool,

    // Export
    pub export_directory: PathBuf,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_count: 100,
            default_length: 5,
            default_unique: true,
            default_require_all: false,

            // Export
            export_directory: crate::utils::default_export_dir(),

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

/// Collects env overrides and the complaints about the ones that were ignored.
///
/// Logging is configured from this very `Config`, so warnings are returned to
/// the caller to be logged once the logger exists.
struct EnvReader<F> {
    lookup: F,
    warnings: Vec<String>,
}

impl<F: Fn(&str) -> Option<String>> EnvReader<F> {
    fn raw(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
    }

    fn parsed<T: FromStr>(&mut self, key: &str) -> Option<T> {
        let val = self.raw(key)?;
        match val.trim().parse() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                self.warnings.push(format!("Ignoring {}={:?}: not a valid value", key, val));
                None
            }
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> (Self, Vec<String>) {
        let mut config = Config::default();
        let mut reader = EnvReader {
            lookup,
            warnings: Vec::new(),
        };

        // Password Generation
        if let Some(count) = reader.parsed("DEFAULT_PASSWORD_COUNT") {
            config.default_count = count;
        }

        if let Some(length) = reader.parsed("DEFAULT_PASSWORD_LENGTH") {
            config.default_length = length;
        }

        if let Some(unique) = reader.parsed("DEFAULT_PASSWORD_UNIQUE") {
            config.default_unique = unique;
        }

        if let Some(require_all) = reader.parsed("DEFAULT_PASSWORD_REQUIRE_ALL") {
            config.default_require_all = require_all;
        }

        // Export
        if let Some(dir) = reader.raw("EXPORT_DIRECTORY") {
            config.export_directory = PathBuf::from(dir);
        }

        // Logging
        if let Some(level) = reader.raw("LOG_LEVEL") {
            match level.parse::<LevelFilter>() {
                Ok(filter) => config.log_level = filter,
                Err(_) => reader.warnings.push(format!(
                    "Unknown log level '{}', keeping {}",
                    level, config.log_level
                )),
            }
        }

        if let Some(file) = reader.raw("LOG_FILE") {
            config.log_file = Some(PathBuf::from(file));
        }

        (config, reader.warnings)
    }

    pub fn default_policy(&self) -> BatchPolicy {
        BatchPolicy::new(
            self.default_count,
            GenerationPolicy::new(self.default_length, self.default_require_all),
            self.default_unique,
        )
    }
}
