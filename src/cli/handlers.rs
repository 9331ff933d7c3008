// src/cli/handlers.rs
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use console::style;
use log::{info, warn};
use rand_core::{CryptoRng, RngCore};

use crate::cli::input::{parse_count, parse_length, InputError};
use crate::core::Session;
use crate::exporters::CsvExporter;
use crate::generators::{GeneratorError, PasswordGenerator};
use crate::models::{BatchPolicy, BatchReport, GenerationPolicy};
use crate::system::Desktop;
use crate::utils::summary_line;

// Options for a non-interactive batch run
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub policy: BatchPolicy,
    pub output: Option<PathBuf>,
    pub json: bool,
    pub copy_all: bool,
    pub open_folder: bool,
}

pub fn handle_generate<R, W>(
    generator: &mut PasswordGenerator<R>,
    policy: &GenerationPolicy,
    copy: bool,
    desktop: &dyn Desktop,
    out: &mut W,
) -> anyhow::Result<String>
where
    R: RngCore + CryptoRng,
    W: Write,
{
    let password = generator.generate_password(policy)?;
    writeln!(out, "{}", password)?;

    if copy {
        desktop
            .copy_to_clipboard(&password)
            .context("Failed to copy password to clipboard")?;
        writeln!(out, "{}", style("Password copied!").green())?;
    }
    Ok(password)
}

pub fn handle_batch<R, W>(
    generator: &mut PasswordGenerator<R>,
    options: &BatchOptions,
    desktop: &dyn Desktop,
    out: &mut W,
) -> anyhow::Result<Vec<String>>
where
    R: RngCore + CryptoRng,
    W: Write,
{
    let passwords = generator.generate_batch(&options.policy)?.into_vec();

    if options.json {
        let report = BatchReport::new(&options.policy, passwords.clone());
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", style(summary_line(passwords.len(), options.policy.generation.length)).bold())?;
        writeln!(out)?;
        for password in &passwords {
            writeln!(out, "{}", password)?;
        }
    }

    if let Some(path) = &options.output {
        CsvExporter::new()
            .export(path, &passwords)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        // Keep stdout clean for --json consumers
        eprintln!("{} {}", style("Saved:").green(), path.display());

        if options.open_folder {
            open_export_folder(desktop, path);
        }
    }

    if options.copy_all {
        desktop
            .copy_to_clipboard(&passwords.join("\n"))
            .context("Failed to copy passwords to clipboard")?;
        eprintln!("{}", style("All passwords copied!").green());
    }

    Ok(passwords)
}

/// Open the folder holding `path`. Failures are logged, never fatal.
pub fn open_export_folder(desktop: &dyn Desktop, path: &Path) {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let folder = absolute.parent().unwrap_or(Path::new("."));
    if let Err(e) = desktop.open_folder(folder) {
        warn!("Could not open {}: {}", folder.display(), e);
    }
}

/// Why a menu generation request was refused.
#[derive(Debug, thiserror::Error)]
pub enum GenerateRequestError {
    #[error("{0}")]
    Input(#[from] InputError),

    #[error("Error while generating: {0}")]
    Generator(#[from] GeneratorError),
}

/// Parse the raw menu fields, generate, and store the batch in the session.
pub fn generate_into_session<R: RngCore + CryptoRng>(
    session: &mut Session,
    generator: &mut PasswordGenerator<R>,
    raw_count: &str,
    raw_length: &str,
    unique: bool,
    require_all: bool,
) -> Result<(), GenerateRequestError> {
    let count = parse_count(raw_count)?;
    let length = parse_length(raw_length)?;

    let policy = BatchPolicy::new(count, GenerationPolicy::new(length, require_all), unique);
    let passwords = generator.generate_batch(&policy)?.into_vec();
    session.set_results(passwords, length);
    Ok(())
}

pub fn save_session(session: &mut Session, path: PathBuf) -> anyhow::Result<usize> {
    let count = CsvExporter::new().export(&path, session.results())?;
    info!("Saved {} passwords", count);
    session.record_export(path);
    Ok(count)
}

// Status line for the menu
pub fn copy_last(session: &Session, desktop: &dyn Desktop) -> anyhow::Result<&'static str> {
    match session.copy_last() {
        Some(password) => {
            desktop.copy_to_clipboard(&password)?;
            Ok("Last password copied!")
        }
        None => Ok("Nothing to copy."),
    }
}

pub fn copy_all(session: &Session, desktop: &dyn Desktop) -> anyhow::Result<&'static str> {
    match session.copy_all() {
        Some(all) => {
            desktop.copy_to_clipboard(&all)?;
            Ok("All passwords copied!")
        }
        None => Ok("Nothing to copy. Generate passwords first."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PasswordBatch;
    use crate::system::fake::RecordingDesktop;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn seeded() -> PasswordGenerator<ChaCha20Rng> {
        PasswordGenerator::with_rng(ChaCha20Rng::seed_from_u64(2024))
    }

    fn batch_options(count: usize, length: usize, unique: bool) -> BatchOptions {
        BatchOptions {
            policy: BatchPolicy::new(count, GenerationPolicy::new(length, false), unique),
            output: None,
            json: false,
            copy_all: false,
            open_folder: false,
        }
    }

    #[test]
    fn generate_prints_and_copies() {
        let desktop = RecordingDesktop::default();
        let mut out = Vec::new();
        let password = handle_generate(
            &mut seeded(),
            &GenerationPolicy::new(10, true),
            true,
            &desktop,
            &mut out,
        )
        .unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with(&password));
        assert_eq!(desktop.clipboard.borrow().as_slice(), &[password]);
    }

    #[test]
    fn generate_propagates_policy_errors() {
        let desktop = RecordingDesktop::default();
        let mut out = Vec::new();
        let err = handle_generate(
            &mut seeded(),
            &GenerationPolicy::new(2, true),
            false,
            &desktop,
            &mut out,
        )
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<GeneratorError>(),
            Some(&GeneratorError::InsufficientLengthForPolicy { length: 2 })
        );
        assert!(out.is_empty());
    }

    #[test]
    fn batch_renders_summary_and_lines() {
        let desktop = RecordingDesktop::default();
        let mut out = Vec::new();
        let passwords = handle_batch(&mut seeded(), &batch_options(4, 6, false), &desktop, &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = printed.lines().collect();
        assert!(lines[0].contains("Generated: 4 passwords (length = 6)."));
        assert_eq!(lines[1], "");
        assert_eq!(&lines[2..], passwords.iter().map(String::as_str).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn batch_json_report() {
        let desktop = RecordingDesktop::default();
        let mut out = Vec::new();
        let mut options = batch_options(3, 8, true);
        options.json = true;
        handle_batch(&mut seeded(), &options, &desktop, &mut out).unwrap();

        let report: BatchReport = serde_json::from_slice(&out).unwrap();
        assert_eq!(report.count, 3);
        assert_eq!(report.length, 8);
        assert!(report.unique);
        assert_eq!(report.passwords.len(), 3);
    }

    #[test]
    fn batch_exports_copies_and_opens_folder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.csv");
        let desktop = RecordingDesktop::default();
        let mut out = Vec::new();
        let mut options = batch_options(5, 4, true);
        options.output = Some(path.clone());
        options.copy_all = true;
        options.open_folder = true;

        let passwords = handle_batch(&mut seeded(), &options, &desktop, &mut out).unwrap();

        let csv = std::fs::read_to_string(&path).unwrap();
        assert_eq!(csv.lines().next(), Some("senha"));
        assert_eq!(csv.lines().skip(1).collect::<Vec<_>>(), passwords);
        assert_eq!(desktop.clipboard.borrow()[0], passwords.join("\n"));
        assert_eq!(desktop.opened.borrow()[0], dir.path());
    }

    #[test]
    fn menu_flow_generate_save_copy_clear() {
        let dir = tempfile::tempdir().unwrap();
        let desktop = RecordingDesktop::default();
        let mut session = Session::new();
        let mut generator = seeded();

        generate_into_session(&mut session, &mut generator, "20", "", true, true).unwrap();
        assert_eq!(session.results().len(), 20);
        assert_eq!(session.last_length(), Some(12));

        let path = dir.path().join("menu.csv");
        assert_eq!(save_session(&mut session, path.clone()).unwrap(), 20);
        assert_eq!(session.last_export_path(), Some(path.as_path()));

        assert_eq!(copy_last(&session, &desktop).unwrap(), "Last password copied!");
        assert_eq!(desktop.clipboard.borrow()[0], session.results()[19]);

        assert_eq!(copy_all(&session, &desktop).unwrap(), "All passwords copied!");
        assert_eq!(desktop.clipboard.borrow()[1], session.results().join("\n"));

        session.clear();
        assert_eq!(copy_last(&session, &desktop).unwrap(), "Nothing to copy.");
        assert_eq!(
            copy_all(&session, &desktop).unwrap(),
            "Nothing to copy. Generate passwords first."
        );
        assert!(save_session(&mut session, dir.path().join("empty.csv")).is_err());
    }

    #[test]
    fn menu_generate_reports_bad_input() {
        let mut session = Session::new();
        let mut generator = seeded();

        let err = generate_into_session(&mut session, &mut generator, "lots", "5", true, false).unwrap_err();
        assert_eq!(err.to_string(), "The count must be an integer between 1 and 10,000.");

        let err = generate_into_session(&mut session, &mut generator, "100", "1", true, false).unwrap_err();
        assert!(matches!(
            err,
            GenerateRequestError::Generator(GeneratorError::InfeasibleUniqueRequest { requested: 100, .. })
        ));
        assert!(!session.has_results());
    }

    #[test]
    fn unique_session_results_are_distinct() {
        let mut session = Session::new();
        generate_into_session(&mut session, &mut seeded(), "50", "1", true, false).unwrap();
        let batch = PasswordBatch::Distinct(session.results().iter().cloned().collect());
        assert_eq!(batch.len(), 50);
    }
}
