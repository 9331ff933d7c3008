// src/cli/menu.rs
use std::error::Error;
use std::path::PathBuf;

use console::style;
use inquire::{Confirm, InquireError, Select, Text};

use crate::cli::handlers;
use crate::core::{Config, Session};
use crate::generators::PasswordGenerator;
use crate::system::Desktop;
use crate::utils::suggested_export_filename;

const GENERATE: &str = "🔐  Generate";
const SAVE_CSV: &str = "💾  Save CSV...";
const OPEN_FOLDER: &str = "📂  Open folder";
const CLEAR: &str = "🧹  Clear";
const COPY_LAST: &str = "📋  Copy last";
const COPY_ALL: &str = "📋  Copy all";
const EXIT: &str = "❌  Exit";

// Ok(None) when the user backed out with Esc or Ctrl+C
fn prompt_or_exit<T>(result: Result<T, InquireError>) -> Result<Option<T>, InquireError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e),
    }
}

pub fn run_cli_menu(config: &Config, desktop: &dyn Desktop) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║         🔐 PASSWORD GENERATOR        ║");
    println!("╚══════════════════════════════════════╝");

    let mut session = Session::new();
    let mut generator = PasswordGenerator::new();

    // Form fields keep their last values between generations
    let mut raw_count = config.default_count.to_string();
    let mut raw_length = config.default_length.to_string();
    let mut unique = config.default_unique;
    let mut require_all = config.default_require_all;

    loop {
        let options = vec![GENERATE, SAVE_CSV, OPEN_FOLDER, CLEAR, COPY_LAST, COPY_ALL, EXIT];
        let selection = Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .with_page_size(10)
            .prompt();

        let Some(selection) = prompt_or_exit(selection)? else {
            break;
        };

        match selection {
            GENERATE => {
                let Some(count) = prompt_or_exit(
                    Text::new("Count (1-10,000):").with_default(&raw_count).prompt(),
                )?
                else {
                    continue;
                };
                let Some(length) = prompt_or_exit(
                    Text::new("Length (1-64):").with_default(&raw_length).prompt(),
                )?
                else {
                    continue;
                };
                let Some(u) = prompt_or_exit(
                    Confirm::new("Avoid repeats (unique passwords)?")
                        .with_default(unique)
                        .prompt(),
                )?
                else {
                    continue;
                };
                let Some(r) = prompt_or_exit(
                    Confirm::new("Require at least 1 uppercase, 1 lowercase and 1 digit?")
                        .with_default(require_all)
                        .prompt(),
                )?
                else {
                    continue;
                };
                raw_count = count;
                raw_length = length;
                unique = u;
                require_all = r;

                match handlers::generate_into_session(
                    &mut session,
                    &mut generator,
                    &raw_count,
                    &raw_length,
                    unique,
                    require_all,
                ) {
                    Ok(()) => println!("\n{}\n", session.rendered()),
                    Err(e) => println!("❌ {}", e),
                }
            }
            SAVE_CSV => {
                if !session.has_results() {
                    println!("Nothing to save. Generate passwords first.");
                    continue;
                }

                let suggested = config
                    .export_directory
                    .join(suggested_export_filename(chrono::Local::now()));
                let Some(path) = prompt_or_exit(
                    Text::new("Choose where to save:")
                        .with_default(&suggested.to_string_lossy())
                        .prompt(),
                )?
                else {
                    continue;
                };
                let path = path.trim();
                if path.is_empty() {
                    continue;
                }

                let mut path = PathBuf::from(path);
                if path.extension().is_none() {
                    path.set_extension("csv");
                }
                match handlers::save_session(&mut session, path.clone()) {
                    Ok(_) => {
                        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
                        println!("{} {}", style("File saved:").green(), name);
                    }
                    Err(e) => println!("❌ Error while saving: {:#}", e),
                }
            }
            OPEN_FOLDER => match session.last_export_path() {
                Some(path) => handlers::open_export_folder(desktop, path),
                None => println!("No file saved yet."),
            },
            CLEAR => {
                session.clear();
                println!("Cleared.");
            }
            COPY_LAST => match handlers::copy_last(&session, desktop) {
                Ok(message) => println!("{}", message),
                Err(e) => println!("❌ {:#}", e),
            },
            COPY_ALL => match handlers::copy_all(&session, desktop) {
                Ok(message) => println!("{}", message),
                Err(e) => println!("❌ {:#}", e),
            },
            _ => break,
        }
    }

    Ok(())
}
