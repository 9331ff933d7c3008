use std::io;
use std::path::Path;

use anyhow::{anyhow, Context};
use clap::Parser;
use log::LevelFilter;

use passgen::cli::handlers::{self, BatchOptions};
use passgen::cli::{menu, Args, CliCommand};
use passgen::core::Config;
use passgen::system::SystemDesktop;
use passgen::PasswordGenerator;

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    if let Some(log_file) = &config.log_file {
        if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .with_context(|| format!("Failed to open log file {}", log_file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    level.parse().ok()
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let (mut config, config_warnings) = Config::load();
    if let Some(level) = args.log_level.as_deref().and_then(parse_level) {
        config.log_level = level;
    }

    init_logging(&config)?;
    for warning in &config_warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    // Unique batches near their capacity can run for a long time
    ctrlc::set_handler(|| {
        log::info!("Ctrl+C received, exiting");
        std::process::exit(130);
    })
    .context("Failed to set Ctrl+C handler")?;

    let desktop = SystemDesktop::new();
    let mut stdout = io::stdout().lock();

    match args.command {
        Some(CliCommand::Generate { generation, copy }) => {
            let policy = generation.policy(&config);
            let mut generator = PasswordGenerator::new();
            handlers::handle_generate(&mut generator, &policy, copy, &desktop, &mut stdout)?;
        }
        Some(CliCommand::Batch {
            batch,
            output,
            json,
            copy_all,
            open_folder,
        }) => {
            let options = BatchOptions {
                policy: batch.policy(&config),
                output,
                json,
                copy_all,
                open_folder,
            };
            let mut generator = PasswordGenerator::new();
            handlers::handle_batch(&mut generator, &options, &desktop, &mut stdout)?;
        }
        Some(CliCommand::Interactive) | None => {
            drop(stdout);
            menu::run_cli_menu(&config, &desktop).map_err(|e| anyhow!("Interactive menu failed: {}", e))?;
        }
    }

    Ok(())
}
