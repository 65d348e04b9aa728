//! Command-line interface entry point for `grade-card`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use commands::policy_from;
use grade_card::config::Config;
use grade_card::info;
use grade_card::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // Determine effective runtime log level: CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| parse_level(&config.logging.level))
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    // Verbose: enable if CLI flag OR config has verbose=true
    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // Initialize file logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    // Handle subcommands
    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Cie {
            marks_file,
            subject,
        } => {
            commands::cie::run(&marks_file, subject.as_deref());
        }
        Command::Grade {
            marks_file,
            subject,
            halved_scale,
        } => {
            commands::grade::run(&marks_file, subject.as_deref(), policy_from(halved_scale));
        }
        Command::Gpa {
            marks_file,
            halved_scale,
        } => {
            commands::gpa::run(&marks_file, policy_from(halved_scale));
        }
        Command::See {
            marks_file,
            subject,
            cie,
            category,
            lab_exam,
            halved_scale,
        } => {
            let request = commands::see::SeeRequest {
                marks_file: marks_file.as_deref(),
                subject: subject.as_deref(),
                cie,
                category: category.as_deref(),
                lab_exam,
            };
            commands::see::run(&request, policy_from(halved_scale));
        }
        Command::Report {
            marks_file,
            format,
            output,
            halved_scale,
        } => {
            commands::report::run(
                &marks_file,
                &format,
                output.as_deref(),
                policy_from(halved_scale),
                &config,
            );
        }
    }
}

fn parse_level(val: &str) -> Option<Level> {
    match val.to_ascii_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        _ => None,
    }
}
