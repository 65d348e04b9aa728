//! CLI argument definitions for `grade-card`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use grade_card::config::ConfigOverrides;
use grade_card::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `file`, `marks_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Compute CIE scores from a marks file.
    Cie {
        /// Path to a marks TOML file
        #[arg(value_name = "FILE")]
        marks_file: PathBuf,

        /// Restrict output to one subject id
        #[arg(long, value_name = "ID")]
        subject: Option<String>,
    },
    /// Compute final grades from a marks file.
    ///
    /// Subjects without semester-end marks are reported as ungraded.
    Grade {
        /// Path to a marks TOML file
        #[arg(value_name = "FILE")]
        marks_file: PathBuf,

        /// Restrict output to one subject id
        #[arg(long, value_name = "ID")]
        subject: Option<String>,

        /// Report heavy-lab subjects on the halved 150-mark scale
        #[arg(long)]
        halved_scale: bool,
    },
    /// Compute SGPA (and CGPA when a first-year block is recorded).
    Gpa {
        /// Path to a marks TOML file
        #[arg(value_name = "FILE")]
        marks_file: PathBuf,

        /// Report heavy-lab subjects on the halved 150-mark scale
        #[arg(long)]
        halved_scale: bool,
    },
    /// Show the SEE marks needed per target grade.
    ///
    /// Reads CIE from a marks file subject, or directly from --cie/--category.
    See {
        /// Path to a marks TOML file (omit when using --cie)
        #[arg(value_name = "FILE")]
        marks_file: Option<PathBuf>,

        /// Subject id within the marks file
        #[arg(long, value_name = "ID")]
        subject: Option<String>,

        /// CIE score to solve against (alternative to a marks file)
        #[arg(long, value_name = "MARKS")]
        cie: Option<f64>,

        /// Subject category tag for --cie (e.g., regular, heavy-lab)
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,

        /// Already-scored lab exam marks (heavy-lab subjects)
        #[arg(long, value_name = "MARKS")]
        lab_exam: Option<f64>,

        /// Solve on the halved 150-mark heavy-lab scale
        #[arg(long)]
        halved_scale: bool,
    },
    /// Generate a gradecard report from a marks file.
    Report {
        /// Path to a marks TOML file
        #[arg(value_name = "FILE")]
        marks_file: PathBuf,

        /// Report format: markdown (md) or text (txt)
        #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
        format: String,

        /// Output file path (optional; defaults to the config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report heavy-lab subjects on the halved 150-mark scale
        #[arg(long)]
        halved_scale: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gradecard",
    about = "grade-card command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config marks directory
    #[arg(long = "config-marks-dir", value_name = "DIR")]
    pub config_marks_dir: Option<PathBuf>,

    /// Override config marks directory (short form)
    #[arg(long = "marks-dir", value_name = "DIR")]
    pub marks_dir: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration. Short-form flags (e.g.,
    /// `--marks-dir`) take precedence over long-form flags (e.g.,
    /// `--config-marks-dir`) when both are provided.
    #[must_use]
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            marks_dir: self
                .marks_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_marks_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_reports_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}
