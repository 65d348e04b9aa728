//! Report command handler

use super::cie::load;
use grade_card::config::Config;
use grade_card::engine::GradingPolicy;
use grade_card::report::{write_report, ReportContext, ReportFormat};
use grade_card::{error, info};
use std::path::{Path, PathBuf};

/// Generate a gradecard report from a marks file.
pub fn run(
    marks_file: &Path,
    format: &str,
    output: Option<&Path>,
    policy: GradingPolicy,
    config: &Config,
) {
    let format: ReportFormat = match format.parse() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("✗ {e}");
            return;
        }
    };

    let (marks, set) = match load(marks_file) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("✗ {e}");
            return;
        }
    };

    let ctx = ReportContext::build(&set, &marks, policy);

    let output_path = output.map_or_else(
        || default_output_path(config, &ctx.curriculum, format),
        Path::to_path_buf,
    );

    info!(
        "Writing {format} gradecard for '{}' to {}",
        ctx.curriculum,
        output_path.display()
    );

    match write_report(&ctx, format, &output_path) {
        Ok(()) => println!("✓ Gradecard written: {}", output_path.display()),
        Err(e) => {
            error!("Report generation failed: {e}");
            eprintln!("✗ {e}");
        }
    }
}

/// Default output path under the configured reports directory.
fn default_output_path(config: &Config, curriculum: &str, format: ReportFormat) -> PathBuf {
    let reports_dir = if config.paths.reports_dir.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(&config.paths.reports_dir)
    };
    reports_dir.join(format!("{curriculum}-gradecard.{}", format.extension()))
}
