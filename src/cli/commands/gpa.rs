//! GPA command handler

use super::cie::load;
use grade_card::engine::GradingPolicy;
use grade_card::info;
use grade_card::report::ReportContext;
use std::path::Path;

/// Compute and print SGPA (and CGPA when a first-year block is recorded).
pub fn run(marks_file: &Path, policy: GradingPolicy) {
    let (marks, set) = match load(marks_file) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("✗ {e}");
            return;
        }
    };

    info!("Aggregating grade points for '{}'", set.slug);

    let ctx = ReportContext::build(&set, &marks, policy);

    if ctx.complete {
        println!("✓ SGPA ({}): {}", ctx.set_name, ctx.sgpa);
    } else {
        println!(
            "✓ SGPA ({}): {} — partial, {} of {} credits graded",
            ctx.set_name, ctx.sgpa, ctx.graded_credits, ctx.total_credits
        );
        println!("  Enter semester-end marks for the remaining subjects to complete the set.");
    }

    if ctx.has_cgpa {
        println!("✓ CGPA (with 40-credit first-year block): {}", ctx.cgpa);
    }
}
