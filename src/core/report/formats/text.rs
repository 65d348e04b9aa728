//! Plain text gradecard renderer
//!
//! One line per subject in the same shape the calculator offers for
//! copy-and-paste sharing.

use crate::core::report::ReportContext;
use std::fmt::Write;

/// Plain text gradecard renderer
pub struct TextReporter;

impl TextReporter {
    /// Render a gradecard as plain text
    #[must_use]
    pub fn render(ctx: &ReportContext) -> String {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "Gradecard - {} [{}] ({} credits)",
            ctx.set_name, ctx.curriculum, ctx.total_credits
        );
        let _ = writeln!(out);

        for row in &ctx.rows {
            let _ = writeln!(
                out,
                "{} ({} cr): CIE {} | SEE {} | Grade {}",
                row.name, row.credit, row.cie, row.see, row.grade
            );
        }

        let _ = writeln!(out);
        if ctx.complete {
            let _ = writeln!(out, "SGPA: {}", ctx.sgpa);
        } else {
            let _ = writeln!(
                out,
                "SGPA: {} (partial: {} of {} credits graded)",
                ctx.sgpa, ctx.graded_credits, ctx.total_credits
            );
        }
        if ctx.has_cgpa {
            let _ = writeln!(out, "CGPA: {} (with 40-credit first-year block)", ctx.cgpa);
        }

        out
    }
}
