//! Markdown gradecard renderer
//!
//! Renders the gradecard through an askama template; all values arrive
//! pre-formatted in the [`ReportContext`].

use crate::core::report::ReportContext;
use askama::Template;

/// Askama view over a report context
#[derive(Template)]
#[template(path = "gradecard.md")]
struct GradecardMd<'a> {
    ctx: &'a ReportContext,
}

/// Markdown gradecard renderer
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Render a gradecard as Markdown
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    pub fn render(ctx: &ReportContext) -> Result<String, String> {
        GradecardMd { ctx }
            .render()
            .map_err(|e| format!("Failed to render markdown gradecard: {e}"))
    }
}
