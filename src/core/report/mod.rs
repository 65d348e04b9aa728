//! Gradecard report generation
//!
//! Renders one subject set plus a marks file into a shareable gradecard:
//! per-subject CIE, exam marks and grade, followed by the SGPA and, when a
//! first-year block is recorded, the CGPA.

pub mod formats;

pub use formats::{MarkdownReporter, ReportFormat, TextReporter};

use crate::core::engine::{
    aggregate, compute_cie, compute_grade_with, GpaEntry, GradingPolicy,
};
use crate::core::marks_store::MarksFile;
use crate::core::models::curriculum::FIRST_YEAR_BLOCK_CREDITS;
use crate::core::models::SubjectSet;
use std::fs;
use std::path::Path;

/// One rendered gradecard row.
#[derive(Debug, Clone)]
pub struct ReportRow {
    /// Subject id
    pub id: String,
    /// Subject name
    pub name: String,
    /// Credit weight
    pub credit: u32,
    /// Category tag
    pub category: String,
    /// Display CIE, e.g. "86/100", or a dash when no marks are recorded
    pub cie: String,
    /// Display exam marks, e.g. "72" or "72 (+45 lab)", or a dash
    pub see: String,
    /// Display grade, e.g. "8 (A)", or a dash before the exam
    pub grade: String,
}

/// Data context for gradecard rendering.
#[derive(Debug, Clone)]
pub struct ReportContext {
    /// Subject set name
    pub set_name: String,
    /// Curriculum slug
    pub curriculum: String,
    /// Total credits in the set
    pub total_credits: u32,
    /// Rendered per-subject rows
    pub rows: Vec<ReportRow>,
    /// Formatted SGPA over graded subjects
    pub sgpa: String,
    /// Credits that carried a grade, formatted
    pub graded_credits: String,
    /// Whether every subject in the set was graded
    pub complete: bool,
    /// Whether a first-year block was present for CGPA composition
    pub has_cgpa: bool,
    /// Formatted CGPA including the first-year block (empty when absent)
    pub cgpa: String,
}

impl ReportContext {
    /// Build a report context by running the engine over a marks file.
    #[must_use]
    pub fn build(set: &SubjectSet, marks: &MarksFile, policy: GradingPolicy) -> Self {
        let mut rows = Vec::with_capacity(set.subjects.len());
        let mut entries = Vec::with_capacity(set.subjects.len());

        for subject in &set.subjects {
            let Some(record) = marks.marks(&subject.id) else {
                rows.push(ReportRow {
                    id: subject.id.clone(),
                    name: subject.name.clone(),
                    credit: subject.credit,
                    category: subject.category.to_string(),
                    cie: "-".to_string(),
                    see: "-".to_string(),
                    grade: "-".to_string(),
                });
                entries.push(GpaEntry::ungraded(subject.credit_weight()));
                continue;
            };

            let cie = compute_cie(record, subject.category);
            let cie_display = format!("{cie:.0}/{:.0}", subject.category.cie_maximum());

            if record.has_exam_marks() {
                let see = record.semester_end.unwrap_or(0.0);
                let lab_exam = record.lab_exam.unwrap_or(0.0);
                let grade = compute_grade_with(policy, cie, see, lab_exam, subject.category);

                let see_display = if subject.category.is_heavy_lab() {
                    format!("{see:.0} (+{lab_exam:.0} lab)")
                } else {
                    format!("{see:.0}")
                };

                rows.push(ReportRow {
                    id: subject.id.clone(),
                    name: subject.name.clone(),
                    credit: subject.credit,
                    category: subject.category.to_string(),
                    cie: cie_display,
                    see: see_display,
                    grade: format!("{} ({})", grade.grade_point, grade.letter()),
                });
                entries.push(GpaEntry::graded(
                    f64::from(grade.grade_point),
                    subject.credit_weight(),
                ));
            } else {
                rows.push(ReportRow {
                    id: subject.id.clone(),
                    name: subject.name.clone(),
                    credit: subject.credit,
                    category: subject.category.to_string(),
                    cie: cie_display,
                    see: "-".to_string(),
                    grade: "-".to_string(),
                });
                entries.push(GpaEntry::ungraded(subject.credit_weight()));
            }
        }

        let sgpa = aggregate(&entries);

        let (has_cgpa, cgpa) = match marks.first_year_cgpa {
            Some(block) => {
                let mut cumulative = entries.clone();
                cumulative.push(GpaEntry::block(block, FIRST_YEAR_BLOCK_CREDITS));
                (true, aggregate(&cumulative).to_string())
            }
            None => (false, String::new()),
        };

        Self {
            set_name: set.name.clone(),
            curriculum: set.slug.clone(),
            total_credits: set.total_credits(),
            rows,
            sgpa: sgpa.to_string(),
            graded_credits: format!("{:.0}", sgpa.graded_credits),
            complete: sgpa.is_complete(),
            has_cgpa,
            cgpa,
        }
    }
}

/// Render a gradecard in the requested format.
///
/// # Errors
/// Returns an error if template rendering fails
pub fn generate(ctx: &ReportContext, format: ReportFormat) -> Result<String, String> {
    match format {
        ReportFormat::Markdown => MarkdownReporter::render(ctx),
        ReportFormat::Text => Ok(TextReporter::render(ctx)),
    }
}

/// Render a gradecard and write it to a file.
///
/// # Errors
/// Returns an error if rendering or writing fails
pub fn write_report(ctx: &ReportContext, format: ReportFormat, path: &Path) -> Result<(), String> {
    let rendered = generate(ctx, format)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
    }
    fs::write(path, rendered)
        .map_err(|e| format!("Failed to write report {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::curriculum::third_semester;
    use crate::core::models::{Branch, MarkField, Subject, SubjectCategory};

    fn marks_with_grades() -> (SubjectSet, MarksFile) {
        let set = third_semester(Branch::CseCore);
        let mut marks = MarksFile::new("sem3-cse-core");
        let math = set.subject("math-sem3").expect("math").clone();
        for (field, value) in [
            (MarkField::Quiz1, 10.0),
            (MarkField::Quiz2, 10.0),
            (MarkField::Test1, 50.0),
            (MarkField::Test2, 50.0),
            (MarkField::Matlab, 20.0),
            (MarkField::ExtraLearning, 20.0),
            (MarkField::SemesterEnd, 100.0),
        ] {
            marks.record(&math, field, value).expect("record");
        }
        (set, marks)
    }

    #[test]
    fn context_marks_graded_and_ungraded_rows() {
        let (set, marks) = marks_with_grades();
        let ctx = ReportContext::build(&set, &marks, GradingPolicy::default());

        assert_eq!(ctx.rows.len(), set.subjects.len());
        let math_row = ctx.rows.iter().find(|r| r.id == "math-sem3").expect("math row");
        assert_eq!(math_row.cie, "100/100");
        assert_eq!(math_row.grade, "10 (O)");

        let dsa_row = ctx.rows.iter().find(|r| r.id == "dsa-sem3").expect("dsa row");
        assert_eq!(dsa_row.grade, "-");
        assert!(!ctx.complete);
    }

    #[test]
    fn sgpa_covers_only_graded_subjects() {
        let (set, marks) = marks_with_grades();
        let ctx = ReportContext::build(&set, &marks, GradingPolicy::default());
        // Only the 4-credit math subject is graded, at 10 points
        assert_eq!(ctx.sgpa, "10.00");
        assert_eq!(ctx.graded_credits, "4");
    }

    #[test]
    fn cgpa_requires_first_year_block() {
        let (set, mut marks) = marks_with_grades();
        let ctx = ReportContext::build(&set, &marks, GradingPolicy::default());
        assert!(!ctx.has_cgpa);

        marks.first_year_cgpa = Some(10.0);
        let ctx = ReportContext::build(&set, &marks, GradingPolicy::default());
        assert!(ctx.has_cgpa);
        // 10.0 over 40 credits plus 10 over 4 graded credits stays 10.00
        assert_eq!(ctx.cgpa, "10.00");
    }

    #[test]
    fn cie_only_marks_render_without_grade() {
        let set = SubjectSet::new(
            "test-set",
            "Test Set",
            vec![Subject::new("one", "Only Subject", 4, SubjectCategory::Regular)],
        );
        let mut marks = MarksFile::new("test-set");
        let subject = set.subject("one").expect("subject").clone();
        marks.record(&subject, MarkField::Quiz1, 8.0).expect("record");

        let ctx = ReportContext::build(&set, &marks, GradingPolicy::default());
        assert_eq!(ctx.rows[0].cie, "4/100"); // avg of one 8-mark quiz
        assert_eq!(ctx.rows[0].grade, "-");
        assert_eq!(ctx.sgpa, "0.00");
    }

    #[test]
    fn both_formats_render() {
        let (set, marks) = marks_with_grades();
        let ctx = ReportContext::build(&set, &marks, GradingPolicy::default());

        let md = generate(&ctx, ReportFormat::Markdown).expect("markdown");
        assert!(md.contains("Gradecard"));
        assert!(md.contains("Mathematics"));
        assert!(md.contains("10.00"));

        let text = generate(&ctx, ReportFormat::Text).expect("text");
        assert!(text.contains("Mathematics"));
        assert!(text.contains("SGPA"));
    }
}
