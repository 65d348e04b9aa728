//! Grade command handler

use super::cie::{filtered_subjects, load};
use grade_card::engine::{compute_cie, compute_grade_with, GradingPolicy};
use grade_card::info;
use std::path::Path;

/// Compute and print final grades for subjects in a marks file.
pub fn run(marks_file: &Path, subject_filter: Option<&str>, policy: GradingPolicy) {
    let (marks, set) = match load(marks_file) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("✗ {e}");
            return;
        }
    };

    info!("Computing grades for '{}'", set.slug);

    let subjects = match filtered_subjects(&set, subject_filter) {
        Ok(subjects) => subjects,
        Err(e) => {
            eprintln!("✗ {e}");
            return;
        }
    };

    for subject in subjects {
        let Some(record) = marks.marks(&subject.id) else {
            println!("- {} [{}]: no marks recorded", subject.name, subject.id);
            continue;
        };

        let cie = compute_cie(record, subject.category);

        if !record.has_exam_marks() {
            println!(
                "- {} [{}]: CIE {cie:.0}/{:.0}, awaiting semester-end marks",
                subject.name,
                subject.id,
                subject.category.cie_maximum()
            );
            continue;
        }

        let see = record.semester_end.unwrap_or(0.0);
        let lab_exam = record.lab_exam.unwrap_or(0.0);
        let grade = compute_grade_with(policy, cie, see, lab_exam, subject.category);

        if grade.is_fail() {
            println!(
                "✗ {} [{}]: F (total {:.0}, CIE {cie:.0}, SEE {see:.0})",
                subject.name, subject.id, grade.total
            );
        } else {
            println!(
                "✓ {} [{}]: {} ({}) - total {:.0}",
                subject.name,
                subject.id,
                grade.grade_point,
                grade.letter(),
                grade.total
            );
        }
    }
}
