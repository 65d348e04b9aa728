//! CIE command handler

use grade_card::engine::compute_cie;
use grade_card::marks_store::MarksFile;
use grade_card::models::{Subject, SubjectSet};
use grade_card::{error, info};
use std::path::Path;

/// Compute and print CIE scores for subjects in a marks file.
pub fn run(marks_file: &Path, subject_filter: Option<&str>) {
    let (marks, set) = match load(marks_file) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("✗ {e}");
            return;
        }
    };

    info!("Computing CIE for '{}'", set.slug);

    let subjects: Vec<&Subject> = match filtered_subjects(&set, subject_filter) {
        Ok(subjects) => subjects,
        Err(e) => {
            eprintln!("✗ {e}");
            return;
        }
    };

    for subject in subjects {
        match marks.marks(&subject.id) {
            Some(record) => {
                let cie = compute_cie(record, subject.category);
                println!(
                    "✓ {} [{}]: CIE {cie:.0}/{:.0}",
                    subject.name,
                    subject.id,
                    subject.category.cie_maximum()
                );
            }
            None => println!("- {} [{}]: no marks recorded", subject.name, subject.id),
        }
    }
}

/// Load a marks file and resolve its subject set.
pub fn load(marks_file: &Path) -> Result<(MarksFile, SubjectSet), String> {
    let marks = MarksFile::load(marks_file).inspect_err(|e| {
        error!("Failed to load marks {}: {e}", marks_file.display());
    })?;
    let set = marks.subject_set()?;
    Ok((marks, set))
}

/// Subjects in display order, optionally narrowed to one id.
pub fn filtered_subjects<'a>(
    set: &'a SubjectSet,
    subject_filter: Option<&str>,
) -> Result<Vec<&'a Subject>, String> {
    match subject_filter {
        None => Ok(set.subjects.iter().collect()),
        Some(id) => set
            .subject(id)
            .map(|subject| vec![subject])
            .ok_or_else(|| format!("No subject '{id}' in curriculum '{}'", set.slug)),
    }
}
