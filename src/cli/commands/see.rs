//! SEE requirements command handler

use super::cie::load;
use grade_card::engine::{
    compute_cie, grade_at_minimum_see, see_requirements_with, GradingPolicy,
};
use grade_card::models::SubjectCategory;
use grade_card::info;
use std::path::Path;

/// Arguments for the see command, resolved from CLI flags.
pub struct SeeRequest<'a> {
    /// Marks file to read CIE from (alternative to `cie`)
    pub marks_file: Option<&'a Path>,
    /// Subject id within the marks file
    pub subject: Option<&'a str>,
    /// Directly-supplied CIE score
    pub cie: Option<f64>,
    /// Category tag accompanying a direct CIE score
    pub category: Option<&'a str>,
    /// Already-scored lab exam marks
    pub lab_exam: Option<f64>,
}

/// Print the SEE marks needed for each achievable grade.
pub fn run(request: &SeeRequest<'_>, policy: GradingPolicy) {
    let resolved = match resolve(request) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("✗ {e}");
            return;
        }
    };
    let (label, cie, lab_exam, category) = resolved;

    info!("Solving SEE requirements for {label} (CIE {cie:.0})");

    println!(
        "SEE requirements for {label} (CIE {cie:.0}/{:.0}):",
        category.cie_maximum()
    );
    if category.is_heavy_lab() && lab_exam > 0.0 {
        println!("  Lab exam recorded: {lab_exam:.0}/50, written paper out of 100");
    }

    let rows = see_requirements_with(policy, cie, lab_exam, category);
    if rows.is_empty() {
        println!("  No passing grade is reachable with the remaining exam marks.");
        return;
    }

    for (index, row) in rows.iter().enumerate() {
        let highlight = if index == 0 { " <- best achievable" } else { "" };
        println!(
            "  Grade {} ({}): {:.1} marks{highlight}",
            row.grade_point, row.letter, row.required
        );
    }

    if let Some(grade) = grade_at_minimum_see(cie, category) {
        if !grade.is_fail() {
            println!(
                "  Minimum-pass SEE yields grade {} ({})",
                grade.grade_point,
                grade.letter()
            );
        }
    }
}

/// Resolve the request into (label, cie, lab exam, category).
fn resolve(
    request: &SeeRequest<'_>,
) -> Result<(String, f64, f64, SubjectCategory), String> {
    if let Some(cie) = request.cie {
        let tag = request
            .category
            .ok_or("--category is required when --cie is given")?;
        let category: SubjectCategory = tag.parse()?;
        return Ok((
            format!("{category} subject"),
            cie,
            request.lab_exam.unwrap_or(0.0),
            category,
        ));
    }

    let marks_file = request
        .marks_file
        .ok_or("Provide a marks file with --subject, or --cie with --category")?;
    let subject_id = request
        .subject
        .ok_or("--subject is required when reading from a marks file")?;

    let (marks, set) = load(marks_file)?;
    let subject = set
        .subject(subject_id)
        .ok_or_else(|| format!("No subject '{subject_id}' in curriculum '{}'", set.slug))?;
    let record = marks.marks_or_default(subject_id);
    let cie = compute_cie(&record, subject.category);
    let lab_exam = request
        .lab_exam
        .or(record.lab_exam)
        .unwrap_or(0.0);

    Ok((subject.name.clone(), cie, lab_exam, subject.category))
}
