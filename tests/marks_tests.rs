//! Integration tests for marks persistence and the marks-to-gradecard pipeline

use grade_card::engine::{compute_cie, GradingPolicy};
use grade_card::marks_store::MarksFile;
use grade_card::models::curriculum::{find_set, third_semester};
use grade_card::models::{Branch, MarkField, SubjectCategory};
use grade_card::report::{generate, ReportContext, ReportFormat};
use tempfile::TempDir;

fn temp_path(dir: &TempDir, name: &str) -> std::path::PathBuf {
    dir.path().join(name)
}

#[test]
fn save_and_load_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_path(&dir, "sem3.toml");

    let set = third_semester(Branch::Ise);
    let mut marks = MarksFile::new("sem3-ise");
    let dsa = set.subject("dsa-sem3").expect("dsa").clone();
    marks.record(&dsa, MarkField::Quiz1, 9.0).expect("record");
    marks.record(&dsa, MarkField::Test1, 44.5).expect("record");
    marks.record(&dsa, MarkField::Lab, 47.0).expect("record");
    marks.first_year_cgpa = Some(8.72);

    marks.save(&path).expect("save");
    let loaded = MarksFile::load(&path).expect("load");

    assert_eq!(loaded, marks);
    assert_eq!(loaded.curriculum, "sem3-ise");
    assert_eq!(loaded.first_year_cgpa, Some(8.72));
    assert_eq!(
        loaded.marks("dsa-sem3").and_then(|m| m.get(MarkField::Test1)),
        Some(44.5)
    );
}

#[test]
fn load_missing_file_reports_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_path(&dir, "absent.toml");

    let err = MarksFile::load(&path).unwrap_err();
    assert!(err.contains("Failed to read"));
    assert!(err.contains("absent.toml"));
}

#[test]
fn load_rejects_malformed_toml() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_path(&dir, "broken.toml");
    std::fs::write(&path, "curriculum = [not toml").expect("write");

    let err = MarksFile::load(&path).unwrap_err();
    assert!(err.contains("Failed to parse"));
}

#[test]
fn record_enforces_entry_limits_but_engine_tolerates_disk_values() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_path(&dir, "edited.toml");

    let set = third_semester(Branch::CseCore);
    let mut marks = MarksFile::new("sem3-cse-core");
    let dtl = set.subject("dtl-sem3").expect("dtl").clone();

    // Entry-time validation refuses an over-limit quiz mark
    let err = marks.record(&dtl, MarkField::Quiz1, 25.0).unwrap_err();
    assert!(err.contains("Maximum for q1"));

    // A hand-edited file can still exceed the limit; the engine computes it
    // without clamping or panicking
    std::fs::write(
        &path,
        "curriculum = \"sem3-cse-core\"\n\n[subjects.dtl-sem3]\nq1 = 25.0\nq2 = 25.0\n",
    )
    .expect("write");
    let loaded = MarksFile::load(&path).expect("load");
    let record = loaded.marks("dtl-sem3").expect("record");
    let cie = compute_cie(record, SubjectCategory::Regular);
    assert!((cie - 25.0).abs() < f64::EPSILON); // average of 25 + 25
}

#[test]
fn unknown_curriculum_slug_is_an_error() {
    let marks = MarksFile::new("sem5-cse-core");
    let err = marks.subject_set().unwrap_err();
    assert!(err.contains("sem5-cse-core"));
}

#[test]
fn marks_to_gradecard_pipeline() {
    let set = find_set("sem3-cse-core").expect("set");
    let mut marks = MarksFile::new("sem3-cse-core");

    // Grade every subject in the set with full internals and a strong exam
    for subject in &set.subjects {
        let record_fields: Vec<(MarkField, f64)> = match subject.category {
            SubjectCategory::Math => vec![
                (MarkField::Quiz1, 10.0),
                (MarkField::Quiz2, 10.0),
                (MarkField::Test1, 50.0),
                (MarkField::Test2, 50.0),
                (MarkField::Matlab, 20.0),
                (MarkField::ExtraLearning, 20.0),
                (MarkField::SemesterEnd, 100.0),
            ],
            SubjectCategory::Basket => vec![
                (MarkField::Quiz1, 10.0),
                (MarkField::Quiz2, 10.0),
                (MarkField::Test1, 50.0),
                (MarkField::Test2, 50.0),
                (MarkField::ExtraLearning, 20.0),
                (MarkField::BasketExtraLearning, 20.0),
                (MarkField::SemesterEnd, 100.0),
            ],
            SubjectCategory::HeavyLab => vec![
                (MarkField::Quiz1, 10.0),
                (MarkField::Quiz2, 10.0),
                (MarkField::Test1, 50.0),
                (MarkField::Test2, 50.0),
                (MarkField::Lab, 50.0),
                (MarkField::ExtraLearning, 40.0),
                (MarkField::LabExam, 50.0),
                (MarkField::SemesterEnd, 100.0),
            ],
            _ => vec![
                (MarkField::Quiz1, 10.0),
                (MarkField::Quiz2, 10.0),
                (MarkField::Test1, 50.0),
                (MarkField::Test2, 50.0),
                (MarkField::ExtraLearning, 40.0),
                (MarkField::SemesterEnd, 100.0),
            ],
        };
        for (field, value) in record_fields {
            marks.record(subject, field, value).expect("record");
        }
    }
    marks.first_year_cgpa = Some(10.0);

    let ctx = ReportContext::build(&set, &marks, GradingPolicy::default());

    // Perfect marks everywhere: SGPA and CGPA are both 10.00
    assert!(ctx.complete);
    assert_eq!(ctx.sgpa, "10.00");
    assert!(ctx.has_cgpa);
    assert_eq!(ctx.cgpa, "10.00");

    let md = generate(&ctx, ReportFormat::Markdown).expect("markdown");
    assert!(md.contains("# Gradecard"));
    assert!(md.contains("10 (O)"));
    assert!(!md.contains("partial"));

    let text = generate(&ctx, ReportFormat::Text).expect("text");
    assert!(text.contains("SGPA: 10.00"));
    assert!(text.contains("CGPA: 10.00"));
}

#[test]
fn mixed_grades_weighted_sgpa() {
    let set = find_set("sem3-ise").expect("set");
    let mut marks = MarksFile::new("sem3-ise");

    // Mathematics (4 cr): CIE 80, SEE 80 -> total 80 -> grade 9
    let math = set.subject("math-sem3").expect("math").clone();
    for (field, value) in [
        (MarkField::Quiz1, 8.0),
        (MarkField::Quiz2, 8.0),
        (MarkField::Test1, 40.0),
        (MarkField::Test2, 40.0),
        (MarkField::Matlab, 16.0),
        (MarkField::ExtraLearning, 16.0),
        (MarkField::SemesterEnd, 80.0),
    ] {
        marks.record(&math, field, value).expect("record");
    }

    // LDCO (4 cr): CIE 55, SEE 49 -> total 52 -> grade 6
    let ldco = set.subject("ldco-sem3").expect("ldco").clone();
    for (field, value) in [
        (MarkField::Quiz1, 5.0),
        (MarkField::Quiz2, 5.0),
        (MarkField::Test1, 25.0),
        (MarkField::Test2, 25.0),
        (MarkField::ExtraLearning, 25.0),
        (MarkField::SemesterEnd, 49.0),
    ] {
        marks.record(&ldco, field, value).expect("record");
    }

    let ctx = ReportContext::build(&set, &marks, GradingPolicy::default());

    // (9*4 + 6*4) / 8 = 7.50 over the graded subset
    assert_eq!(ctx.sgpa, "7.50");
    assert!(!ctx.complete);
    assert_eq!(ctx.graded_credits, "8");
}
