//! Integration tests for the grade engine invariants

use grade_card::engine::{
    aggregate, compute_cie, compute_grade, compute_grade_with, grade_letter,
    see_required_for_grade, see_required_for_grade_with, GpaEntry, GradingPolicy, HeavyLabScale,
};
use grade_card::models::{MarkField, RawMarks, SubjectCategory};

fn marks(pairs: &[(MarkField, f64)]) -> RawMarks {
    let mut record = RawMarks::new();
    for &(field, value) in pairs {
        record.set(field, value);
    }
    record
}

#[test]
fn cie_is_deterministic() {
    let record = marks(&[
        (MarkField::Quiz1, 7.0),
        (MarkField::Quiz2, 9.0),
        (MarkField::Test1, 41.0),
        (MarkField::Test2, 38.5),
        (MarkField::ExtraLearning, 31.0),
    ]);

    let first = compute_cie(&record, SubjectCategory::Regular);
    for _ in 0..50 {
        let again = compute_cie(&record, SubjectCategory::Regular);
        assert!((again - first).abs() < f64::EPSILON);
    }
}

#[test]
fn math_category_full_marks() {
    let record = marks(&[
        (MarkField::Quiz1, 10.0),
        (MarkField::Quiz2, 10.0),
        (MarkField::Test1, 50.0),
        (MarkField::Test2, 50.0),
        (MarkField::Matlab, 20.0),
        (MarkField::ExtraLearning, 20.0),
    ]);

    assert!((compute_cie(&record, SubjectCategory::Math) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn regular_category_absent_marks_are_zero() {
    assert!((compute_cie(&RawMarks::new(), SubjectCategory::Regular) - 0.0).abs() < f64::EPSILON);
}

#[test]
fn heavy_lab_category_full_marks() {
    let record = marks(&[
        (MarkField::Quiz1, 10.0),
        (MarkField::Quiz2, 10.0),
        (MarkField::Test1, 50.0),
        (MarkField::Test2, 50.0),
        (MarkField::Lab, 50.0),
        (MarkField::ExtraLearning, 40.0),
    ]);

    assert!((compute_cie(&record, SubjectCategory::HeavyLab) - 150.0).abs() < f64::EPSILON);
}

#[test]
fn grade_boundaries_are_inclusive() {
    // Exactly at both minimums: passes
    assert_ne!(
        compute_grade(40.0, 35.0, 0.0, SubjectCategory::Regular).grade_point,
        0
    );
    // One CIE mark short: fails no matter the exam
    assert_eq!(
        compute_grade(39.0, 100.0, 0.0, SubjectCategory::Regular).grade_point,
        0
    );
    // Perfect marks: outstanding
    assert_eq!(
        compute_grade(100.0, 100.0, 0.0, SubjectCategory::Regular).grade_point,
        10
    );
}

#[test]
fn grade_point_is_monotone_over_full_grid() {
    // Raising either component never lowers the grade point
    for category in [
        SubjectCategory::Regular,
        SubjectCategory::Math,
        SubjectCategory::Lab,
        SubjectCategory::Basket,
        SubjectCategory::HalfCredit,
    ] {
        let cie_max = category.cie_maximum() as i32;
        let see_max = category.see_maximum() as i32;

        for see in 0..=see_max {
            let mut previous = 0;
            for cie in 0..=cie_max {
                let gp = compute_grade(f64::from(cie), f64::from(see), 0.0, category).grade_point;
                assert!(gp >= previous, "{category}: cie {cie}, see {see}");
                previous = gp;
            }
        }
        for cie in 0..=cie_max {
            let mut previous = 0;
            for see in 0..=see_max {
                let gp = compute_grade(f64::from(cie), f64::from(see), 0.0, category).grade_point;
                assert!(gp >= previous, "{category}: cie {cie}, see {see}");
                previous = gp;
            }
        }
    }
}

#[test]
fn heavy_lab_grade_is_monotone() {
    // In the CIE direction monotonicity is unconditional
    for lab_exam in [0, 25, 50] {
        for see in 0..=100 {
            let mut previous = 0;
            for cie in 0..=150 {
                let gp = compute_grade(
                    f64::from(cie),
                    f64::from(see),
                    f64::from(lab_exam),
                    SubjectCategory::HeavyLab,
                )
                .grade_point;
                assert!(gp >= previous, "cie {cie}, see {see}, lab {lab_exam}");
                previous = gp;
            }
        }
    }

    // In the SEE direction it holds once an exam mark exists; crossing from
    // "no exam entered" to "entered" legitimately drops the grade because
    // the combined exam minimum starts to apply
    for lab_exam in [0, 25, 50] {
        for cie in 0..=150 {
            let mut previous = 0;
            for see in 1..=100 {
                let gp = compute_grade(
                    f64::from(cie),
                    f64::from(see),
                    f64::from(lab_exam),
                    SubjectCategory::HeavyLab,
                )
                .grade_point;
                assert!(gp >= previous, "cie {cie}, see {see}, lab {lab_exam}");
                previous = gp;
            }
        }
    }
}

#[test]
fn letter_mapping_is_total_and_defensive() {
    let expected = ["F", "F", "F", "F", "P", "C", "B", "B+", "A", "A+", "O"];
    for gp in 0..=10u8 {
        let letter = grade_letter(gp);
        assert!(!letter.is_empty());
        assert_eq!(letter, expected[gp as usize]);
    }
    assert_eq!(grade_letter(11), "F");
    assert_eq!(grade_letter(255), "F");
}

#[test]
fn solver_lower_bound_holds_across_standard_grid() {
    // Whenever the forward function awards a passing grade, the solver's
    // requirement for that grade must not exceed the exam marks actually
    // scored
    for cie in 0..=100 {
        for see in 0..=100 {
            let grade = compute_grade(f64::from(cie), f64::from(see), 0.0, SubjectCategory::Regular);
            if grade.grade_point >= 4 {
                let required = see_required_for_grade(
                    f64::from(cie),
                    grade.grade_point,
                    SubjectCategory::Regular,
                );
                assert!(
                    f64::from(see) >= required,
                    "cie {cie}, see {see}, grade {}, required {required}",
                    grade.grade_point
                );
            }
        }
    }
}

#[test]
fn solver_bound_is_tight_for_standard_grid() {
    // One mark below the requirement must not reach the target grade
    for cie in 40..=100 {
        for target in 4..=10u8 {
            let required = see_required_for_grade(f64::from(cie), target, SubjectCategory::Regular);
            if (35.0..=99.0).contains(&required) {
                let at = compute_grade(f64::from(cie), required, 0.0, SubjectCategory::Regular);
                let below = compute_grade(f64::from(cie), required - 1.0, 0.0, SubjectCategory::Regular);
                assert!(at.grade_point >= target, "cie {cie}, target {target}");
                assert!(below.grade_point < target, "cie {cie}, target {target}");
            }
        }
    }
}

#[test]
fn solver_lower_bound_holds_for_heavy_lab() {
    for policy in [
        GradingPolicy::default(),
        GradingPolicy::with_heavy_lab_scale(HeavyLabScale::Halved150),
    ] {
        for cie in (60..=150).step_by(5) {
            for lab_exam in [0, 30, 50] {
                for see in (0..=100).step_by(4) {
                    let grade = compute_grade_with(
                        policy,
                        f64::from(cie),
                        f64::from(see),
                        f64::from(lab_exam),
                        SubjectCategory::HeavyLab,
                    );
                    if grade.grade_point >= 4 {
                        let required = see_required_for_grade_with(
                            policy,
                            f64::from(cie),
                            grade.grade_point,
                            f64::from(lab_exam),
                            SubjectCategory::HeavyLab,
                        );
                        assert!(
                            f64::from(see) >= required,
                            "cie {cie}, see {see}, lab {lab_exam}, grade {}",
                            grade.grade_point
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn aggregation_weights_by_credit() {
    let result = aggregate(&[GpaEntry::graded(10.0, 4.0), GpaEntry::graded(4.0, 3.0)]);
    // (10*4 + 4*3) / 7 = 7.4285..., ceiling-rounded to two decimals
    assert_eq!(result.to_string(), "7.43");
}

#[test]
fn aggregation_excludes_ungraded_entries() {
    let result = aggregate(&[GpaEntry::ungraded(4.0), GpaEntry::graded(8.0, 3.0)]);
    assert_eq!(result.to_string(), "8.00");
}

#[test]
fn empty_aggregation_reports_zero() {
    let result = aggregate(&[]);
    assert_eq!(result.to_string(), "0.00");
    assert!(result.is_empty());
}

#[test]
fn heavy_lab_default_scale_end_to_end() {
    // Perfect marks on the default combined scale: 150 + 50 + 100 = 300
    let record = marks(&[
        (MarkField::Quiz1, 10.0),
        (MarkField::Quiz2, 10.0),
        (MarkField::Test1, 50.0),
        (MarkField::Test2, 50.0),
        (MarkField::Lab, 50.0),
        (MarkField::ExtraLearning, 40.0),
    ]);
    let cie = compute_cie(&record, SubjectCategory::HeavyLab);
    let grade = compute_grade(cie, 100.0, 50.0, SubjectCategory::HeavyLab);

    assert!((grade.total - 300.0).abs() < f64::EPSILON);
    assert_eq!(grade.grade_point, 10);
    assert_eq!(grade.letter(), "O");

    // The halved policy reports 150 but agrees on the grade
    let halved = compute_grade_with(
        GradingPolicy::with_heavy_lab_scale(HeavyLabScale::Halved150),
        cie,
        100.0,
        50.0,
        SubjectCategory::HeavyLab,
    );
    assert!((halved.total - 150.0).abs() < f64::EPSILON);
    assert_eq!(halved.grade_point, 10);
}

#[test]
fn half_credit_perfect_marks_end_to_end() {
    let record = marks(&[
        (MarkField::Quiz1, 5.0),
        (MarkField::Quiz2, 5.0),
        (MarkField::Test1, 25.0),
        (MarkField::Test2, 25.0),
        (MarkField::ExtraLearning, 20.0),
    ]);
    let cie = compute_cie(&record, SubjectCategory::HalfCredit);
    assert!((cie - 50.0).abs() < f64::EPSILON);

    let grade = compute_grade(cie, 50.0, 0.0, SubjectCategory::HalfCredit);
    assert_eq!(grade.grade_point, 10);
}

#[test]
fn out_of_range_input_does_not_panic() {
    let record = marks(&[(MarkField::Quiz1, 1e9), (MarkField::Test1, -1e9)]);
    for category in SubjectCategory::all() {
        let cie = compute_cie(&record, category);
        let _ = compute_grade(cie, 1e9, -1e9, category);
    }
}
