//! Semester-end exam requirement solving
//!
//! The inverse of grade derivation: given an achieved CIE, how many SEE
//! marks are needed for each target grade point. The solver shares its
//! boundary conventions (ceiling rounding, heavy-lab band table) with the
//! forward functions so the two can never disagree at band edges.

use super::grade::{
    heavy_lab_band_minimum, GradingPolicy, HeavyLabScale, HALF_CREDIT_MIN_SEE,
    HEAVY_LAB_MIN_EXAM, MIN_PASS_SEE,
};
use super::{compute_grade_with, grade_letter, Grade};
use crate::core::models::SubjectCategory;

/// One row of a SEE requirements table.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SeeRequirement {
    /// Target grade point.
    pub grade_point: u8,
    /// Letter for the target grade point.
    pub letter: &'static str,
    /// Minimum whole SEE marks that reach the target.
    pub required: f64,
}

/// Minimum SEE marks needed for a target grade point, under the default
/// policy and with no lab-exam contribution.
///
/// The result may be negative (the grade is already guaranteed) or exceed
/// the category's SEE maximum (the grade is out of reach); callers filter
/// to the feasible window, e.g. via [`see_requirements`].
#[must_use]
pub fn see_required_for_grade(cie: f64, target_grade_point: u8, category: SubjectCategory) -> f64 {
    see_required_for_grade_with(GradingPolicy::default(), cie, target_grade_point, 0.0, category)
}

/// Minimum SEE marks needed for a target grade point under an explicit
/// policy, net of an already-known lab-exam contribution.
///
/// Inverts the forward total formulas. For halved totals the bound is
/// `(target - 1) * band - 1 - cie`: the `-1` accounts for the ceiling in
/// `ceil((cie + see) / 2)`, which first reaches the band boundary one mark
/// earlier than the un-rounded mean would. Heavy-lab targets read the same
/// band table the forward function grades against.
#[must_use]
pub fn see_required_for_grade_with(
    policy: GradingPolicy,
    cie: f64,
    target_grade_point: u8,
    lab_exam: f64,
    category: SubjectCategory,
) -> f64 {
    let target = f64::from(target_grade_point);

    match category {
        SubjectCategory::HeavyLab => match policy.heavy_lab_scale {
            HeavyLabScale::Combined300 => {
                let band_min = heavy_lab_band_minimum(target_grade_point)
                    .unwrap_or((target - 1.0) * 30.0);
                band_min - cie - lab_exam
            }
            HeavyLabScale::Halved150 => (target - 1.0) * 20.0 - 1.0 - cie - lab_exam,
        },
        SubjectCategory::HalfCredit => (target - 1.0) * 10.0 - 1.0 - cie,
        _ => (target - 1.0) * 20.0 - 1.0 - cie,
    }
}

/// Feasible SEE window for a category: the smallest SEE that can still pass
/// and the largest SEE that can still be scored.
///
/// For heavy-lab subjects the lower edge is the 53-mark combined exam
/// minimum net of the recorded lab exam; once lab marks are in, the upper
/// edge shrinks to the written paper's 100.
fn feasible_window(category: SubjectCategory, lab_exam: f64) -> (f64, f64) {
    match category {
        SubjectCategory::HeavyLab => {
            let min = (HEAVY_LAB_MIN_EXAM - lab_exam).max(0.0);
            let max = if lab_exam > 0.0 {
                100.0
            } else {
                category.see_maximum()
            };
            (min, max)
        }
        SubjectCategory::HalfCredit => (HALF_CREDIT_MIN_SEE, category.see_maximum()),
        _ => (MIN_PASS_SEE, category.see_maximum()),
    }
}

/// Requirements table under the default policy: for grade points 10 down
/// to 4, the minimum SEE marks, filtered to the feasible window.
#[must_use]
pub fn see_requirements(cie: f64, lab_exam: f64, category: SubjectCategory) -> Vec<SeeRequirement> {
    see_requirements_with(GradingPolicy::default(), cie, lab_exam, category)
}

/// Requirements table under an explicit policy.
#[must_use]
pub fn see_requirements_with(
    policy: GradingPolicy,
    cie: f64,
    lab_exam: f64,
    category: SubjectCategory,
) -> Vec<SeeRequirement> {
    let (min_see, max_see) = feasible_window(category, lab_exam);

    (4..=10u8)
        .rev()
        .map(|gp| SeeRequirement {
            grade_point: gp,
            letter: grade_letter(gp),
            required: see_required_for_grade_with(policy, cie, gp, lab_exam, category),
        })
        .filter(|req| req.required >= min_see && req.required <= max_see)
        .collect()
}

/// Highest grade still achievable: the first feasible requirements row.
#[must_use]
pub fn best_achievable_grade(
    cie: f64,
    lab_exam: f64,
    category: SubjectCategory,
) -> Option<SeeRequirement> {
    see_requirements(cie, lab_exam, category).first().copied()
}

/// Grade earned by scoring exactly the minimum passing SEE.
///
/// Returns `None` for heavy-lab subjects, which have no standalone written
/// minimum (their threshold is on the combined exam total).
#[must_use]
pub fn grade_at_minimum_see(cie: f64, category: SubjectCategory) -> Option<Grade> {
    let min_see = match category {
        SubjectCategory::HeavyLab => return None,
        SubjectCategory::HalfCredit => HALF_CREDIT_MIN_SEE,
        _ => MIN_PASS_SEE,
    };

    Some(compute_grade_with(
        GradingPolicy::default(),
        cie,
        min_see,
        0.0,
        category,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::compute_grade;

    #[test]
    fn standard_requirement_matches_forward_boundary() {
        // CIE 80, target 9: need ceil((80+see)/2) >= 80, so see >= 79
        let required = see_required_for_grade(80.0, 9, SubjectCategory::Regular);
        assert!((required - 79.0).abs() < f64::EPSILON);

        // One below the bound misses the grade; the bound itself reaches it
        assert_eq!(compute_grade(80.0, 78.0, 0.0, SubjectCategory::Regular).grade_point, 8);
        assert_eq!(compute_grade(80.0, 79.0, 0.0, SubjectCategory::Regular).grade_point, 9);
    }

    #[test]
    fn requirement_can_be_negative_when_guaranteed() {
        // CIE 100: grade point 4 needs ceil((100+see)/2) >= 30 -> any pass-level SEE
        let required = see_required_for_grade(100.0, 4, SubjectCategory::Regular);
        assert!(required < 0.0);
    }

    #[test]
    fn requirement_can_exceed_maximum_when_unreachable() {
        let required = see_required_for_grade(20.0, 10, SubjectCategory::Regular);
        assert!(required > 100.0);
    }

    #[test]
    fn heavy_lab_requirement_reads_band_table() {
        // O band is 270: CIE 140 + lab 45 leaves 85 on the written paper
        let required = see_required_for_grade_with(
            GradingPolicy::default(),
            140.0,
            10,
            45.0,
            SubjectCategory::HeavyLab,
        );
        assert!((required - 85.0).abs() < f64::EPSILON);

        assert_eq!(
            compute_grade(140.0, 85.0, 45.0, SubjectCategory::HeavyLab).grade_point,
            10
        );
        assert_eq!(
            compute_grade(140.0, 84.0, 45.0, SubjectCategory::HeavyLab).grade_point,
            9
        );
    }

    #[test]
    fn requirements_table_is_sorted_and_feasible() {
        let rows = see_requirements(75.0, 0.0, SubjectCategory::Regular);
        assert!(!rows.is_empty());

        let mut last_gp = 11;
        for row in &rows {
            assert!(row.grade_point < last_gp, "descending grade order");
            last_gp = row.grade_point;
            assert!(row.required >= MIN_PASS_SEE);
            assert!(row.required <= 100.0);
            assert!(!row.letter.is_empty());
        }
    }

    #[test]
    fn requirements_table_drops_unreachable_grades() {
        // CIE 40: an O needs 139 SEE, which cannot be scored
        let rows = see_requirements(40.0, 0.0, SubjectCategory::Regular);
        assert!(rows.iter().all(|r| r.grade_point < 10));
    }

    #[test]
    fn best_achievable_is_highest_feasible() {
        let best = best_achievable_grade(75.0, 0.0, SubjectCategory::Regular).expect("feasible");
        // CIE 75: O needs 104 (unreachable), A+ needs 84
        assert_eq!(best.grade_point, 9);
        assert!((best.required - 84.0).abs() < f64::EPSILON);
    }

    #[test]
    fn heavy_lab_window_shrinks_with_lab_marks() {
        // Without lab marks the written+lab range runs to 150
        let rows = see_requirements(120.0, 0.0, SubjectCategory::HeavyLab);
        assert!(rows.iter().any(|r| r.required > 100.0));

        // With lab marks recorded, only the 100-mark paper remains
        let rows = see_requirements(120.0, 40.0, SubjectCategory::HeavyLab);
        assert!(rows.iter().all(|r| r.required <= 100.0));
    }

    #[test]
    fn heavy_lab_rows_respect_exam_minimum() {
        // Every listed requirement, plus the lab marks, must clear the
        // 53-mark combined exam threshold the forward function enforces
        let lab_exam = 20.0;
        for row in see_requirements(140.0, lab_exam, SubjectCategory::HeavyLab) {
            let grade =
                compute_grade(140.0, row.required, lab_exam, SubjectCategory::HeavyLab);
            assert!(
                !grade.is_fail(),
                "row for grade {} fails forward check",
                row.grade_point
            );
            assert!(grade.grade_point >= row.grade_point);
        }
    }

    #[test]
    fn minimum_see_grade_for_standard_subjects() {
        // CIE 85, SEE 35 -> total 60 -> grade 7
        let grade = grade_at_minimum_see(85.0, SubjectCategory::Regular).expect("standard");
        assert_eq!(grade.grade_point, 7);

        assert!(grade_at_minimum_see(120.0, SubjectCategory::HeavyLab).is_none());
    }

    #[test]
    fn half_credit_requirement_uses_halved_bands() {
        // CIE 40/50, target 10: need ceil((40+see)/2) >= 45 -> see >= 49
        let required = see_required_for_grade(40.0, 10, SubjectCategory::HalfCredit);
        assert!((required - 49.0).abs() < f64::EPSILON);
        assert_eq!(
            compute_grade(40.0, 49.0, 0.0, SubjectCategory::HalfCredit).grade_point,
            10
        );
        assert_eq!(
            compute_grade(40.0, 48.0, 0.0, SubjectCategory::HalfCredit).grade_point,
            9
        );
    }

    #[test]
    fn solver_is_a_true_lower_bound() {
        // Forward/inverse consistency across a coarse grid
        for cie in (40..=100).step_by(7) {
            for see in (35..=100).step_by(9) {
                let grade = compute_grade(
                    f64::from(cie),
                    f64::from(see),
                    0.0,
                    SubjectCategory::Regular,
                );
                if grade.grade_point >= 4 {
                    let required = see_required_for_grade(
                        f64::from(cie),
                        grade.grade_point,
                        SubjectCategory::Regular,
                    );
                    assert!(
                        f64::from(see) >= required,
                        "cie={cie} see={see} grade={} required={required}",
                        grade.grade_point
                    );
                }
            }
        }
    }
}
