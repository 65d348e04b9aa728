//! Final grade derivation
//!
//! Combines a CIE score with semester-end exam marks into a grade point and
//! letter. Standard subjects grade on a halved 100-point total; heavy-lab
//! subjects grade on a combined 300-point total against a fixed band table.
//! Both regimes carry independent minimum-pass thresholds: a weak internal
//! score cannot be compensated by a strong exam, and vice versa.

use super::ceil_marks;
use crate::core::models::SubjectCategory;

/// Minimum CIE for a 100-point subject to pass (inclusive: exactly 40 passes).
pub const MIN_PASS_CIE: f64 = 40.0;

/// Minimum written SEE for a 100-point subject to pass (inclusive: exactly 35 passes).
pub const MIN_PASS_SEE: f64 = 35.0;

/// Minimum CIE for a heavy-lab subject to pass (40% of 150).
pub const HEAVY_LAB_MIN_CIE: f64 = 60.0;

/// Minimum combined exam marks (lab exam + written SEE) for a heavy-lab
/// subject, applied once any exam component has been entered (35% of 150,
/// rounded up).
pub const HEAVY_LAB_MIN_EXAM: f64 = 53.0;

/// Minimum CIE for a half-credit subject to pass (40% of 50).
pub const HALF_CREDIT_MIN_CIE: f64 = 20.0;

/// Minimum SEE for a half-credit subject to pass (35% of 50, rounded up).
pub const HALF_CREDIT_MIN_SEE: f64 = 18.0;

/// Grade bands for the heavy-lab combined 300-point total: grade point and
/// the minimum total that earns it. Note the P band starts at 100, not at
/// the 90 a uniform 30-mark band would give.
pub const HEAVY_LAB_BANDS: [(u8, f64); 7] = [
    (10, 270.0),
    (9, 240.0),
    (8, 210.0),
    (7, 180.0),
    (6, 150.0),
    (5, 120.0),
    (4, 100.0),
];

/// Minimum combined total that earns a grade point on the heavy-lab scale.
#[must_use]
pub fn heavy_lab_band_minimum(grade_point: u8) -> Option<f64> {
    HEAVY_LAB_BANDS
        .iter()
        .find(|&&(gp, _)| gp == grade_point)
        .map(|&(_, min)| min)
}

/// Reporting scale for heavy-lab subjects.
///
/// The grading policy circulates in two renditions: one states bands over
/// the combined 300-point total, the other halves the total back to 150 and
/// reuses the standard 10-marks-per-point formula. Both are implemented;
/// the combined-total convention is the default because the published band
/// boundaries are written against it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HeavyLabScale {
    /// Grade on the combined total out of 300 using [`HEAVY_LAB_BANDS`].
    #[default]
    Combined300,
    /// Halve the combined total to 150 and grade 10 marks per point.
    Halved150,
}

/// Policy knobs for grade derivation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GradingPolicy {
    /// Reporting scale for heavy-lab subjects.
    pub heavy_lab_scale: HeavyLabScale,
}

impl GradingPolicy {
    /// Policy using the given heavy-lab scale.
    #[must_use]
    pub const fn with_heavy_lab_scale(scale: HeavyLabScale) -> Self {
        Self {
            heavy_lab_scale: scale,
        }
    }
}

/// Outcome of grading one subject.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Grade {
    /// Grade point, 0 (fail) through 10.
    pub grade_point: u8,
    /// Reported total the grade point was read from (scale depends on the
    /// category and policy).
    pub total: f64,
}

impl Grade {
    /// Letter for this grade point.
    #[must_use]
    pub fn letter(&self) -> &'static str {
        grade_letter(self.grade_point)
    }

    /// Whether this grade is a fail.
    #[must_use]
    pub const fn is_fail(&self) -> bool {
        self.grade_point == 0
    }
}

/// Letter for a grade point. Total over all points 0-10; anything outside
/// the grading scale maps to `F`.
#[must_use]
pub const fn grade_letter(grade_point: u8) -> &'static str {
    match grade_point {
        10 => "O",
        9 => "A+",
        8 => "A",
        7 => "B+",
        6 => "B",
        5 => "C",
        4 => "P",
        _ => "F",
    }
}

/// Derive the final grade under the default [`GradingPolicy`].
///
/// # Arguments
/// * `cie` - CIE score (already ceiling-rounded)
/// * `see` - Written semester-end exam marks
/// * `lab_exam` - Lab exam marks; only meaningful for heavy-lab subjects, 0 otherwise
/// * `category` - Subject category selecting the grading regime
#[must_use]
pub fn compute_grade(cie: f64, see: f64, lab_exam: f64, category: SubjectCategory) -> Grade {
    compute_grade_with(GradingPolicy::default(), cie, see, lab_exam, category)
}

/// Derive the final grade under an explicit policy.
#[must_use]
pub fn compute_grade_with(
    policy: GradingPolicy,
    cie: f64,
    see: f64,
    lab_exam: f64,
    category: SubjectCategory,
) -> Grade {
    match category {
        SubjectCategory::HeavyLab => heavy_lab_grade(policy.heavy_lab_scale, cie, see, lab_exam),
        SubjectCategory::HalfCredit => {
            halved_total_grade(cie, see, 5.0, HALF_CREDIT_MIN_CIE, HALF_CREDIT_MIN_SEE)
        }
        _ => halved_total_grade(cie, see, 10.0, MIN_PASS_CIE, MIN_PASS_SEE),
    }
}

/// Standard regime: total is the mean of CIE and SEE, ceiling-rounded, with
/// one grade point per `band_width` marks of total.
fn halved_total_grade(cie: f64, see: f64, band_width: f64, min_cie: f64, min_see: f64) -> Grade {
    let total = ceil_marks((cie + see) / 2.0);

    if cie < min_cie || see < min_see {
        return Grade {
            grade_point: 0,
            total,
        };
    }

    Grade {
        grade_point: point_from_total(total, band_width),
        total,
    }
}

fn heavy_lab_grade(scale: HeavyLabScale, cie: f64, see: f64, lab_exam: f64) -> Grade {
    let combined = cie + lab_exam + see;
    let exam_total = lab_exam + see;
    let failed =
        cie < HEAVY_LAB_MIN_CIE || (exam_total > 0.0 && exam_total < HEAVY_LAB_MIN_EXAM);

    match scale {
        HeavyLabScale::Combined300 => {
            let total = ceil_marks(combined);
            let grade_point = if failed { 0 } else { banded_point(total) };
            Grade { grade_point, total }
        }
        HeavyLabScale::Halved150 => {
            let total = ceil_marks(combined / 2.0);
            let grade_point = if failed {
                0
            } else {
                point_from_total(total, 10.0)
            };
            Grade { grade_point, total }
        }
    }
}

/// Largest banded grade point earned by a combined heavy-lab total.
fn banded_point(total: f64) -> u8 {
    HEAVY_LAB_BANDS
        .iter()
        .find(|&&(_, min)| total >= min)
        .map_or(0, |&(gp, _)| gp)
}

/// `floor(total / band_width) + 1`, clamped to the 0-10 grade scale.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn point_from_total(total: f64, band_width: f64) -> u8 {
    let raw = (total / band_width).floor() + 1.0;
    raw.clamp(0.0, 10.0) as u8
}
