//! Grade computation engine
//!
//! Pure arithmetic over raw marks: CIE scoring, final-grade derivation,
//! SEE requirement solving, and credit-weighted SGPA/CGPA aggregation.
//! Every function here is deterministic, performs no I/O, and holds no
//! state between calls; validation of input ranges belongs to the entry
//! layer, not here.

pub mod cie;
pub mod gpa;
pub mod grade;
pub mod see;

pub use cie::{compute_cie, compute_cie_with_rule, QuizTestRule, QUIZ_TEST_RULE};
pub use gpa::{aggregate, GpaEntry, GpaResult};
pub use grade::{
    compute_grade, compute_grade_with, grade_letter, Grade, GradingPolicy, HeavyLabScale,
};
pub use see::{
    best_achievable_grade, grade_at_minimum_see, see_required_for_grade,
    see_required_for_grade_with, see_requirements, see_requirements_with, SeeRequirement,
};

/// Guard subtracted before every ceiling so that float error on an exact
/// integer result does not bump it up by one.
pub const MARKS_EPSILON: f64 = 1e-5;

/// Ceiling-round a mark total to a whole number of marks.
#[must_use]
pub fn ceil_marks(value: f64) -> f64 {
    let rounded = (value - MARKS_EPSILON).ceil();
    // ceil of an exact zero lands on -0.0; normalize for display
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Ceiling-round a grade-point average to two decimals.
#[must_use]
pub fn ceil_hundredths(value: f64) -> f64 {
    let rounded = (value * 100.0 - MARKS_EPSILON).ceil() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
