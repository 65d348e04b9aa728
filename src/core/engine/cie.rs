//! Continuous internal evaluation scoring
//!
//! Each subject category has its own composition of quizzes, tests, lab
//! internals and extra-learning components. Missing fields read as zero and
//! the result is always ceiling-rounded to a whole mark; values outside the
//! nominal field maxima are computed as-is (range enforcement is an entry
//! concern).

use super::ceil_marks;
use crate::core::models::{MarkField, RawMarks, SubjectCategory};

/// How the two quizzes (and, symmetrically, the two tests) fold into a
/// single mark in categories that use a combined quiz/test figure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QuizTestRule {
    /// Straight sum of both attempts.
    Sum,
    /// Mean of both attempts.
    Average,
    /// Better of the two attempts, counted at full weight.
    BestOfTwo,
}

impl QuizTestRule {
    /// Combine two attempt marks under this rule.
    #[must_use]
    pub fn combine(self, first: f64, second: f64) -> f64 {
        match self {
            Self::Sum => first + second,
            Self::Average => (first + second) / 2.0,
            Self::BestOfTwo => first.max(second),
        }
    }
}

/// Active quiz/test combination rule.
///
/// The department has published both sum and average variants of this rule;
/// swapping the policy is a one-line change here.
pub const QUIZ_TEST_RULE: QuizTestRule = QuizTestRule::Average;

/// Compute the CIE score for one subject.
///
/// Uses the crate-wide [`QUIZ_TEST_RULE`]. The result is a whole number of
/// marks out of the category's CIE maximum (50, 100 or 150).
#[must_use]
pub fn compute_cie(marks: &RawMarks, category: SubjectCategory) -> f64 {
    compute_cie_with_rule(marks, category, QUIZ_TEST_RULE)
}

/// Compute the CIE score under an explicit quiz/test combination rule.
#[must_use]
pub fn compute_cie_with_rule(
    marks: &RawMarks,
    category: SubjectCategory,
    rule: QuizTestRule,
) -> f64 {
    let q1 = marks.value(MarkField::Quiz1);
    let q2 = marks.value(MarkField::Quiz2);
    let t1 = marks.value(MarkField::Test1);
    let t2 = marks.value(MarkField::Test2);
    let matlab = marks.value(MarkField::Matlab);
    let lab = marks.value(MarkField::Lab);
    let el = marks.value(MarkField::ExtraLearning);
    let basket_el = marks.value(MarkField::BasketExtraLearning);

    let raw = match category {
        // Quiz (10) + Test (50) + MATLAB (20) + EL (20) = 100
        SubjectCategory::Math => rule.combine(q1, q2) + rule.combine(t1, t2) + matlab + el,
        // Quiz/test raw total out of 120 reduced to 40; Lab (30) + EL (30) = 60
        SubjectCategory::Lab => (q1 + q2 + t1 + t2) / 120.0 * 40.0 + lab + el,
        // Quiz (10) + Test (50) + EL (40) = 100
        SubjectCategory::Regular => rule.combine(q1, q2) + rule.combine(t1, t2) + el,
        // Quiz/test raw total out of 120 reduced to 60; EL (20) + Basket EL (20) = 40
        SubjectCategory::Basket => (q1 + q2 + t1 + t2) / 120.0 * 60.0 + el + basket_el,
        // Tests (100) weighted to 40 + quizzes (20) + Lab (50) + EL (40) = 150
        SubjectCategory::HeavyLab => (t1 + t2) * 0.4 + q1 + q2 + lab + el,
        // Quizzes (10) + tests (50) reduced to 20 + EL (20) = 50
        SubjectCategory::HalfCredit => q1 + q2 + (t1 + t2) / 50.0 * 20.0 + el,
    };

    ceil_marks(raw)
}
