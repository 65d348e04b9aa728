//! Credit-weighted grade point aggregation
//!
//! One function serves both SGPA (over a subject set) and CGPA (over sets,
//! or over a mix of subjects and pre-weighted blocks such as a prior year's
//! CGPA counted at 40 credits). Ungraded entries are excluded from both the
//! numerator and the denominator; the result records how many credits were
//! actually graded so callers can surface incomplete sets.

use super::ceil_hundredths;
use std::fmt;

/// One aggregation entry: a grade point (or none, if ungraded) and its
/// credit weight.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GpaEntry {
    /// Grade point earned, or `None` when the subject has no recorded grade.
    pub grade_point: Option<f64>,
    /// Credit weight.
    pub credit: f64,
}

impl GpaEntry {
    /// Entry for a graded subject.
    #[must_use]
    pub const fn graded(grade_point: f64, credit: f64) -> Self {
        Self {
            grade_point: Some(grade_point),
            credit,
        }
    }

    /// Entry for a subject with no recorded grade.
    #[must_use]
    pub const fn ungraded(credit: f64) -> Self {
        Self {
            grade_point: None,
            credit,
        }
    }

    /// Entry for a pre-weighted block: an already-computed SGPA/CGPA figure
    /// standing in for `credits` worth of subjects.
    #[must_use]
    pub const fn block(value: f64, credits: f64) -> Self {
        Self::graded(value, credits)
    }
}

/// Result of a credit-weighted aggregation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GpaResult {
    /// Aggregate value, ceiling-rounded to two decimals. Zero when nothing
    /// was graded.
    pub value: f64,
    /// Credits that carried a grade and entered the average.
    pub graded_credits: f64,
    /// Total credits across all entries, graded or not.
    pub total_credits: f64,
}

impl GpaResult {
    /// Whether every entry carried a grade.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        (self.total_credits - self.graded_credits).abs() < f64::EPSILON
    }

    /// Whether no entry carried a grade (the zero value is a sentinel, not
    /// a computed average).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graded_credits <= 0.0
    }
}

impl fmt::Display for GpaResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.value)
    }
}

/// Aggregate grade points over entries, weighted by credit.
///
/// Ungraded entries are skipped entirely. An aggregation with no graded
/// credits yields a zero value rather than dividing by zero; check
/// [`GpaResult::is_empty`] to tell that apart from a genuine 0.00.
#[must_use]
pub fn aggregate(entries: &[GpaEntry]) -> GpaResult {
    let mut weighted_sum = 0.0;
    let mut graded_credits = 0.0;
    let mut total_credits = 0.0;

    for entry in entries {
        total_credits += entry.credit;
        if let Some(grade_point) = entry.grade_point {
            weighted_sum += grade_point * entry.credit;
            graded_credits += entry.credit;
        }
    }

    let value = if graded_credits > 0.0 {
        ceil_hundredths(weighted_sum / graded_credits)
    } else {
        0.0
    };

    GpaResult {
        value,
        graded_credits,
        total_credits,
    }
}
