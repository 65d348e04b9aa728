//! CLI command handlers

pub mod cie;
pub mod config;
pub mod gpa;
pub mod grade;
pub mod report;
pub mod see;

use grade_card::engine::{GradingPolicy, HeavyLabScale};

/// Grading policy selected by the `--halved-scale` flag.
#[must_use]
pub fn policy_from(halved_scale: bool) -> GradingPolicy {
    if halved_scale {
        GradingPolicy::with_heavy_lab_scale(HeavyLabScale::Halved150)
    } else {
        GradingPolicy::default()
    }
}
