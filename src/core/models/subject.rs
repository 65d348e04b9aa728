//! Subject model

use super::SubjectCategory;
use serde::{Deserialize, Serialize};

/// Represents one subject in a curriculum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Stable subject identifier (e.g., "dsa-sem3")
    pub id: String,

    /// Subject name (e.g., "Operating Systems")
    pub name: String,

    /// Credit weight used in SGPA/CGPA aggregation
    pub credit: u32,

    /// Assessment category selecting the CIE formula and field set
    pub category: SubjectCategory,
}

impl Subject {
    /// Create a new subject
    ///
    /// # Arguments
    /// * `id` - Stable subject identifier
    /// * `name` - Full subject name
    /// * `credit` - Credit weight (positive)
    /// * `category` - Assessment category
    #[must_use]
    pub fn new(id: &str, name: &str, credit: u32, category: SubjectCategory) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            credit,
            category,
        }
    }

    /// Credit weight as a float, for weighted-average arithmetic
    #[must_use]
    pub fn credit_weight(&self) -> f64 {
        f64::from(self.credit)
    }
}
