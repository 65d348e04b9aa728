//! Marks file persistence
//!
//! Raw marks are kept in a TOML file per student: one `[subjects.<id>]`
//! table per subject, a curriculum slug tying the file to a subject set,
//! and an optional first-year CGPA carried as a pre-weighted block. Saving
//! validates nothing; recording a mark through [`MarksFile::record`] checks
//! the field's entry limit so bad values are caught where they are typed,
//! while anything already on disk is computed as-is.

use crate::core::models::curriculum::find_set;
use crate::core::models::marks::max_value;
use crate::core::models::{MarkField, RawMarks, Subject, SubjectSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Persisted raw marks for one student and one subject set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarksFile {
    /// Slug of the subject set these marks belong to (e.g., "sem3-ise")
    pub curriculum: String,

    /// First-year CGPA, folded into cumulative aggregation as a 40-credit block
    // Scalar field stays ahead of the subject tables so TOML serialization
    // emits it at the top level
    #[serde(default, rename = "first-year-cgpa", skip_serializing_if = "Option::is_none")]
    pub first_year_cgpa: Option<f64>,

    /// Raw marks per subject id
    #[serde(default)]
    pub subjects: BTreeMap<String, RawMarks>,
}

impl MarksFile {
    /// Create an empty marks file for a curriculum
    #[must_use]
    pub fn new(curriculum: &str) -> Self {
        Self {
            curriculum: curriculum.to_string(),
            subjects: BTreeMap::new(),
            first_year_cgpa: None,
        }
    }

    /// Load a marks file from disk
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid marks TOML
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read marks file {}: {e}", path.display()))?;
        toml::from_str(&content)
            .map_err(|e| format!("Failed to parse marks file {}: {e}", path.display()))
    }

    /// Save the marks file to disk, creating parent directories if needed
    ///
    /// # Errors
    /// Returns an error if serialization or writing fails
    pub fn save(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize marks: {e}"))?;
        fs::write(path, toml_str)
            .map_err(|e| format!("Failed to write marks file {}: {e}", path.display()))
    }

    /// Resolve the subject set this file's curriculum slug refers to
    ///
    /// # Errors
    /// Returns an error naming the unknown slug
    pub fn subject_set(&self) -> Result<SubjectSet, String> {
        find_set(&self.curriculum)
            .ok_or_else(|| format!("Unknown curriculum: '{}'", self.curriculum))
    }

    /// Marks recorded for a subject, if any
    #[must_use]
    pub fn marks(&self, subject_id: &str) -> Option<&RawMarks> {
        self.subjects.get(subject_id)
    }

    /// Marks for a subject, empty when none are recorded
    #[must_use]
    pub fn marks_or_default(&self, subject_id: &str) -> RawMarks {
        self.subjects.get(subject_id).cloned().unwrap_or_default()
    }

    /// Record one mark for a subject, validating the entry limit
    ///
    /// # Errors
    /// Returns an error if the value is negative or exceeds the field's
    /// maximum for the subject's category
    pub fn record(&mut self, subject: &Subject, field: MarkField, value: f64) -> Result<(), String> {
        if value < 0.0 {
            return Err(format!(
                "Marks cannot be negative: {value} for {field} in '{}'",
                subject.id
            ));
        }
        let limit = max_value(field, subject.category);
        if value > limit {
            return Err(format!(
                "Maximum for {field} in '{}' is {limit}, got {value}",
                subject.id
            ));
        }

        self.subjects
            .entry(subject.id.clone())
            .or_default()
            .set(field, value);
        Ok(())
    }

    /// Remove all recorded marks and the first-year block
    pub fn reset(&mut self) {
        self.subjects.clear();
        self.first_year_cgpa = None;
    }
}
