//! Raw marks model
//!
//! A [`RawMarks`] record holds the user-entered assessment marks for one
//! subject. Every field is optional: an unset field is treated as zero by the
//! engine, which never faults on missing data.

use super::SubjectCategory;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one mark entry field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkField {
    /// First quiz.
    #[serde(rename = "q1")]
    Quiz1,
    /// Second quiz.
    #[serde(rename = "q2")]
    Quiz2,
    /// First internal test.
    #[serde(rename = "t1")]
    Test1,
    /// Second internal test.
    #[serde(rename = "t2")]
    Test2,
    /// MATLAB component (math subjects).
    Matlab,
    /// Lab internals (lab and heavy-lab subjects).
    Lab,
    /// Extra learning component.
    #[serde(rename = "el")]
    ExtraLearning,
    /// Basket-specific extra learning component.
    #[serde(rename = "basket-el")]
    BasketExtraLearning,
    /// Lab semester-end exam (heavy-lab subjects).
    #[serde(rename = "lab-see")]
    LabExam,
    /// Written semester-end exam.
    #[serde(rename = "see")]
    SemesterEnd,
}

impl MarkField {
    /// Stable tag used in marks files and CLI arguments.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Quiz1 => "q1",
            Self::Quiz2 => "q2",
            Self::Test1 => "t1",
            Self::Test2 => "t2",
            Self::Matlab => "matlab",
            Self::Lab => "lab",
            Self::ExtraLearning => "el",
            Self::BasketExtraLearning => "basket-el",
            Self::LabExam => "lab-see",
            Self::SemesterEnd => "see",
        }
    }

    /// All fields, in entry order.
    #[must_use]
    pub const fn all() -> [Self; 10] {
        [
            Self::Quiz1,
            Self::Quiz2,
            Self::Test1,
            Self::Test2,
            Self::Matlab,
            Self::Lab,
            Self::ExtraLearning,
            Self::BasketExtraLearning,
            Self::LabExam,
            Self::SemesterEnd,
        ]
    }
}

impl fmt::Display for MarkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for MarkField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "q1" | "quiz1" => Ok(Self::Quiz1),
            "q2" | "quiz2" => Ok(Self::Quiz2),
            "t1" | "test1" => Ok(Self::Test1),
            "t2" | "test2" => Ok(Self::Test2),
            "matlab" => Ok(Self::Matlab),
            "lab" => Ok(Self::Lab),
            "el" => Ok(Self::ExtraLearning),
            "basket-el" | "basketel" => Ok(Self::BasketExtraLearning),
            "lab-see" | "labsee" => Ok(Self::LabExam),
            "see" => Ok(Self::SemesterEnd),
            other => Err(format!("Unknown mark field: '{other}'")),
        }
    }
}

/// Maximum allowed value for a mark field within a category.
///
/// These are input-entry limits; the engine itself computes whatever it is
/// given and never clamps.
#[must_use]
pub fn max_value(field: MarkField, category: SubjectCategory) -> f64 {
    match field {
        MarkField::Quiz1 | MarkField::Quiz2 => {
            if category == SubjectCategory::HalfCredit {
                5.0
            } else {
                10.0
            }
        }
        MarkField::Test1 | MarkField::Test2 => {
            if category == SubjectCategory::HalfCredit {
                25.0
            } else {
                50.0
            }
        }
        MarkField::Matlab => 20.0,
        MarkField::Lab => {
            if category.is_heavy_lab() {
                50.0
            } else {
                30.0
            }
        }
        MarkField::ExtraLearning => match category {
            SubjectCategory::Math | SubjectCategory::HalfCredit | SubjectCategory::Basket => 20.0,
            SubjectCategory::Lab => 30.0,
            SubjectCategory::Regular | SubjectCategory::HeavyLab => 40.0,
        },
        MarkField::BasketExtraLearning => 20.0,
        MarkField::LabExam => 50.0,
        MarkField::SemesterEnd => {
            if category == SubjectCategory::HalfCredit {
                50.0
            } else {
                100.0
            }
        }
    }
}

/// Raw assessment marks for one subject. Unset fields are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMarks {
    /// First quiz marks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q1: Option<f64>,
    /// Second quiz marks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q2: Option<f64>,
    /// First internal test marks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t1: Option<f64>,
    /// Second internal test marks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t2: Option<f64>,
    /// MATLAB component marks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matlab: Option<f64>,
    /// Lab internals marks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lab: Option<f64>,
    /// Extra learning marks.
    #[serde(rename = "el", skip_serializing_if = "Option::is_none")]
    pub extra_learning: Option<f64>,
    /// Basket extra learning marks.
    #[serde(rename = "basket-el", skip_serializing_if = "Option::is_none")]
    pub basket_extra_learning: Option<f64>,
    /// Lab semester-end exam marks.
    #[serde(rename = "lab-see", skip_serializing_if = "Option::is_none")]
    pub lab_exam: Option<f64>,
    /// Written semester-end exam marks.
    #[serde(rename = "see", skip_serializing_if = "Option::is_none")]
    pub semester_end: Option<f64>,
}

impl RawMarks {
    /// Create an empty record with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a field, with unset fields reading as zero.
    #[must_use]
    pub fn value(&self, field: MarkField) -> f64 {
        self.get(field).unwrap_or(0.0)
    }

    /// Raw optional value of a field.
    #[must_use]
    pub const fn get(&self, field: MarkField) -> Option<f64> {
        match field {
            MarkField::Quiz1 => self.q1,
            MarkField::Quiz2 => self.q2,
            MarkField::Test1 => self.t1,
            MarkField::Test2 => self.t2,
            MarkField::Matlab => self.matlab,
            MarkField::Lab => self.lab,
            MarkField::ExtraLearning => self.extra_learning,
            MarkField::BasketExtraLearning => self.basket_extra_learning,
            MarkField::LabExam => self.lab_exam,
            MarkField::SemesterEnd => self.semester_end,
        }
    }

    /// Set a field value.
    pub fn set(&mut self, field: MarkField, value: f64) {
        let slot = match field {
            MarkField::Quiz1 => &mut self.q1,
            MarkField::Quiz2 => &mut self.q2,
            MarkField::Test1 => &mut self.t1,
            MarkField::Test2 => &mut self.t2,
            MarkField::Matlab => &mut self.matlab,
            MarkField::Lab => &mut self.lab,
            MarkField::ExtraLearning => &mut self.extra_learning,
            MarkField::BasketExtraLearning => &mut self.basket_extra_learning,
            MarkField::LabExam => &mut self.lab_exam,
            MarkField::SemesterEnd => &mut self.semester_end,
        };
        *slot = Some(value);
    }

    /// Clear a field back to unset.
    pub fn clear(&mut self, field: MarkField) {
        let slot = match field {
            MarkField::Quiz1 => &mut self.q1,
            MarkField::Quiz2 => &mut self.q2,
            MarkField::Test1 => &mut self.t1,
            MarkField::Test2 => &mut self.t2,
            MarkField::Matlab => &mut self.matlab,
            MarkField::Lab => &mut self.lab,
            MarkField::ExtraLearning => &mut self.extra_learning,
            MarkField::BasketExtraLearning => &mut self.basket_extra_learning,
            MarkField::LabExam => &mut self.lab_exam,
            MarkField::SemesterEnd => &mut self.semester_end,
        };
        *slot = None;
    }

    /// Whether no field has been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.q1.is_none()
            && self.q2.is_none()
            && self.t1.is_none()
            && self.t2.is_none()
            && self.matlab.is_none()
            && self.lab.is_none()
            && self.extra_learning.is_none()
            && self.basket_extra_learning.is_none()
            && self.lab_exam.is_none()
            && self.semester_end.is_none()
    }

    /// Whether any semester-end component (written or lab exam) is recorded.
    #[must_use]
    pub const fn has_exam_marks(&self) -> bool {
        self.semester_end.is_some() || self.lab_exam.is_some()
    }
}
