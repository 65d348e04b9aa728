//! Subject category model
//!
//! The assessment structure of a subject is selected by its category: which
//! mark fields exist, which CIE formula applies, and what the CIE/SEE maxima
//! are. Categories form a closed set so an unrecognized tag is a parse error
//! instead of a silently-zero result.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Assessment category of a subject.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubjectCategory {
    /// Lecture subject with a mathematical-software component (MATLAB).
    Math,
    /// Lecture subject with a 60-mark lab + extra-learning block; quiz/test
    /// marks are scaled down to 40.
    Lab,
    /// Plain lecture subject: quizzes, tests and extra learning only.
    Regular,
    /// Elective "basket" subject: quiz/test scaled to 60, two 20-mark
    /// extra-learning components.
    Basket,
    /// Heavy-lab subject (DSA/OS/ADLD style): 150-mark CIE and a separate
    /// 50-mark lab exam alongside the written SEE.
    HeavyLab,
    /// Half-credit subject assessed out of 50.
    HalfCredit,
}

impl SubjectCategory {
    /// Maximum CIE score for this category.
    #[must_use]
    pub const fn cie_maximum(self) -> f64 {
        match self {
            Self::Math | Self::Lab | Self::Regular | Self::Basket => 100.0,
            Self::HeavyLab => 150.0,
            Self::HalfCredit => 50.0,
        }
    }

    /// Maximum SEE score for this category.
    ///
    /// For heavy-lab subjects this is the combined maximum of the written
    /// exam (100) and the lab exam (50).
    #[must_use]
    pub const fn see_maximum(self) -> f64 {
        match self {
            Self::Math | Self::Lab | Self::Regular | Self::Basket => 100.0,
            Self::HeavyLab => 150.0,
            Self::HalfCredit => 50.0,
        }
    }

    /// Maximum lab-exam score, for categories that have a separate lab exam.
    #[must_use]
    pub const fn lab_exam_maximum(self) -> Option<f64> {
        match self {
            Self::HeavyLab => Some(50.0),
            _ => None,
        }
    }

    /// Whether this category uses the 150-mark CIE / lab-exam regime.
    #[must_use]
    pub const fn is_heavy_lab(self) -> bool {
        matches!(self, Self::HeavyLab)
    }

    /// Stable tag used in marks files and CLI arguments.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Math => "math",
            Self::Lab => "lab",
            Self::Regular => "regular",
            Self::Basket => "basket",
            Self::HeavyLab => "heavy-lab",
            Self::HalfCredit => "half-credit",
        }
    }

    /// All categories, in display order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Math,
            Self::Lab,
            Self::Regular,
            Self::Basket,
            Self::HeavyLab,
            Self::HalfCredit,
        ]
    }
}

impl fmt::Display for SubjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for SubjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "math" => Ok(Self::Math),
            "lab" => Ok(Self::Lab),
            "regular" => Ok(Self::Regular),
            "basket" => Ok(Self::Basket),
            "heavy-lab" | "dsa-lab" | "ece-lab" => Ok(Self::HeavyLab),
            "half-credit" | "50-mark" => Ok(Self::HalfCredit),
            other => Err(format!("Unknown subject category: '{other}'")),
        }
    }
}
