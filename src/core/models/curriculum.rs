//! Static curriculum tables
//!
//! Subject metadata is build-time configuration: the first-year physics and
//! chemistry cycles and the third-semester subject sets per branch. Each set
//! is one SGPA computation unit; the first-year CGPA enters a cumulative
//! aggregation as a pre-weighted 40-credit block.

use super::{Subject, SubjectCategory};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Credits represented by the first-year CGPA when it is folded into a
/// cumulative aggregation as a single block.
pub const FIRST_YEAR_BLOCK_CREDITS: f64 = 40.0;

/// A named group of subjects forming one SGPA computation unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectSet {
    /// Stable slug for the set (e.g., "physics-cycle", "sem3-ece")
    pub slug: String,

    /// Human-readable set name (e.g., "Physics Cycle")
    pub name: String,

    /// Subjects in the set
    pub subjects: Vec<Subject>,
}

impl SubjectSet {
    /// Create a new subject set
    #[must_use]
    pub fn new(slug: &str, name: &str, subjects: Vec<Subject>) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
            subjects,
        }
    }

    /// Total credits across the set
    #[must_use]
    pub fn total_credits(&self) -> u32 {
        self.subjects.iter().map(|s| s.credit).sum()
    }

    /// Look up a subject by id
    #[must_use]
    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }
}

/// Third-semester branch
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Branch {
    /// CSE core cluster (Core + CD + CY)
    CseCore,
    /// CSE (AI & ML)
    CseAiml,
    /// Information Science
    Ise,
    /// Electronics & Communication
    Ece,
    /// Electronics & Telecommunication
    Ete,
    /// Electrical & Electronics
    Eee,
    /// Electronics & Instrumentation
    Eie,
}

impl Branch {
    /// Stable slug used in set lookups and CLI arguments.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::CseCore => "cse-core",
            Self::CseAiml => "cse-aiml",
            Self::Ise => "ise",
            Self::Ece => "ece",
            Self::Ete => "ete",
            Self::Eee => "eee",
            Self::Eie => "eie",
        }
    }

    /// All branches.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::CseCore,
            Self::CseAiml,
            Self::Ise,
            Self::Ece,
            Self::Ete,
            Self::Eee,
            Self::Eie,
        ]
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Branch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cse-core" | "cse" => Ok(Self::CseCore),
            "cse-aiml" | "aiml" => Ok(Self::CseAiml),
            "ise" => Ok(Self::Ise),
            "ece" => Ok(Self::Ece),
            "ete" => Ok(Self::Ete),
            "eee" => Ok(Self::Eee),
            "eie" => Ok(Self::Eie),
            other => Err(format!("Unknown branch: '{other}'")),
        }
    }
}

/// First-year physics cycle (20 credits)
#[must_use]
pub fn physics_cycle() -> SubjectSet {
    SubjectSet::new(
        "physics-cycle",
        "Physics Cycle",
        vec![
            Subject::new("math", "Mathematics", 4, SubjectCategory::Math),
            Subject::new("phy", "Physics", 4, SubjectCategory::Lab),
            Subject::new("esc-p", "ESC", 3, SubjectCategory::Regular),
            Subject::new("etc", "ETC", 3, SubjectCategory::Regular),
            Subject::new("core", "Core", 3, SubjectCategory::Regular),
            Subject::new("idea-lab", "IDEA Lab", 1, SubjectCategory::Regular),
            Subject::new(
                "comm-eng-p",
                "Communicative English",
                1,
                SubjectCategory::Regular,
            ),
            Subject::new("kannada", "Kannada", 1, SubjectCategory::Regular),
        ],
    )
}

/// First-year chemistry cycle (20 credits)
#[must_use]
pub fn chemistry_cycle() -> SubjectSet {
    SubjectSet::new(
        "chemistry-cycle",
        "Chemistry Cycle",
        vec![
            Subject::new("math-c", "Mathematics", 4, SubjectCategory::Math),
            Subject::new("chem", "Chemistry", 4, SubjectCategory::Lab),
            Subject::new("esc-c", "ESC", 3, SubjectCategory::Regular),
            Subject::new("plc", "PLC", 3, SubjectCategory::Lab),
            Subject::new(
                "caeg",
                "Computer Aided Engineering Graphics",
                3,
                SubjectCategory::Regular,
            ),
            Subject::new(
                "comm-eng-c",
                "Communicative English",
                1,
                SubjectCategory::Regular,
            ),
            Subject::new(
                "constitution",
                "Fundamentals of Indian Constitution",
                1,
                SubjectCategory::Regular,
            ),
            Subject::new("yoga", "Yoga", 1, SubjectCategory::Regular),
        ],
    )
}

/// Third-semester subject set for a branch (21 credits each)
#[must_use]
pub fn third_semester(branch: Branch) -> SubjectSet {
    let subjects = match branch {
        Branch::CseCore => vec![
            Subject::new("math-sem3", "Mathematics", 4, SubjectCategory::Math),
            Subject::new("dsa-sem3", "DSA", 4, SubjectCategory::HeavyLab),
            Subject::new("adld-sem3", "ADLD", 4, SubjectCategory::HeavyLab),
            Subject::new("os-sem3", "Operating Systems", 4, SubjectCategory::HeavyLab),
            Subject::new("basket-sem3", "Basket Course", 3, SubjectCategory::Basket),
            Subject::new("dtl-sem3", "DTL", 2, SubjectCategory::Regular),
        ],
        Branch::CseAiml => vec![
            Subject::new("math-sem3", "Mathematics", 4, SubjectCategory::Math),
            Subject::new("dsa-sem3", "DSA", 4, SubjectCategory::HeavyLab),
            Subject::new(
                "cps-sem3",
                "Cyber Physical Systems",
                4,
                SubjectCategory::HeavyLab,
            ),
            Subject::new("stats-sem3", "Statistics", 4, SubjectCategory::Regular),
            Subject::new("basket-sem3", "Basket Course", 3, SubjectCategory::Basket),
            Subject::new("dtl-sem3", "DTL", 2, SubjectCategory::Regular),
        ],
        Branch::Ise => vec![
            Subject::new("math-sem3", "Mathematics", 4, SubjectCategory::Math),
            Subject::new("dsa-sem3", "DSA", 4, SubjectCategory::HeavyLab),
            Subject::new("os-sem3", "Operating Systems", 4, SubjectCategory::HeavyLab),
            Subject::new("ldco-sem3", "LDCO", 4, SubjectCategory::Regular),
            Subject::new("basket-sem3", "Basket Course", 3, SubjectCategory::Basket),
            Subject::new("dtl-sem3", "DTL", 2, SubjectCategory::Regular),
        ],
        Branch::Ece => vec![
            Subject::new("math-sem3", "Mathematics", 4, SubjectCategory::Math),
            Subject::new("basket-sem3", "Basket Course", 3, SubjectCategory::Basket),
            Subject::new("addc-sem3", "ADDC", 4, SubjectCategory::HeavyLab),
            Subject::new(
                "amc-sem3",
                "Analog Microelectronic Circuits",
                4,
                SubjectCategory::HeavyLab,
            ),
            Subject::new(
                "nace-sem3",
                "Network Analysis and Control Engineering",
                4,
                SubjectCategory::Regular,
            ),
            Subject::new("aec-sem3", "AEC", 2, SubjectCategory::Regular),
        ],
        Branch::Ete => vec![
            Subject::new("math-sem3", "Mathematics", 4, SubjectCategory::Math),
            Subject::new("basket-sem3", "Basket Course", 3, SubjectCategory::Basket),
            Subject::new("addc-sem3", "ADDC", 4, SubjectCategory::HeavyLab),
            Subject::new(
                "lica-sem3",
                "Linear Integrated Circuits and Applications",
                4,
                SubjectCategory::HeavyLab,
            ),
            Subject::new(
                "sp1-sem3",
                "Signal Processing-I",
                2,
                SubjectCategory::HalfCredit,
            ),
            Subject::new(
                "ca-sem3",
                "Circuit Analysis",
                2,
                SubjectCategory::HalfCredit,
            ),
            Subject::new("aec-sem3", "AEC", 2, SubjectCategory::Regular),
        ],
        Branch::Eee => vec![
            Subject::new("math-sem3", "Mathematics", 4, SubjectCategory::Math),
            Subject::new("basket-sem3", "Basket Course", 3, SubjectCategory::Basket),
            Subject::new("addc-sem3", "ADDC", 4, SubjectCategory::HeavyLab),
            Subject::new(
                "elic-sem3",
                "Electronics & Linear Integrated Circuits",
                4,
                SubjectCategory::HeavyLab,
            ),
            Subject::new(
                "sna-sem3",
                "Signals and Network Analysis",
                4,
                SubjectCategory::Regular,
            ),
            Subject::new("aec-sem3", "AEC", 2, SubjectCategory::Regular),
        ],
        Branch::Eie => vec![
            Subject::new("math-sem3", "Mathematics", 4, SubjectCategory::Math),
            Subject::new("basket-sem3", "Basket Course", 3, SubjectCategory::Basket),
            Subject::new("addc-sem3", "ADDC", 4, SubjectCategory::HeavyLab),
            Subject::new(
                "lica-sem3",
                "Linear Integrated Circuits and Applications",
                4,
                SubjectCategory::HeavyLab,
            ),
            Subject::new(
                "ce-sem3",
                "Control Engineering",
                4,
                SubjectCategory::Regular,
            ),
            Subject::new("aec-sem3", "AEC", 2, SubjectCategory::Regular),
        ],
    };

    SubjectSet::new(
        &format!("sem3-{}", branch.slug()),
        &format!("3rd Semester ({})", branch.slug().to_uppercase()),
        subjects,
    )
}

/// Look up a subject set by its slug.
///
/// Recognized slugs: `physics-cycle`, `chemistry-cycle`, and `sem3-<branch>`
/// for each branch slug.
#[must_use]
pub fn find_set(slug: &str) -> Option<SubjectSet> {
    match slug {
        "physics-cycle" => Some(physics_cycle()),
        "chemistry-cycle" => Some(chemistry_cycle()),
        _ => slug
            .strip_prefix("sem3-")
            .and_then(|branch| branch.parse::<Branch>().ok())
            .map(third_semester),
    }
}

/// Slugs of every built-in subject set.
#[must_use]
pub fn known_set_slugs() -> Vec<String> {
    let mut slugs = vec!["physics-cycle".to_string(), "chemistry-cycle".to_string()];
    for branch in Branch::all() {
        slugs.push(format!("sem3-{}", branch.slug()));
    }
    slugs
}
