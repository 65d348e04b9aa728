//! Data models for `grade-card`

pub mod category;
pub mod curriculum;
pub mod marks;
pub mod subject;

pub use category::SubjectCategory;
pub use curriculum::{Branch, SubjectSet};
pub use marks::{MarkField, RawMarks};
pub use subject::Subject;
