//! Shared library for `grade-card`
//! Contains the grade engine, curriculum metadata, and persistence used by the CLI

pub mod core;
pub mod logger;

pub use self::core::{config, engine, get_version, marks_store, models, report};
