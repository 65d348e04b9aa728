//! Core module: grade engine, curriculum metadata, configuration, persistence

pub mod config;
pub mod engine;
pub mod marks_store;
pub mod models;
pub mod report;

/// Returns the current version of the `grade-card` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
