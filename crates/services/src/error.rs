//! Shared error types for the services crate.

use thiserror::Error;

use course_core::{CourseViolation, model::Track};
use storage::sqlite::SqliteInitError;

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("no course is loaded for the {track} track")]
    MissingTrack { track: Track },
    #[error("{track} course has {} content problem(s)", .violations.len())]
    InvalidCourse {
        track: Track,
        violations: Vec<CourseViolation>,
    },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
