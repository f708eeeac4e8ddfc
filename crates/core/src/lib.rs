#![forbid(unsafe_code)]

pub mod model;
pub mod progress;
pub mod text;
pub mod validate;

pub use progress::{Checklist, ItemState, ProgressError, SavedState};
pub use validate::{CourseViolation, validate_course};
