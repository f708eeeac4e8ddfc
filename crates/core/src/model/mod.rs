mod course;
mod ids;
mod lesson;
mod track;

pub use course::{Course, LessonMatch, build_course, derive_total_hours, find_lesson};
pub use ids::{ItemId, ParseIdError, Slug};
pub use lesson::{CodeSample, Lesson, PracticeItem, ResourceLink, StartHere, Subsection};
pub use track::{ChecklistKind, DEFAULT_NAMESPACE, ParseTrackError, ProgressKey, Track};
