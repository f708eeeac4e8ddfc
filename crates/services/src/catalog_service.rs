use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;

use course_core::model::{Course, ProgressKey, Track, find_lesson};
use course_core::{Checklist, validate_course};

use crate::error::CatalogError;
use crate::lesson_view::{LessonPage, LessonView, SyllabusView};

/// Read-only access to the course of each track.
#[derive(Clone, Default)]
pub struct CatalogService {
    courses: BTreeMap<Track, Arc<Course>>,
}

impl CatalogService {
    /// Catalog with no courses; add them with `with_course`.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Catalog of the compiled-in courses for every track.
    #[must_use]
    pub fn bundled() -> Self {
        Track::ALL
            .into_iter()
            .fold(Self::empty(), |svc, track| svc.with_course(track, catalog::course(track)))
    }

    #[must_use]
    pub fn with_course(mut self, track: Track, course: Course) -> Self {
        self.courses.insert(track, Arc::new(course));
        self
    }

    /// The course for a track.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::MissingTrack` if no course is loaded for `track`.
    pub fn course(&self, track: Track) -> Result<Arc<Course>, CatalogError> {
        self.courses
            .get(&track)
            .cloned()
            .ok_or(CatalogError::MissingTrack { track })
    }

    pub fn tracks(&self) -> impl Iterator<Item = Track> + '_ {
        self.courses.keys().copied()
    }

    /// # Errors
    ///
    /// Returns `CatalogError::MissingTrack` if no course is loaded for `track`.
    pub fn syllabus(&self, track: Track) -> Result<SyllabusView, CatalogError> {
        let course = self.course(track)?;
        Ok(SyllabusView::from_course(track, &course))
    }

    /// Resolve a route slug to a lesson page with every item pending.
    ///
    /// Any string is accepted; an unknown slug is `LessonPage::NotFound`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::MissingTrack` if no course is loaded for `track`.
    pub fn lesson_page(&self, track: Track, slug: &str) -> Result<LessonPage, CatalogError> {
        let course = self.course(track)?;
        let Some(found) = find_lesson(&course, slug) else {
            debug!("no {track} lesson matches {slug:?}");
            return Ok(not_found(track, slug));
        };
        let lesson_slug = found.lesson.slug().clone();
        let progress = Checklist::pending(
            ProgressKey::progress(track, lesson_slug.clone()),
            found.lesson.subsection_ids(),
        );
        let practice = Checklist::pending(
            ProgressKey::practice(track, lesson_slug),
            found.lesson.practice_ids(),
        );
        let view = LessonView::build(track, &found, &progress, &practice);
        Ok(LessonPage::Found(Box::new(view)))
    }

    /// Validate one track's course.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidCourse` listing every violation, or
    /// `CatalogError::MissingTrack` if no course is loaded for `track`.
    pub fn check_track(&self, track: Track) -> Result<(), CatalogError> {
        let course = self.course(track)?;
        let violations = validate_course(&course);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::InvalidCourse { track, violations })
        }
    }

    /// Validate every loaded course, stopping at the first invalid track.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidCourse` for the first track that fails.
    pub fn check(&self) -> Result<(), CatalogError> {
        self.tracks().try_for_each(|track| self.check_track(track))
    }
}

pub(crate) fn not_found(track: Track, slug: &str) -> LessonPage {
    LessonPage::NotFound {
        slug: slug.to_owned(),
        syllabus_path: track.route_base().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::model::{Lesson, build_course};

    fn sample() -> CatalogService {
        let course = build_course(
            "Sample",
            [vec![
                Lesson::new("a", "A").with_duration(60),
                Lesson::new("b", "B").with_duration(30),
            ]],
        );
        CatalogService::empty().with_course(Track::Python, course)
    }

    #[test]
    fn syllabus_lists_lessons_with_paths() {
        let view = sample().syllabus(Track::Python).unwrap();
        assert_eq!(view.lesson_count, 2);
        assert!((view.total_hours - 1.5).abs() < 1e-9);
        assert_eq!(view.lessons[1].path, "/python/b");
    }

    #[test]
    fn unknown_slug_points_back_to_syllabus() {
        let page = sample().lesson_page(Track::Python, "../etc/passwd").unwrap();
        assert_eq!(
            page,
            LessonPage::NotFound {
                slug: "../etc/passwd".into(),
                syllabus_path: "/python".into(),
            }
        );
    }

    #[test]
    fn found_lesson_has_neighbours() {
        let LessonPage::Found(view) = sample().lesson_page(Track::Python, "b").unwrap() else {
            panic!("lesson b should resolve");
        };
        assert_eq!(view.prev.as_ref().map(|l| l.slug.as_str()), Some("a"));
        assert!(view.next.is_none());
    }

    #[test]
    fn missing_track_is_an_error() {
        let err = sample().syllabus(Track::Pandas).unwrap_err();
        assert!(matches!(err, CatalogError::MissingTrack { track: Track::Pandas }));
    }

    #[test]
    fn check_reports_duplicate_slugs() {
        let dup = build_course("Dup", [vec![Lesson::new("intro", "I")], vec![Lesson::new("intro", "I")]]);
        let svc = CatalogService::empty().with_course(Track::Pandas, dup);
        let err = svc.check().unwrap_err();
        assert!(err.to_string().contains("1 content problem"));
    }

    #[test]
    fn bundled_catalog_passes_check() {
        let svc = CatalogService::bundled();
        assert_eq!(svc.tracks().count(), 2);
        svc.check().unwrap();
    }
}
