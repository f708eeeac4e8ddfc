use std::sync::Arc;

use course_core::model::{ChecklistKind, LessonMatch, ProgressKey, Track, find_lesson};
use course_core::{Checklist, ItemState};

use crate::catalog_service::{CatalogService, not_found};
use crate::checklist_service::ChecklistService;
use crate::error::CatalogError;
use crate::lesson_view::{LessonPage, LessonView};

/// Outcome of toggling an item from a lesson route.
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    Toggled {
        kind: ChecklistKind,
        state: ItemState,
        page: LessonPage,
    },
    /// The lesson exists but neither of its checklists tracks the id.
    UnknownItem { page: LessonPage },
    LessonNotFound { page: LessonPage },
}

/// Lesson pages with saved progress applied.
#[derive(Clone)]
pub struct ReaderService {
    catalog: Arc<CatalogService>,
    checklists: Arc<ChecklistService>,
}

struct LessonChecklists {
    progress: Checklist,
    practice: Checklist,
}

impl ReaderService {
    #[must_use]
    pub fn new(catalog: Arc<CatalogService>, checklists: Arc<ChecklistService>) -> Self {
        Self {
            catalog,
            checklists,
        }
    }

    /// Resolve a lesson and load both of its checklists.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::MissingTrack` if no course is loaded for `track`.
    pub async fn open_lesson(&self, track: Track, slug: &str) -> Result<LessonPage, CatalogError> {
        let course = self.catalog.course(track)?;
        let Some(found) = find_lesson(&course, slug) else {
            return Ok(not_found(track, slug));
        };
        let lists = self.load_checklists(track, &found).await;
        let view = LessonView::build(track, &found, &lists.progress, &lists.practice);
        Ok(LessonPage::Found(Box::new(view)))
    }

    /// Flip `id` in one checklist of the lesson and persist.
    ///
    /// With `kind` unset the id goes to whichever checklist tracks it,
    /// subsection ids first. A `kind` pins the checklist, which reaches a
    /// practice item whose id a subsection also uses.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::MissingTrack` if no course is loaded for `track`.
    pub async fn toggle_item(
        &self,
        track: Track,
        slug: &str,
        id: &str,
        kind: Option<ChecklistKind>,
    ) -> Result<ToggleOutcome, CatalogError> {
        let course = self.catalog.course(track)?;
        let Some(found) = find_lesson(&course, slug) else {
            return Ok(ToggleOutcome::LessonNotFound {
                page: not_found(track, slug),
            });
        };
        let mut lists = self.load_checklists(track, &found).await;

        let kind = kind.unwrap_or(if lists.progress.contains(id) {
            ChecklistKind::Progress
        } else {
            ChecklistKind::Practice
        });
        let target = match kind {
            ChecklistKind::Progress => &mut lists.progress,
            ChecklistKind::Practice => &mut lists.practice,
        };
        let toggled = self
            .checklists
            .toggle(target, id)
            .await
            .map(|state| (kind, state));

        let page = LessonPage::Found(Box::new(LessonView::build(
            track,
            &found,
            &lists.progress,
            &lists.practice,
        )));
        Ok(match toggled {
            Some((kind, state)) => ToggleOutcome::Toggled { kind, state, page },
            None => ToggleOutcome::UnknownItem { page },
        })
    }

    /// Clear one checklist of a lesson.
    ///
    /// Returns `LessonPage::NotFound` without writing for an unknown slug.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::MissingTrack` if no course is loaded for `track`.
    pub async fn reset_lesson(
        &self,
        track: Track,
        slug: &str,
        kind: ChecklistKind,
    ) -> Result<LessonPage, CatalogError> {
        let course = self.catalog.course(track)?;
        let Some(found) = find_lesson(&course, slug) else {
            return Ok(not_found(track, slug));
        };
        let mut lists = self.load_checklists(track, &found).await;
        let target = match kind {
            ChecklistKind::Progress => &mut lists.progress,
            ChecklistKind::Practice => &mut lists.practice,
        };
        self.checklists.reset(target).await;

        let view = LessonView::build(track, &found, &lists.progress, &lists.practice);
        Ok(LessonPage::Found(Box::new(view)))
    }

    async fn load_checklists(
        &self,
        track: Track,
        found: &LessonMatch<'_>,
    ) -> LessonChecklists {
        let slug = found.lesson.slug().clone();
        let progress = self
            .checklists
            .load(
                ProgressKey::progress(track, slug.clone()),
                found.lesson.subsection_ids(),
            )
            .await;
        let practice = self
            .checklists
            .load(ProgressKey::practice(track, slug), found.lesson.practice_ids())
            .await;
        LessonChecklists { progress, practice }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::model::{Lesson, PracticeItem, Subsection, build_course};
    use storage::repository::InMemoryRepository;

    fn reader(repo: &InMemoryRepository) -> ReaderService {
        let lesson = Lesson::new("intro", "Intro")
            .with_subsection(Subsection::new("why", "Why", ""))
            .with_subsection(Subsection::new("how", "How", ""))
            .with_practice(PracticeItem::new("p1", "Try", "Do"));
        let catalog =
            CatalogService::empty().with_course(Track::Python, build_course("C", [vec![lesson]]));
        ReaderService::new(
            Arc::new(catalog),
            Arc::new(ChecklistService::new(Arc::new(repo.clone()))),
        )
    }

    #[tokio::test]
    async fn toggles_route_to_the_owning_checklist() {
        let repo = InMemoryRepository::new();
        let reader = reader(&repo);

        let outcome = reader.toggle_item(Track::Python, "intro", "p1", None).await.unwrap();
        assert!(matches!(
            outcome,
            ToggleOutcome::Toggled {
                kind: ChecklistKind::Practice,
                state: ItemState::Done,
                ..
            }
        ));
        assert_eq!(
            repo.get_raw("pyd:python:practice:intro").unwrap().as_deref(),
            Some(r#"{"p1":true}"#)
        );
        assert_eq!(repo.get_raw("pyd:python:progress:intro").unwrap(), None);

        reader.toggle_item(Track::Python, "intro", "how", None).await.unwrap();
        let LessonPage::Found(view) = reader.open_lesson(Track::Python, "intro").await.unwrap()
        else {
            panic!("intro should resolve");
        };
        assert_eq!((view.progress.done, view.progress.total), (1, 2));
        assert_eq!(view.practice.unwrap().progress.done, 1);
    }

    #[tokio::test]
    async fn unknown_item_and_lesson() {
        let repo = InMemoryRepository::new();
        let reader = reader(&repo);

        let outcome = reader.toggle_item(Track::Python, "intro", "nope", None).await.unwrap();
        assert!(matches!(outcome, ToggleOutcome::UnknownItem { .. }));

        let outcome = reader.toggle_item(Track::Python, "missing", "why", None).await.unwrap();
        assert!(matches!(outcome, ToggleOutcome::LessonNotFound { .. }));
        assert_eq!(repo.get_raw("pyd:python:progress:intro").unwrap(), None);
    }

    #[tokio::test]
    async fn pinned_kind_reaches_an_id_shared_by_both_checklists() {
        let repo = InMemoryRepository::new();
        let lesson = Lesson::new("intro", "Intro")
            .with_subsection(Subsection::new("recap", "Recap", ""))
            .with_practice(PracticeItem::new("recap", "Recap drill", "Do"));
        let catalog =
            CatalogService::empty().with_course(Track::Python, build_course("C", [vec![lesson]]));
        let reader = ReaderService::new(
            Arc::new(catalog),
            Arc::new(ChecklistService::new(Arc::new(repo.clone()))),
        );

        let outcome = reader
            .toggle_item(Track::Python, "intro", "recap", Some(ChecklistKind::Practice))
            .await
            .unwrap();
        assert!(matches!(
            outcome,
            ToggleOutcome::Toggled {
                kind: ChecklistKind::Practice,
                state: ItemState::Done,
                ..
            }
        ));
        assert_eq!(
            repo.get_raw("pyd:python:practice:intro").unwrap().as_deref(),
            Some(r#"{"recap":true}"#)
        );
        assert_eq!(repo.get_raw("pyd:python:progress:intro").unwrap(), None);

        // Unpinned, the subsection wins.
        reader
            .toggle_item(Track::Python, "intro", "recap", None)
            .await
            .unwrap();
        assert_eq!(
            repo.get_raw("pyd:python:progress:intro").unwrap().as_deref(),
            Some(r#"{"recap":true}"#)
        );
    }

    #[tokio::test]
    async fn pinned_kind_does_not_fall_back() {
        let repo = InMemoryRepository::new();
        let reader = reader(&repo);

        let outcome = reader
            .toggle_item(Track::Python, "intro", "why", Some(ChecklistKind::Practice))
            .await
            .unwrap();
        assert!(matches!(outcome, ToggleOutcome::UnknownItem { .. }));
        assert_eq!(repo.get_raw("pyd:python:practice:intro").unwrap(), None);
        assert_eq!(repo.get_raw("pyd:python:progress:intro").unwrap(), None);
    }

    #[tokio::test]
    async fn reset_clears_only_the_requested_checklist() {
        let repo = InMemoryRepository::new();
        repo.put_raw("pyd:python:progress:intro", r#"{"why":true}"#).unwrap();
        repo.put_raw("pyd:python:practice:intro", r#"{"p1":true}"#).unwrap();
        let reader = reader(&repo);

        reader
            .reset_lesson(Track::Python, "intro", ChecklistKind::Practice)
            .await
            .unwrap();
        assert_eq!(
            repo.get_raw("pyd:python:practice:intro").unwrap().as_deref(),
            Some(r#"{"p1":false}"#)
        );
        assert_eq!(
            repo.get_raw("pyd:python:progress:intro").unwrap().as_deref(),
            Some(r#"{"why":true}"#)
        );
    }
}
