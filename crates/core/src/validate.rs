//! Structural checks for authored course content.
//!
//! `validate_course` is the gate that keeps malformed content from shipping.
//! It collects every problem it finds instead of stopping at the first one.

use std::collections::HashSet;

use thiserror::Error;
use url::Url;

use crate::model::{Course, ItemId, Lesson, Slug, derive_total_hours};

/// Allowed drift between a recorded `total_hours` and the derived value.
pub const TOTAL_HOURS_TOLERANCE: f64 = 0.05;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum CourseViolation {
    #[error("duplicate lesson slug \"{slug}\"")]
    DuplicateSlug { slug: Slug },

    #[error("lesson \"{slug}\" is not URL-safe")]
    UnsafeSlug { slug: Slug },

    #[error("lesson \"{lesson}\" has duplicate subsection id \"{id}\"")]
    DuplicateSubsectionId { lesson: Slug, id: ItemId },

    #[error("lesson \"{lesson}\" has duplicate practice id \"{id}\"")]
    DuplicatePracticeId { lesson: Slug, id: ItemId },

    #[error("lesson \"{lesson}\" uses \"{id}\" as both a subsection and a practice id")]
    SharedItemId { lesson: Slug, id: ItemId },

    #[error("total hours {recorded} does not match lesson durations ({derived})")]
    StaleTotalHours { recorded: f64, derived: f64 },

    #[error("lesson \"{lesson}\" resource \"{label}\" has invalid URL \"{href}\"")]
    InvalidResourceUrl {
        lesson: Slug,
        label: String,
        href: String,
    },
}

/// Check a course for structural problems. An empty result means valid.
#[must_use]
pub fn validate_course(course: &Course) -> Vec<CourseViolation> {
    let mut violations = Vec::new();
    let mut slugs: HashSet<&Slug> = HashSet::new();

    for lesson in course.lessons() {
        if !slugs.insert(lesson.slug()) {
            violations.push(CourseViolation::DuplicateSlug {
                slug: lesson.slug().clone(),
            });
        }
        if !lesson.slug().is_url_safe() {
            violations.push(CourseViolation::UnsafeSlug {
                slug: lesson.slug().clone(),
            });
        }
        check_lesson(lesson, &mut violations);
    }

    let derived = derive_total_hours(course.lessons());
    // A NaN drift never compares greater than the tolerance.
    let drift = (course.total_hours() - derived).abs();
    if drift.is_nan() || drift > TOTAL_HOURS_TOLERANCE {
        violations.push(CourseViolation::StaleTotalHours {
            recorded: course.total_hours(),
            derived,
        });
    }

    violations
}

fn check_lesson(lesson: &Lesson, violations: &mut Vec<CourseViolation>) {
    let mut seen: HashSet<&ItemId> = HashSet::new();
    for sub in lesson.subsections() {
        if !seen.insert(sub.id()) {
            violations.push(CourseViolation::DuplicateSubsectionId {
                lesson: lesson.slug().clone(),
                id: sub.id().clone(),
            });
        }
    }

    let subsection_ids = seen;
    let mut seen: HashSet<&ItemId> = HashSet::new();
    for item in lesson.practice() {
        // Ids are unique across both checklists of a lesson.
        if subsection_ids.contains(item.id()) && !seen.contains(item.id()) {
            violations.push(CourseViolation::SharedItemId {
                lesson: lesson.slug().clone(),
                id: item.id().clone(),
            });
        }
        if !seen.insert(item.id()) {
            violations.push(CourseViolation::DuplicatePracticeId {
                lesson: lesson.slug().clone(),
                id: item.id().clone(),
            });
        }
    }

    if let Some(meta) = lesson.start_here() {
        for link in meta.resources() {
            if Url::parse(link.href()).is_err() {
                violations.push(CourseViolation::InvalidResourceUrl {
                    lesson: lesson.slug().clone(),
                    label: link.label().to_owned(),
                    href: link.href().to_owned(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PracticeItem, StartHere, Subsection, build_course};

    fn lesson(slug: &str, minutes: u32) -> Lesson {
        Lesson::new(slug, "Title").with_duration(minutes)
    }

    #[test]
    fn built_course_is_valid() {
        let course = build_course("C", [vec![lesson("a", 60), lesson("b", 30)]]);
        assert!(validate_course(&course).is_empty());
    }

    #[test]
    fn bare_lessons_are_valid() {
        let course = build_course(
            "C",
            [vec![
                lesson("prose-only", 10).with_content("Just text."),
                lesson("no-code", 10).with_subsection(Subsection::new("s", "S", "body")),
            ]],
        );
        assert!(validate_course(&course).is_empty());
    }

    #[test]
    fn duplicate_slug_is_named() {
        let course = build_course("C", [vec![lesson("intro", 10)], vec![lesson("intro", 20)]]);
        let violations = validate_course(&course);
        assert_eq!(
            violations,
            vec![CourseViolation::DuplicateSlug {
                slug: Slug::from("intro")
            }]
        );
        assert!(violations[0].to_string().contains("\"intro\""));
    }

    #[test]
    fn duplicate_item_ids_within_a_lesson() {
        let bad = lesson("a", 10)
            .with_subsection(Subsection::new("x", "X", ""))
            .with_subsection(Subsection::new("x", "X again", ""))
            .with_practice(PracticeItem::new("p", "P", ""))
            .with_practice(PracticeItem::new("p", "P again", ""));
        let course = build_course("C", [vec![bad]]);
        let violations = validate_course(&course);
        assert_eq!(violations.len(), 2);
        assert!(matches!(
            &violations[0],
            CourseViolation::DuplicateSubsectionId { id, .. } if id == "x"
        ));
        assert!(matches!(
            &violations[1],
            CourseViolation::DuplicatePracticeId { id, .. } if id == "p"
        ));
    }

    #[test]
    fn id_shared_by_subsection_and_practice_is_reported() {
        let bad = lesson("intro", 10)
            .with_subsection(Subsection::new("recap", "Recap", ""))
            .with_practice(PracticeItem::new("recap", "Recap drill", ""));
        let course = build_course("C", [vec![bad]]);
        let violations = validate_course(&course);
        assert_eq!(
            violations,
            vec![CourseViolation::SharedItemId {
                lesson: Slug::from("intro"),
                id: ItemId::from("recap"),
            }]
        );
        assert!(violations[0].to_string().contains("\"recap\""));
    }

    #[test]
    fn same_id_in_different_lessons_is_fine() {
        let course = build_course(
            "C",
            [vec![
                lesson("a", 10).with_subsection(Subsection::new("pitfalls", "P", "")),
                lesson("b", 10).with_subsection(Subsection::new("pitfalls", "P", "")),
            ]],
        );
        assert!(validate_course(&course).is_empty());
    }

    #[test]
    fn stale_total_hours_is_reported() {
        let lessons = vec![lesson("a", 60), lesson("b", 30)];
        let stale = Course::from_parts("C", 8.0, lessons.clone());
        assert!(matches!(
            validate_course(&stale).as_slice(),
            [CourseViolation::StaleTotalHours { derived, .. }] if (*derived - 1.5).abs() < 1e-9
        ));

        let close_enough = Course::from_parts("C", 1.54, lessons);
        assert!(validate_course(&close_enough).is_empty());
    }

    #[test]
    fn non_finite_total_hours_is_stale() {
        for recorded in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let course = Course::from_parts("C", recorded, vec![lesson("a", 60)]);
            assert!(
                matches!(
                    validate_course(&course).as_slice(),
                    [CourseViolation::StaleTotalHours { derived, .. }] if (*derived - 1.0).abs() < 1e-9
                ),
                "{recorded} should be reported"
            );
        }
    }

    #[test]
    fn unsafe_slug_and_bad_resource_url() {
        let meta = StartHere::new(["Learn"])
            .with_resource("Docs", "https://docs.python.org/3/")
            .with_resource("Broken", "not a url");
        let course = build_course(
            "C",
            [vec![lesson("Bad Slug", 10), lesson("ok", 10).with_start_here(meta)]],
        );
        let violations = validate_course(&course);
        assert_eq!(violations.len(), 2);
        assert!(matches!(&violations[0], CourseViolation::UnsafeSlug { slug } if slug == "Bad Slug"));
        assert!(matches!(
            &violations[1],
            CourseViolation::InvalidResourceUrl { label, .. } if label == "Broken"
        ));
    }
}
