use crate::model::lesson::Lesson;

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// An ordered syllabus of lessons.
///
/// `total_hours` is derived from the lesson durations whenever the course is
/// built or extended. `from_parts` is the one way to carry an externally
/// recorded total, and `validate_course` reports it if it drifts.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    title: String,
    total_hours: f64,
    lessons: Vec<Lesson>,
}

impl Course {
    /// Concatenate section lesson lists, in the given order, into one course.
    ///
    /// Lessons are neither deduplicated nor reordered.
    #[must_use]
    pub fn build<I>(title: impl Into<String>, sections: I) -> Self
    where
        I: IntoIterator<Item = Vec<Lesson>>,
    {
        let lessons: Vec<Lesson> = sections.into_iter().flatten().collect();
        let total_hours = derive_total_hours(&lessons);
        Self {
            title: title.into(),
            total_hours,
            lessons,
        }
    }

    /// Rehydrate a course whose total was recorded elsewhere.
    #[must_use]
    pub fn from_parts(title: impl Into<String>, total_hours: f64, lessons: Vec<Lesson>) -> Self {
        Self {
            title: title.into(),
            total_hours,
            lessons,
        }
    }

    /// Append one more section and recompute the total.
    pub fn extend_section(&mut self, lessons: Vec<Lesson>) {
        self.lessons.extend(lessons);
        self.total_hours = derive_total_hours(&self.lessons);
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn total_hours(&self) -> f64 {
        self.total_hours
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn total_minutes(&self) -> u64 {
        total_minutes(&self.lessons)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    #[must_use]
    pub fn find_lesson(&self, slug: &str) -> Option<LessonMatch<'_>> {
        find_lesson(self, slug)
    }
}

/// Free-function form of [`Course::build`].
#[must_use]
pub fn build_course<I>(title: impl Into<String>, sections: I) -> Course
where
    I: IntoIterator<Item = Vec<Lesson>>,
{
    Course::build(title, sections)
}

fn total_minutes(lessons: &[Lesson]) -> u64 {
    lessons.iter().map(|l| u64::from(l.duration())).sum()
}

/// Sum of lesson minutes in hours, rounded to one decimal place.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn derive_total_hours(lessons: &[Lesson]) -> f64 {
    let hours = total_minutes(lessons) as f64 / 60.0;
    (hours * 10.0).round() / 10.0
}

//
// ─── LOOKUP ────────────────────────────────────────────────────────────────────
//

/// A resolved lesson with its position and positional neighbours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LessonMatch<'a> {
    pub lesson: &'a Lesson,
    pub index: usize,
    pub prev: Option<&'a Lesson>,
    pub next: Option<&'a Lesson>,
}

/// Resolve a slug taken from an untrusted route parameter.
///
/// Returns `None` when no lesson has that slug. With duplicate slugs the
/// first lesson in course order wins.
#[must_use]
pub fn find_lesson<'a>(course: &'a Course, slug: &str) -> Option<LessonMatch<'a>> {
    let lessons = course.lessons();
    let index = lessons.iter().position(|l| l.slug() == slug)?;
    Some(LessonMatch {
        lesson: &lessons[index],
        index,
        prev: index.checked_sub(1).map(|i| &lessons[i]),
        next: lessons.get(index + 1),
    })
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(slug: &str, minutes: u32) -> Lesson {
        Lesson::new(slug, slug.to_uppercase()).with_duration(minutes)
    }

    #[test]
    fn totals_are_rounded_to_one_decimal() {
        let course = build_course("C", [vec![lesson("a", 60), lesson("b", 30)]]);
        assert!((course.total_hours() - 1.5).abs() < f64::EPSILON);

        let course = build_course("C", [vec![lesson("a", 25)], vec![lesson("b", 10)]]);
        // 35 / 60 = 0.5833..
        assert!((course.total_hours() - 0.6).abs() < 1e-9);
        assert_eq!(course.total_minutes(), 35);
    }

    #[test]
    fn empty_course_has_zero_hours() {
        let course = build_course("Empty", Vec::<Vec<Lesson>>::new());
        assert!(course.is_empty());
        assert!(course.total_hours().abs() < f64::EPSILON);
    }

    #[test]
    fn sections_concatenate_in_caller_order() {
        let course = build_course(
            "C",
            [vec![lesson("s1", 10)], vec![lesson("s2a", 10), lesson("s2b", 10)]],
        );
        let slugs: Vec<&str> = course.lessons().iter().map(|l| l.slug().as_str()).collect();
        assert_eq!(slugs, ["s1", "s2a", "s2b"]);
    }

    #[test]
    fn extend_section_recomputes_total() {
        let mut course = build_course("C", [vec![lesson("a", 60)]]);
        course.extend_section(vec![lesson("b", 45)]);
        assert_eq!(course.len(), 2);
        assert!((course.total_hours() - 1.8).abs() < 1e-9);
    }

    #[test]
    fn lookup_reports_neighbours() {
        let course = build_course("C", [vec![lesson("a", 60), lesson("b", 30)]]);

        let found = course.find_lesson("b").unwrap();
        assert_eq!(found.index, 1);
        assert_eq!(found.prev.map(|l| l.slug().as_str()), Some("a"));
        assert!(found.next.is_none());

        let first = course.find_lesson("a").unwrap();
        assert!(first.prev.is_none());
        assert_eq!(first.next.map(|l| l.slug().as_str()), Some("b"));
    }

    #[test]
    fn lookup_miss_is_none_for_any_input() {
        let course = build_course("C", [vec![lesson("a", 10)]]);
        for slug in ["", "A", "missing", "../a", "a b", "a\u{0}"] {
            assert!(find_lesson(&course, slug).is_none(), "{slug:?}");
        }
    }

    #[test]
    fn duplicate_slug_resolves_to_first() {
        let course = build_course(
            "C",
            [vec![lesson("dup", 10).with_summary("first")], vec![lesson("dup", 20)]],
        );
        let found = course.find_lesson("dup").unwrap();
        assert_eq!(found.index, 0);
        assert_eq!(found.lesson.summary(), "first");
    }

    #[test]
    fn neighbours_match_positions_for_every_lesson() {
        let course = build_course(
            "C",
            [vec![lesson("a", 5), lesson("b", 5)], vec![lesson("c", 5), lesson("d", 5)]],
        );
        let lessons = course.lessons();
        for (i, l) in lessons.iter().enumerate() {
            let found = course.find_lesson(l.slug().as_str()).unwrap();
            assert_eq!(found.index, i);
            assert_eq!(found.prev, i.checked_sub(1).map(|p| &lessons[p]));
            assert_eq!(found.next, lessons.get(i + 1));
        }
    }
}
