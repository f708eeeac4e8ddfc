//! Bundled course content.
//!
//! Each track is authored one section per module and aggregated here in
//! syllabus order. The content is compiled in; nothing is read at runtime.

#![forbid(unsafe_code)]

use course_core::model::{Course, Track, build_course};

mod pandas;
mod python;

/// The bundled course for a track.
#[must_use]
pub fn course(track: Track) -> Course {
    match track {
        Track::Python => python_course(),
        Track::Pandas => pandas_course(),
    }
}

#[must_use]
pub fn python_course() -> Course {
    build_course(
        Track::Python.title(),
        [
            python::intro_setup::lessons(),
            python::syntax_essentials::lessons(),
            python::variables_and_types::lessons(),
            python::operators_expressions::lessons(),
            python::control_flow::lessons(),
            python::strings_text_basics::lessons(),
            python::collections_i::lessons(),
            python::collections_ii::lessons(),
            python::functions::lessons(),
            python::modules_packages_env::lessons(),
            python::file_io_pathlib::lessons(),
            python::errors_exceptions::lessons(),
            python::testing_debugging::lessons(),
        ],
    )
}

#[must_use]
pub fn pandas_course() -> Course {
    build_course(Track::Pandas.title(), [pandas::intro_setup::lessons()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::validate_course;

    #[test]
    fn bundled_courses_are_valid() {
        for track in Track::ALL {
            let course = course(track);
            let violations = validate_course(&course);
            assert!(violations.is_empty(), "{track}: {violations:?}");
            assert!(!course.is_empty(), "{track} has no lessons");
        }
    }

    #[test]
    fn python_syllabus_order() {
        let course = python_course();
        let slugs: Vec<&str> = course.lessons().iter().map(|l| l.slug().as_str()).collect();
        assert_eq!(
            slugs,
            [
                "intro-setup",
                "syntax-essentials",
                "variables-and-types",
                "operators-expressions",
                "control-flow",
                "strings-text-basics",
                "collections-i",
                "collections-ii",
                "functions",
                "modules-packages-env",
                "file-io-pathlib",
                "errors-exceptions",
                "testing-debugging",
            ]
        );
        assert_eq!(course.total_minutes(), 710);
        assert!((course.total_hours() - 11.8).abs() < 1e-9);
    }

    #[test]
    fn neighbours_chain_across_sections() {
        let course = python_course();
        let found = course.find_lesson("control-flow").unwrap();
        assert_eq!(found.index, 4);
        assert_eq!(found.prev.map(|l| l.slug().as_str()), Some("operators-expressions"));
        assert_eq!(found.next.map(|l| l.slug().as_str()), Some("strings-text-basics"));

        let last = course.find_lesson("testing-debugging").unwrap();
        assert!(last.next.is_none());
    }

    #[test]
    fn no_lesson_reuses_an_id_across_its_checklists() {
        for track in Track::ALL {
            for lesson in course(track).lessons() {
                let subsections = lesson.subsection_ids();
                for id in lesson.practice_ids() {
                    assert!(
                        !subsections.contains(&id),
                        "{track}/{}: {id} is both a subsection and a practice id",
                        lesson.slug()
                    );
                }
            }
        }
    }

    #[test]
    fn pandas_track_is_separate() {
        let course = pandas_course();
        assert_eq!(course.title(), "Data Analysis with Pandas");
        assert!(course.find_lesson("pandas-intro-setup").is_some());
        assert!(course.find_lesson("intro-setup").is_none());
        assert!((course.total_hours() - 0.9).abs() < 1e-9);
    }

    #[test]
    fn only_the_syntax_lesson_shows_a_jump_list() {
        let course = python_course();
        let jump: Vec<&str> = course
            .lessons()
            .iter()
            .filter(|l| l.start_here().is_some_and(|m| m.show_jump_to()))
            .map(|l| l.slug().as_str())
            .collect();
        assert_eq!(jump, ["syntax-essentials"]);
    }
}
