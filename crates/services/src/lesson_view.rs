//! Presentation-agnostic views of courses and lessons.
//!
//! These are not UI widgets: there is no markup or styling here, and prose
//! is kept as inline-code runs instead of pre-rendered strings. Any
//! renderer (terminal, HTML, JSON) can walk them directly.

use serde::Serialize;

use course_core::model::{
    Course, Lesson, LessonMatch, PracticeItem, StartHere, Slug, Subsection, Track,
};
use course_core::text::split_inline_code;
use course_core::{Checklist, ItemState};

//
// ─── TEXT ──────────────────────────────────────────────────────────────────────
//

/// One run of prose: plain text or inline code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum TextRun {
    Text(String),
    Code(String),
}

/// Prose split into plain and inline-code runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RichText(pub Vec<TextRun>);

impl RichText {
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let runs = split_inline_code(input)
            .iter()
            .map(|segment| {
                let text = segment.as_str().to_owned();
                if segment.is_code() {
                    TextRun::Code(text)
                } else {
                    TextRun::Text(text)
                }
            })
            .collect();
        Self(runs)
    }

    #[must_use]
    pub fn runs(&self) -> &[TextRun] {
        &self.0
    }

    /// The text without inline-code markers.
    #[must_use]
    pub fn plain(&self) -> String {
        self.0
            .iter()
            .map(|run| match run {
                TextRun::Text(s) | TextRun::Code(s) => s.as_str(),
            })
            .collect()
    }
}

//
// ─── SYLLABUS ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyllabusView {
    pub track: Track,
    pub title: String,
    pub total_hours: f64,
    pub lesson_count: usize,
    pub lessons: Vec<SyllabusEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyllabusEntry {
    pub slug: Slug,
    pub title: String,
    pub summary: String,
    pub duration_minutes: u32,
    pub path: String,
}

impl SyllabusView {
    #[must_use]
    pub fn from_course(track: Track, course: &Course) -> Self {
        let lessons = course
            .lessons()
            .iter()
            .map(|lesson| SyllabusEntry {
                slug: lesson.slug().clone(),
                title: lesson.title().to_owned(),
                summary: lesson.summary().to_owned(),
                duration_minutes: lesson.duration(),
                path: track.lesson_path(lesson.slug()),
            })
            .collect();
        Self {
            track,
            title: course.title().to_owned(),
            total_hours: course.total_hours(),
            lesson_count: course.len(),
            lessons,
        }
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// Result of resolving a lesson route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LessonPage {
    Found(Box<LessonView>),
    /// Unknown slug. Render a way back to `syllabus_path`.
    NotFound { slug: String, syllabus_path: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonView {
    pub track: Track,
    pub slug: Slug,
    pub title: String,
    pub summary: String,
    pub duration_minutes: u32,
    pub start_here: Option<StartHerePanel>,
    pub body: LessonBody,
    pub practice: Option<PracticePanel>,
    pub progress: ChecklistCounts,
    pub prev: Option<NavLink>,
    pub next: Option<NavLink>,
    pub syllabus_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistCounts {
    pub done: usize,
    pub total: usize,
}

impl From<&Checklist> for ChecklistCounts {
    fn from(checklist: &Checklist) -> Self {
        Self {
            done: checklist.done(),
            total: checklist.total(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub slug: Slug,
    pub title: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartHerePanel {
    pub goals: Vec<RichText>,
    pub prerequisites: Vec<RichText>,
    /// Empty unless the lesson asks for it and has subsections.
    pub jump_to: Vec<JumpLink>,
    pub resources: Vec<ResourceView>,
    pub tip: Option<RichText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JumpLink {
    pub anchor: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceView {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LessonBody {
    Subsections { blocks: Vec<SubsectionBlock> },
    /// Lessons without subsections show their prose and optional code.
    Prose {
        content: RichText,
        code: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubsectionBlock {
    pub id: String,
    pub title: String,
    pub body: RichText,
    pub code: Vec<CodeBlock>,
    pub state: ItemState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    pub label: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PracticePanel {
    pub items: Vec<PracticeView>,
    pub progress: ChecklistCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PracticeView {
    pub number: usize,
    pub id: String,
    pub title: String,
    pub prompt: String,
    pub starter_code: Option<String>,
    pub hint: Option<String>,
    pub solution: Option<String>,
    pub state: ItemState,
}

impl LessonView {
    /// Build the view for a resolved lesson.
    ///
    /// `progress` tracks subsection ids and `practice` tracks practice ids;
    /// items missing from either read as pending.
    #[must_use]
    pub fn build(
        track: Track,
        found: &LessonMatch<'_>,
        progress: &Checklist,
        practice: &Checklist,
    ) -> Self {
        let lesson = found.lesson;
        Self {
            track,
            slug: lesson.slug().clone(),
            title: lesson.title().to_owned(),
            summary: lesson.summary().to_owned(),
            duration_minutes: lesson.duration(),
            start_here: lesson
                .start_here()
                .map(|meta| start_here_panel(meta, lesson.subsections())),
            body: lesson_body(lesson, progress),
            practice: practice_panel(lesson.practice(), practice),
            progress: ChecklistCounts::from(progress),
            prev: found.prev.map(|l| nav_link(track, l)),
            next: found.next.map(|l| nav_link(track, l)),
            syllabus_path: track.route_base().to_owned(),
        }
    }
}

fn nav_link(track: Track, lesson: &Lesson) -> NavLink {
    NavLink {
        slug: lesson.slug().clone(),
        title: lesson.title().to_owned(),
        path: track.lesson_path(lesson.slug()),
    }
}

fn start_here_panel(meta: &StartHere, subsections: &[Subsection]) -> StartHerePanel {
    let jump_to = if meta.show_jump_to() {
        subsections
            .iter()
            .map(|s| JumpLink {
                anchor: s.id().as_str().to_owned(),
                title: s.title().to_owned(),
            })
            .collect()
    } else {
        Vec::new()
    };

    StartHerePanel {
        goals: meta.goals().iter().map(|g| RichText::parse(g)).collect(),
        prerequisites: meta
            .prerequisites()
            .iter()
            .map(|p| RichText::parse(p))
            .collect(),
        jump_to,
        resources: meta
            .resources()
            .iter()
            .map(|r| ResourceView {
                label: r.label().to_owned(),
                href: r.href().to_owned(),
            })
            .collect(),
        tip: meta.tip().map(RichText::parse),
    }
}

fn lesson_body(lesson: &Lesson, progress: &Checklist) -> LessonBody {
    if lesson.subsections().is_empty() {
        return LessonBody::Prose {
            content: RichText::parse(lesson.content()),
            code: lesson.code().map(str::to_owned),
        };
    }

    let blocks = lesson
        .subsections()
        .iter()
        .map(|sub| SubsectionBlock {
            id: sub.id().as_str().to_owned(),
            title: sub.title().to_owned(),
            body: RichText::parse(sub.body()),
            code: code_blocks(sub),
            state: progress.state(sub.id().as_str()).unwrap_or_default(),
        })
        .collect();
    LessonBody::Subsections { blocks }
}

/// Labeled samples win; the single sample is the fallback.
fn code_blocks(sub: &Subsection) -> Vec<CodeBlock> {
    if !sub.has_examples() {
        return Vec::new();
    }
    if !sub.codes().is_empty() {
        return sub
            .codes()
            .iter()
            .map(|c| CodeBlock {
                label: c.label().map(str::to_owned),
                text: c.text().to_owned(),
            })
            .collect();
    }
    sub.code()
        .map(|text| CodeBlock {
            label: None,
            text: text.to_owned(),
        })
        .into_iter()
        .collect()
}

fn practice_panel(items: &[PracticeItem], practice: &Checklist) -> Option<PracticePanel> {
    if items.is_empty() {
        return None;
    }
    let items = items
        .iter()
        .enumerate()
        .map(|(i, item)| PracticeView {
            number: i + 1,
            id: item.id().as_str().to_owned(),
            title: item.title().to_owned(),
            prompt: item.prompt().to_owned(),
            starter_code: item.starter_code().map(str::to_owned),
            hint: item.hint().map(str::to_owned),
            solution: item.solution().map(str::to_owned),
            state: practice.state(item.id().as_str()).unwrap_or_default(),
        })
        .collect();
    Some(PracticePanel {
        items,
        progress: ChecklistCounts::from(practice),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::model::{
        CodeSample, PracticeItem, ProgressKey, StartHere, Subsection, build_course, find_lesson,
    };

    fn view_of(course: &Course, slug: &str) -> LessonView {
        let found = find_lesson(course, slug).unwrap();
        let progress = Checklist::pending(
            ProgressKey::progress(Track::Python, found.lesson.slug().clone()),
            found.lesson.subsection_ids(),
        );
        let practice = Checklist::pending(
            ProgressKey::practice(Track::Python, found.lesson.slug().clone()),
            found.lesson.practice_ids(),
        );
        LessonView::build(Track::Python, &found, &progress, &practice)
    }

    #[test]
    fn empty_practice_renders_no_panel() {
        let course = build_course("C", [vec![Lesson::new("a", "A").with_content("Only prose.")]]);
        let view = view_of(&course, "a");
        assert!(view.practice.is_none());
        assert_eq!(
            view.body,
            LessonBody::Prose {
                content: RichText(vec![TextRun::Text("Only prose.".into())]),
                code: None,
            }
        );
    }

    #[test]
    fn jump_list_needs_flag_and_subsections() {
        let with_flag = Lesson::new("a", "A")
            .with_start_here(StartHere::new(["Goal"]).with_jump_to(true))
            .with_subsection(Subsection::new("one", "One", ""));
        let flag_no_subs =
            Lesson::new("b", "B").with_start_here(StartHere::new(["Goal"]).with_jump_to(true));
        let subs_no_flag = Lesson::new("c", "C")
            .with_start_here(StartHere::new(["Goal"]))
            .with_subsection(Subsection::new("one", "One", ""));
        let course = build_course("C", [vec![with_flag, flag_no_subs, subs_no_flag]]);

        let jump = |slug: &str| view_of(&course, slug).start_here.unwrap().jump_to;
        assert_eq!(
            jump("a"),
            vec![JumpLink {
                anchor: "one".into(),
                title: "One".into()
            }]
        );
        assert!(jump("b").is_empty());
        assert!(jump("c").is_empty());
    }

    #[test]
    fn labeled_codes_take_precedence() {
        let sub = Subsection::new("s", "S", "body")
            .with_code("single")
            .with_codes([CodeSample::labeled("macOS", "brew install python")]);
        let course = build_course("C", [vec![Lesson::new("a", "A").with_subsection(sub)]]);

        let LessonBody::Subsections { blocks } = view_of(&course, "a").body else {
            panic!("expected subsections");
        };
        assert_eq!(
            blocks[0].code,
            vec![CodeBlock {
                label: Some("macOS".into()),
                text: "brew install python".into()
            }]
        );
    }

    #[test]
    fn prose_subsection_has_no_code_blocks() {
        let sub = Subsection::new("s", "S", "Call `len(x)` here.");
        let course = build_course("C", [vec![Lesson::new("a", "A").with_subsection(sub)]]);

        let LessonBody::Subsections { blocks } = view_of(&course, "a").body else {
            panic!("expected subsections");
        };
        assert!(blocks[0].code.is_empty());
        assert_eq!(
            blocks[0].body.runs(),
            [
                TextRun::Text("Call ".into()),
                TextRun::Code("len(x)".into()),
                TextRun::Text(" here.".into()),
            ]
        );
    }

    #[test]
    fn tip_keeps_inline_code() {
        let meta = StartHere::new(["Run `print()`"]).with_tip("Try `python3`.");
        let course = build_course("C", [vec![Lesson::new("a", "A").with_start_here(meta)]]);
        let panel = view_of(&course, "a").start_here.unwrap();
        assert_eq!(
            panel.tip.unwrap().runs(),
            [
                TextRun::Text("Try ".into()),
                TextRun::Code("python3".into()),
                TextRun::Text(".".into()),
            ]
        );
        assert_eq!(panel.goals[0].plain(), "Run print()");
    }

    #[test]
    fn practice_numbers_and_neighbours() {
        let course = build_course(
            "C",
            [
                vec![Lesson::new("a", "A")],
                vec![Lesson::new("b", "B")
                    .with_practice(PracticeItem::new("p1", "First", "Do it"))
                    .with_practice(PracticeItem::new("p2", "Second", "Again"))],
            ],
        );
        let view = view_of(&course, "b");
        let panel = view.practice.unwrap();
        assert_eq!(panel.items[1].number, 2);
        assert_eq!(panel.progress, ChecklistCounts { done: 0, total: 2 });
        assert_eq!(view.prev.unwrap().path, "/python/a");
        assert!(view.next.is_none());
        assert_eq!(view.syllabus_path, "/python");
    }
}
