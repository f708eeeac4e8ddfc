use serde::{Deserialize, Serialize};

use crate::model::ids::{ItemId, Slug};

//
// ─── CODE SAMPLES ──────────────────────────────────────────────────────────────
//

/// One code block, optionally labeled (e.g. per-OS command variants).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    text: String,
}

impl CodeSample {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            label: None,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn labeled(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

//
// ─── SUBSECTION ────────────────────────────────────────────────────────────────
//

/// A titled block inside a lesson.
///
/// The `id` is both the in-page anchor and the progress checklist key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsection {
    id: ItemId,
    title: String,
    body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    codes: Vec<CodeSample>,
}

impl Subsection {
    #[must_use]
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            code: None,
            codes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_codes(mut self, codes: impl IntoIterator<Item = CodeSample>) -> Self {
        self.codes.extend(codes);
        self
    }

    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    #[must_use]
    pub fn codes(&self) -> &[CodeSample] {
        &self.codes
    }

    /// A subsection with neither `code` nor `codes` is plain prose.
    #[must_use]
    pub fn has_examples(&self) -> bool {
        self.code.is_some() || !self.codes.is_empty()
    }
}

//
// ─── START HERE ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    label: String,
    href: String,
}

impl ResourceLink {
    #[must_use]
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }
}

/// Onboarding panel shown at the top of a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartHere {
    goals: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    prerequisites: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    resources: Vec<ResourceLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tip: Option<String>,
    #[serde(default)]
    show_jump_to: bool,
}

impl StartHere {
    #[must_use]
    pub fn new<I, S>(goals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            goals: goals.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites
            .extend(prerequisites.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_resource(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.resources.push(ResourceLink::new(label, href));
        self
    }

    #[must_use]
    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = Some(tip.into());
        self
    }

    #[must_use]
    pub fn with_jump_to(mut self, show: bool) -> Self {
        self.show_jump_to = show;
        self
    }

    #[must_use]
    pub fn goals(&self) -> &[String] {
        &self.goals
    }

    #[must_use]
    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    #[must_use]
    pub fn resources(&self) -> &[ResourceLink] {
        &self.resources
    }

    #[must_use]
    pub fn tip(&self) -> Option<&str> {
        self.tip.as_deref()
    }

    #[must_use]
    pub fn show_jump_to(&self) -> bool {
        self.show_jump_to
    }
}

//
// ─── PRACTICE ──────────────────────────────────────────────────────────────────
//

/// One exercise in a lesson's practice panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeItem {
    id: ItemId,
    title: String,
    prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    starter_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    solution: Option<String>,
}

impl PracticeItem {
    #[must_use]
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            prompt: prompt.into(),
            starter_code: None,
            hint: None,
            solution: None,
        }
    }

    #[must_use]
    pub fn with_starter_code(mut self, code: impl Into<String>) -> Self {
        self.starter_code = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    #[must_use]
    pub fn with_solution(mut self, solution: impl Into<String>) -> Self {
        self.solution = Some(solution.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn starter_code(&self) -> Option<&str> {
        self.starter_code.as_deref()
    }

    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    #[must_use]
    pub fn solution(&self) -> Option<&str> {
        self.solution.as_deref()
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// One syllabus unit. Identity is the `slug`.
///
/// An empty subsection list means the lesson body is the `content` prose;
/// an empty practice list means the lesson has no practice panel at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    slug: Slug,
    title: String,
    summary: String,
    duration: u32,
    content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    subsections: Vec<Subsection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_here: Option<StartHere>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    practice: Vec<PracticeItem>,
}

impl Lesson {
    #[must_use]
    pub fn new(slug: impl Into<Slug>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            summary: String::new(),
            duration: 0,
            content: String::new(),
            code: None,
            subsections: Vec::new(),
            start_here: None,
            practice: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Estimated time in minutes.
    #[must_use]
    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration = minutes;
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_start_here(mut self, start_here: StartHere) -> Self {
        self.start_here = Some(start_here);
        self
    }

    #[must_use]
    pub fn with_subsection(mut self, subsection: Subsection) -> Self {
        self.subsections.push(subsection);
        self
    }

    #[must_use]
    pub fn with_practice(mut self, item: PracticeItem) -> Self {
        self.practice.push(item);
        self
    }

    #[must_use]
    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    #[must_use]
    pub fn subsections(&self) -> &[Subsection] {
        &self.subsections
    }

    #[must_use]
    pub fn start_here(&self) -> Option<&StartHere> {
        self.start_here.as_ref()
    }

    #[must_use]
    pub fn practice(&self) -> &[PracticeItem] {
        &self.practice
    }

    /// Ids tracked by the lesson's progress checklist, in authored order.
    #[must_use]
    pub fn subsection_ids(&self) -> Vec<ItemId> {
        self.subsections.iter().map(|s| s.id().clone()).collect()
    }

    /// Ids tracked by the practice checklist, in authored order.
    #[must_use]
    pub fn practice_ids(&self) -> Vec<ItemId> {
        self.practice.iter().map(|p| p.id().clone()).collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_lesson_has_no_optional_parts() {
        let lesson = Lesson::new("basics", "Basics")
            .with_duration(20)
            .with_content("Read this first.");
        assert!(lesson.subsections().is_empty());
        assert!(lesson.practice().is_empty());
        assert!(lesson.start_here().is_none());
        assert_eq!(lesson.content(), "Read this first.");
    }

    #[test]
    fn subsection_without_examples_is_plain_prose() {
        let sub = Subsection::new("why-python", "Why Python", "Because.");
        assert!(!sub.has_examples());

        let sub = sub.with_codes([CodeSample::labeled("macOS", "brew install python")]);
        assert!(sub.has_examples());
        assert_eq!(sub.codes()[0].label(), Some("macOS"));
    }

    #[test]
    fn ids_follow_authored_order() {
        let lesson = Lesson::new("l", "L")
            .with_subsection(Subsection::new("b", "B", ""))
            .with_subsection(Subsection::new("a", "A", ""))
            .with_practice(PracticeItem::new("p2", "P2", ""))
            .with_practice(PracticeItem::new("p1", "P1", ""));
        assert_eq!(lesson.subsection_ids(), vec![ItemId::from("b"), ItemId::from("a")]);
        assert_eq!(lesson.practice_ids(), vec![ItemId::from("p2"), ItemId::from("p1")]);
    }

    #[test]
    fn deserializes_authored_json_shape() {
        let raw = r#"{
            "slug": "intro",
            "title": "Intro",
            "summary": "s",
            "duration": 15,
            "content": "c",
            "startHere": { "goals": ["Run `python`"], "showJumpTo": true },
            "practice": [{ "id": "p1", "title": "T", "prompt": "P", "starterCode": "x = 1" }]
        }"#;
        let lesson: Lesson = serde_json::from_str(raw).unwrap();
        assert_eq!(lesson.duration(), 15);
        assert!(lesson.start_here().unwrap().show_jump_to());
        assert_eq!(lesson.practice()[0].starter_code(), Some("x = 1"));
    }

    #[test]
    fn negative_duration_is_rejected_at_parse_time() {
        let raw = r#"{ "slug": "x", "title": "X", "summary": "", "duration": -5, "content": "" }"#;
        assert!(serde_json::from_str::<Lesson>(raw).is_err());
    }
}
