//! Plain-text rendering of catalog views for the terminal.

use std::io::{self, Write};

use course_core::ItemState;
use course_core::model::ChecklistKind;
use course_core::text::strip_inline_code;
use services::{
    CodeBlock, LessonBody, LessonPage, LessonView, PracticePanel, RichText, StartHerePanel,
    SyllabusView, TextRun,
};

pub fn syllabus(out: &mut impl Write, view: &SyllabusView) -> io::Result<()> {
    writeln!(out, "{}", view.title)?;
    writeln!(
        out,
        "Total lessons: {} • Estimated time: {}h",
        view.lesson_count, view.total_hours
    )?;
    for entry in &view.lessons {
        writeln!(out)?;
        writeln!(out, "  {}  ({} min)", entry.title, entry.duration_minutes)?;
        writeln!(out, "  {}", strip_inline_code(&entry.summary))?;
        writeln!(out, "  → {}", entry.slug)?;
    }
    Ok(())
}

pub fn lesson_page(out: &mut impl Write, page: &LessonPage) -> io::Result<()> {
    match page {
        LessonPage::Found(view) => lesson(out, view),
        LessonPage::NotFound {
            slug,
            syllabus_path,
        } => writeln!(
            out,
            "Lesson not found: {slug:?}. Back to syllabus: {syllabus_path}"
        ),
    }
}

pub fn toggled(
    out: &mut impl Write,
    item: &str,
    kind: ChecklistKind,
    state: ItemState,
    page: &LessonPage,
) -> io::Result<()> {
    let verb = if state.is_done() { "done" } else { "not done" };
    write!(out, "{item} marked {verb}")?;
    if let LessonPage::Found(view) = page {
        let counts = match (kind, &view.practice) {
            (ChecklistKind::Practice, Some(panel)) => panel.progress,
            _ => view.progress,
        };
        write!(out, " ({} progress {}/{})", kind.as_str(), counts.done, counts.total)?;
    }
    writeln!(out)
}

fn lesson(out: &mut impl Write, view: &LessonView) -> io::Result<()> {
    writeln!(out, "{}", view.title)?;
    writeln!(out, "Estimated time: {} min", view.duration_minutes)?;

    if let Some(panel) = &view.start_here {
        start_here(out, panel)?;
    }

    match &view.body {
        LessonBody::Subsections { blocks } => {
            writeln!(
                out,
                "\nProgress: {}/{}",
                view.progress.done, view.progress.total
            )?;
            for block in blocks {
                writeln!(out)?;
                writeln!(out, "{} {}  #{}", checkbox(block.state), block.title, block.id)?;
                writeln!(out, "{}", rich(&block.body))?;
                for code in &block.code {
                    code_block(out, code, "")?;
                }
            }
        }
        LessonBody::Prose { content, code } => {
            writeln!(out)?;
            writeln!(out, "{}", rich(content))?;
            if let Some(text) = code {
                code_block(out, &CodeBlock { label: None, text: text.clone() }, "")?;
            }
        }
    }

    if let Some(panel) = &view.practice {
        practice(out, panel)?;
    }

    writeln!(out)?;
    if let Some(prev) = &view.prev {
        writeln!(out, "← {} ({})", prev.title, prev.slug)?;
    }
    if let Some(next) = &view.next {
        writeln!(out, "{} ({}) →", next.title, next.slug)?;
    }
    writeln!(out, "Back to syllabus: {}", view.syllabus_path)
}

fn start_here(out: &mut impl Write, panel: &StartHerePanel) -> io::Result<()> {
    writeln!(out, "\nStart here")?;
    bullets(out, "Goals", panel.goals.iter().map(rich))?;
    bullets(out, "Prerequisites", panel.prerequisites.iter().map(rich))?;
    bullets(
        out,
        "Jump to",
        panel.jump_to.iter().map(|j| format!("{} (#{})", j.title, j.anchor)),
    )?;
    bullets(
        out,
        "Resources",
        panel.resources.iter().map(|r| format!("{}: {}", r.label, r.href)),
    )?;
    if let Some(tip) = &panel.tip {
        writeln!(out, "  Tip: {}", rich(tip))?;
    }
    Ok(())
}

fn practice(out: &mut impl Write, panel: &PracticePanel) -> io::Result<()> {
    writeln!(
        out,
        "\nPractice (progress {}/{})",
        panel.progress.done, panel.progress.total
    )?;
    for item in &panel.items {
        writeln!(out)?;
        writeln!(
            out,
            "{} {}. {}  #{}",
            checkbox(item.state),
            item.number,
            item.title,
            item.id
        )?;
        writeln!(out, "    {}", item.prompt)?;
        if let Some(code) = &item.starter_code {
            code_block(
                out,
                &CodeBlock {
                    label: Some("Starter".into()),
                    text: code.clone(),
                },
                "  ",
            )?;
        }
        if let Some(hint) = &item.hint {
            writeln!(out, "    Hint: {hint}")?;
        }
        if let Some(solution) = &item.solution {
            code_block(
                out,
                &CodeBlock {
                    label: Some("Solution".into()),
                    text: solution.clone(),
                },
                "  ",
            )?;
        }
    }
    Ok(())
}

fn bullets(
    out: &mut impl Write,
    heading: &str,
    items: impl Iterator<Item = String>,
) -> io::Result<()> {
    let mut items = items.peekable();
    if items.peek().is_none() {
        return Ok(());
    }
    writeln!(out, "  {heading}:")?;
    for item in items {
        writeln!(out, "    • {item}")?;
    }
    Ok(())
}

fn code_block(out: &mut impl Write, code: &CodeBlock, indent: &str) -> io::Result<()> {
    match &code.label {
        Some(label) => writeln!(out, "{indent}  ┌─ {label}")?,
        None => writeln!(out, "{indent}  ┌─")?,
    }
    for line in code.text.lines() {
        writeln!(out, "{indent}  │ {line}")?;
    }
    writeln!(out, "{indent}  └─")
}

fn checkbox(state: ItemState) -> &'static str {
    match state {
        ItemState::Done => "[x]",
        ItemState::Pending => "[ ]",
    }
}

/// Inline code keeps its backticks in a terminal.
fn rich(text: &RichText) -> String {
    text.runs()
        .iter()
        .map(|run| match run {
            TextRun::Text(s) => s.clone(),
            TextRun::Code(s) => format!("`{s}`"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::model::{Lesson, Track, build_course};
    use services::CatalogService;

    fn render_page(slug: &str) -> String {
        let page = CatalogService::bundled()
            .lesson_page(Track::Python, slug)
            .unwrap();
        let mut buf = Vec::new();
        lesson_page(&mut buf, &page).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn syllabus_lists_every_lesson() {
        let view = CatalogService::bundled().syllabus(Track::Python).unwrap();
        let mut buf = Vec::new();
        syllabus(&mut buf, &view).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Python for Beginners"));
        assert!(text.contains("Total lessons: 13 • Estimated time: 11.8h"));
        assert!(text.contains("→ operators-expressions"));
        assert!(text.contains("→ testing-debugging"));
    }

    #[test]
    fn syllabus_summaries_drop_code_markers() {
        let course = build_course(
            "C",
            [vec![
                Lesson::new("hello", "Hello")
                    .with_summary("Say hi with `print()`.")
                    .with_duration(10),
            ]],
        );
        let view = SyllabusView::from_course(Track::Python, &course);
        let mut buf = Vec::new();
        syllabus(&mut buf, &view).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("  Say hi with print().\n"));
    }

    #[test]
    fn lesson_shows_panels_and_navigation() {
        let text = render_page("syntax-essentials");
        assert!(text.contains("Jump to:"));
        assert!(text.contains("Practice (progress 0/3)"));
        assert!(text.contains("← Section 1 — Introduction & Setup (intro-setup)"));
        assert!(text.contains("Tip: If something looks wrong"));
    }

    #[test]
    fn jump_list_hidden_unless_requested() {
        assert!(!render_page("intro-setup").contains("Jump to:"));
    }

    #[test]
    fn unknown_slug_offers_way_back() {
        let text = render_page("nope");
        assert_eq!(text, "Lesson not found: \"nope\". Back to syllabus: /python\n");
    }
}
