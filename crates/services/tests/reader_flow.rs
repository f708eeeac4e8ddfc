use course_core::model::Track;
use services::{AppServices, CatalogService, LessonBody, LessonPage, ToggleOutcome};
use storage::repository::Storage;

fn services() -> AppServices {
    AppServices::from_parts(CatalogService::bundled(), &Storage::in_memory())
}

#[tokio::test]
async fn bundled_lesson_opens_with_progress() {
    let app = services();
    let reader = app.reader();

    reader
        .toggle_item(Track::Python, "intro-setup", "why-python", None)
        .await
        .unwrap();
    let outcome = reader
        .toggle_item(Track::Python, "intro-setup", "s1-hello-name", None)
        .await
        .unwrap();
    assert!(matches!(outcome, ToggleOutcome::Toggled { .. }));

    let LessonPage::Found(view) = reader.open_lesson(Track::Python, "intro-setup").await.unwrap()
    else {
        panic!("intro-setup should resolve");
    };
    assert_eq!((view.progress.done, view.progress.total), (1, 3));
    let practice = view.practice.as_ref().unwrap();
    assert_eq!((practice.progress.done, practice.progress.total), (1, 3));
    assert!(view.prev.is_none());
    assert_eq!(view.next.as_ref().unwrap().slug.as_str(), "syntax-essentials");

    let LessonBody::Subsections { blocks } = &view.body else {
        panic!("intro-setup has subsections");
    };
    assert_eq!(blocks[1].code.len(), 3);
}

#[tokio::test]
async fn stale_link_falls_back_to_syllabus() {
    let app = services();
    let page = app.reader().open_lesson(Track::Pandas, "intro-setup").await.unwrap();
    assert_eq!(
        page,
        LessonPage::NotFound {
            slug: "intro-setup".into(),
            syllabus_path: "/pandas".into(),
        }
    );
}

#[tokio::test]
async fn app_services_boot_on_in_memory_sqlite() {
    let app = AppServices::new_sqlite("sqlite::memory:").await.unwrap();
    let syllabus = app.catalog().syllabus(Track::Pandas).unwrap();
    assert_eq!(syllabus.lessons[0].slug.as_str(), "pandas-intro-setup");

    app.reader()
        .toggle_item(Track::Pandas, "pandas-intro-setup", "p1-read-peek", None)
        .await
        .unwrap();
    let LessonPage::Found(view) = app
        .reader()
        .open_lesson(Track::Pandas, "pandas-intro-setup")
        .await
        .unwrap()
    else {
        panic!("pandas lesson should resolve");
    };
    assert_eq!(view.practice.unwrap().progress.done, 1);
}
