#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod checklist_service;
pub mod error;
pub mod lesson_view;
pub mod reader_service;

pub use app_services::AppServices;
pub use catalog_service::CatalogService;
pub use checklist_service::{ChecklistService, PersistStatus};
pub use error::{AppServicesError, CatalogError};
pub use lesson_view::{
    ChecklistCounts, CodeBlock, JumpLink, LessonBody, LessonPage, LessonView, NavLink,
    PracticePanel, PracticeView, ResourceView, RichText, StartHerePanel, SubsectionBlock,
    SyllabusEntry, SyllabusView, TextRun,
};
pub use reader_service::{ReaderService, ToggleOutcome};
