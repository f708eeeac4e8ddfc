use std::sync::Arc;

use storage::repository::Storage;

use crate::catalog_service::CatalogService;
use crate::checklist_service::ChecklistService;
use crate::error::AppServicesError;
use crate::reader_service::ReaderService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<CatalogService>,
    checklists: Arc<ChecklistService>,
    reader: Arc<ReaderService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the bundled catalog.
    ///
    /// The bundled content is validated first, so a broken build never
    /// reaches a reader.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the
    /// bundled content is invalid.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let catalog = CatalogService::bundled();
        catalog.check()?;
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_parts(catalog, &storage))
    }

    /// Build services from an already-open storage backend.
    #[must_use]
    pub fn from_parts(catalog: CatalogService, storage: &Storage) -> Self {
        let catalog = Arc::new(catalog);
        let checklists = Arc::new(ChecklistService::new(Arc::clone(&storage.progress)));
        let reader = Arc::new(ReaderService::new(
            Arc::clone(&catalog),
            Arc::clone(&checklists),
        ));
        Self {
            catalog,
            checklists,
            reader,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn checklists(&self) -> Arc<ChecklistService> {
        Arc::clone(&self.checklists)
    }

    #[must_use]
    pub fn reader(&self) -> Arc<ReaderService> {
        Arc::clone(&self.reader)
    }
}
