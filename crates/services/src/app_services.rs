use std::sync::Arc;

use blackbox_core::lab::LabTuning;
use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::presentation::PresentationService;

/// Assembles app-facing services over a storage backend.
#[derive(Clone)]
pub struct AppServices {
    progress_key: String,
    presentation: Arc<PresentationService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        progress_key: &str,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, progress_key, clock).await)
    }

    /// Build services over an already opened backend.
    pub async fn from_storage(storage: &Storage, progress_key: &str, clock: Clock) -> Self {
        let presentation = Arc::new(
            PresentationService::load(clock, storage.progress(progress_key), LabTuning::default())
                .await,
        );
        Self {
            progress_key: progress_key.to_owned(),
            presentation,
        }
    }

    #[must_use]
    pub fn progress_key(&self) -> &str {
        &self.progress_key
    }

    #[must_use]
    pub fn presentation(&self) -> Arc<PresentationService> {
        Arc::clone(&self.presentation)
    }
}
