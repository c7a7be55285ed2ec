use std::sync::Arc;

use services::PresentationService;

pub trait UiApp: Send + Sync {
    fn presentation(&self) -> Arc<PresentationService>;
}

#[derive(Clone)]
pub struct AppContext {
    presentation: Arc<PresentationService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            presentation: app.presentation(),
        }
    }

    #[must_use]
    pub fn presentation(&self) -> Arc<PresentationService> {
        Arc::clone(&self.presentation)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
