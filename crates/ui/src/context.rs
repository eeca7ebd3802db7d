use std::sync::Arc;

use services::AppServices;
use tokio::runtime::Handle;

pub trait UiApp: Send + Sync {
    fn services(&self) -> AppServices;

    /// Runtime the countdown ticker is spawned on.
    fn runtime(&self) -> Handle;
}

#[derive(Clone)]
pub struct AppContext {
    services: AppServices,
    runtime: Handle,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            services: app.services(),
            runtime: app.runtime(),
        }
    }

    #[must_use]
    pub fn services(&self) -> &AppServices {
        &self.services
    }

    #[must_use]
    pub fn runtime(&self) -> Handle {
        self.runtime.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
