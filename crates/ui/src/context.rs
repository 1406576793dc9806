use services::{CatalogService, ProgressService};

/// State owned by one console session.
///
/// Built by the application composition root (e.g. `crates/app`) and passed
/// by reference into every view.
pub struct AppContext {
    pub catalog: CatalogService,
    pub progress: ProgressService,
    admin_password: String,
}

impl AppContext {
    #[must_use]
    pub fn new(
        catalog: CatalogService,
        progress: ProgressService,
        admin_password: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            progress,
            admin_password: admin_password.into(),
        }
    }

    /// Compare against the configured admin password.
    #[must_use]
    pub fn admin_password_matches(&self, attempt: &str) -> bool {
        self.admin_password == attempt
    }
}
