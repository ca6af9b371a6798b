//! Application state shared across handlers.

use std::sync::Arc;

use bookstore_store::ObjectStore;

use crate::config::{BookstoreSettings, ValidationReport};

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using
/// `State<AppState>`. The object store is a trait object so tests can
/// inject a mock backend.
#[derive(Clone)]
pub struct AppState {
    /// Immutable settings loaded at startup.
    settings: Arc<BookstoreSettings>,
    /// Validation report computed once from the settings.
    validation: Arc<ValidationReport>,
    /// Object-storage backend.
    store: Arc<dyn ObjectStore>,
}

impl AppState {
    /// Create new application state. The validation report is computed
    /// here, once, and never refreshed.
    pub fn new(settings: BookstoreSettings, store: Arc<dyn ObjectStore>) -> Self {
        let validation = settings.validate();
        Self {
            settings: Arc::new(settings),
            validation: Arc::new(validation),
            store,
        }
    }

    /// Get a reference to the settings.
    pub fn settings(&self) -> &BookstoreSettings {
        &self.settings
    }

    /// Get the startup validation report.
    pub fn validation(&self) -> &ValidationReport {
        &self.validation
    }

    /// Get a reference to the object-storage backend.
    pub fn store(&self) -> &dyn ObjectStore {
        &*self.store
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}
