use ed_nlp::ModelRegistry;
use ed_sheets::SheetsApi;

use std::sync::Arc;

/// Shared application state for request handlers.
///
/// Both collaborators are built once at startup and shared read-only by all
/// requests.
#[derive(Clone)]
pub struct AppState {
    pub sheets: Arc<dyn SheetsApi>,
    pub models: Arc<ModelRegistry>,
}
