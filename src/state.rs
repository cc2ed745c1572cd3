use crate::config::Config;

/// Shared application state passed to all handlers.
/// The document size limit is read once at startup.
#[derive(Clone, Debug)]
pub struct AppState {
    pub max_document_bytes: usize,
}

impl From<&Config> for AppState {
    fn from(config: &Config) -> Self {
        AppState {
            max_document_bytes: config.max_document_bytes,
        }
    }
}
