use thiserror::Error;

/// Errors of the metadata scanner and its registry
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{what} not found: {name}")]
    NotFound { what: &'static str, name: String },

    #[error("invalid metadata: {0}")]
    InvalidRecord(String),
}

impl ScanError {
    pub fn not_found(what: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            what,
            name: name.into(),
        }
    }
}
